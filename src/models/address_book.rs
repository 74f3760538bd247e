//! Address book: the collection of records keyed by contact name.

use super::record::Record;
use crate::domain::join_values;
use std::collections::HashMap;
use std::fmt;

/// All contacts, keyed by name.
///
/// Holds at most one [`Record`] per name. Iteration and rendering follow
/// insertion order; overwriting a name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        tracing::trace!(name = %key, "Record stored");
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record for `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let record = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::trace!(name = %name, "Record deleted");
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", record.name(), join_values(record.phones(), ", "))?;
        }
        Ok(())
    }
}
