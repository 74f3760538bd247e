//! Record model: one contact with its phone numbers.

use crate::domain::{join_values, Name, Phone};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep their insertion order and
/// may repeat; every phone on a record has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if `phone` is not ten digits.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<Phone> {
        let index = self.position(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// The record is left untouched when either lookup or validation fails.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if `old` is not on the record and
    /// `RecordError::Validation` if `new` is not a valid phone.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<&Phone> {
        let index = self.position(old)?;
        self.phones[index] = Phone::new(new)?;
        Ok(&self.phones[index])
    }

    fn position(&self, phone: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            join_values(&self.phones, "; ")
        )
    }
}
