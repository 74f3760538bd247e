//! Command handlers and the error translation applied around them.
//!
//! Each handler is a plain function over the [`AddressBook`] that returns a
//! [`CommandResult`]. [`input_error`] wraps a handler so that every
//! [`CommandError`] becomes a fixed user-facing message.

use crate::domain::join_values;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::{debug, warn};

/// Reply for a wrong argument count or an invalid phone.
pub const INVALID_INPUT_MESSAGE: &str = "Give me name and phone please.";
/// Reply when a required argument is missing.
pub const MISSING_ARGUMENT_MESSAGE: &str = "Enter user name";
/// Reply when the named contact does not exist.
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Signature shared by every command handler.
pub type Handler = fn(&[String], &mut AddressBook) -> CommandResult<String>;

/// Map a handler failure to the message shown to the user.
pub fn error_message(err: &CommandError) -> &'static str {
    match err {
        CommandError::InvalidInput(_) => INVALID_INPUT_MESSAGE,
        CommandError::MissingArgument(_) => MISSING_ARGUMENT_MESSAGE,
        CommandError::ContactNotFound(_) => CONTACT_NOT_FOUND_MESSAGE,
    }
}

/// Wrap `handler` so its failures are rendered with [`error_message`].
pub fn input_error<F>(handler: F) -> impl Fn(&[String], &mut AddressBook) -> String
where
    F: Fn(&[String], &mut AddressBook) -> CommandResult<String>,
{
    move |args: &[String], book: &mut AddressBook| {
        handler(args, book).unwrap_or_else(|err| {
            warn!(error = %err, "Command failed");
            error_message(&err).to_string()
        })
    }
}

fn name_and_phone(args: &[String]) -> CommandResult<(&str, &str)> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(CommandError::InvalidInput(format!(
            "expected name and phone, got {} argument(s)",
            args.len()
        ))),
    }
}

/// `add <name> <phone>`: store a contact with a single phone.
///
/// An existing contact with the same name is replaced.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = name_and_phone(args)?;

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record);

    debug!(name = %name, "Contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: replace the primary phone of an existing contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = name_and_phone(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    match record.phones().first().map(|p| p.as_str().to_string()) {
        Some(old) => {
            record.edit_phone(&old, phone)?;
        }
        None => {
            record.add_phone(phone)?;
        }
    }

    debug!(name = %name, "Contact updated");
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show the phones of a contact.
pub fn show_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingArgument(0))?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    Ok(join_values(record.phones(), "; "))
}

/// `all`: list every contact.
pub fn show_all(_args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts.".to_string());
    }
    Ok(book.to_string())
}
