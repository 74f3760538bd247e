//! Command dispatch.
//!
//! A line of input is parsed into a keyword and arguments, the keyword is
//! resolved to a [`Command`], and [`dispatch`] routes it to its handler.
//! Handler failures never escape this boundary: they are rendered through
//! [`input_error`].

pub mod handlers;
pub mod parser;

pub use handlers::{
    add_contact, change_contact, error_message, input_error, show_all, show_phone, Handler,
    CONTACT_NOT_FOUND_MESSAGE, INVALID_INPUT_MESSAGE, MISSING_ARGUMENT_MESSAGE,
};
pub use parser::{parse_input, ParsedInput};

use crate::models::AddressBook;
use tracing::debug;

/// Reply to `hello`.
pub const GREETING: &str = "How can i help you?";
/// Printed when the session ends.
pub const FAREWELL: &str = "Good bye!";
/// Reply to any keyword that is not a known command.
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command";

/// Every command the contact book understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    /// `exit` or `close`
    Exit,
    Unknown,
}

impl Command {
    /// Resolve a lowercased keyword.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "exit" | "close" => Command::Exit,
            _ => Command::Unknown,
        }
    }

    /// The handler backing this command, if it has one.
    pub fn handler(self) -> Option<Handler> {
        match self {
            Command::Add => Some(add_contact),
            Command::Change => Some(change_contact),
            Command::Phone => Some(show_phone),
            Command::All => Some(show_all),
            Command::Hello | Command::Exit | Command::Unknown => None,
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// End the session.
    Exit,
}

/// Run `command` against `book`.
pub fn dispatch(command: Command, args: &[String], book: &mut AddressBook) -> Reply {
    debug!(?command, args = args.len(), "Dispatching command");

    match command {
        Command::Exit => Reply::Exit,
        Command::Hello => Reply::Message(GREETING.to_string()),
        _ => match command.handler() {
            Some(handler) => Reply::Message(input_error(handler)(args, book)),
            None => Reply::Message(INVALID_COMMAND_MESSAGE.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str, book: &mut AddressBook) -> Reply {
        let input = parse_input(line).unwrap();
        dispatch(Command::from_keyword(&input.command), &input.args, book)
    }

    fn message(text: &str) -> Reply {
        Reply::Message(text.to_string())
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(Command::from_keyword("hello"), Command::Hello);
        assert_eq!(Command::from_keyword("exit"), Command::Exit);
        assert_eq!(Command::from_keyword("close"), Command::Exit);
        assert_eq!(Command::from_keyword("delete"), Command::Unknown);
        // Keywords are lowercased by the parser, not here
        assert_eq!(Command::from_keyword("HELLO"), Command::Unknown);
    }

    #[test]
    fn test_only_contact_commands_have_handlers() {
        assert!(Command::Add.handler().is_some());
        assert!(Command::All.handler().is_some());
        assert!(Command::Hello.handler().is_none());
        assert!(Command::Exit.handler().is_none());
    }

    #[test]
    fn test_dispatch_keywords_case_insensitively() {
        let mut book = AddressBook::new();
        assert_eq!(run("HeLLo", &mut book), message(GREETING));
        assert_eq!(run("CLOSE", &mut book), Reply::Exit);
        assert_eq!(run("exit now", &mut book), Reply::Exit);
    }

    #[test]
    fn test_dispatch_unknown() {
        let mut book = AddressBook::new();
        assert_eq!(run("remove John", &mut book), message(INVALID_COMMAND_MESSAGE));
    }

    #[test]
    fn test_dispatch_translates_errors() {
        let mut book = AddressBook::new();
        assert_eq!(run("add 1234567890", &mut book), message(INVALID_INPUT_MESSAGE));
        assert_eq!(run("phone", &mut book), message(MISSING_ARGUMENT_MESSAGE));
        assert_eq!(run("phone Unknown", &mut book), message(CONTACT_NOT_FOUND_MESSAGE));
        assert_eq!(
            run("change Ghost 5555555555", &mut book),
            message(CONTACT_NOT_FOUND_MESSAGE)
        );
    }

    #[test]
    fn test_dispatch_add_then_phone() {
        let mut book = AddressBook::new();
        assert_eq!(run("add John 1234567890", &mut book), message("Contact added."));
        assert_eq!(run("phone John", &mut book), message("1234567890"));
    }
}
