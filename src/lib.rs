//! Contact Book - an interactive command-line address book.
//!
//! Contacts live in memory for the length of one session. Each contact is a
//! [`Record`] holding a name and validated ten-digit phone numbers; all
//! records are kept in an [`AddressBook`] keyed by name.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Name`, `Phone`) and validation errors
//! - **models**: `Record` and `AddressBook`
//! - **commands**: Input parsing, handlers and error translation
//! - **repl**: The read-dispatch loop over any reader/writer pair
//! - **config**: Configuration from environment variables
//! - **metrics**: Per-session counters
//! - **error**: Error types for records, commands and configuration

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repl;

pub use commands::{dispatch, parse_input, Command, ParsedInput, Reply};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::{AddressBook, Record};
pub use repl::Session;
