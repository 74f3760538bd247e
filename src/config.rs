//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Nothing here writes to stdout, which carries the command
//! protocol.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text written before each line is read (default: empty)
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: Prompt shown before each command (default: "")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy never prints to stdout
        let _ = dotenvy::dotenv();

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_default();
        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { prompt, log_level })
    }

    /// Read a log level, lowercased, falling back to `default` when unset.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        let level = match env::var(var_name) {
            Ok(val) => val.trim().to_lowercase(),
            Err(_) => return Ok(default.to_string()),
        };

        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), level),
            });
        }

        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: String::new(),
            log_level: "error".to_string(),
        }
    }
}
