//! Contact Book - Main entry point
//!
//! Reads commands from stdin and writes replies to stdout. Logs go to
//! stderr only.

use anyhow::Result;
use contact_book::{repl, Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_tracing(&config.log_level);
    info!("Configuration loaded successfully");

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    info!("Starting contact book session");
    repl::run(&mut session, stdin.lock(), &mut stdout.lock())?;

    info!("Contact book shutdown complete");
    Ok(())
}
