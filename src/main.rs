//! Contact Assistant - Main entry point
//!
//! Starts the interactive assistant bot: one prompt loop over stdin/stdout
//! with an empty in-memory address book.

use anyhow::Result;
use contact_assistant::{Config, Repl};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging is up; report failures directly.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout as the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting assistant bot session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(stdin.lock(), stdout.lock()).run()?;

    info!("Session ended");
    Ok(())
}
