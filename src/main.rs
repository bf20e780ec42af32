//! Assistant bot - main entry point
//!
//! Wires up logging and configuration, then hands the terminal over to the
//! prompt loop with a fresh, empty address book.

use anyhow::Result;
use assistant_bot::models::AddressBook;
use assistant_bot::{cli, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so stdout stays clean for the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if config.no_color {
        colored::control::set_override(false);
    }

    info!(
        "Starting assistant bot with a {}-day birthday window",
        config.upcoming_window_days
    );

    // Every session starts from an empty book; nothing is persisted.
    let mut book = AddressBook::new();
    cli::run(&mut book, &config)?;

    info!("Assistant bot session ended");
    Ok(())
}
