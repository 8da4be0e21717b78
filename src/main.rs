//! Contact Book - Main entry point
//!
//! Boots logging and configuration, hydrates the address book from the
//! contacts file, and hands control to the interactive prompt loop.

use anyhow::Result;
use contact_book::{AddressBook, Config, JsonFileStorage};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; it carries the fallback log level.
    let config = Config::from_env()?;

    // Logging goes to stderr so the prompt output stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "starting contact book");

    let storage = JsonFileStorage::new(&config.book_path);

    // Corrupted persisted data is fatal at startup; a missing or empty file
    // just yields an empty book.
    let mut book = AddressBook::new();
    if let Err(e) = book.load_all(&storage) {
        error!("Failed to load contacts: {}", e);
        return Err(e.into());
    }

    contact_book::repl::run(&mut book, &storage)?;

    info!("contact book shutdown complete");
    Ok(())
}
