//! Contact Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers, and birthdays, supports lookup and editing,
//! and persists state to a local JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The in-memory address book and its invariants
//! - **schedule**: Pure birthday-scheduling functions
//! - **storage**: Versioned JSON file persistence behind a trait
//! - **commands**: Args-validated wrappers over every book operation
//! - **repl**: The interactive prompt loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod schedule;
pub mod storage;

pub use book::{AddOutcome, AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::Record;
pub use storage::{ContactStorage, JsonFileStorage};
