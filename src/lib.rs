//! Assistant bot - an interactive terminal contact book with birthday
//! reminders.
//!
//! The bot keeps every contact in memory for the lifetime of the session:
//! names, phone numbers, and birthdays, with an upcoming-birthday query that
//! shifts weekend greetings to the following Monday. Nothing is persisted;
//! a new session always starts from an empty book.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the `Record` and `AddressBook` aggregates and the
//!   upcoming-birthday computation
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **cli**: command parsing, handlers, and the interactive prompt loop

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, RecordError, RecordResult};
pub use models::{AddressBook, Record, UpcomingBirthday};
