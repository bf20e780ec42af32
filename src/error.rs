//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The phone number to edit is not stored on the record
    #[error("Old phone '{0}' not found")]
    PhoneNotFound(String),

    /// The record already has a birthday
    #[error("Birthday already exists")]
    BirthdayAlreadySet,

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors produced by the command handlers on behalf of the user.
///
/// The data structures themselves never raise the "not found" kinds; a
/// failed lookup is a `None` at the `AddressBook` level, and handlers
/// translate it here.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No record is stored under the requested name
    #[error("No contact with this name")]
    ContactNotFound,

    /// The contact exists but has no birthday recorded
    #[error("No birthday set for '{0}'")]
    BirthdayNotSet(String),

    /// The book holds no contacts at all
    #[error("No contacts.")]
    EmptyBook,

    /// No stored birthday falls within the requested window
    #[error("No birthdays.")]
    NoBirthdays,

    /// The command was invoked with missing or extra arguments
    #[error("you must provide {what} (example: {example})")]
    Usage {
        what: &'static str,
        example: &'static str,
    },

    /// The day-window argument of `birthdays` is not a whole number
    #[error("Invalid day window, expected a whole number: {0}")]
    InvalidWindow(String),

    /// A record mutation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
