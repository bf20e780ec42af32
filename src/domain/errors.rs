//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is shorter than 3 characters.
    InvalidName(String),

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as a `DD.MM.YYYY` date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => {
                write!(f, "Name is too short, need at least 3 characters: {}", name)
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain exactly 10 digits: {}", phone)
            }
            Self::InvalidDate(value) => {
                write!(f, "Invalid date format, use DD.MM.YYYY: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
