//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input shape for birthdays. chrono's `%d.%m.%Y` accepts unpadded day and
/// month digits, so the exact two-two-four shape is checked up front.
static BIRTHDAY_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A type-safe wrapper for birthdays.
///
/// A birthday is parsed from a `DD.MM.YYYY` string at construction time and
/// stored as a plain calendar date. No time of day or timezone is retained.
/// The input must be a real calendar date: `31.02.2020` is rejected, while
/// `29.02.2020` is accepted because 2020 is a leap year.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "1990-03-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday by parsing a `DD.MM.YYYY` string.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly: 2-digit day, 2-digit month,
    ///   4-digit year, separated by literal dots
    /// - Must denote a valid calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not match
    /// the pattern or the date does not exist.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_FORMAT.is_match(value) {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, "%d.%m.%Y")
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize back to the DD.MM.YYYY input form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.format("%d.%m.%Y").to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - the canonical ISO form of the stored date
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
