//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction. Phones keep their insertion order and
/// never contain duplicates; the birthday can be set at most once. All
/// mutation goes through the methods here, so a `Record` can only ever hold
/// validated field values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record for a new contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is shorter than
    /// 3 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Adding a phone that is already stored is a no-op and returns
    /// `Ok(None)` rather than an error, so repeating an `add` command is
    /// harmless.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` (wrapped) if the phone is not
    /// exactly 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> RecordResult<Option<&PhoneNumber>> {
        let phone = PhoneNumber::new(phone)?;

        if self.phones.contains(&phone) {
            return Ok(None);
        }

        self.phones.push(phone);
        Ok(self.phones.last())
    }

    /// Remove the phone equal to `phone`, returning it if it was stored.
    pub fn remove_phone(&mut self, phone: &str) -> Option<PhoneNumber> {
        let index = self.phones.iter().position(|p| p.as_str() == phone)?;
        Some(self.phones.remove(index))
    }

    /// Replace the phone equal to `old_phone` with a validated new value,
    /// keeping its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if `old_phone` is not stored,
    /// or `ValidationError::InvalidPhone` (wrapped) if the replacement is
    /// invalid. The list is left untouched in both cases.
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> RecordResult<&PhoneNumber> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_phone)
            .ok_or_else(|| RecordError::PhoneNotFound(old_phone.to_string()))?;

        let new_phone = PhoneNumber::new(new_phone)?;
        self.phones[index] = new_phone;
        Ok(&self.phones[index])
    }

    /// Find the stored phone equal to `phone` by exact string match.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and store the birthday.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::BirthdayAlreadySet` if a birthday is already
    /// present (the first value is kept), or `ValidationError::InvalidDate`
    /// (wrapped) if the string is not a valid `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, value: &str) -> RecordResult<&Birthday> {
        if self.birthday.is_some() {
            return Err(RecordError::BirthdayAlreadySet);
        }

        let birthday = Birthday::new(value)?;
        Ok(self.birthday.insert(birthday))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, Phones: {}", self.name, phones)?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }

        Ok(())
    }
}
