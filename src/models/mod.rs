//! Data models for the contact book.
//!
//! This module contains the aggregates built on top of the domain value
//! objects: the record for a single contact and the address book that owns
//! every record for the session.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
