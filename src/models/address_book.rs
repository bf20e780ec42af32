//! AddressBook model owning every record for the session.

use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// One entry of the upcoming-birthdays query: who to congratulate and when.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The weekend-adjusted greeting date, formatted as `YYYY.MM.DD`
    pub congratulation_date: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date)
    }
}

/// The keyed collection of all records for the session.
///
/// Records are keyed by their name string, which is the only source of
/// identity for a contact: two records can never share a name. Iteration
/// follows insertion order, and re-adding an existing name replaces the
/// record without moving it. Everything lives in memory only and is gone
/// when the process exits.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Keys of `records` in first-insertion order.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name, replacing any existing record
    /// under that name while keeping its original position.
    pub fn add_record(&mut self, record: Record) -> &Record {
        let name = record.name().as_str().to_string();

        match self.records.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(record);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(record)
            }
        }
    }

    /// Look up a record by name. Absence is a `None`, never an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let record = self.records.remove(name)?;
        self.order.retain(|stored| stored != name);
        Some(record)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Contacts whose next birthday falls within `within_days` days of
    /// today, using the local calendar date as "today".
    pub fn upcoming_birthdays(&self, within_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), within_days)
    }

    /// Contacts whose next birthday falls within `within_days` days of
    /// `today`, both ends inclusive.
    ///
    /// For every record with a birthday, this year's occurrence is taken;
    /// if that date has already passed (strictly before `today`), next
    /// year's occurrence is used instead. Occurrences landing on a Saturday
    /// or Sunday are congratulated on the following Monday. Results keep
    /// the book's insertion order, not chronological order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        within_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let birthday = match record.birthday() {
                Some(birthday) => birthday,
                None => continue,
            };

            let mut occurrence = match birthday_occurrence(birthday.date(), today.year()) {
                Some(date) => date,
                None => continue,
            };

            if occurrence < today {
                occurrence = match birthday_occurrence(birthday.date(), today.year() + 1) {
                    Some(date) => date,
                    None => continue,
                };
            }

            let days_until = (occurrence - today).num_days();
            if days_until < 0 || days_until > i64::from(within_days) {
                continue;
            }

            let congratulation_date = adjust_for_weekend(occurrence);
            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation_date.format("%Y.%m.%d").to_string(),
            });
        }

        upcoming
    }
}

/// The occurrence of `birthday` in `year`. A Feb 29 birthday is observed
/// on Mar 1 in common years.
fn birthday_occurrence(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Saturday and Sunday greetings move forward to the following Monday.
fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressBook:")?;
        for record in self.iter() {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
