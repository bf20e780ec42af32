//! Command handlers for the assistant bot.
//!
//! Each handler checks its argument shape, delegates to the data model, and
//! builds the reply text. Failures travel up as [`CommandError`] values;
//! [`render_error`] is the single place they become user-facing strings.

use crate::cli::style;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::{debug, info};

/// `add NAME PHONE`: create the contact if the name is new, then store the
/// phone. Adding a phone the contact already has is a silent no-op.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        &[name, phone] => (name, phone),
        _ => {
            return Err(CommandError::Usage {
                what: "both name and phone number",
                example: "add Alice 1234567890",
            })
        }
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            info!("Contact updated: {}", name);
            Ok("Contact updated.".to_string())
        }
        None => {
            // Validate the phone before the record enters the book, so a bad
            // phone never leaves a phone-less contact behind.
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
            info!("Contact added: {}", name);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change NAME OLD NEW`: replace one of the contact's stored phones.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, old_phone, new_phone) = match args {
        &[name, old_phone, new_phone] => (name, old_phone, new_phone),
        _ => {
            return Err(CommandError::Usage {
                what: "name, old phone and new phone",
                example: "change Alice 1234567890 0987654321",
            })
        }
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;

    info!("Phone changed for contact: {}", name);
    Ok(format!(
        "Contact {} updated.",
        style::value(&format!("'{}'", name))
    ))
}

/// `phone NAME`: show the contact's phones, joined by `, `.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        &[name] => name,
        _ => {
            return Err(CommandError::Usage {
                what: "a name",
                example: "phone Alice",
            })
        }
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    debug!("Showing phones for contact: {}", name);
    Ok(format!(
        "Phone '{}': {}.",
        name,
        style::value(&format!("'{}'", phones))
    ))
}

/// `all`: render the whole book, one contact per line.
pub fn show_all(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    if !args.is_empty() {
        return Err(CommandError::Usage {
            what: "no arguments",
            example: "all",
        });
    }

    if book.is_empty() {
        return Err(CommandError::EmptyBook);
    }

    debug!("Listing all {} contact(s)", book.len());
    Ok(style::value(&book.to_string()).to_string())
}

/// `add-birthday NAME DD.MM.YYYY`: set the contact's birthday. The reply
/// echoes the stored date in its canonical form.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, birthday) = match args {
        &[name, birthday] => (name, birthday),
        _ => {
            return Err(CommandError::Usage {
                what: "both name and birthday",
                example: "add-birthday Alice DD.MM.YYYY",
            })
        }
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    let stored = record.add_birthday(birthday)?;
    let reply = format!(
        "Birthday '{}': {}.",
        name,
        style::value(&format!("'{}'", stored))
    );

    info!("Birthday set for contact: {}", name);
    Ok(reply)
}

/// `show-birthday NAME`: show the contact's stored birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        &[name] => name,
        _ => {
            return Err(CommandError::Usage {
                what: "a name",
                example: "show-birthday Alice",
            })
        }
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    let birthday = record
        .birthday()
        .ok_or_else(|| CommandError::BirthdayNotSet(name.to_string()))?;

    debug!("Showing birthday for contact: {}", name);
    Ok(format!(
        "Birthday '{}': {}.",
        name,
        style::value(&format!("'{}'", birthday))
    ))
}

/// `birthdays [DAYS]`: contacts to congratulate within the window, one per
/// line in book order. Without an argument the configured default applies.
pub fn upcoming_birthdays(
    args: &[&str],
    book: &AddressBook,
    default_window: u32,
) -> CommandResult<String> {
    let window = match args {
        &[] => default_window,
        &[raw] => raw
            .parse::<u32>()
            .map_err(|_| CommandError::InvalidWindow(raw.to_string()))?,
        _ => {
            return Err(CommandError::Usage {
                what: "at most a day window",
                example: "birthdays 7",
            })
        }
    };

    let upcoming = book.upcoming_birthdays(window);
    if upcoming.is_empty() {
        return Err(CommandError::NoBirthdays);
    }

    debug!(
        "Upcoming birthdays within {} day(s): {}",
        window,
        upcoming.len()
    );
    let lines = upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(style::value(&lines).to_string())
}

/// Flatten a handler result into the reply text.
pub fn reply(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|error| render_error(&error))
}

/// Translate a [`CommandError`] into its user-facing reply.
///
/// "Not found"-class replies stay plain; everything else carries the red
/// `Error` tag, with usage examples highlighted in magenta.
pub fn render_error(error: &CommandError) -> String {
    match error {
        CommandError::ContactNotFound
        | CommandError::BirthdayNotSet(_)
        | CommandError::EmptyBook
        | CommandError::NoBirthdays => error.to_string(),
        CommandError::Usage { what, example } => format!(
            "{}: you must provide {} (example: {})",
            style::error_tag(),
            what,
            style::example(example)
        ),
        other => format!("{}: {}", style::error_tag(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_colors() {
        colored::control::set_override(false);
    }

    fn book_with(name: &str, phone: &str) -> AddressBook {
        let mut book = AddressBook::new();
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        book.add_record(record);
        book
    }

    #[test]
    fn test_add_contact_new_name() {
        plain_colors();
        let mut book = AddressBook::new();

        let reply = add_contact(&["Alice", "0501234567"], &mut book).unwrap();
        assert_eq!(reply, "Contact added.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_contact_existing_name() {
        plain_colors();
        let mut book = book_with("Alice", "0501234567");

        let reply = add_contact(&["Alice", "0971112233"], &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_duplicate_phone_still_updates() {
        plain_colors();
        let mut book = book_with("Alice", "0501234567");

        let reply = add_contact(&["Alice", "0501234567"], &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_contact_bad_phone_leaves_book_untouched() {
        plain_colors();
        let mut book = AddressBook::new();

        let result = add_contact(&["Alice", "12345"], &mut book);
        assert!(result.is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_usage_error() {
        plain_colors();
        let mut book = AddressBook::new();

        let err = add_contact(&["Alice"], &mut book).unwrap_err();
        assert!(matches!(err, CommandError::Usage { .. }));
    }

    #[test]
    fn test_change_contact() {
        plain_colors();
        let mut book = book_with("Alice", "0501234567");

        let reply = change_contact(&["Alice", "0501234567", "0971112233"], &mut book).unwrap();
        assert_eq!(reply, "Contact 'Alice' updated.");
        assert_eq!(
            book.find("Alice").unwrap().phones()[0].as_str(),
            "0971112233"
        );
    }

    #[test]
    fn test_change_contact_unknown_name() {
        plain_colors();
        let mut book = AddressBook::new();

        let err = change_contact(&["Ghost", "0501234567", "0971112233"], &mut book).unwrap_err();
        assert!(matches!(err, CommandError::ContactNotFound));
    }

    #[test]
    fn test_show_phone() {
        plain_colors();
        let mut book = book_with("Alice", "0501234567");
        book.find_mut("Alice")
            .unwrap()
            .add_phone("0971112233")
            .unwrap();

        let reply = show_phone(&["Alice"], &book).unwrap();
        assert_eq!(reply, "Phone 'Alice': '0501234567, 0971112233'.");
    }

    #[test]
    fn test_show_phone_unknown_name() {
        plain_colors();
        let book = AddressBook::new();

        let err = show_phone(&["Ghost"], &book).unwrap_err();
        assert!(matches!(err, CommandError::ContactNotFound));
    }

    #[test]
    fn test_show_all() {
        plain_colors();
        let book = book_with("Alice", "0501234567");

        let reply = show_all(&[], &book).unwrap();
        assert_eq!(reply, "AddressBook:\nContact name: Alice, Phones: 0501234567");
    }

    #[test]
    fn test_show_all_empty_book() {
        plain_colors();
        let book = AddressBook::new();

        let err = show_all(&[], &book).unwrap_err();
        assert!(matches!(err, CommandError::EmptyBook));
    }

    #[test]
    fn test_show_all_rejects_arguments() {
        plain_colors();
        let book = book_with("Alice", "0501234567");

        let err = show_all(&["Alice"], &book).unwrap_err();
        assert!(matches!(err, CommandError::Usage { .. }));
    }

    #[test]
    fn test_add_and_show_birthday() {
        plain_colors();
        let mut book = book_with("Alice", "0501234567");

        let reply = add_birthday(&["Alice", "15.03.1990"], &mut book).unwrap();
        assert_eq!(reply, "Birthday 'Alice': '1990-03-15'.");

        let reply = show_birthday(&["Alice"], &book).unwrap();
        assert_eq!(reply, "Birthday 'Alice': '1990-03-15'.");
    }

    #[test]
    fn test_add_birthday_twice() {
        plain_colors();
        let mut book = book_with("Alice", "0501234567");
        add_birthday(&["Alice", "15.03.1990"], &mut book).unwrap();

        let err = add_birthday(&["Alice", "16.03.1991"], &mut book).unwrap_err();
        assert_eq!(render_error(&err), "Error: Birthday already exists");
    }

    #[test]
    fn test_show_birthday_not_set() {
        plain_colors();
        let book = book_with("Alice", "0501234567");

        let err = show_birthday(&["Alice"], &book).unwrap_err();
        assert!(matches!(err, CommandError::BirthdayNotSet(_)));
        assert_eq!(render_error(&err), "No birthday set for 'Alice'");
    }

    #[test]
    fn test_upcoming_birthdays_empty_book() {
        plain_colors();
        let book = AddressBook::new();

        let err = upcoming_birthdays(&[], &book, 7).unwrap_err();
        assert!(matches!(err, CommandError::NoBirthdays));
        assert_eq!(render_error(&err), "No birthdays.");
    }

    #[test]
    fn test_upcoming_birthdays_invalid_window() {
        plain_colors();
        let book = book_with("Alice", "0501234567");

        let err = upcoming_birthdays(&["soon"], &book, 7).unwrap_err();
        assert!(matches!(err, CommandError::InvalidWindow(_)));
    }

    #[test]
    fn test_upcoming_birthdays_rejects_extra_arguments() {
        plain_colors();
        let book = book_with("Alice", "0501234567");

        let err = upcoming_birthdays(&["7", "30"], &book, 7).unwrap_err();
        assert!(matches!(err, CommandError::Usage { .. }));
    }

    #[test]
    fn test_render_usage_error() {
        plain_colors();
        let err = CommandError::Usage {
            what: "both name and phone number",
            example: "add Alice 1234567890",
        };
        assert_eq!(
            render_error(&err),
            "Error: you must provide both name and phone number (example: add Alice 1234567890)"
        );
    }

    #[test]
    fn test_render_validation_error_carries_tag() {
        plain_colors();
        let mut book = AddressBook::new();

        let err = add_contact(&["Alice", "12345"], &mut book).unwrap_err();
        assert_eq!(
            render_error(&err),
            "Error: Phone number must contain exactly 10 digits: 12345"
        );
    }

    #[test]
    fn test_render_not_found_stays_plain() {
        plain_colors();
        assert_eq!(
            render_error(&CommandError::ContactNotFound),
            "No contact with this name"
        );
        assert_eq!(render_error(&CommandError::EmptyBook), "No contacts.");
    }

    #[test]
    fn test_reply_flattens_both_sides() {
        plain_colors();
        assert_eq!(reply(Ok("Contact added.".to_string())), "Contact added.");
        assert_eq!(reply(Err(CommandError::NoBirthdays)), "No birthdays.");
    }
}
