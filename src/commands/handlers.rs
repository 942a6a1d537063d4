//! One handler per user command.
//!
//! Handlers validate their arguments, mutate or query the [`AddressBook`],
//! and return a reply string. Failures are typed ([`CommandError`]) and are
//! converted to their fixed user-facing messages in [`dispatch`]; nothing
//! past that boundary ever sees an error value.

use crate::book::AddressBook;
use crate::commands::{CommandKind, ParsedInput};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Extract a required positional argument.
fn arg<'a>(args: &'a [String], index: usize) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArguments)
}

/// `add <name> <phone>` — find-or-create a record by name.
///
/// A new name creates a record holding the phone; an existing name gets the
/// phone appended. Extra arguments are ignored.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            debug!("Appended phone to contact {}", name);
            Ok("Contact updated.".to_string())
        }
        None => {
            book.add_record(Record::new(name, Some(phone), None)?);
            debug!("Created contact {}", name);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old_phone> <new_phone>` — replace the first phone exactly
/// matching `old_phone`.
pub fn change_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    if record.replace_phone(old_phone, new_phone)? {
        debug!("Replaced phone on contact {}", name);
        Ok("Phone number updated.".to_string())
    } else {
        Ok("Old phone number not found.".to_string())
    }
}

/// `phone <name>` — the contact's phones, comma-joined.
pub fn show_phone(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(format!("{}: {}", name, record.phone_list()))
}

/// `add-birthday <name> <DD.MM.YYYY>` — set or overwrite the birthday.
pub fn add_birthday(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    debug!("Set birthday for contact {}", name);
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>` — the stored birthday, formatted.
///
/// An absent contact gets the same soft reply as a contact without a
/// birthday; this handler never fails on lookup, unlike the others.
pub fn show_birthday(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let name = arg(args, 0)?;

    match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
        None => Ok(format!("No birthday found for {}.", name)),
    }
}

/// `all` — every record as `name: phones`, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts available.".to_string());
    }

    Ok(book
        .iter()
        .map(|(name, record)| format!("{}: {}", name, record.phone_list()))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `birthdays` — upcoming birthdays seen from `today`, one per line.
pub fn birthdays_from(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays_from(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays within the next 7 days.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.date))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `birthdays` — upcoming birthdays seen from the current local date.
pub fn birthdays(book: &AddressBook) -> CommandResult<String> {
    birthdays_from(book, Local::now().date_naive())
}

/// Run the handler for `input` and convert any error to its user-facing
/// message. This is the only place handler errors are rendered.
pub fn dispatch(book: &mut AddressBook, input: &ParsedInput) -> String {
    let result = match input.kind {
        CommandKind::Hello => Ok("How can I help you?".to_string()),
        CommandKind::Add => add_contact(book, &input.args),
        CommandKind::Change => change_contact(book, &input.args),
        CommandKind::Phone => show_phone(book, &input.args),
        CommandKind::All => show_all(book),
        CommandKind::AddBirthday => add_birthday(book, &input.args),
        CommandKind::ShowBirthday => show_birthday(book, &input.args),
        CommandKind::Birthdays => birthdays(book),
        // Termination is decided by the loop before dispatch.
        CommandKind::Exit => Ok("Good bye!".to_string()),
        CommandKind::Unknown => Ok("Invalid command.".to_string()),
    };

    result.unwrap_or_else(|err| err.to_string())
}
