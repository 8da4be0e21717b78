//! Birthday commands: set, show, and the 7-day lookahead report.

use super::expect_args;
use crate::book::AddressBook;
use crate::error::{BookError, CommandResult};
use chrono::{Local, NaiveDate};

/// `add-birthday <name> <DD.MM.YYYY>`: set or overwrite the birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, value] = expect_args(args, "add-birthday ContactName Birthday")?;
    book.set_birthday(name, Some(value))?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: the stored birthday, if any.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args(args, "show-birthday ContactName")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;
    Ok(match record.birthday {
        Some(birthday) => birthday.to_string(),
        None => format!("No birthday set for {}.", name),
    })
}

/// `birthdays`: everyone to congratulate within the next 7 days, one line
/// per contact, evaluated against today's date.
pub fn upcoming_birthdays(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [] = expect_args(args, "birthdays")?;
    Ok(upcoming_birthdays_at(book, Local::now().date_naive()))
}

/// Same as [`upcoming_birthdays`], against an explicit reference date.
pub fn upcoming_birthdays_at(book: &AddressBook, reference: NaiveDate) -> String {
    book.upcoming_birthdays(reference)
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
