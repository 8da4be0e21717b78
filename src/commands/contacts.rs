//! Contact-level commands: add, remove, list, and lookups.

use super::expect_args;
use crate::book::{AddOutcome, AddressBook};
use crate::error::{BookError, CommandError, CommandResult};

/// `add <name> <phone>...` is the compound operation: create the contact if
/// the name is new, otherwise append the phones to the existing record.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let usage = "add ContactName PhoneNumber";
    if args.len() < 2 {
        return Err(CommandError::ArgumentCount { usage });
    }
    let (name, phones) = (args[0], &args[1..]);

    let outcome = book.upsert_contact(name, phones)?;
    Ok(match outcome {
        AddOutcome::Added => "Contact added.".to_string(),
        AddOutcome::Updated => "Contact updated.".to_string(),
    })
}

/// `remove <name>`: delete the contact; removing an absent name is a no-op.
pub fn remove_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = expect_args(args, "remove ContactName")?;
    book.delete(name);
    Ok("Contact removed.".to_string())
}

/// `all`: every record, one per line, in store order.
pub fn show_all(book: &AddressBook) -> String {
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `phone <name>`: the contact's phone list.
pub fn get_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args(args, "phone ContactName")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;
    Ok(record.phones_display())
}

/// `findbyname <part>`: records whose name contains the given substring.
pub fn find_by_name(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [part] = expect_args(args, "findbyname namepart")?;
    Ok(book
        .find_by_name_part(part)
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `findbyphone <phone>`: records holding the given phone value.
pub fn find_by_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [phone] = expect_args(args, "findbyphone phone")?;
    Ok(book
        .find_by_phone(phone)
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
