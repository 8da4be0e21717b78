//! Phone-level commands: add, remove, and update a contact's numbers.

use super::expect_args;
use crate::book::AddressBook;
use crate::error::CommandResult;

/// `addphone <name> <phone>`: validate and append; duplicates are silent.
pub fn add_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args(args, "addphone ContactName PhoneNumber")?;
    book.add_phone_to(name, phone)?;
    Ok("Phone added.".to_string())
}

/// `removephone <name> <phone>`: drop the given number.
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args(args, "removephone ContactName PhoneNumber")?;
    book.remove_phone_from(name, phone)?;
    Ok("Phone removed.".to_string())
}

/// `updatephone <name> <old> <new>`: replace a number in place.
pub fn update_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = expect_args(args, "updatephone ContactName oldphone newphone")?;
    book.update_phone(name, old, new)?;
    Ok("Phone updated.".to_string())
}
