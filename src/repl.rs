//! The interactive prompt loop.
//!
//! Thin dispatch glue: tokenizes a line, routes the verb to the matching
//! command wrapper, prints the outcome, and keeps the session alive on
//! command errors. The book is saved once, at orderly shutdown.

use crate::book::AddressBook;
use crate::commands;
use crate::error::StorageResult;
use crate::storage::ContactStorage;
use std::io::{self, BufRead, Write};
use tracing::info;

const GREETING: &str = "Welcome to the assistant bot!";

/// Verbs the prompt understands, in help order.
pub const ALLOWED_COMMANDS: &[&str] = &[
    "close",
    "exit",
    "add",
    "remove",
    "all",
    "phone",
    "addphone",
    "removephone",
    "updatephone",
    "add-birthday",
    "show-birthday",
    "findbyphone",
    "findbyname",
    "birthdays",
    "hello",
    "help",
];

/// Split a line into a lower-cased verb and its positional arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_lowercase();
    Some((verb, parts.collect()))
}

/// Route one command to its wrapper and render the outcome as the text to
/// print. Errors become their display string; the caller decides nothing.
pub fn dispatch(verb: &str, args: &[&str], book: &mut AddressBook) -> String {
    let result = match verb {
        "add" => commands::add_contact(args, book),
        "remove" => commands::remove_contact(args, book),
        "all" => Ok(commands::show_all(book)),
        "phone" => commands::get_phones(args, book),
        "addphone" => commands::add_phone(args, book),
        "removephone" => commands::remove_phone(args, book),
        "updatephone" => commands::update_phone(args, book),
        "findbyname" => commands::find_by_name(args, book),
        "findbyphone" => commands::find_by_phone(args, book),
        "add-birthday" => commands::add_birthday(args, book),
        "show-birthday" => commands::show_birthday(args, book),
        "birthdays" => commands::upcoming_birthdays(args, book),
        "hello" => Ok(GREETING.to_string()),
        "help" => Ok(format!(
            "Allowed commands:\n{}",
            ALLOWED_COMMANDS.join(", ")
        )),
        _ => Ok("Invalid command.".to_string()),
    };

    match result {
        Ok(message) => message,
        Err(err) => err.to_string(),
    }
}

/// Run the prompt loop until `close`/`exit` (or end of input), then flush
/// the book to storage.
///
/// # Errors
///
/// Only I/O failures and an unwritable storage target at shutdown are
/// fatal; command errors are printed and the session continues.
pub fn run(book: &mut AddressBook, storage: &dyn ContactStorage) -> StorageResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", GREETING)?;
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as an orderly shutdown.
            break;
        }
        let Some((verb, args)) = parse_input(&line) else {
            continue;
        };

        if verb == "close" || verb == "exit" {
            writeln!(stdout, "Good bye!")?;
            break;
        }

        let output = dispatch(&verb, &args, book);
        if !output.is_empty() {
            writeln!(stdout, "{}", output)?;
        }
    }

    book.save_all(storage)?;
    info!("session closed, contacts saved");
    Ok(())
}
