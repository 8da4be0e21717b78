//! Args-validated command wrappers over the address book.
//!
//! Each wrapper checks the positional argument count before touching the
//! book and returns either a user-facing confirmation string or a typed
//! [`CommandError`](crate::error::CommandError). The REPL owns tokenization
//! and printing; no business logic lives here.

pub mod birthdays;
pub mod contacts;
pub mod phones;

use crate::error::{CommandError, CommandResult};

pub use birthdays::{add_birthday, show_birthday, upcoming_birthdays};
pub use contacts::{add_contact, find_by_name, find_by_phone, get_phones, remove_contact, show_all};
pub use phones::{add_phone, remove_phone, update_phone};

/// Require exactly `N` positional arguments, or fail with the usage string.
pub(crate) fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| CommandError::ArgumentCount { usage })
}
