//! Record model representing one person in the contact book.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a unique name, an ordered list of phones, and an
/// optional birthday.
///
/// The phone list never holds two entries with the same value; re-adding
/// an existing phone is a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, the record's logical key
    pub name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,

    /// Birthday, absent by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone, keeping insertion order.
    ///
    /// Re-adding a value that is already present leaves the list unchanged.
    pub fn add_phone(&mut self, phone: Phone) {
        if self.has_phone(phone.as_str()) {
            return;
        }
        self.phones.push(phone);
    }

    /// Remove the phone with the given value.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<()> {
        if !self.has_phone(value) {
            return Err(BookError::PhoneNotFound(value.to_string()));
        }
        self.phones.retain(|p| p.as_str() != value);
        Ok(())
    }

    /// Replace a phone in place, preserving its position in the list.
    ///
    /// Editing a phone to a value the record already holds elsewhere drops
    /// the edited entry and keeps the single existing one, so the list
    /// never carries two entries with equal value.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old_value` is absent, or a
    /// validation error if `new_value` is malformed. The record is left
    /// unchanged on failure.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_value)
            .ok_or_else(|| BookError::PhoneNotFound(old_value.to_string()))?;
        let replacement = Phone::new(new_value)?;
        if old_value != new_value && self.has_phone(new_value) {
            self.phones.remove(index);
        } else {
            self.phones[index] = replacement;
        }
        Ok(())
    }

    /// Look up a phone by value.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Whether the record holds a phone with the given value.
    pub fn has_phone(&self, value: &str) -> bool {
        self.find_phone(value).is_some()
    }

    /// Set, overwrite, or clear (with `None`) the birthday.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Render the phone list as a `; `-joined string.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.birthday {
            Some(birthday) => write!(
                f,
                "Contact name: {}, birthday: {}, phones: {}",
                self.name,
                birthday,
                self.phones_display()
            ),
            None => write!(
                f,
                "Contact name: {}, phones: {}",
                self.name,
                self.phones_display()
            ),
        }
    }
}
