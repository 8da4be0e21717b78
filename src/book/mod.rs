//! The address book: an ordered, name-keyed collection of records.
//!
//! All mutation goes through operations that enforce the store invariants:
//! no two records share a name, and no record holds the same phone twice.
//! Persistence is delegated to a [`ContactStorage`] collaborator through
//! `load_all`/`save_all`; nothing autosaves.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{BookError, BookResult, StorageResult};
use crate::models::Record;
use crate::schedule;
use crate::storage::ContactStorage;
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// Outcome of the compound `add` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created
    Added,
    /// Phones were appended to an existing record
    Updated,
}

/// One entry in the upcoming-birthdays report: who to congratulate, and on
/// which date (already shifted off weekends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, congratulation date: {}",
            self.name,
            self.congratulation_date.format("%Y.%m.%d")
        )
    }
}

/// Ordered collection of contact records, keyed logically by name.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` if a record with the same name
    /// (case-sensitive) already exists.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if self.find(record.name.as_str()).is_some() {
            return Err(BookError::DuplicateName(record.name.to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Exact-match lookup by name. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Remove every record with the given name. No-op if none match.
    pub fn delete(&mut self, name: &str) {
        self.records.retain(|r| r.name.as_str() != name);
    }

    /// All records whose name contains `part` (case-sensitive), in store order.
    pub fn find_by_name_part(&self, part: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.name.as_str().contains(part))
            .collect()
    }

    /// All records holding at least one phone equal to `phone`, in store order.
    pub fn find_by_phone(&self, phone: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.has_phone(phone))
            .collect()
    }

    /// Validate and append a phone to the named record.
    ///
    /// Re-adding an existing value is a silent no-op.
    ///
    /// # Errors
    ///
    /// `BookError::NotFound` if the name is absent, or a validation error
    /// for a malformed phone; the book is unchanged on failure.
    pub fn add_phone_to(&mut self, name: &str, phone: &str) -> BookResult<()> {
        let record = self
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        record.add_phone(Phone::new(phone)?);
        Ok(())
    }

    /// Remove a phone from the named record.
    ///
    /// # Errors
    ///
    /// `BookError::NotFound` if the name is absent,
    /// `BookError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone_from(&mut self, name: &str, phone: &str) -> BookResult<()> {
        let record = self
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        record.remove_phone(phone)
    }

    /// Replace a phone on the named record in place, preserving its position.
    /// Updating to a value the record already holds collapses to the single
    /// existing entry.
    ///
    /// # Errors
    ///
    /// `BookError::NotFound` / `BookError::PhoneNotFound` as above, or a
    /// validation error if the replacement is malformed. The book is
    /// unchanged on failure.
    pub fn update_phone(&mut self, name: &str, old_value: &str, new_value: &str) -> BookResult<()> {
        let record = self
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        record.edit_phone(old_value, new_value)
    }

    /// Set, overwrite, or clear (with `None`) the named record's birthday.
    ///
    /// # Errors
    ///
    /// `BookError::NotFound` if the name is absent, or a validation error
    /// if the value is malformed.
    pub fn set_birthday(&mut self, name: &str, value: Option<&str>) -> BookResult<()> {
        let birthday = value.map(Birthday::parse).transpose()?;
        let record = self
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        record.set_birthday(birthday);
        Ok(())
    }

    /// The compound `add` operation: create the record if the name is new,
    /// otherwise treat the call as an update, then append the given phones
    /// in order.
    ///
    /// This is the one deliberate exception to the duplicate-name rule: an
    /// existing name is an update target here, not a collision.
    ///
    /// # Errors
    ///
    /// A validation error for an empty name or a malformed phone. Phones are
    /// validated in order; ones appended before a failure stay appended.
    pub fn upsert_contact(&mut self, name: &str, phones: &[&str]) -> BookResult<AddOutcome> {
        let outcome = if self.find(name).is_some() {
            AddOutcome::Updated
        } else {
            self.records.push(Record::new(ContactName::new(name)?));
            AddOutcome::Added
        };

        let record = self
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        for phone in phones {
            record.add_phone(Phone::new(*phone)?);
        }
        Ok(outcome)
    }

    /// Every contact whose birthday's next occurrence falls 0 to 6 days
    /// after `reference`, paired with its weekend-shifted congratulation
    /// date, in store order.
    ///
    /// The window is tested against the unshifted occurrence; only the
    /// reported date is shifted.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday?;
                let occurrence = schedule::next_occurrence(birthday.date(), reference);
                if !schedule::in_upcoming_window(occurrence, reference) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name.clone(),
                    congratulation_date: schedule::congratulation_date(occurrence),
                })
            })
            .collect()
    }

    /// Replace the book's contents with what the storage holds.
    pub fn load_all(&mut self, storage: &dyn ContactStorage) -> StorageResult<()> {
        self.records = storage.load()?;
        debug!(records = self.records.len(), "address book hydrated");
        Ok(())
    }

    /// Flush the book's contents to the storage.
    pub fn save_all(&self, storage: &dyn ContactStorage) -> StorageResult<()> {
        storage.save(&self.records)
    }

    /// Iterate records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
