//! Persistence for the contact book.
//!
//! The address book treats storage as a collaborator behind the
//! [`ContactStorage`] trait, enabling different implementations (file-backed,
//! in-memory for tests). The whole record sequence is read or written in one
//! operation at well-defined boundaries (startup, shutdown), never
//! per-mutation.

pub mod json_file;

use crate::error::StorageResult;
use crate::models::Record;

pub use json_file::JsonFileStorage;

/// Bulk load/save collaborator for the address book.
pub trait ContactStorage {
    /// Read the full record sequence.
    ///
    /// Missing or empty backing data yields an empty sequence, not an error.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Write the full record sequence, replacing any previous contents.
    fn save(&self, records: &[Record]) -> StorageResult<()>;
}
