//! File-backed JSON storage.

use super::ContactStorage;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Versioned on-disk envelope.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    records: Vec<Record>,
}

/// Stores the record sequence as a versioned JSON document at a fixed path.
///
/// The format is explicit and inspectable:
///
/// ```json
/// { "version": 1, "records": [ { "name": "...", "phones": [...] } ] }
/// ```
///
/// A missing file is created empty on first load, so a fresh start never
/// fails. An empty file loads as an empty book. Anything else that fails to
/// parse, or carries an unknown version, is a [`StorageError`].
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage bound to the given path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl ContactStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Vec<Record>> {
        if !self.path.exists() {
            // First run: create an empty target so later saves and loads
            // find a writable file.
            self.ensure_parent_dir()?;
            fs::File::create(&self.path)?;
            info!(path = %self.path.display(), "created empty contacts file");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            debug!(path = %self.path.display(), "contacts file is empty");
            return Ok(Vec::new());
        }

        let file: BookFile = serde_json::from_str(&contents)?;
        if file.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }

        info!(
            path = %self.path.display(),
            records = file.records.len(),
            "loaded contacts file"
        );
        Ok(file.records)
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        self.ensure_parent_dir()?;
        let file = BookFile {
            version: FORMAT_VERSION,
            records: records.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, contents)?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "saved contacts file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, ContactName, Phone};
    use tempfile::tempdir;

    fn sample_records() -> Vec<Record> {
        let mut alice = Record::new(ContactName::new("Alice").unwrap());
        alice.add_phone(Phone::new("0501234567").unwrap());
        alice.set_birthday(Some(Birthday::parse("24.06.1991").unwrap()));

        let bob = Record::new(ContactName::new("Bob").unwrap());
        vec![alice, bob]
    }

    #[test]
    fn test_load_missing_file_creates_empty_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let storage = JsonFileStorage::new(&path);

        let records = storage.load().unwrap();
        assert!(records.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "").unwrap();

        let records = JsonFileStorage::new(&path).load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("contacts.json"));

        let records = sample_records();
        storage.save(&records).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data/nested/contacts.json"));
        storage.save(&sample_records()).unwrap();
        assert_eq!(storage.load().unwrap().len(), 2);
    }

    #[test]
    fn test_load_corrupted_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupted(_)));
    }

    #[test]
    fn test_load_unknown_version_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, r#"{"version": 99, "records": []}"#).unwrap();

        let err = JsonFileStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedVersion(99)));
    }

    #[test]
    fn test_load_rejects_invalid_record_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        // Phone fails validation on deserialize.
        fs::write(
            &path,
            r#"{"version": 1, "records": [{"name": "Alice", "phones": ["12"]}]}"#,
        )
        .unwrap();

        let err = JsonFileStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupted(_)));
    }
}
