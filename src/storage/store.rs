//! The wellness data store.
//!
//! A durable mapping from `YYYY-MM-DD` date keys to daily records, backed
//! by one JSON file whose name carries the schema version. Storage
//! failures are never fatal: a missing or corrupt file loads as "no
//! data", and a failed write leaves the in-memory map authoritative for
//! the rest of the session.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::WellnessRecord;

/// On-disk file name; the suffix is the schema version.
pub const STORE_FILE_NAME: &str = "wellness-tracker-v1.json";

/// In-memory map of daily records with whole-file persistence.
#[derive(Debug)]
pub struct WellnessStore {
    path: PathBuf,
    records: BTreeMap<String, WellnessRecord>,
}

impl WellnessStore {
    /// Load the store from a data file.
    ///
    /// An absent or unreadable file yields an empty store; malformed JSON
    /// is logged and treated the same way.
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let records = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!(
                        "Warning: Ignoring malformed data file {}: {e}",
                        path.display()
                    );
                    BTreeMap::new()
                },
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, records }
    }

    /// Write the entire mapping back to the data file.
    ///
    /// Failures are logged and swallowed; the in-memory state is kept.
    pub fn persist(&self) {
        let contents = match serde_json::to_string_pretty(&self.records) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Warning: Failed to serialize wellness data: {e}");
                return;
            },
        };

        if let Err(e) = fs::write(&self.path, contents) {
            eprintln!(
                "Warning: Failed to write data file {}: {e}",
                self.path.display()
            );
        }
    }

    /// Look up the record for a date key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&WellnessRecord> {
        self.records.get(key)
    }

    /// Insert or overwrite the record for a date key.
    pub fn set(&mut self, key: String, record: WellnessRecord) {
        self.records.insert(key, record);
    }

    /// Remove the record for a date key, returning whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.records.remove(key).is_some()
    }

    /// Whether a record exists for a date key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in chronological key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WellnessRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Records for one calendar month, in chronological order.
    ///
    /// Date keys sort chronologically as strings, so a prefix match on
    /// `YYYY-MM-` selects the month.
    pub fn month(&self, year: i32, month: u32) -> impl Iterator<Item = (&str, &WellnessRecord)> {
        let prefix = format!("{year:04}-{month:02}-");
        self.records
            .iter()
            .filter(move |(k, _)| k.starts_with(&prefix))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Path of the backing data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
