//! Append-only JSON chart store.
//!
//! Charts live in one JSON file holding an array of records, ordered by
//! insertion. Appending rewrites the file with the new record at the
//! end; records are never updated or deleted.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::record::ChartRecord;

/// File-backed chart record store.
#[derive(Debug, Clone)]
pub struct ChartStore {
    path: PathBuf,
}

impl ChartStore {
    /// Bind a store to a file path. The file is created lazily on the
    /// first append; a missing file reads as an empty list.
    pub fn open<P: AsRef<Path>>(path: P) -> ChartStore {
        ChartStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Result<Vec<ChartRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Append one record to the end of the list.
    pub fn append(&self, record: &ChartRecord) -> Result<(), StoreError> {
        let mut records = self.list_all()?;
        records.push(record.clone());
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = records.len(), "chart appended");
        Ok(())
    }

    /// Find a record by chart name (first match in insertion order).
    pub fn find(&self, name: &str) -> Result<Option<ChartRecord>, StoreError> {
        Ok(self.list_all()?.into_iter().find(|r| r.name == name))
    }
}
