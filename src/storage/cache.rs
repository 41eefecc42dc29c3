//! Per-province cache files.
//!
//! One file per province at `{dir}/province-NN.csv`, header first. A readable
//! file is taken as-is; there is no expiry.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{CACHE_FILE_EXTENSION, CACHE_FILE_PREFIX};
use crate::error_handling::StorageError;
use crate::models::{Record, RegionId};

use super::store::RecordStore;

/// Reads and writes the cache file of each province.
#[derive(Debug, Clone)]
pub struct RegionCache {
    dir: PathBuf,
    store: RecordStore,
}

impl RegionCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            store: RecordStore::default(),
        }
    }

    /// Directory holding the cache files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `{dir}/province-NN.csv`
    pub fn path_for(&self, region: RegionId) -> PathBuf {
        self.dir.join(format!(
            "{CACHE_FILE_PREFIX}{region}.{CACHE_FILE_EXTENSION}"
        ))
    }

    /// Loads the cached records of `region`, skipping the header row.
    ///
    /// Returns `Ok(None)` when no cache file exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the file exists but cannot be
    /// opened, and `StorageError::Corrupt` when a row cannot be turned back
    /// into a record.
    pub fn load(&self, region: RegionId) -> Result<Option<Vec<Record>>, StorageError> {
        let path = self.path_for(region);
        if !path.is_file() {
            debug!("No cache file for province {} at {}", region, path.display());
            return Ok(None);
        }

        let mut records = Vec::new();
        for (index, row) in self.store.read_all(&path)?.enumerate().skip(1) {
            let row = row?;
            let record = Record::from_row(&row).map_err(|e| StorageError::Corrupt {
                path: path.clone(),
                reason: format!("line {}: {}", index + 1, e),
            })?;
            records.push(record);
        }

        debug!(
            "Loaded {} records for province {} from {}",
            records.len(),
            region,
            path.display()
        );
        Ok(Some(records))
    }

    /// Writes `records` for `region` under the standard header.
    ///
    /// Creates the cache directory if needed. Returns `false` (and logs) when
    /// the file could not be written.
    pub fn store(&self, region: RegionId, records: &[Record]) -> bool {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(
                "Failed to create cache directory {}: {}",
                self.dir.display(),
                e
            );
            return false;
        }

        self.store.write_all(
            self.path_for(region),
            records.iter().map(Record::to_row),
            &Record::HEADER,
        )
    }
}
