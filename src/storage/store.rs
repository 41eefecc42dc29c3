//! Semicolon-delimited CSV record store.
//!
//! Rows are ordered sequences of string fields. Quoting follows the standard
//! CSV rule (fields containing the delimiter, a quote, or a line break are
//! wrapped in double quotes with inner quotes doubled), so whatever is written
//! reads back field-for-field.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecordsIntoIter, WriterBuilder};
use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::config::CSV_DELIMITER;
use crate::error_handling::StorageError;

/// Reads and writes rows of string fields.
#[derive(Debug, Clone, Copy)]
pub struct RecordStore {
    delimiter: u8,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            delimiter: CSV_DELIMITER,
        }
    }
}

impl RecordStore {
    /// Store using a custom single-byte delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Opens `path` and returns a lazy iterator over its rows, in file order.
    ///
    /// Every row is returned, including a header row if the file has one. The
    /// file is closed as soon as the last row has been read (or when the
    /// iterator is dropped early). A second pass needs a new call.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the file cannot be opened.
    pub fn read_all(&self, path: impl AsRef<Path>) -> Result<RowReader, StorageError> {
        let path = path.as_ref();
        let reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| StorageError::Unavailable {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(RowReader {
            path: path.to_path_buf(),
            records: Some(reader.into_records()),
        })
    }

    /// Replaces `path` with `header` (when non-empty) followed by `rows`.
    ///
    /// Rows go to a temporary file in the same directory, which is renamed
    /// over `path` only once everything has been flushed. A failed write leaves
    /// any previous file untouched and no partial file behind.
    ///
    /// Returns `true` on success. Failures are logged and reported as `false`;
    /// callers use the store as a cache, so a failed write never aborts a run.
    pub fn write_all<I, R, F>(&self, path: impl AsRef<Path>, rows: I, header: &[&str]) -> bool
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        let path = path.as_ref();
        match self.try_write_all(path, rows, header) {
            Ok(count) => {
                debug!("Wrote {} rows to {}", count, path.display());
                true
            }
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    fn try_write_all<I, R, F>(
        &self,
        path: &Path,
        rows: I,
        header: &[&str],
    ) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        let unavailable = |source: csv::Error| StorageError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|e| unavailable(e.into()))?;

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(temp);

        if !header.is_empty() {
            writer.write_record(header).map_err(unavailable)?;
        }

        let mut count = 0;
        for row in rows {
            writer.write_record(row).map_err(unavailable)?;
            count += 1;
        }

        let temp = writer.into_inner().map_err(|e| {
            let error = e.error();
            unavailable(io::Error::new(error.kind(), error.to_string()).into())
        })?;
        temp.persist(path).map_err(|e| unavailable(e.error.into()))?;
        Ok(count)
    }
}

/// Lazy, finite iterator over the rows of one file.
pub struct RowReader {
    path: PathBuf,
    // None once exhausted, which closes the file
    records: Option<StringRecordsIntoIter<File>>,
}

impl std::fmt::Debug for RowReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowReader")
            .field("path", &self.path)
            .field("exhausted", &self.records.is_none())
            .finish()
    }
}

impl RowReader {
    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the last row has been read and the file closed.
    pub fn is_exhausted(&self) -> bool {
        self.records.is_none()
    }
}

impl Iterator for RowReader {
    type Item = Result<Vec<String>, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(record) = self.records.as_mut()?.next() else {
            self.records = None;
            return None;
        };
        Some(
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| StorageError::Corrupt {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }),
        )
    }
}
