//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over raw ingest rows from a CSV file.
//! Delegates column-layout concerns to the csv_format module.
//!
//! # Design
//!
//! Ingest files carry no header row, so every line is data. Records are
//! read one at a time into raw rows without loading the file into
//! memory; rows with fewer than six columns still decode, with the
//! missing trailing fields empty (the validation pipeline turns those
//! into `missing-fields` rejections where it matters).
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Record-level decode errors are yielded as Err variants with the
//!   line number where decoding failed

use crate::io::csv_format::row_from_fields;
use crate::types::{LedgerError, RawRow};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over raw rows. Maintains streaming
/// behavior with constant memory usage.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The
    /// reader is configured for headerless input, trims whitespace from
    /// all fields, and allows flexible field counts (trailing columns
    /// are frequently omitted in real exports).
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(LedgerError)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::Io {
            message: format!("failed to open '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<RawRow, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        self.line_num += 1;

        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Ok(row_from_fields(record.iter()))),
            Ok(false) => None,
            Err(e) => Some(Err(LedgerError::Parse {
                line: Some(self.line_num),
                message: e.to_string(),
            })),
        }
    }
}
