//! Asynchronous CSV reader
//!
//! Provides a streaming interface over raw ingest rows from any async
//! byte source, used by the upload handler to decode request bodies
//! without touching the filesystem.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - the same headerless six-column layout as the sync reader, via the
//!   csv_format module
//!
//! # Architecture
//!
//! ```text
//! upload body bytes → AsyncReader → RawRow per record
//!                         ↓
//!                  csv_format module
//!                  (row_from_fields)
//! ```

use crate::io::csv_format::row_from_fields;
use crate::types::{LedgerError, RawRow};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Yields one raw row per record. Maintains streaming behavior with
/// constant memory usage per record.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
}

impl<R: AsyncRead + Unpin + Send> AsyncReader<R> {
    /// Create a new AsyncReader from an async byte source
    ///
    /// The reader is configured exactly like the sync reader: headerless
    /// input, trimmed fields, flexible field counts.
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self { csv_reader }
    }

    /// Read the next raw row from the stream
    ///
    /// # Returns
    ///
    /// * `Some(Ok(RawRow))` - Successfully decoded row
    /// * `Some(Err(LedgerError))` - The stream could not be decoded
    /// * `None` - End of input reached
    pub async fn read_row(&mut self) -> Option<Result<RawRow, LedgerError>> {
        let mut records = self.csv_reader.records();

        match records.next().await? {
            Ok(record) => Some(Ok(row_from_fields(record.iter()))),
            Err(e) => Some(Err(LedgerError::from(e))),
        }
    }
}
