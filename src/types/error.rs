//! Error types for the card ledger
//!
//! Only infrastructure failures are errors: unreadable files, malformed
//! CSV streams, broken upload payloads. Data-quality problems in
//! individual rows are not errors at all; they become
//! [`RejectReason`](super::row::RejectReason) entries on the rejection
//! list and processing continues with the next row.

use thiserror::Error;

/// Infrastructure error, fatal to the current request or CLI run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// I/O failure while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O failure
        message: String,
    },

    /// The CSV stream itself could not be decoded
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where decoding failed (if known)
        line: Option<u64>,
        /// Description of the decoding failure
        message: String,
    },

    /// The multipart upload did not carry a `file` field
    #[error("upload is missing the `file` field")]
    MissingUploadFile,

    /// The multipart payload could not be read
    #[error("invalid upload payload: {message}")]
    Upload {
        /// Description of the payload failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for LedgerError {
    fn from(error: csv_async::Error) -> Self {
        LedgerError::Parse {
            line: None,
            message: error.to_string(),
        }
    }
}
