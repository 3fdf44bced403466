//! Offline ingestion pipeline
//!
//! Orchestrates one-shot processing of a transaction CSV file:
//! streaming rows from the `SyncReader`, applying each through the
//! `TransactionProcessor`, and writing the resulting card table as CSV.
//!
//! # Error Handling
//!
//! Fatal errors (file not found, unwritable output) are returned
//! immediately. Individual bad rows are recorded on the rejection list,
//! logged to stderr, and processing continues with the next row.

use crate::core::{Outcome, TransactionProcessor};
use crate::io::sync_reader::SyncReader;
use crate::io::write_cards_csv;
use crate::types::{Card, LedgerError};
use std::io::Write;
use std::path::Path;

/// Process a transaction CSV file and write the card table to output
///
/// Rows are processed strictly in file order. The card table comes out
/// in first-seen order with one line per card; the number of rejected
/// rows is reported to stderr when nonzero.
///
/// # Arguments
///
/// * `input_path` - Path to the input CSV file (headerless, six columns)
/// * `output` - Writer for the resulting card table
///
/// # Returns
///
/// * `Ok(())` if processing completed (possibly with rejected rows)
/// * `Err(LedgerError)` if a fatal error occurred
pub fn process_file(input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut processor = TransactionProcessor::new();

    let reader = SyncReader::new(input_path)?;

    for result in reader {
        match result {
            Ok(row) => {
                if let Outcome::Rejected(reason) = processor.process(row) {
                    eprintln!("Bad transaction ({})", reason);
                }
            }
            Err(e) => {
                // Record-level decode failures are logged and skipped,
                // matching the rest of the row-level error handling
                eprintln!("CSV parsing error: {}", e);
            }
        }
    }

    let cards: Vec<Card> = processor
        .ledger()
        .cards()
        .into_iter()
        .cloned()
        .collect();

    write_cards_csv(&cards, output)?;

    let rejected = processor.ledger().rejected().len();
    if rejected > 0 {
        eprintln!("{} bad transaction(s) recorded", rejected);
    }

    Ok(())
}
