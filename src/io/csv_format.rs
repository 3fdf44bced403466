//! CSV format handling for ingest rows and card output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Decoding of headerless six-column records into raw rows
//! - Card table serialization for CLI output
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Card, LedgerError, RawRow};
use std::io::Write;

/// Fixed column order of ingest CSVs
///
/// Ingest files carry no header row; this order is the external contract.
pub const INGEST_COLUMNS: [&str; 6] = [
    "accountName",
    "cardNumber",
    "transactionAmount",
    "transactionType",
    "description",
    "targetCardNumber",
];

/// Build a raw row from record fields in the fixed column order
///
/// Works for both the sync and async CSV readers, which expose their
/// records as iterators over string fields. Absent trailing columns
/// decode as empty strings; extra columns are ignored.
pub fn row_from_fields<'a>(mut fields: impl Iterator<Item = &'a str>) -> RawRow {
    let mut field = || fields.next().unwrap_or("").trim().to_string();

    RawRow {
        account_name: field(),
        card_number: field(),
        transaction_amount: field(),
        transaction_type: field(),
        description: field(),
        target_card_number: field(),
    }
}

/// Write the card table to CSV
///
/// Columns: cardNumber, balance, accountNames (joined with `", "`).
/// Cards are written in the order given, which callers keep as
/// first-seen order.
///
/// # Arguments
///
/// * `cards` - Cards to write
/// * `output` - Writer for the CSV output
pub fn write_cards_csv(cards: &[Card], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["cardNumber", "balance", "accountNames"])?;

    for card in cards {
        writer.write_record(&[
            card.card_number.clone(),
            card.balance.to_string(),
            card.account_names.join(", "),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
