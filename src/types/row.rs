//! Row-level types for the card ledger
//!
//! This module defines the raw ingest row, the transaction types it may
//! carry, the rejection taxonomy, and the audit record kept for accepted
//! rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card identifier
///
/// A card number is structurally valid when it consists of exactly
/// 16 ASCII digits; the raw type is a plain string because rejected rows
/// preserve whatever text arrived.
pub type CardNumber = String;

/// Transaction types accepted by the ledger
///
/// Matching is case-sensitive: `credit` is not a valid type, only
/// `Credit`, `Debit`, and `Transfer` are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Add the amount to the source card's balance
    Credit,

    /// Subtract the amount from the source card's balance
    Debit,

    /// Subtract the amount from the source card and add it to the target
    /// card, creating the target on first reference
    Transfer,
}

impl FromStr for TransactionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Credit" => Ok(TransactionType::Credit),
            "Debit" => Ok(TransactionType::Debit),
            "Transfer" => Ok(TransactionType::Transfer),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "Credit"),
            TransactionType::Debit => write!(f, "Debit"),
            TransactionType::Transfer => write!(f, "Transfer"),
        }
    }
}

/// Raw ingest row as decoded from the CSV stream
///
/// All six fields are plain text; nothing has been validated or parsed
/// yet. Absent trailing columns decode as empty strings, which the
/// validation pipeline treats the same as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    pub account_name: String,
    pub card_number: String,
    pub transaction_amount: String,
    pub transaction_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_card_number: String,
}

/// Why a row was diverted to the rejection list
///
/// The first five categories come from the ordered validation pipeline.
/// `ProcessingError` covers rows that passed validation but failed during
/// application (checked balance arithmetic overflowing); such rows are
/// recorded here instead of being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    MissingFields,
    InvalidType,
    InvalidCardNumber,
    InvalidTarget,
    InvalidAmount,
    ProcessingError,
}

impl RejectReason {
    /// Wire name of the category, as serialized into query responses
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingFields => "missing-fields",
            RejectReason::InvalidType => "invalid-type",
            RejectReason::InvalidCardNumber => "invalid-card-number",
            RejectReason::InvalidTarget => "invalid-target",
            RejectReason::InvalidAmount => "invalid-amount",
            RejectReason::ProcessingError => "processing-error",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected row: the original input verbatim plus its reason category
///
/// Rejected rows are stored in insertion order and never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    #[serde(flatten)]
    pub row: RawRow,
    pub reason: RejectReason,
}

/// The validated, amount-parsed form of an accepted row
///
/// Kept as an audit log only; card balances already encode the aggregate
/// effect of all accepted transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub account_name: String,
    pub card_number: CardNumber,
    pub transaction_amount: Decimal,
    pub transaction_type: TransactionType,
    pub description: String,

    /// Present only for transfers, and always 16 digits when present
    pub target_card_number: Option<CardNumber>,
}
