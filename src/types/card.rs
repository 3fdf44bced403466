//! Card-related types for the card ledger
//!
//! This module defines the Card structure holding a running balance and
//! the account names that have touched it, plus the tuple emitted for
//! negative-balance (collections) queries.

use super::row::CardNumber;
use rust_decimal::Decimal;
use serde::Serialize;

/// A balance bucket identified by a 16-digit card number
///
/// Cards are created implicitly on first reference, either as the source
/// of a transaction or as the target of a transfer, and are never deleted
/// except by a global reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The 16-digit card number (the only structural identity constraint)
    pub card_number: CardNumber,

    /// Running signed balance
    ///
    /// The algebraic sum of all accepted transactions applied to this
    /// card: credits and incoming transfers are positive, debits and
    /// outgoing transfers are negative. Only the transaction processor
    /// mutates this.
    pub balance: Decimal,

    /// Account names that have transacted on this card
    ///
    /// Insertion-ordered with duplicates suppressed. A card created as a
    /// transfer target keeps an empty set until it originates a
    /// transaction of its own.
    pub account_names: Vec<String>,
}

impl Card {
    /// Create a new card with a zero balance and no associated accounts
    pub fn new(card_number: CardNumber) -> Self {
        Card {
            card_number,
            balance: Decimal::ZERO,
            account_names: Vec::new(),
        }
    }

    /// Associate an account name with this card
    ///
    /// Set semantics: a name already present is not added again, so the
    /// list never grows with duplicates.
    pub fn record_account(&mut self, name: &str) {
        if !self.account_names.iter().any(|n| n == name) {
            self.account_names.push(name.to_string());
        }
    }
}

/// One collections tuple: an account tied to a negative-balance card
///
/// A card with three account names and a negative balance yields three
/// of these, each carrying the same card number and balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub account_name: String,
    pub card_number: CardNumber,
    pub balance: Decimal,
}
