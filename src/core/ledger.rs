//! Ledger store
//!
//! This module provides the `Ledger` struct which holds the authoritative
//! state of the system: all cards keyed by card number, the audit log of
//! accepted transactions, and the list of rejected rows.
//!
//! The Ledger is responsible for:
//! - Creating cards on first reference (lookup-or-create by card number)
//! - Listing cards in first-seen order
//! - Deriving the collections view (accounts on negative-balance cards)
//! - Recording accepted and rejected rows in insertion order
//! - The global reset, which is the only delete path

use crate::types::{Card, CardNumber, CollectionEntry, RawRow, RejectReason, RejectedRow, Transaction};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Authoritative store of cards, accepted transactions, and rejections
///
/// The Ledger is an owned object passed explicitly into the processor and
/// the query handlers; there are no process-wide singletons. Insertion
/// order of cards is tracked separately from the identifier-keyed map so
/// listings come back first-seen first.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Cards keyed by card number
    cards: HashMap<CardNumber, Card>,

    /// Card numbers in first-seen order
    card_order: Vec<CardNumber>,

    /// Audit log of accepted transactions, in processing order
    transactions: Vec<Transaction>,

    /// Rejected rows, verbatim, in processing order
    rejected: Vec<RejectedRow>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Get or create the card with the given number
    ///
    /// If no card exists for the number, one is created with a zero
    /// balance and an empty account set, and its number is appended to
    /// the first-seen order. Creation is idempotent: repeated calls with
    /// the same number return the same card.
    ///
    /// # Arguments
    ///
    /// * `card_number` - The card number to look up or create
    ///
    /// # Returns
    ///
    /// A mutable reference to the card for the given number
    pub fn find_or_create_card(&mut self, card_number: &str) -> &mut Card {
        if !self.cards.contains_key(card_number) {
            self.card_order.push(card_number.to_string());
        }
        self.cards
            .entry(card_number.to_string())
            .or_insert_with(|| Card::new(card_number.to_string()))
    }

    /// Look up a card without creating it
    pub fn card(&self, card_number: &str) -> Option<&Card> {
        self.cards.get(card_number)
    }

    /// Number of cards in the ledger
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// All cards in first-seen order
    pub fn cards(&self) -> Vec<&Card> {
        self.card_order
            .iter()
            .filter_map(|number| self.cards.get(number))
            .collect()
    }

    /// Collections view: one entry per account name on each card whose
    /// balance is negative
    ///
    /// A negative-balance card with three account names yields three
    /// entries, each carrying the same card number and balance. Cards
    /// with no account names (transfer targets) yield nothing even when
    /// negative.
    pub fn negative_balance_accounts(&self) -> Vec<CollectionEntry> {
        self.cards()
            .into_iter()
            .filter(|card| card.balance < Decimal::ZERO)
            .flat_map(|card| {
                card.account_names.iter().map(|name| CollectionEntry {
                    account_name: name.clone(),
                    card_number: card.card_number.clone(),
                    balance: card.balance,
                })
            })
            .collect()
    }

    /// Append an accepted transaction to the audit log
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Audit log of accepted transactions, in processing order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a rejected row, verbatim, tagged with its reason
    pub fn push_rejected(&mut self, row: RawRow, reason: RejectReason) {
        self.rejected.push(RejectedRow { row, reason });
    }

    /// Rejected rows in processing order
    pub fn rejected(&self) -> &[RejectedRow] {
        &self.rejected
    }

    /// Clear all state: cards, audit log, and rejected rows
    ///
    /// Irreversible; this is the only way anything leaves the ledger.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.card_order.clear();
        self.transactions.clear();
        self.rejected.clear();
    }
}
