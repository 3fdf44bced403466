//! Transaction processor
//!
//! This module provides the `TransactionProcessor` that consumes one raw
//! row at a time, runs it through the ordered validation pipeline, and
//! applies its effect to the ledger or diverts it to the rejection list.
//!
//! The processor enforces the business rules:
//! - Five validation checks in a fixed order (the order determines which
//!   reason a multiply-malformed row is tagged with)
//! - Lookup-or-create card resolution for sources and transfer targets
//! - The two-sided transfer update, with the account name recorded on the
//!   source side only
//! - Validate-then-commit balance arithmetic, so a row that cannot be
//!   applied leaves no partial state behind

use crate::core::ledger::Ledger;
use crate::types::{RawRow, RejectReason, Transaction, TransactionType};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Result of processing one raw row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The row passed validation and its effect is applied to the ledger
    Accepted,

    /// The row was appended verbatim to the rejection list; no balance
    /// was mutated
    Rejected(RejectReason),
}

/// Consumes raw rows and maintains the ledger
///
/// The processor owns the ledger; queries read through
/// [`TransactionProcessor::ledger`]. Rows are processed strictly in input
/// order with no suspension points, so each row's validation and store
/// mutation is a single logical step.
#[derive(Debug, Default)]
pub struct TransactionProcessor {
    ledger: Ledger,
}

impl TransactionProcessor {
    /// Create a processor with an empty ledger
    pub fn new() -> Self {
        TransactionProcessor {
            ledger: Ledger::new(),
        }
    }

    /// Read access to the ledger state
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Clear all ledger state
    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    /// Process a single raw row
    ///
    /// A row surviving all validation checks has its effect applied to
    /// the ledger and is recorded in the audit log. A row failing any
    /// check (or failing during application) is appended verbatim to the
    /// rejection list and nothing else changes.
    ///
    /// # Arguments
    ///
    /// * `row` - The raw row as decoded from the CSV stream
    ///
    /// # Returns
    ///
    /// The outcome, with any side effect already applied
    pub fn process(&mut self, row: RawRow) -> Outcome {
        let transaction = match validate(&row) {
            Ok(transaction) => transaction,
            Err(reason) => {
                self.ledger.push_rejected(row, reason);
                return Outcome::Rejected(reason);
            }
        };

        if let Err(reason) = self.apply(&transaction) {
            self.ledger.push_rejected(row, reason);
            return Outcome::Rejected(reason);
        }

        self.ledger.record_transaction(transaction);
        Outcome::Accepted
    }

    /// Apply an accepted transaction's balance effect
    ///
    /// Both legs are computed with checked arithmetic before anything is
    /// written, so a failure on either leg rejects the row with no
    /// partial state. Only after both new balances are known are the
    /// cards resolved (created on first reference) and updated.
    fn apply(&mut self, transaction: &Transaction) -> Result<(), RejectReason> {
        let amount = transaction.transaction_amount;

        let mut new_source_balance = match transaction.transaction_type {
            TransactionType::Credit => self
                .balance_of(&transaction.card_number)
                .checked_add(amount),
            TransactionType::Debit | TransactionType::Transfer => self
                .balance_of(&transaction.card_number)
                .checked_sub(amount),
        }
        .ok_or(RejectReason::ProcessingError)?;

        // For a transfer, the incoming leg lands on the target card; a
        // self-transfer folds both legs onto the one card and nets out.
        let mut target_update = None;
        if let Some(target) = &transaction.target_card_number {
            if *target == transaction.card_number {
                new_source_balance = new_source_balance
                    .checked_add(amount)
                    .ok_or(RejectReason::ProcessingError)?;
            } else {
                let new_target_balance = self
                    .balance_of(target)
                    .checked_add(amount)
                    .ok_or(RejectReason::ProcessingError)?;
                target_update = Some((target.clone(), new_target_balance));
            }
        }

        let source = self.ledger.find_or_create_card(&transaction.card_number);
        source.record_account(&transaction.account_name);
        source.balance = new_source_balance;

        if let Some((target, balance)) = target_update {
            // The target side never records the initiating account name
            let target_card = self.ledger.find_or_create_card(&target);
            target_card.balance = balance;
        }

        Ok(())
    }

    /// Current balance of a card, zero if the card does not exist yet
    fn balance_of(&self, card_number: &str) -> Decimal {
        self.ledger
            .card(card_number)
            .map(|card| card.balance)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Run a raw row through the validation pipeline
///
/// The checks short-circuit in this exact order:
/// 1. required field empty -> `missing-fields`
/// 2. unknown transaction type -> `invalid-type`
/// 3. malformed source card number -> `invalid-card-number`
/// 4. transfer with absent or malformed target -> `invalid-target`
/// 5. amount with no numeral prefix -> `invalid-amount`
///
/// # Returns
///
/// The validated, amount-parsed transaction, or the reason the row is
/// rejected.
pub fn validate(row: &RawRow) -> Result<Transaction, RejectReason> {
    if row.account_name.is_empty()
        || row.card_number.is_empty()
        || row.transaction_amount.is_empty()
        || row.transaction_type.is_empty()
    {
        return Err(RejectReason::MissingFields);
    }

    let transaction_type = TransactionType::from_str(&row.transaction_type)
        .map_err(|_| RejectReason::InvalidType)?;

    if !is_card_number(&row.card_number) {
        return Err(RejectReason::InvalidCardNumber);
    }

    let target_card_number = match transaction_type {
        TransactionType::Transfer => {
            // An empty target fails the shape check too, so absent and
            // malformed targets share one reason
            if !is_card_number(&row.target_card_number) {
                return Err(RejectReason::InvalidTarget);
            }
            Some(row.target_card_number.clone())
        }
        TransactionType::Credit | TransactionType::Debit => None,
    };

    let transaction_amount =
        parse_amount(&row.transaction_amount).ok_or(RejectReason::InvalidAmount)?;

    Ok(Transaction {
        account_name: row.account_name.clone(),
        card_number: row.card_number.clone(),
        transaction_amount,
        transaction_type,
        description: row.description.clone(),
        target_card_number,
    })
}

/// Structural card number check: exactly 16 ASCII digits
pub fn is_card_number(candidate: &str) -> bool {
    candidate.len() == 16 && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Lenient decimal parse
///
/// Accepts a leading numeral prefix and ignores trailing non-numeric
/// content ("100abc" parses as 100); fails only when no numeral prefix
/// exists at all. The prefix is an optional sign, digits with at most one
/// decimal point, and an optional exponent. Zero and negative values
/// parse fine; sign is not validated here.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }

    let mut saw_digit = false;
    let mut saw_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                saw_digit = true;
                end += 1;
            }
            b'.' if !saw_dot => {
                saw_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !saw_digit {
        return None;
    }

    // A bare trailing dot ("5.") is part of the numeral in source data
    // but not for Decimal, so it is dropped from the prefix.
    let mantissa_end = if bytes[end - 1] == b'.' { end - 1 } else { end };

    // Optional exponent: e/E, optional sign, at least one digit
    let mut exponent_end = mantissa_end;
    if mantissa_end == end && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut i = end + 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exponent_digits = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i > exponent_digits {
            exponent_end = i;
        }
    }

    let numeral = if exponent_end > mantissa_end {
        &trimmed[..exponent_end]
    } else {
        &trimmed[..mantissa_end]
    };

    // Normalize for Decimal: drop an explicit '+' and put a zero in
    // front of a bare leading dot (".5" -> "0.5").
    let mut normalized = String::with_capacity(numeral.len() + 2);
    let rest = match numeral.strip_prefix('+') {
        Some(rest) => rest,
        None => match numeral.strip_prefix('-') {
            Some(rest) => {
                normalized.push('-');
                rest
            }
            None => numeral,
        },
    };
    if rest.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(rest);

    if exponent_end > mantissa_end {
        Decimal::from_scientific(&normalized).ok()
    } else {
        Decimal::from_str(&normalized).ok()
    }
}
