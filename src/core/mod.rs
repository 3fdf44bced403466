//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `ledger` - Authoritative store of cards, transactions, and rejections
//! - `processor` - Row validation and balance application
//! - `pagination` - Paging arithmetic for the query surface

pub mod ledger;
pub mod pagination;
pub mod processor;

pub use ledger::Ledger;
pub use pagination::{paginate, Page, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use processor::{Outcome, TransactionProcessor};
