//! Data models for the wallet document.
//!
//! This module contains strongly-typed representations of cards, history
//! transactions, category lists and the root [`Document`], newtype ID
//! wrappers, and enumeration types for constrained values.

mod card;
mod categories;
mod document;
mod entry;
mod enums;
mod ids;
mod summary;
mod transaction;

pub use card::{
    Card, CardDetails, CardKind, CardPatch, DEFAULT_CREDIT_LIMIT, DEFAULT_EXPIRY_DATE,
    DEFAULT_PAYMENT_DATE,
};
pub use categories::{CategorySet, DEFAULT_ADD_FUND_CATEGORIES, DEFAULT_SUBTRACT_FUND_CATEGORIES};
pub use chrono::{NaiveDate, NaiveDateTime};
pub use document::{
    Document, SEED_CARD_BALANCE, SEED_CARD_EXPIRY, SEED_CARD_ID, SEED_CARD_NAME,
};
pub use entry::LedgerEntry;
pub use enums::{CategoryList, Operation, TransactionKind};
pub use ids::{CardId, EntryId, TransactionId};
pub use summary::{DEFAULT_MONTHLY_BUDGET, Summary, SummaryPatch};
pub use transaction::Transaction;
