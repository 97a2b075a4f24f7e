//! Personal-finance state engine for debit and credit cards.
//!
//! The crate keeps one JSON [`Document`](models::Document) holding cards,
//! card fund history, category lists and summary figures. All changes go
//! through [`Command`](store::Command)s applied by a [`Store`](store::Store),
//! which persists the whole document through a pluggable
//! [`DocumentStorage`](storage::DocumentStorage) after every applied
//! command. Read-side rollups, the weekly series and the shareable history
//! report live in [`reports`].
//!
//! ```rust
//! use ewallet_rs::fund::FundRequest;
//! use ewallet_rs::models::{CardId, NaiveDate, Operation};
//! use ewallet_rs::reports::export_card_history;
//! use ewallet_rs::storage::InMemoryStorage;
//! use ewallet_rs::store::{Command, Store};
//!
//! let mut store = Store::open(InMemoryStorage::new());
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let at = today.and_hms_opt(9, 0, 0).unwrap();
//! store.dispatch(Command::ApplyFundOperation(
//!     FundRequest::new(CardId::from("1"), Operation::Add, 500.0, at).category("Salary"),
//! ))?;
//! assert_eq!(store.document().cards[0].balance(), Some(3000.0));
//!
//! let report = export_card_history(store.document(), &CardId::from("1"), today)?;
//! assert!(report.ends_with("Salary | +$500.00"));
//! # Ok::<(), ewallet_rs::error::WalletError>(())
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod fund;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;
