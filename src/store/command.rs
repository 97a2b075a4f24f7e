//! Commands accepted by the store.

use crate::fund::FundRequest;
use crate::models::{
    Card, CardId, CardPatch, CategoryList, Document, EntryId, LedgerEntry, SummaryPatch,
    Transaction, TransactionId,
};

/// A requested change to the document, expressed as data only.
///
/// Commands are the only way to change the document held by a
/// [`Store`](super::Store). Each one either fully applies or leaves the
/// document untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a card; its ID must not already be in use.
    AddCard(Card),
    /// Shallow-merge attributes into a card; no-op if the ID is absent.
    UpdateCard {
        /// Card to update.
        id: CardId,
        /// Attributes to overwrite.
        patch: CardPatch,
    },
    /// Remove a card. Its history rows stay behind.
    DeleteCard(CardId),
    /// Overwrite a debit card's balance.
    UpdateCardBalance {
        /// Card to update.
        card_id: CardId,
        /// New balance.
        balance: f64,
    },
    /// Prepend a legacy expense entry.
    AddExpense(LedgerEntry),
    /// Remove a legacy expense entry.
    DeleteExpense(EntryId),
    /// Prepend a legacy income entry.
    AddIncome(LedgerEntry),
    /// Remove a legacy income entry.
    DeleteIncome(EntryId),
    /// Prepend a history row.
    AddTransactionHistory(Transaction),
    /// Replace the whole history.
    DeleteTransactionHistory(Vec<Transaction>),
    /// Remove one history row.
    DeleteTransaction(TransactionId),
    /// Remove every history row referencing a card.
    PurgeCardHistory(CardId),
    /// Change a card and record the history row in one step.
    ApplyFundOperation(FundRequest),
    /// Shallow-merge summary figures.
    UpdateSummary(SummaryPatch),
    /// Append a category name.
    AddCategory {
        /// Target list.
        list: CategoryList,
        /// Name to add.
        name: String,
    },
    /// Rename the first matching category.
    UpdateCategory {
        /// Target list.
        list: CategoryList,
        /// Current name.
        old_name: String,
        /// Replacement name.
        new_name: String,
    },
    /// Remove every entry equal to the name.
    DeleteCategory {
        /// Target list.
        list: CategoryList,
        /// Name to remove.
        name: String,
    },
    /// Replace the whole document.
    LoadData(Box<Document>),
}

impl Command {
    /// Returns the command name used in logs.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddCard(_) => "add_card",
            Self::UpdateCard { .. } => "update_card",
            Self::DeleteCard(_) => "delete_card",
            Self::UpdateCardBalance { .. } => "update_card_balance",
            Self::AddExpense(_) => "add_expense",
            Self::DeleteExpense(_) => "delete_expense",
            Self::AddIncome(_) => "add_income",
            Self::DeleteIncome(_) => "delete_income",
            Self::AddTransactionHistory(_) => "add_transaction_history",
            Self::DeleteTransactionHistory(_) => "delete_transaction_history",
            Self::DeleteTransaction(_) => "delete_transaction",
            Self::PurgeCardHistory(_) => "purge_card_history",
            Self::ApplyFundOperation(_) => "apply_fund_operation",
            Self::UpdateSummary(_) => "update_summary",
            Self::AddCategory { .. } => "add_category",
            Self::UpdateCategory { .. } => "update_category",
            Self::DeleteCategory { .. } => "delete_category",
            Self::LoadData(_) => "load_data",
        }
    }
}
