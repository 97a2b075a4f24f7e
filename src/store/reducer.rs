//! Pure document transitions.

use crate::error::{Result, WalletError};
use crate::fund::{apply_to_card, validate_amount};
use crate::models::{Card, CardDetails, CategoryList, Document, LedgerEntry, Transaction};

use super::Command;

/// Applies `command` to a copy of `document` and returns the copy.
///
/// The input is never modified, so a rejected command leaves the caller's
/// document exactly as it was.
///
/// # Errors
///
/// Returns [`WalletError::Validation`] for empty names, bad amounts or a
/// reused history ID, [`WalletError::DuplicateCategory`] when a category
/// name is already taken, [`WalletError::DuplicateCard`] when a new card
/// reuses an existing ID, [`WalletError::CardNotFound`] for a balance
/// update or fund operation on an unknown card, and
/// [`WalletError::CardKindMismatch`] for a balance update on a credit card.
pub fn reduce(document: &Document, command: Command) -> Result<Document> {
    let mut next = document.clone();
    match command {
        Command::AddCard(card) => {
            if next.card(&card.id).is_some() {
                return Err(WalletError::DuplicateCard(card.id));
            }
            next.cards.push(normalized_card(card)?);
        }
        Command::UpdateCard { id, patch } => {
            if let Some(slot) = next.cards.iter_mut().find(|card| card.id == id) {
                *slot = normalized_card(slot.merged(&patch))?;
            }
        }
        Command::DeleteCard(id) => next.cards.retain(|card| card.id != id),
        Command::UpdateCardBalance { card_id, balance } => {
            let card = next
                .cards
                .iter_mut()
                .find(|card| card.id == card_id)
                .ok_or_else(|| WalletError::CardNotFound(card_id.clone()))?;
            match card.details {
                CardDetails::Debit { .. } => {
                    card.details = CardDetails::Debit {
                        balance: non_negative("balance", balance)?,
                    };
                }
                CardDetails::Credit { .. } => return Err(WalletError::CardKindMismatch(card_id)),
            }
        }
        Command::AddExpense(entry) => next.expenses.insert(0, checked_entry(entry)?),
        Command::DeleteExpense(id) => next.expenses.retain(|entry| entry.id != id),
        Command::AddIncome(entry) => next.income.insert(0, checked_entry(entry)?),
        Command::DeleteIncome(id) => next.income.retain(|entry| entry.id != id),
        Command::AddTransactionHistory(transaction) => {
            let checked = checked_transaction(&next, transaction)?;
            next.transaction_history.insert(0, checked);
        }
        Command::DeleteTransactionHistory(history) => next.transaction_history = history,
        Command::DeleteTransaction(id) => next.transaction_history.retain(|tx| tx.id != id),
        Command::PurgeCardHistory(card_id) => next
            .transaction_history
            .retain(|tx| tx.card_id.as_ref() != Some(&card_id)),
        Command::ApplyFundOperation(request) => {
            let newest = next.newest_transaction_id();
            let card = next
                .cards
                .iter_mut()
                .find(|card| card.id == request.card_id)
                .ok_or_else(|| WalletError::CardNotFound(request.card_id.clone()))?;
            let updated = apply_to_card(card, request.operation, request.amount)?;
            let transaction = request.to_transaction(card, newest);
            *card = updated;
            next.transaction_history.insert(0, transaction);
        }
        Command::UpdateSummary(patch) => next.summary = next.summary.merged(&patch),
        Command::AddCategory { list, name } => {
            let trimmed = category_name(&name)?;
            ensure_unique(&next, list, &trimmed)?;
            next.categories.list_mut(list).push(trimmed);
        }
        Command::UpdateCategory {
            list,
            old_name,
            new_name,
        } => {
            let renamed = category_name(&new_name)?;
            if next.categories.contains(list, &old_name) {
                if renamed != old_name {
                    ensure_unique(&next, list, &renamed)?;
                }
                if let Some(slot) = next
                    .categories
                    .list_mut(list)
                    .iter_mut()
                    .find(|name| **name == old_name)
                {
                    *slot = renamed;
                }
            }
        }
        Command::DeleteCategory { list, name } => {
            next.categories.list_mut(list).retain(|entry| *entry != name);
        }
        Command::LoadData(document) => next = *document,
    }
    Ok(next)
}

/// Trims the card name and checks every amount the card carries.
fn normalized_card(mut card: Card) -> Result<Card> {
    let trimmed = card.name.trim();
    if trimmed.is_empty() {
        return Err(WalletError::Validation("card name must not be empty".to_owned()));
    }
    card.name = trimmed.to_owned();
    match card.details {
        CardDetails::Debit { balance } => {
            let _balance = non_negative("balance", balance)?;
        }
        CardDetails::Credit {
            credit_limit,
            current_spending,
            ..
        } => {
            let _limit = non_negative("credit limit", credit_limit)?;
            let _spending = non_negative("current spending", current_spending)?;
        }
    }
    Ok(card)
}

/// Rejects negative or non-finite amounts.
fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WalletError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

/// Checks the amount of a legacy entry.
fn checked_entry(entry: LedgerEntry) -> Result<LedgerEntry> {
    let _amount = validate_amount(entry.amount)?;
    Ok(entry)
}

/// Checks the amount and ID uniqueness of a history row.
fn checked_transaction(document: &Document, transaction: Transaction) -> Result<Transaction> {
    let _amount = validate_amount(transaction.amount)?;
    if document
        .transaction_history
        .iter()
        .any(|tx| tx.id == transaction.id)
    {
        return Err(WalletError::Validation(format!(
            "transaction {} already exists",
            transaction.id
        )));
    }
    Ok(transaction)
}

/// Trims a category name and rejects an empty one.
fn category_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(WalletError::Validation(
            "category name must not be empty".to_owned(),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Rejects a name already present in the list (exact match).
fn ensure_unique(document: &Document, list: CategoryList, name: &str) -> Result<()> {
    if document.categories.contains(list, name) {
        return Err(WalletError::DuplicateCategory {
            list,
            name: name.to_owned(),
        });
    }
    Ok(())
}
