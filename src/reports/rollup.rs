//! Category and card rollups.

use std::collections::HashMap;

use crate::models::{CardId, Document, Operation};

/// Group label for rows without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group key for rows without a card.
pub const GENERAL_CARD_ID: &str = "General";

/// Group name for expense rows without a card.
pub const GENERAL_EXPENSES_NAME: &str = "General Expenses";

/// Group name for income rows without a card.
pub const GENERAL_INCOME_NAME: &str = "General Income";

/// Sum and count of the rows sharing one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label, or [`UNCATEGORIZED`].
    pub category: String,
    /// Sum of amounts.
    pub total: f64,
    /// Number of rows.
    pub count: usize,
}

/// Sum and count of the rows recorded against one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTotal {
    /// Card the rows reference, or [`GENERAL_CARD_ID`].
    pub card_id: CardId,
    /// Card name recorded on the first row seen for this card.
    pub card_name: String,
    /// Sum of amounts.
    pub total: f64,
    /// Number of rows.
    pub count: usize,
}

/// Groups rows with `operation` by category, largest total first.
///
/// Groups with equal totals keep the order in which they were first seen
/// in the history.
#[must_use]
pub fn category_rollup(document: &Document, operation: Operation) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for tx in document
        .transaction_history
        .iter()
        .filter(|tx| tx.operation == operation)
    {
        let label = tx.category_label().unwrap_or(UNCATEGORIZED);
        let slot = *index.entry(label.to_owned()).or_insert_with(|| {
            groups.push(CategoryTotal {
                category: label.to_owned(),
                total: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.total += tx.amount;
            group.count += 1;
        }
    }
    groups.sort_by(|left, right| right.total.total_cmp(&left.total));
    groups
}

/// Groups rows with `operation` by card, largest total first.
///
/// Rows without a card land in a [`GENERAL_CARD_ID`] group named
/// [`GENERAL_INCOME_NAME`] or [`GENERAL_EXPENSES_NAME`]. Deleted cards
/// still get their own group under the recorded name.
#[must_use]
pub fn card_rollup(document: &Document, operation: Operation) -> Vec<CardTotal> {
    let placeholder = match operation {
        Operation::Add => GENERAL_INCOME_NAME,
        Operation::Subtract => GENERAL_EXPENSES_NAME,
    };
    let mut groups: Vec<CardTotal> = Vec::new();
    let mut index: HashMap<CardId, usize> = HashMap::new();
    for tx in document
        .transaction_history
        .iter()
        .filter(|tx| tx.operation == operation)
    {
        let card_id = tx
            .card_id
            .clone()
            .unwrap_or_else(|| CardId::from(GENERAL_CARD_ID));
        let slot = *index.entry(card_id.clone()).or_insert_with(|| {
            let card_name = tx
                .card_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(placeholder)
                .to_owned();
            groups.push(CardTotal {
                card_id,
                card_name,
                total: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.total += tx.amount;
            group.count += 1;
        }
    }
    groups.sort_by(|left, right| right.total.total_cmp(&left.total));
    groups
}
