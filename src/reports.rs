//! Read-side queries over the document.
//!
//! Everything here is pure and recomputed on every call. History rows
//! whose card no longer exists, or whose category has been renamed, are
//! reported under whatever they recorded, with placeholders for missing
//! values.

mod export;
mod rollup;
mod weekly;

pub use export::{CardReport, REPORT_HEADER, export_card_history, render_card_report};
pub use rollup::{
    CardTotal, CategoryTotal, GENERAL_CARD_ID, GENERAL_EXPENSES_NAME, GENERAL_INCOME_NAME,
    UNCATEGORIZED, card_rollup, category_rollup,
};
pub use weekly::{DayBucket, WEEK_DAYS, WeeklyReport, weekly_report};

use crate::models::{CardId, Document, Operation, Transaction};

/// Returns the card-fund history of one card, newest first.
#[inline]
#[must_use]
pub fn card_transactions<'doc>(document: &'doc Document, card_id: &CardId) -> Vec<&'doc Transaction> {
    document
        .transaction_history
        .iter()
        .filter(|tx| tx.is_card_fund_of(card_id))
        .collect()
}

/// Returns every history row with the given operation, newest first.
///
/// [`Operation::Add`] rows are income and [`Operation::Subtract`] rows
/// are expenses.
#[inline]
#[must_use]
pub fn transactions_by_operation(document: &Document, operation: Operation) -> Vec<&Transaction> {
    document
        .transaction_history
        .iter()
        .filter(|tx| tx.operation == operation)
        .collect()
}

/// Sums every history row with the given operation.
#[inline]
#[must_use]
pub fn operation_total(document: &Document, operation: Operation) -> f64 {
    document
        .transaction_history
        .iter()
        .filter(|tx| tx.operation == operation)
        .map(|tx| tx.amount)
        .sum()
}


#[cfg(test)]
mod tests {
    use super::fixtures::tx;
    use super::*;
    use crate::models::TransactionKind;

    fn document() -> Document {
        let mut doc = Document::default();
        doc.transaction_history = vec![
            tx(4, Some(("2", "Visa")), Operation::Subtract, 30.0, None, "10/16/2026"),
            tx(3, Some(("1", "Main")), Operation::Add, 500.0, Some("Salary"), "10/16/2026"),
            tx(2, Some(("1", "Main")), Operation::Subtract, 20.0, Some("Dining"), "10/15/2026"),
            tx(1, None, Operation::Add, 7.0, None, "10/14/2026"),
        ];
        doc
    }

    #[test]
    fn card_filter_keeps_order_and_skips_other_kinds() {
        let mut doc = document();
        let mut foreign = tx(5, Some(("1", "Main")), Operation::Add, 1.0, None, "10/16/2026");
        foreign.kind = TransactionKind::Other;
        doc.transaction_history.insert(0, foreign);

        let rows = card_transactions(&doc, &CardId::from("1"));
        let ids: Vec<i64> = rows.iter().map(|tx| tx.id.into_inner()).collect();
        assert_eq!(ids, [3, 2]);
    }

    #[test]
    fn card_filter_for_unknown_card_is_empty() {
        assert!(card_transactions(&document(), &CardId::from("zzz")).is_empty());
    }

    #[test]
    fn operation_queries() {
        let doc = document();
        assert_eq!(transactions_by_operation(&doc, Operation::Add).len(), 2);
        assert_eq!(transactions_by_operation(&doc, Operation::Subtract).len(), 2);
        assert!((operation_total(&doc, Operation::Add) - 507.0).abs() < 1e-9);
        assert!((operation_total(&doc, Operation::Subtract) - 50.0).abs() < 1e-9);
    }
}
