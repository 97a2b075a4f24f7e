//! Plain-text card history report.

use core::fmt;

use crate::error::{Result, WalletError};
use crate::format::{format_currency, locale_date};
use crate::models::{Card, CardId, Document, NaiveDate, Operation, Transaction};

use super::{UNCATEGORIZED, card_transactions};

/// First line of every report.
pub const REPORT_HEADER: &str = "eWallet Card History Report";

/// Figures and rows of one card's history report.
///
/// The [`fmt::Display`] impl renders the shareable text.
#[derive(Debug, Clone, PartialEq)]
pub struct CardReport<'doc> {
    /// Card the report is about.
    pub card: &'doc Card,
    /// The card's history rows, newest first.
    pub transactions: Vec<&'doc Transaction>,
    /// Sum of add rows.
    pub total_income: f64,
    /// Sum of subtract rows.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub net_amount: f64,
    /// Balance for debit cards, spending for credit cards.
    pub current_balance: f64,
    /// Day printed on the `Generated:` line.
    pub generated_on: NaiveDate,
}

impl<'doc> CardReport<'doc> {
    /// Computes the report figures.
    #[must_use]
    pub fn new(
        card: &'doc Card,
        transactions: Vec<&'doc Transaction>,
        generated_on: NaiveDate,
    ) -> Self {
        let sum = |operation: Operation| -> f64 {
            transactions
                .iter()
                .filter(|tx| tx.operation == operation)
                .map(|tx| tx.amount)
                .sum()
        };
        let total_income = sum(Operation::Add);
        let total_expenses = sum(Operation::Subtract);
        Self {
            card,
            total_income,
            total_expenses,
            net_amount: total_income - total_expenses,
            current_balance: card.current_amount(),
            transactions,
            generated_on,
        }
    }

    /// Returns the number of rows in the report.
    #[inline]
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Returns the title used when sharing the report.
    #[inline]
    #[must_use]
    pub fn title(&self) -> String {
        format!("Card History - {}", self.card.name)
    }
}

impl fmt::Display for CardReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Card: {} ({})", self.card.name, self.card.kind().label())?;
        writeln!(f, "Generated: {}", locale_date(self.generated_on))?;
        writeln!(f)?;
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "--------")?;
        writeln!(f, "Total Income: {}", format_currency(self.total_income))?;
        writeln!(f, "Total Expenses: {}", format_currency(self.total_expenses))?;
        writeln!(f, "Net Amount: {}", format_currency(self.net_amount))?;
        writeln!(f, "Current Balance: {}", format_currency(self.current_balance))?;
        writeln!(f, "Total Transactions: {}", self.transaction_count())?;
        writeln!(f)?;
        writeln!(f, "TRANSACTION HISTORY:")?;
        write!(f, "-------------------")?;
        if self.transactions.is_empty() {
            write!(f, "\nNo transactions found.")?;
        }
        for tx in &self.transactions {
            write!(
                f,
                "\n{} | {} | {} | {}{}",
                tx.date,
                tx.description,
                tx.category_label().unwrap_or(UNCATEGORIZED),
                tx.operation.sign(),
                format_currency(tx.amount)
            )?;
        }
        Ok(())
    }
}

/// Renders the history report of `card` from the given rows.
///
/// Leading and trailing whitespace is trimmed from the result.
#[must_use]
pub fn render_card_report(
    card: &Card,
    transactions: &[&Transaction],
    generated_on: NaiveDate,
) -> String {
    CardReport::new(card, transactions.to_vec(), generated_on)
        .to_string()
        .trim()
        .to_owned()
}

/// Renders the history report of the card with `card_id`.
///
/// # Errors
///
/// Returns [`WalletError::CardNotFound`] if no such card exists.
pub fn export_card_history(
    document: &Document,
    card_id: &CardId,
    generated_on: NaiveDate,
) -> Result<String> {
    let card = document
        .card(card_id)
        .ok_or_else(|| WalletError::CardNotFound(card_id.clone()))?;
    let rows = card_transactions(document, card_id);
    Ok(render_card_report(card, &rows, generated_on))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardDetails, CardPatch};
    use crate::reports::fixtures::tx;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn renders_exact_template() {
        let mut doc = Document::default();
        doc.cards[0].details = CardDetails::Debit { balance: 2980.0 };
        doc.transaction_history = vec![
            tx(2, Some(("1", "Main Debit Card")), Operation::Subtract, 20.0, None, "10/16/2026"),
            tx(1, Some(("1", "Main Debit Card")), Operation::Add, 500.0, Some("Salary"), "10/15/2026"),
        ];
        let text = export_card_history(&doc, &CardId::from("1"), generated_on()).unwrap();
        let expected = "\
eWallet Card History Report
============================

Card: Main Debit Card (Debit)
Generated: 10/16/2026

SUMMARY:
--------
Total Income: $500.00
Total Expenses: $20.00
Net Amount: $480.00
Current Balance: $2980.00
Total Transactions: 2

TRANSACTION HISTORY:
-------------------
10/16/2026 | row 2 | Uncategorized | -$20.00
10/15/2026 | row 1 | Salary | +$500.00";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_history_says_so() {
        let card = Card::credit("Visa", 900.0, None)
            .merged(&CardPatch::new().current_spending(42.0));
        let text = render_card_report(&card, &[], generated_on());
        assert!(text.starts_with(REPORT_HEADER));
        assert!(text.contains("Card: Visa (Credit)"));
        assert!(text.contains("Current Balance: $42.00"));
        assert!(text.contains("Total Transactions: 0"));
        assert!(text.ends_with("-------------------\nNo transactions found."));
    }

    #[test]
    fn negative_net_amount() {
        let card = Card::debit("Main", 0.0);
        let rows = [tx(1, None, Operation::Subtract, 15.0, None, "10/16/2026")];
        let refs: Vec<&Transaction> = rows.iter().collect();
        let report = CardReport::new(&card, refs, generated_on());
        assert!((report.net_amount + 15.0).abs() < 1e-9);
        assert!(report.to_string().contains("Net Amount: $-15.00"));
        assert_eq!(report.title(), "Card History - Main");
    }

    #[test]
    fn unknown_card_is_an_error() {
        let err = export_card_history(&Document::default(), &CardId::from("x"), generated_on())
            .unwrap_err();
        assert!(matches!(err, WalletError::CardNotFound(_)));
    }
}
