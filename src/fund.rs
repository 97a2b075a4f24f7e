//! Fund operations: adding to or subtracting from a card.
//!
//! A fund operation changes a debit card's balance or a credit card's
//! spending and records one history row. Subtracting more than is there
//! clamps at zero instead of going negative.

use crate::error::{Result, WalletError};
use crate::format::{format_currency, locale_date};
use crate::models::{
    Card, CardDetails, CardId, NaiveDateTime, Operation, Transaction, TransactionId,
    TransactionKind,
};

/// Parses user input into a fund amount.
///
/// # Errors
///
/// Returns [`WalletError::Validation`] if the input is not a number, is
/// not finite, or is not strictly positive.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let amount = trimmed
        .parse::<f64>()
        .map_err(|err| WalletError::Validation(format!("invalid amount {trimmed:?}: {err}")))?;
    validate_amount(amount)
}

/// Checks that an amount is finite and strictly positive.
///
/// # Errors
///
/// Returns [`WalletError::Validation`] otherwise.
#[inline]
pub fn validate_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(WalletError::Validation(format!(
            "amount must be a positive number, got {amount}"
        )))
    }
}

/// Returns `current ± amount`, clamping a subtraction at zero.
#[inline]
#[must_use]
pub fn adjust(current: f64, operation: Operation, amount: f64) -> f64 {
    match operation {
        Operation::Add => current + amount,
        Operation::Subtract => (current - amount).max(0.0),
    }
}

/// Returns a copy of `card` with the operation applied to its balance
/// (debit) or spending (credit).
///
/// # Errors
///
/// Returns [`WalletError::Validation`] if `amount` is not a finite
/// positive number.
pub fn apply_to_card(card: &Card, operation: Operation, amount: f64) -> Result<Card> {
    let checked = validate_amount(amount)?;
    let mut updated = card.clone();
    updated.details = match updated.details {
        CardDetails::Debit { balance } => CardDetails::Debit {
            balance: adjust(balance, operation, checked),
        },
        CardDetails::Credit {
            credit_limit,
            current_spending,
            payment_date,
        } => CardDetails::Credit {
            credit_limit,
            current_spending: adjust(current_spending, operation, checked),
            payment_date,
        },
    };
    Ok(updated)
}

/// A fully described fund operation, ready to be applied as one step.
#[derive(Debug, Clone, PartialEq)]
pub struct FundRequest {
    /// Card to apply the operation to.
    pub card_id: CardId,
    /// Add or subtract.
    pub operation: Operation,
    /// Positive amount.
    pub amount: f64,
    /// Optional description; a default one is generated when blank.
    pub description: Option<String>,
    /// Optional category label.
    pub category: Option<String>,
    /// Local time of the operation; drives the history date and ID.
    pub at: NaiveDateTime,
}

impl FundRequest {
    /// Creates a request without description or category.
    #[inline]
    #[must_use]
    pub const fn new(card_id: CardId, operation: Operation, amount: f64, at: NaiveDateTime) -> Self {
        Self {
            card_id,
            operation,
            amount,
            description: None,
            category: None,
            at,
        }
    }

    /// Sets the description.
    #[inline]
    #[must_use]
    pub fn description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category label.
    #[inline]
    #[must_use]
    pub fn category<T: Into<String>>(mut self, category: T) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builds the history row recorded for this operation.
    ///
    /// The ID is the request's local wall-clock time counted in
    /// milliseconds as if it were UTC, bumped past `newest` so that two
    /// operations in the same millisecond stay distinct.
    #[must_use]
    pub fn to_transaction(&self, card: &Card, newest: Option<TransactionId>) -> Transaction {
        let stamp = self.at.and_utc().timestamp_millis();
        let id = newest.map_or(stamp, |latest| {
            stamp.max(latest.into_inner().saturating_add(1))
        });
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map_or_else(
                || {
                    format!(
                        "{} {} to {}",
                        self.operation.verb(),
                        format_currency(self.amount),
                        card.name
                    )
                },
                str::to_owned,
            );
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_owned);
        Transaction {
            id: TransactionId::new(id),
            kind: TransactionKind::CardFund,
            operation: self.operation,
            amount: self.amount,
            description,
            date: locale_date(self.at.date()),
            card_id: Some(card.id.clone()),
            card_name: Some(card.name.clone()),
            category,
        }
    }
}
