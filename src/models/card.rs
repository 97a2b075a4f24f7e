//! Payment card model.

use serde::{Deserialize, Serialize};

use super::CardId;

/// Expiry date given to cards created without one.
pub const DEFAULT_EXPIRY_DATE: &str = "12/28";

/// Credit limit given to credit cards created with a zero limit.
pub const DEFAULT_CREDIT_LIMIT: f64 = 5000.0;

/// Payment date given to credit cards created without one.
pub const DEFAULT_PAYMENT_DATE: &str = "1st of each month";

/// A debit or credit card tracked by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,
    /// Display name.
    pub name: String,
    /// Expiry date as display text (e.g. `09/26`).
    pub expiry_date: String,
    /// Kind-specific money attributes.
    #[serde(flatten)]
    pub details: CardDetails,
}

/// Money attributes of a card, selected by its kind.
///
/// Serialized inline with the card under a `"type"` tag, so a debit card
/// never carries credit fields and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CardDetails {
    /// Debit card holding money.
    Debit {
        /// Available balance, never negative.
        #[serde(default)]
        balance: f64,
    },
    /// Credit card accumulating spending up to a limit.
    Credit {
        /// Maximum spending.
        #[serde(default)]
        credit_limit: f64,
        /// Spending so far, never negative.
        #[serde(default)]
        current_spending: f64,
        /// When the statement is due, as display text.
        #[serde(default)]
        payment_date: String,
    },
}

/// Card kind without its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    /// Debit card.
    Debit,
    /// Credit card.
    Credit,
}

impl CardKind {
    /// Returns the capitalized label used in reports.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
        }
    }
}

impl Card {
    /// Creates a debit card with a freshly generated id and the default
    /// expiry date.
    #[inline]
    #[must_use]
    pub fn debit<T: Into<String>>(name: T, balance: f64) -> Self {
        Self {
            id: CardId::generate(),
            name: name.into(),
            expiry_date: DEFAULT_EXPIRY_DATE.to_owned(),
            details: CardDetails::Debit { balance },
        }
    }

    /// Creates a credit card with a freshly generated id, zero spending
    /// and the default expiry date.
    ///
    /// A zero limit falls back to [`DEFAULT_CREDIT_LIMIT`] and a missing
    /// payment date to [`DEFAULT_PAYMENT_DATE`].
    #[must_use]
    pub fn credit<T: Into<String>>(
        name: T,
        credit_limit: f64,
        payment_date: Option<String>,
    ) -> Self {
        let limit = if credit_limit > 0.0 {
            credit_limit
        } else {
            DEFAULT_CREDIT_LIMIT
        };
        let due = payment_date
            .filter(|date| !date.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAYMENT_DATE.to_owned());
        Self {
            id: CardId::generate(),
            name: name.into(),
            expiry_date: DEFAULT_EXPIRY_DATE.to_owned(),
            details: CardDetails::Credit {
                credit_limit: limit,
                current_spending: 0.0,
                payment_date: due,
            },
        }
    }

    /// Replaces the identifier.
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = id;
        self
    }

    /// Replaces the expiry date.
    #[inline]
    #[must_use]
    pub fn with_expiry_date<T: Into<String>>(mut self, expiry_date: T) -> Self {
        self.expiry_date = expiry_date.into();
        self
    }

    /// Returns the card kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self.details {
            CardDetails::Debit { .. } => CardKind::Debit,
            CardDetails::Credit { .. } => CardKind::Credit,
        }
    }

    /// Returns the balance of a debit card, `None` for credit cards.
    #[inline]
    #[must_use]
    pub const fn balance(&self) -> Option<f64> {
        match self.details {
            CardDetails::Debit { balance } => Some(balance),
            CardDetails::Credit { .. } => None,
        }
    }

    /// Returns the tracked amount: balance for debit, spending for credit.
    #[inline]
    #[must_use]
    pub const fn current_amount(&self) -> f64 {
        match self.details {
            CardDetails::Debit { balance } => balance,
            CardDetails::Credit {
                current_spending, ..
            } => current_spending,
        }
    }

    /// Returns a copy with the patch shallow-merged in.
    ///
    /// Switching kind rebuilds the attributes from the patch, using zero
    /// for missing amounts and the defaults for a missing credit limit or
    /// payment date. Patch fields that do not apply to the resulting kind
    /// are ignored.
    #[must_use]
    pub fn merged(&self, patch: &CardPatch) -> Self {
        let mut card = self.clone();
        if let Some(name) = patch.name.as_ref() {
            card.name.clone_from(name);
        }
        if let Some(expiry_date) = patch.expiry_date.as_ref() {
            card.expiry_date.clone_from(expiry_date);
        }
        let target = patch.kind.unwrap_or_else(|| self.kind());
        card.details = match (self.details.clone(), target) {
            (CardDetails::Debit { balance }, CardKind::Debit) => CardDetails::Debit {
                balance: patch.balance.unwrap_or(balance),
            },
            (
                CardDetails::Credit {
                    credit_limit,
                    current_spending,
                    payment_date,
                },
                CardKind::Credit,
            ) => CardDetails::Credit {
                credit_limit: patch.credit_limit.unwrap_or(credit_limit),
                current_spending: patch.current_spending.unwrap_or(current_spending),
                payment_date: patch.payment_date.clone().unwrap_or(payment_date),
            },
            (CardDetails::Credit { .. }, CardKind::Debit) => CardDetails::Debit {
                balance: patch.balance.unwrap_or(0.0),
            },
            (CardDetails::Debit { .. }, CardKind::Credit) => CardDetails::Credit {
                credit_limit: patch.credit_limit.unwrap_or(DEFAULT_CREDIT_LIMIT),
                current_spending: patch.current_spending.unwrap_or(0.0),
                payment_date: patch
                    .payment_date
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PAYMENT_DATE.to_owned()),
            },
        };
        card
    }
}

/// Partial card attributes for an update; `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CardPatch {
    /// New display name.
    pub name: Option<String>,
    /// New expiry date.
    pub expiry_date: Option<String>,
    /// New kind.
    pub kind: Option<CardKind>,
    /// New debit balance.
    pub balance: Option<f64>,
    /// New credit limit.
    pub credit_limit: Option<f64>,
    /// New credit spending.
    pub current_spending: Option<f64>,
    /// New payment date.
    pub payment_date: Option<String>,
}

impl CardPatch {
    /// Creates an empty patch that changes nothing.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[inline]
    #[must_use]
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the expiry date.
    #[inline]
    #[must_use]
    pub fn expiry_date<T: Into<String>>(mut self, expiry_date: T) -> Self {
        self.expiry_date = Some(expiry_date.into());
        self
    }

    /// Sets the kind.
    #[inline]
    #[must_use]
    pub const fn kind(mut self, kind: CardKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the debit balance.
    #[inline]
    #[must_use]
    pub const fn balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Sets the credit limit.
    #[inline]
    #[must_use]
    pub const fn credit_limit(mut self, credit_limit: f64) -> Self {
        self.credit_limit = Some(credit_limit);
        self
    }

    /// Sets the credit spending.
    #[inline]
    #[must_use]
    pub const fn current_spending(mut self, current_spending: f64) -> Self {
        self.current_spending = Some(current_spending);
        self
    }

    /// Sets the payment date.
    #[inline]
    #[must_use]
    pub fn payment_date<T: Into<String>>(mut self, payment_date: T) -> Self {
        self.payment_date = Some(payment_date.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_debit_card() {
        let json = r#"{
            "id": "1",
            "type": "debit",
            "name": "Main Debit Card",
            "balance": 2500.0,
            "expiryDate": "09/26"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, CardId::from("1"));
        assert_eq!(card.kind(), CardKind::Debit);
        assert_eq!(card.balance(), Some(2500.0));
        assert_eq!(card.expiry_date, "09/26");
    }

    #[test]
    fn deserialize_credit_card_without_spending() {
        let json = r#"{
            "id": "1717171717171",
            "type": "credit",
            "name": "Travel Card",
            "creditLimit": 8000,
            "paymentDate": "15th",
            "expiryDate": "12/28"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind(), CardKind::Credit);
        assert_eq!(card.balance(), None);
        assert!(card.current_amount().abs() < f64::EPSILON);
        assert!(matches!(
            card.details,
            CardDetails::Credit { credit_limit, .. } if (credit_limit - 8000.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn credit_card_with_stray_balance_is_normalized() {
        let json = r#"{
            "id": "1",
            "type": "credit",
            "name": "Main Debit Card",
            "balance": 2500,
            "creditLimit": 900,
            "paymentDate": "1st of each month",
            "expiryDate": "09/26"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.balance(), None);
        assert!(card.current_amount().abs() < f64::EPSILON);
        let value = serde_json::to_value(&card).unwrap();
        assert!(value.get("balance").is_none());
        assert_eq!(value["currentSpending"], 0.0);
        assert_eq!(value["creditLimit"], 900.0);
    }

    #[test]
    fn serialize_debit_card_has_no_credit_fields() {
        let card = Card::debit("Groceries", 10.0).with_id(CardId::from("c-1"));
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["type"], "debit");
        assert_eq!(value["expiryDate"], DEFAULT_EXPIRY_DATE);
        assert!(value.get("creditLimit").is_none());
        assert!(value.get("currentSpending").is_none());
    }

    #[test]
    fn serialize_roundtrip_credit() {
        let card = Card::credit("Visa", 1200.0, Some("5th".to_owned()));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, card);
    }

    #[test]
    fn credit_defaults_apply() {
        let card = Card::credit("Visa", 0.0, Some("  ".to_owned()));
        assert_eq!(
            card.details,
            CardDetails::Credit {
                credit_limit: DEFAULT_CREDIT_LIMIT,
                current_spending: 0.0,
                payment_date: DEFAULT_PAYMENT_DATE.to_owned(),
            }
        );
    }

    #[test]
    fn merged_updates_name_and_balance() {
        let card = Card::debit("Old", 100.0);
        let updated = card.merged(&CardPatch::new().name("New").balance(40.0));
        assert_eq!(updated.id, card.id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.balance(), Some(40.0));
        assert_eq!(updated.expiry_date, card.expiry_date);
    }

    #[test]
    fn merged_ignores_fields_of_other_kind() {
        let card = Card::debit("Debit", 100.0);
        let updated = card.merged(&CardPatch::new().credit_limit(900.0));
        assert_eq!(updated, card);
    }

    #[test]
    fn merged_switches_debit_to_credit() {
        let card = Card::debit("Debit", 100.0);
        let updated = card.merged(&CardPatch::new().kind(CardKind::Credit).credit_limit(900.0));
        assert_eq!(
            updated.details,
            CardDetails::Credit {
                credit_limit: 900.0,
                current_spending: 0.0,
                payment_date: DEFAULT_PAYMENT_DATE.to_owned(),
            }
        );
    }

    #[test]
    fn merged_switches_credit_to_debit_with_zero_balance() {
        let card = Card::credit("Credit", 100.0, None);
        let updated = card.merged(&CardPatch::new().kind(CardKind::Debit));
        assert_eq!(updated.balance(), Some(0.0));
    }

    #[test]
    fn credit_card_current_amount_is_spending() {
        let card = Card::credit("Credit", 100.0, None)
            .merged(&CardPatch::new().current_spending(35.5));
        assert!((card.current_amount() - 35.5).abs() < f64::EPSILON);
        assert_eq!(card.kind().label(), "Credit");
    }
}
