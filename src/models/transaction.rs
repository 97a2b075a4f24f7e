//! History transaction model.

use serde::{Deserialize, Serialize};

use super::{CardId, Operation, TransactionId, TransactionKind};

/// One row of the transaction history.
///
/// Rows are never edited in place. `card_name` is a snapshot taken when
/// the row was created and does not follow later card renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (creation time in milliseconds).
    pub id: TransactionId,
    /// Origin of the row.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Whether money was added or subtracted.
    pub operation: Operation,
    /// Positive amount; the sign lives in `operation`.
    pub amount: f64,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Calendar day as locale short date text (e.g. `10/16/2026`).
    pub date: String,
    /// Card the operation was applied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<CardId>,
    /// Card name at the time of the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    /// Category label, normally taken from the category set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Transaction {
    /// Returns the category label, treating an empty label as missing.
    #[inline]
    #[must_use]
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|label| !label.is_empty())
    }

    /// Returns `true` for card fund rows belonging to the given card.
    #[inline]
    #[must_use]
    pub fn is_card_fund_of(&self, card_id: &CardId) -> bool {
        self.kind == TransactionKind::CardFund && self.card_id.as_ref() == Some(card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_card_fund_transaction() {
        let json = r#"{
            "id": 1760600000000,
            "type": "card_fund",
            "operation": "subtract",
            "amount": 42.5,
            "description": "Lunch",
            "date": "10/16/2026",
            "cardId": "1",
            "cardName": "Main Debit Card",
            "category": "Dining"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, TransactionId::new(1_760_600_000_000));
        assert_eq!(tx.kind, TransactionKind::CardFund);
        assert_eq!(tx.operation, Operation::Subtract);
        assert!((tx.amount - 42.5).abs() < f64::EPSILON);
        assert_eq!(tx.category_label(), Some("Dining"));
        assert!(tx.is_card_fund_of(&CardId::from("1")));
        assert!(!tx.is_card_fund_of(&CardId::from("2")));
    }

    #[test]
    fn empty_category_is_uncategorized() {
        let json = r#"{
            "id": 1,
            "type": "card_fund",
            "operation": "add",
            "amount": 5,
            "description": "",
            "date": "1/2/2026",
            "cardId": "1",
            "cardName": "Main",
            "category": ""
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.category_label(), None);
    }

    #[test]
    fn serialize_skips_missing_references() {
        let tx = Transaction {
            id: TransactionId::new(3),
            kind: TransactionKind::CardFund,
            operation: Operation::Add,
            amount: 1.0,
            description: "Top up".to_owned(),
            date: "1/1/2026".to_owned(),
            card_id: None,
            card_name: None,
            category: None,
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "card_fund");
        assert!(value.get("cardId").is_none());
        assert!(value.get("category").is_none());
        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, tx);
    }
}
