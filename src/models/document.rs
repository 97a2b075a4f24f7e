//! Root document holding the whole wallet state.

use serde::{Deserialize, Serialize};

use super::{Card, CardId, CategorySet, LedgerEntry, Summary, Transaction, TransactionId};

/// Identifier of the card present in a fresh wallet.
pub const SEED_CARD_ID: &str = "1";

/// Name of the card present in a fresh wallet.
pub const SEED_CARD_NAME: &str = "Main Debit Card";

/// Balance of the card present in a fresh wallet.
pub const SEED_CARD_BALANCE: f64 = 2500.0;

/// Expiry date of the card present in a fresh wallet.
pub const SEED_CARD_EXPIRY: &str = "09/26";

/// The single persisted aggregate: cards, history, categories and summary.
///
/// [`Default`] yields the seed state used on first run and whenever the
/// stored document is missing or unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Cards in display order.
    pub cards: Vec<Card>,
    /// Legacy expense entries, newest first.
    #[serde(default)]
    pub expenses: Vec<LedgerEntry>,
    /// Legacy income entries, newest first.
    #[serde(default)]
    pub income: Vec<LedgerEntry>,
    /// Card fund history, newest first.
    #[serde(default)]
    pub transaction_history: Vec<Transaction>,
    /// Category lists.
    #[serde(default)]
    pub categories: CategorySet,
    /// Caller-managed summary figures.
    #[serde(default)]
    pub summary: Summary,
}

impl Default for Document {
    #[inline]
    fn default() -> Self {
        let seed_card = Card::debit(SEED_CARD_NAME, SEED_CARD_BALANCE)
            .with_id(CardId::from(SEED_CARD_ID))
            .with_expiry_date(SEED_CARD_EXPIRY);
        Self {
            cards: vec![seed_card],
            expenses: Vec::new(),
            income: Vec::new(),
            transaction_history: Vec::new(),
            categories: CategorySet::default(),
            summary: Summary::default(),
        }
    }
}

impl Document {
    /// Looks up a card by ID.
    #[inline]
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == *id)
    }

    /// Finds a card by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn find_card_by_name(&self, name: &str) -> Option<&Card> {
        let lower = name.to_lowercase();
        self.cards
            .iter()
            .find(|card| card.name.to_lowercase() == lower)
    }

    /// Returns the largest transaction ID in the history.
    #[inline]
    #[must_use]
    pub fn newest_transaction_id(&self) -> Option<TransactionId> {
        self.transaction_history.iter().map(|tx| tx.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardKind;

    #[test]
    fn seed_document() {
        let doc = Document::default();
        assert_eq!(doc.cards.len(), 1);
        let card = doc.card(&CardId::from("1")).unwrap();
        assert_eq!(card.name, "Main Debit Card");
        assert_eq!(card.kind(), CardKind::Debit);
        assert_eq!(card.balance(), Some(2500.0));
        assert_eq!(card.expiry_date, "09/26");
        assert!(doc.transaction_history.is_empty());
        assert_eq!(doc.categories, CategorySet::default());
    }

    #[test]
    fn deserialize_original_blob() {
        let json = r#"{
            "cards": [
                {"id": "1", "type": "debit", "name": "Main Debit Card", "balance": 3000, "expiryDate": "09/26"},
                {"id": "1760000000000", "name": "Visa", "type": "credit", "expiryDate": "12/28",
                 "creditLimit": 5000, "currentSpending": 120.5, "paymentDate": "1st of each month"}
            ],
            "expenses": [],
            "income": [],
            "transactionHistory": [
                {"id": 1760600000000, "type": "card_fund", "operation": "add", "amount": 500,
                 "description": "Pay", "date": "10/16/2026", "cardId": "1",
                 "cardName": "Main Debit Card", "category": "Salary"}
            ],
            "categories": {
                "addFundCategories": ["Salary", "Transfer", "Allowance"],
                "subtractFundCategories": ["Dining", "Shopping", "Groceries"]
            },
            "summary": {"totalIncome": 0, "totalExpenses": 0, "balance": 0, "monthlyBudget": 5000}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.cards.len(), 2);
        assert_eq!(doc.transaction_history.len(), 1);
        assert_eq!(
            doc.newest_transaction_id(),
            Some(TransactionId::new(1_760_600_000_000))
        );
        assert_eq!(doc.find_card_by_name("visa").unwrap().kind(), CardKind::Credit);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let doc: Document = serde_json::from_str(r#"{"cards": []}"#).unwrap();
        assert!(doc.cards.is_empty());
        assert_eq!(doc.categories, CategorySet::default());
        assert_eq!(doc.summary, Summary::default());
    }

    #[test]
    fn serialize_roundtrip() {
        let doc = Document::default();
        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, doc);
    }
}
