//! Enumeration types for constrained document values.

use serde::{Deserialize, Serialize};

/// Direction of a fund operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Money flowing in (income, top-up, repayment of spending).
    Add,
    /// Money flowing out (expense, spending).
    Subtract,
}

impl Operation {
    /// Returns the sign used when rendering amounts (`+` or `-`).
    #[inline]
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    /// Returns the past-tense verb used in default descriptions.
    #[inline]
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Subtract => "Subtracted",
        }
    }
}

/// Origin of a history transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Manual add/subtract against a card.
    #[serde(rename = "card_fund")]
    CardFund,
    /// Any kind this version does not produce itself.
    #[serde(other)]
    Other,
}

/// Selects one of the two category lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryList {
    /// Categories offered for add-fund operations.
    #[serde(rename = "addFundCategories")]
    AddFund,
    /// Categories offered for subtract-fund operations.
    #[serde(rename = "subtractFundCategories")]
    SubtractFund,
}

impl CategoryList {
    /// Returns the list matching a fund operation.
    #[inline]
    #[must_use]
    pub const fn for_operation(operation: Operation) -> Self {
        match operation {
            Operation::Add => Self::AddFund,
            Operation::Subtract => Self::SubtractFund,
        }
    }

    /// Returns the document key of the list.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddFund => "addFundCategories",
            Self::SubtractFund => "subtractFundCategories",
        }
    }
}

impl core::fmt::Display for CategoryList {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_serde() {
        let variants = [(Operation::Add, r#""add""#), (Operation::Subtract, r#""subtract""#)];
        for (variant, expected_json) in variants {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, expected_json);
            let deserialized: Operation = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, variant);
        }
    }

    #[test]
    fn transaction_kind_card_fund() {
        let json = serde_json::to_string(&TransactionKind::CardFund).unwrap();
        assert_eq!(json, r#""card_fund""#);
    }

    #[test]
    fn unknown_transaction_kind_maps_to_other() {
        let kind: TransactionKind = serde_json::from_str(r#""expense""#).unwrap();
        assert_eq!(kind, TransactionKind::Other);
    }

    #[test]
    fn invalid_operation_fails() {
        let result = serde_json::from_str::<Operation>(r#""multiply""#);
        assert!(result.is_err());
    }

    #[test]
    fn category_list_follows_operation() {
        assert_eq!(
            CategoryList::for_operation(Operation::Add),
            CategoryList::AddFund
        );
        assert_eq!(CategoryList::SubtractFund.to_string(), "subtractFundCategories");
    }

    #[test]
    fn operation_sign_and_verb() {
        assert_eq!(Operation::Add.sign(), '+');
        assert_eq!(Operation::Subtract.verb(), "Subtracted");
    }
}
