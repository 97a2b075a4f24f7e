//! Error types for the wallet library.

use crate::models::{CardId, CategoryList};

/// All errors that can occur when using the wallet.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persistence backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// User-supplied input was rejected before touching the document.
    #[error("validation error: {0}")]
    Validation(String),

    /// No card with the given identifier exists.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// A card with the given identifier already exists.
    #[error("card {0} already exists")]
    DuplicateCard(CardId),

    /// The operation requires a different card kind.
    #[error("card {0} is a credit card and has no balance")]
    CardKindMismatch(CardId),

    /// The category name already exists in the target list.
    #[error("category {name:?} already exists in {list}")]
    DuplicateCategory {
        /// List the name was supposed to go into.
        list: CategoryList,
        /// The conflicting name.
        name: String,
    },
}

/// Convenience alias for `Result<T, WalletError>`.
pub type Result<T> = core::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_serde_json() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = WalletError::from(serde_err);
        assert!(matches!(err, WalletError::Serialization(_)));
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn error_storage_display() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = WalletError::Storage(Box::new(inner));
        let msg = err.to_string();
        assert!(msg.contains("storage error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn error_duplicate_category_display() {
        let err = WalletError::DuplicateCategory {
            list: CategoryList::AddFund,
            name: "Salary".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"Salary\""));
        assert!(msg.contains("addFundCategories"));
    }

    #[test]
    fn error_card_not_found_display() {
        let err = WalletError::CardNotFound(CardId::new("c-9".to_owned()));
        assert_eq!(err.to_string(), "card not found: c-9");
    }

    #[test]
    fn error_duplicate_card_display() {
        let err = WalletError::DuplicateCard(CardId::from("1"));
        assert_eq!(err.to_string(), "card 1 already exists");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WalletError>();
    }
}
