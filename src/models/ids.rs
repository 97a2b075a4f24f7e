//! Newtype wrappers for entity identifiers.
//!
//! These prevent accidentally mixing up card, transaction and legacy entry
//! IDs at compile time.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `Copy` inner type.
macro_rules! define_copy_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Creates a new identifier from the given value.
            #[inline]
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner value.
            #[inline]
            #[must_use]
            pub const fn as_inner(&self) -> &$inner {
                &self.0
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            #[must_use]
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

define_copy_id! {
    /// Unique identifier for a history transaction: the local creation
    /// time counted in milliseconds as if it were UTC.
    TransactionId(i64)
}

define_copy_id! {
    /// Unique identifier for a legacy expense or income entry.
    EntryId(i64)
}

/// Unique identifier for a payment card.
///
/// Opaque text: new cards get a v4 UUID, older documents may carry any
/// string (the seed card uses `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a new identifier from the given string.
    #[inline]
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Generates a fresh random identifier.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns a reference to the inner string.
    #[inline]
    #[must_use]
    pub fn as_inner(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for CardId {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for CardId {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CardId {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_id_serializes_as_number() {
        let id = TransactionId::new(1_700_000_000_123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1700000000123");
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn card_id_serializes_as_string() {
        let id = CardId::new("1".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""1""#);
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn generated_card_ids_differ() {
        let first = CardId::generate();
        let second = CardId::generate();
        assert_ne!(first, second);
        assert_eq!(first.as_inner().len(), 36);
    }

    #[test]
    fn id_display() {
        assert_eq!(CardId::from("abc-123").to_string(), "abc-123");
        assert_eq!(EntryId::new(99).to_string(), "99");
    }

    #[test]
    fn id_into_inner() {
        assert_eq!(TransactionId::new(7).into_inner(), 7);
        assert_eq!(CardId::from("c-1").into_inner(), "c-1");
    }

    #[test]
    fn transaction_ids_order_numerically() {
        assert!(TransactionId::new(9) < TransactionId::new(10));
    }
}
