//! Legacy expense and income entries.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// A standalone expense or income row.
///
/// Older documents kept these in parallel `expenses` / `income` lists;
/// card fund operations go to the transaction history instead. The weekly
/// report still counts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// Positive amount.
    pub amount: f64,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Calendar day as locale short date text.
    pub date: String,
    /// Optional category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_entry() {
        let json = r#"{"id": 17, "amount": 12.0, "date": "10/15/2026"}"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, EntryId::new(17));
        assert!(entry.description.is_empty());
        assert_eq!(entry.category, None);
    }
}
