//! Category lists for add and subtract fund operations.

use serde::{Deserialize, Serialize};

use super::CategoryList;

/// Default add-fund categories seeded on first run.
pub const DEFAULT_ADD_FUND_CATEGORIES: [&str; 3] = ["Salary", "Transfer", "Allowance"];

/// Default subtract-fund categories seeded on first run.
pub const DEFAULT_SUBTRACT_FUND_CATEGORIES: [&str; 3] = ["Dining", "Shopping", "Groceries"];

/// The two independent, ordered category name lists.
///
/// Names are unique within a list (exact, case-sensitive match); the same
/// name may appear in both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySet {
    /// Categories offered when adding funds.
    pub add_fund_categories: Vec<String>,
    /// Categories offered when subtracting funds.
    pub subtract_fund_categories: Vec<String>,
}

impl Default for CategorySet {
    #[inline]
    fn default() -> Self {
        Self {
            add_fund_categories: DEFAULT_ADD_FUND_CATEGORIES
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
            subtract_fund_categories: DEFAULT_SUBTRACT_FUND_CATEGORIES
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
        }
    }
}

impl CategorySet {
    /// Returns the selected list.
    #[inline]
    #[must_use]
    pub fn list(&self, list: CategoryList) -> &[String] {
        match list {
            CategoryList::AddFund => &self.add_fund_categories,
            CategoryList::SubtractFund => &self.subtract_fund_categories,
        }
    }

    /// Returns the selected list mutably.
    #[inline]
    pub fn list_mut(&mut self, list: CategoryList) -> &mut Vec<String> {
        match list {
            CategoryList::AddFund => &mut self.add_fund_categories,
            CategoryList::SubtractFund => &mut self.subtract_fund_categories,
        }
    }

    /// Returns `true` if the selected list contains `name` exactly.
    #[inline]
    #[must_use]
    pub fn contains(&self, list: CategoryList, name: &str) -> bool {
        self.list(list).iter().any(|existing| existing == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists() {
        let set = CategorySet::default();
        assert_eq!(set.add_fund_categories, ["Salary", "Transfer", "Allowance"]);
        assert_eq!(
            set.subtract_fund_categories,
            ["Dining", "Shopping", "Groceries"]
        );
    }

    #[test]
    fn contains_is_case_sensitive_and_per_list() {
        let set = CategorySet::default();
        assert!(set.contains(CategoryList::AddFund, "Salary"));
        assert!(!set.contains(CategoryList::AddFund, "salary"));
        assert!(!set.contains(CategoryList::SubtractFund, "Salary"));
    }

    #[test]
    fn serde_uses_document_keys() {
        let value = serde_json::to_value(CategorySet::default()).unwrap();
        assert!(value.get("addFundCategories").is_some());
        assert!(value.get("subtractFundCategories").is_some());
    }
}
