//! Caller-managed summary figures.

use serde::{Deserialize, Serialize};

/// Monthly budget seeded on first run.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 5000.0;

/// Aggregate figures stored alongside the document.
///
/// The wallet never derives these itself; callers overwrite them through
/// a summary update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total income.
    pub total_income: f64,
    /// Total expenses.
    pub total_expenses: f64,
    /// Overall balance.
    pub balance: f64,
    /// Monthly budget.
    pub monthly_budget: f64,
}

impl Default for Summary {
    #[inline]
    fn default() -> Self {
        Self {
            total_income: 0.0,
            total_expenses: 0.0,
            balance: 0.0,
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl Summary {
    /// Returns a copy with the patch shallow-merged in.
    #[inline]
    #[must_use]
    pub fn merged(&self, patch: &SummaryPatch) -> Self {
        Self {
            total_income: patch.total_income.unwrap_or(self.total_income),
            total_expenses: patch.total_expenses.unwrap_or(self.total_expenses),
            balance: patch.balance.unwrap_or(self.balance),
            monthly_budget: patch.monthly_budget.unwrap_or(self.monthly_budget),
        }
    }
}

/// Partial summary for an update; `None` keeps the current value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SummaryPatch {
    /// New total income.
    pub total_income: Option<f64>,
    /// New total expenses.
    pub total_expenses: Option<f64>,
    /// New balance.
    pub balance: Option<f64>,
    /// New monthly budget.
    pub monthly_budget: Option<f64>,
}
