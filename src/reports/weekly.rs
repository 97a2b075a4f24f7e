//! Seven-day income and expense series.

use chrono::Days;

use crate::format::{locale_date, weekday_label};
use crate::models::{Document, NaiveDate, Operation};

/// Number of days covered by [`weekly_report`], today included.
pub const WEEK_DAYS: u64 = 7;

/// Income and expenses of one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    /// The day.
    pub date: NaiveDate,
    /// Abbreviated weekday name (`Mon`, `Tue`, ...).
    pub label: String,
    /// Sum of add rows and legacy income entries.
    pub income: f64,
    /// Sum of subtract rows and legacy expense entries.
    pub expenses: f64,
}

/// Per-day totals for the last seven days, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    /// One bucket per day, oldest first.
    pub days: Vec<DayBucket>,
    /// Income over the window.
    pub total_income: f64,
    /// Expenses over the window.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub net: f64,
}

/// Buckets the history into the seven days ending on `today`.
///
/// Rows are matched to a day by comparing their stored date text with the
/// day's short date, so rows recorded with another date format are not
/// counted. Legacy income and expense entries are included.
#[must_use]
pub fn weekly_report(document: &Document, today: NaiveDate) -> WeeklyReport {
    let days: Vec<DayBucket> = (0..WEEK_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| day_bucket(document, date))
        .collect();
    let total_income: f64 = days.iter().map(|day| day.income).sum();
    let total_expenses: f64 = days.iter().map(|day| day.expenses).sum();
    WeeklyReport {
        days,
        total_income,
        total_expenses,
        net: total_income - total_expenses,
    }
}

/// Totals one day.
fn day_bucket(document: &Document, date: NaiveDate) -> DayBucket {
    let key = locale_date(date);
    let history = |operation: Operation| -> f64 {
        document
            .transaction_history
            .iter()
            .filter(|tx| tx.operation == operation && tx.date == key)
            .map(|tx| tx.amount)
            .sum()
    };
    let legacy_income: f64 = document
        .income
        .iter()
        .filter(|entry| entry.date == key)
        .map(|entry| entry.amount)
        .sum();
    let legacy_expenses: f64 = document
        .expenses
        .iter()
        .filter(|entry| entry.date == key)
        .map(|entry| entry.amount)
        .sum();
    DayBucket {
        date,
        label: weekday_label(date),
        income: legacy_income + history(Operation::Add),
        expenses: legacy_expenses + history(Operation::Subtract),
    }
}
