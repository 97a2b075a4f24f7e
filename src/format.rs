//! Display formatting shared by reports and the CLI.

use chrono::{Datelike as _, NaiveDate};

/// Formats an amount as `$` followed by two decimals, no separators.
///
/// Negative amounts keep their sign after the dollar sign (`$-5.00`);
/// negative zero renders as `$0.00`.
#[inline]
#[must_use]
pub fn format_currency(amount: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let normalized = amount + 0.0;
    format!("${normalized:.2}")
}

/// Formats a calendar day as a short `M/D/YYYY` date.
///
/// History rows store this text, and day matching in the weekly report
/// compares it verbatim.
#[inline]
#[must_use]
pub fn locale_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Returns the abbreviated weekday name (`Mon`, `Tue`, ...).
#[inline]
#[must_use]
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_two_decimals() {
        assert_eq!(format_currency(2500.0), "$2500.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(1234567.891), "$1234567.89");
    }

    #[test]
    fn currency_negative_and_zero() {
        assert_eq!(format_currency(-12.0), "$-12.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn short_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(locale_date(date), "3/7/2026");
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(locale_date(date), "10/16/2026");
    }

    #[test]
    fn weekday_abbreviation() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(weekday_label(date), "Fri");
    }
}
