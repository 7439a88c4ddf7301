//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type used to restrict earnings
//! reports to a date range.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range that reports are computed over.
///
/// # Example
///
/// ```
/// use earnings_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns the period covering a whole calendar month.
    ///
    /// Returns `None` for an invalid year/month combination.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let february = PayPeriod::for_month(2028, 2).unwrap();
    /// assert_eq!(february.end_date, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    /// assert!(PayPeriod::for_month(2028, 13).is_none());
    /// ```
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month_start = if start_date.month() == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start_date,
            end_date: next_month_start.pred_opt()?,
        })
    }

    /// Checks if a given date falls within this pay period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        }
    }

    /// PP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let test_date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert!(january().contains_date(test_date));
    }

    /// PP-002: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let test_date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(!january().contains_date(test_date));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = january();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
    }

    /// PP-003: whole month periods
    #[test]
    fn test_for_month() {
        assert_eq!(PayPeriod::for_month(2026, 1), Some(january()));

        let december = PayPeriod::for_month(2026, 12).unwrap();
        assert_eq!(
            december.end_date,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );

        let april = PayPeriod::for_month(2026, 4).unwrap();
        assert_eq!(april.end_date, NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
    }

    #[test]
    fn test_for_month_rejects_invalid_month() {
        assert!(PayPeriod::for_month(2026, 0).is_none());
        assert!(PayPeriod::for_month(2026, 13).is_none());
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{ "start_date": "2026-01-01", "end_date": "2026-01-31" }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, january());
    }
}
