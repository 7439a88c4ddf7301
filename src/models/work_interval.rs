//! Work interval model.
//!
//! A [`WorkInterval`] is one stretch of worked wall-clock time, tied to the
//! compensation profile it is paid under.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const NANOSECONDS_PER_HOUR: i64 = 3_600_000_000_000;
const MILLISECONDS_PER_HOUR: i64 = 3_600_000;

/// Returns the fractional hours from `start` to `end`, measured in nanoseconds.
///
/// Spans too long for a nanosecond count (about 292 years) are measured in
/// milliseconds instead. Negative when `end` precedes `start`.
pub(crate) fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let span = end - start;
    match span.num_nanoseconds() {
        Some(nanos) => Decimal::from(nanos) / Decimal::from(NANOSECONDS_PER_HOUR),
        None => Decimal::from(span.num_milliseconds()) / Decimal::from(MILLISECONDS_PER_HOUR),
    }
}

/// A worked stretch of local wall-clock time.
///
/// Times carry no timezone: they are interpreted exactly as the worker's
/// local clock showed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// When work started.
    pub start: NaiveDateTime,
    /// When work ended.
    pub end: NaiveDateTime,
    /// The profile this interval is paid under.
    pub compensation_profile_id: Uuid,
    /// Sales made during the interval, used for bonus pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_amount: Option<Decimal>,
}

impl WorkInterval {
    /// Creates an interval without a sales amount.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, compensation_profile_id: Uuid) -> Self {
        Self {
            start,
            end,
            compensation_profile_id,
            sales_amount: None,
        }
    }

    /// Returns this interval with the given sales amount attached.
    pub fn with_sales(mut self, sales_amount: Decimal) -> Self {
        self.sales_amount = Some(sales_amount);
        self
    }

    /// Returns true if the interval has positive length.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Returns the worked duration in fractional hours.
    ///
    /// Empty and inverted intervals have a duration of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use earnings_engine::models::WorkInterval;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let interval = WorkInterval::new(
    ///     NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-01-15 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     Uuid::nil(),
    /// );
    /// assert_eq!(interval.duration_hours(), Decimal::new(85, 1)); // 8.5 hours
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        if !self.is_valid() {
            return Decimal::ZERO;
        }
        hours_between(self.start, self.end)
    }

    /// Returns the calendar date the interval is reported under (the date it started).
    pub fn work_date(&self) -> NaiveDate {
        self.start.date()
    }
}
