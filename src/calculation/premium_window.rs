//! Premium window detection.
//!
//! Hours worked from Friday 17:00 until Saturday 19:00 local wall-clock time
//! are paid at the Sabbath premium. The window is a fixed approximation of
//! the weekly rest period and does not follow sunset or the season.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

/// Hour of day on Friday from which the premium window applies.
pub const PREMIUM_WINDOW_FRIDAY_START_HOUR: u32 = 17;

/// Hour of day on Saturday at which the premium window closes.
pub const PREMIUM_WINDOW_SATURDAY_END_HOUR: u32 = 19;

/// Multiplier for hours worked inside the premium window (150%).
pub const SABBATH_MULTIPLIER: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// Determines whether an instant falls inside the premium pay window.
///
/// Only the weekday and the hour of day are inspected: Friday from 17:00
/// onwards and Saturday before 19:00 are inside the window.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::is_premium_window;
/// use chrono::NaiveDateTime;
///
/// // 2026-01-16 is a Friday
/// let friday_evening = NaiveDateTime::parse_from_str("2026-01-16 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_premium_window(friday_evening));
///
/// // 2026-01-17 is a Saturday
/// let saturday_night = NaiveDateTime::parse_from_str("2026-01-17 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!is_premium_window(saturday_night));
/// ```
pub fn is_premium_window(instant: NaiveDateTime) -> bool {
    match instant.weekday() {
        Weekday::Fri => instant.hour() >= PREMIUM_WINDOW_FRIDAY_START_HOUR,
        Weekday::Sat => instant.hour() < PREMIUM_WINDOW_SATURDAY_END_HOUR,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    // ==========================================================================
    // PW-001: Friday afternoon before 17:00 is outside
    // ==========================================================================
    #[test]
    fn test_pw_001_friday_1659_outside() {
        // 2026-01-16 is a Friday
        assert!(!is_premium_window(make_datetime("2026-01-16", "16:59:59")));
    }

    // ==========================================================================
    // PW-002: Friday 17:00 opens the window
    // ==========================================================================
    #[test]
    fn test_pw_002_friday_1700_inside() {
        assert!(is_premium_window(make_datetime("2026-01-16", "17:00:00")));
    }

    // ==========================================================================
    // PW-003: Friday late night is inside
    // ==========================================================================
    #[test]
    fn test_pw_003_friday_2359_inside() {
        assert!(is_premium_window(make_datetime("2026-01-16", "23:59:59")));
    }

    // ==========================================================================
    // PW-004: Saturday midnight is inside
    // ==========================================================================
    #[test]
    fn test_pw_004_saturday_0000_inside() {
        assert!(is_premium_window(make_datetime("2026-01-17", "00:00:00")));
    }

    // ==========================================================================
    // PW-005: Saturday 18:59 is the last inside minute
    // ==========================================================================
    #[test]
    fn test_pw_005_saturday_1859_inside() {
        assert!(is_premium_window(make_datetime("2026-01-17", "18:59:59")));
    }

    // ==========================================================================
    // PW-006: Saturday 19:00 closes the window
    // ==========================================================================
    #[test]
    fn test_pw_006_saturday_1900_outside() {
        assert!(!is_premium_window(make_datetime("2026-01-17", "19:00:00")));
        assert!(!is_premium_window(make_datetime("2026-01-17", "23:00:00")));
    }

    #[test]
    fn test_other_weekdays_never_inside() {
        // 2026-01-18 Sunday through 2026-01-22 Thursday
        for day in ["2026-01-18", "2026-01-19", "2026-01-20", "2026-01-21", "2026-01-22"] {
            for time in ["00:00:00", "12:00:00", "17:00:00", "18:30:00", "23:59:59"] {
                assert!(
                    !is_premium_window(make_datetime(day, time)),
                    "{} {} should be outside the premium window",
                    day,
                    time
                );
            }
        }
    }

    #[test]
    fn test_friday_morning_outside() {
        assert!(!is_premium_window(make_datetime("2026-01-16", "08:00:00")));
    }

    #[test]
    fn test_sabbath_multiplier_constant() {
        assert_eq!(SABBATH_MULTIPLIER, Decimal::new(15, 1));
    }

    #[test]
    fn test_pure_function_of_instant() {
        let instant = make_datetime("2026-01-16", "20:15:00");
        assert_eq!(is_premium_window(instant), is_premium_window(instant));
    }
}
