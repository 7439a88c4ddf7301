//! Compensation profile model.
//!
//! A [`CompensationProfile`] is the read-only pay snapshot a caller supplies
//! for each computation: the hourly rate plus the optional overtime, bonus
//! and travel terms that apply to every interval referencing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of non-premium hours after which overtime starts.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

fn default_overtime_threshold() -> Decimal {
    DEFAULT_OVERTIME_THRESHOLD_HOURS
}

/// The pay terms for a job or employer.
///
/// Only `hourly_rate` is required when deserializing; every other field
/// falls back to its documented default when absent.
///
/// # Example
///
/// ```
/// use earnings_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile: CompensationProfile = serde_json::from_str(r#"{"hourly_rate": "40.00"}"#).unwrap();
/// assert_eq!(profile.hourly_rate, Decimal::new(4000, 2));
/// assert_eq!(profile.overtime_threshold_hours, Decimal::from(8));
/// assert!(!profile.is_eligible_for_bonus);
/// assert_eq!(profile.bonus_percentage, Decimal::ZERO);
/// assert_eq!(profile.travel_rate_per_shift, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Base pay per hour.
    pub hourly_rate: Decimal,
    /// Non-premium hours per interval paid at the regular rate.
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold_hours: Decimal,
    /// Whether sales made during an interval earn a bonus.
    #[serde(default)]
    pub is_eligible_for_bonus: bool,
    /// Share of sales paid as bonus, in percent (0-100).
    #[serde(default)]
    pub bonus_percentage: Decimal,
    /// Flat amount paid once per interval for travel.
    #[serde(default)]
    pub travel_rate_per_shift: Decimal,
}

impl CompensationProfile {
    /// Creates a profile with the given hourly rate and default terms.
    pub fn with_hourly_rate(hourly_rate: Decimal) -> Self {
        Self {
            hourly_rate,
            ..Self::default()
        }
    }
}

impl Default for CompensationProfile {
    fn default() -> Self {
        Self {
            hourly_rate: Decimal::ZERO,
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            is_eligible_for_bonus: false,
            bonus_percentage: Decimal::ZERO,
            travel_rate_per_shift: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CP-001: only the hourly rate is required
    #[test]
    fn test_deserialize_minimal_profile_uses_defaults() {
        let json = r#"{ "hourly_rate": "35.50" }"#;

        let profile: CompensationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.hourly_rate, dec("35.50"));
        assert_eq!(profile.overtime_threshold_hours, dec("8"));
        assert!(!profile.is_eligible_for_bonus);
        assert_eq!(profile.bonus_percentage, Decimal::ZERO);
        assert_eq!(profile.travel_rate_per_shift, Decimal::ZERO);
    }

    /// CP-002: every field supplied
    #[test]
    fn test_deserialize_full_profile() {
        let json = r#"{
            "hourly_rate": "42.00",
            "overtime_threshold_hours": "9",
            "is_eligible_for_bonus": true,
            "bonus_percentage": "12.5",
            "travel_rate_per_shift": "22.60"
        }"#;

        let profile: CompensationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.overtime_threshold_hours, dec("9"));
        assert!(profile.is_eligible_for_bonus);
        assert_eq!(profile.bonus_percentage, dec("12.5"));
        assert_eq!(profile.travel_rate_per_shift, dec("22.60"));
    }

    /// CP-003: missing hourly rate is rejected
    #[test]
    fn test_deserialize_without_hourly_rate_fails() {
        let json = r#"{ "overtime_threshold_hours": "8" }"#;
        let result: Result<CompensationProfile, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_hourly_rate_keeps_defaults() {
        let profile = CompensationProfile::with_hourly_rate(dec("50"));
        assert_eq!(profile.hourly_rate, dec("50"));
        assert_eq!(
            profile.overtime_threshold_hours,
            DEFAULT_OVERTIME_THRESHOLD_HOURS
        );
        assert!(!profile.is_eligible_for_bonus);
    }

    #[test]
    fn test_default_threshold_constant() {
        assert_eq!(DEFAULT_OVERTIME_THRESHOLD_HOURS, dec("8"));
    }

    #[test]
    fn test_serialize_profile_decimals_as_strings() {
        let profile = CompensationProfile::with_hourly_rate(dec("28.54"));
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"hourly_rate\":\"28.54\""));
        assert!(json.contains("\"is_eligible_for_bonus\":false"));
    }
}
