//! Configuration types for earnings reporting.
//!
//! This module contains the file structures deserialized from YAML and the
//! [`EngineConfig`] they are assembled into.

use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{CompensationProfile, WorkInterval};

/// Profiles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesConfig {
    /// Map of profile identifier to compensation terms.
    pub profiles: HashMap<Uuid, CompensationProfile>,
}

/// A single shift file from the `shifts/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// The intervals recorded in this file.
    #[serde(default)]
    pub intervals: Vec<WorkInterval>,
}

/// Complete loaded configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    profiles: HashMap<Uuid, CompensationProfile>,
    intervals: Vec<WorkInterval>,
}

impl EngineConfig {
    /// Creates a new configuration, ordering the intervals by start time.
    ///
    /// Ties are broken by end time and then profile id.
    pub fn new(
        profiles: HashMap<Uuid, CompensationProfile>,
        mut intervals: Vec<WorkInterval>,
    ) -> Self {
        intervals.sort_by_key(|interval| {
            (interval.start, interval.end, interval.compensation_profile_id)
        });
        Self {
            profiles,
            intervals,
        }
    }

    /// Returns the profile lookup table.
    pub fn profiles(&self) -> &HashMap<Uuid, CompensationProfile> {
        &self.profiles
    }

    /// Returns every loaded interval, ordered by start time.
    pub fn intervals(&self) -> &[WorkInterval] {
        &self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_profiles_config_from_yaml() {
        let yaml = r#"
profiles:
  00000000-0000-0000-0000-000000000001:
    hourly_rate: "40.00"
    overtime_threshold_hours: "7.6"
  00000000-0000-0000-0000-000000000002:
    hourly_rate: "25"
    is_eligible_for_bonus: true
    bonus_percentage: "5"
"#;
        let config: ProfilesConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.profiles.len(), 2);
        let first = &config.profiles[&Uuid::from_u128(1)];
        assert_eq!(first.hourly_rate, Decimal::new(4000, 2));
        assert_eq!(first.overtime_threshold_hours, Decimal::new(76, 1));

        let second = &config.profiles[&Uuid::from_u128(2)];
        assert!(second.is_eligible_for_bonus);
        assert_eq!(second.overtime_threshold_hours, Decimal::from(8));
    }

    #[test]
    fn test_shifts_file_defaults_to_empty() {
        let file: ShiftsFile = serde_yaml::from_str("{}").unwrap();
        assert!(file.intervals.is_empty());
    }

    #[test]
    fn test_engine_config_sorts_intervals() {
        let id = Uuid::from_u128(1);
        let later = WorkInterval::new(
            make_datetime("2026-01-13", "09:00:00"),
            make_datetime("2026-01-13", "17:00:00"),
            id,
        );
        let earlier = WorkInterval::new(
            make_datetime("2026-01-12", "09:00:00"),
            make_datetime("2026-01-12", "17:00:00"),
            id,
        );

        let config = EngineConfig::new(HashMap::new(), vec![later.clone(), earlier.clone()]);
        assert_eq!(config.intervals(), &[earlier, later]);
    }

    #[test]
    fn test_engine_config_breaks_start_ties() {
        let start = make_datetime("2026-01-12", "09:00:00");
        let long = WorkInterval::new(start, make_datetime("2026-01-12", "17:00:00"), Uuid::from_u128(1));
        let short_b = WorkInterval::new(start, make_datetime("2026-01-12", "12:00:00"), Uuid::from_u128(2));
        let short_a = WorkInterval::new(start, make_datetime("2026-01-12", "12:00:00"), Uuid::from_u128(1));

        let expected = vec![short_a.clone(), short_b.clone(), long.clone()];
        let forward = EngineConfig::new(HashMap::new(), vec![long.clone(), short_b.clone(), short_a.clone()]);
        let backward = EngineConfig::new(HashMap::new(), vec![short_a, long, short_b]);

        assert_eq!(forward.intervals(), expected.as_slice());
        assert_eq!(backward.intervals(), expected.as_slice());
    }
}
