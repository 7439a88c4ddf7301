//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading compensation
//! profiles and recorded shifts from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;
use uuid::Uuid;

use crate::calculation::{EarningsSummary, aggregate, aggregate_period};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationProfile, PayPeriod, WorkInterval};

use super::types::{EngineConfig, ProfilesConfig, ShiftsFile};

/// Loads and provides access to profiles and recorded shifts.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/sample/
/// ├── profiles.yaml        # Compensation profiles keyed by id
/// └── shifts/              # Optional
///     └── 2026-01.yaml     # Recorded intervals, any file name
/// ```
///
/// # Example
///
/// ```no_run
/// use earnings_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
///
/// let summary = loader.summarize();
/// println!("Earned ${} over {} days", summary.total_earnings, summary.distinct_days_worked);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sample")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `profiles.yaml` is missing
    /// - Any file contains invalid YAML or fields of the wrong shape
    ///
    /// A missing `shifts/` directory is not an error; no intervals are loaded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use earnings_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/sample")?;
    /// # Ok::<(), earnings_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let profiles_path = path.join("profiles.yaml");
        let profiles = Self::load_yaml::<ProfilesConfig>(&profiles_path)?.profiles;

        let shifts_dir = path.join("shifts");
        let intervals = Self::load_shifts(&shifts_dir)?;

        info!(
            path = %path.display(),
            profiles = profiles.len(),
            intervals = intervals.len(),
            "Loaded earnings configuration"
        );

        Ok(Self {
            config: EngineConfig::new(profiles, intervals),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every interval from the `.yaml` files in the shifts directory.
    fn load_shifts(shifts_dir: &Path) -> EngineResult<Vec<WorkInterval>> {
        if !shifts_dir.exists() {
            return Ok(Vec::new());
        }

        let shifts_dir_str = shifts_dir.display().to_string();

        let entries = fs::read_dir(shifts_dir).map_err(|_| EngineError::ConfigNotFound {
            path: shifts_dir_str.clone(),
        })?;

        let mut paths = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: shifts_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }

        // read_dir order is platform dependent
        paths.sort();

        let mut intervals = Vec::new();
        for path in paths {
            let file = Self::load_yaml::<ShiftsFile>(&path)?;
            intervals.extend(file.intervals);
        }

        Ok(intervals)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the profile lookup table, ready to pass to [`aggregate`].
    pub fn profiles(&self) -> &HashMap<Uuid, CompensationProfile> {
        self.config.profiles()
    }

    /// Returns the loaded intervals ordered by start time.
    pub fn intervals(&self) -> &[WorkInterval] {
        self.config.intervals()
    }

    /// Gets a profile by its identifier.
    ///
    /// The calculation functions treat a missing profile as zero earnings.
    /// Use this lookup when a missing profile should be an error instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use earnings_engine::config::ConfigLoader;
    /// use uuid::Uuid;
    ///
    /// let loader = ConfigLoader::load("./config/sample")?;
    /// let id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
    /// let profile = loader.get_profile(id)?;
    /// println!("Hourly rate: ${}", profile.hourly_rate);
    /// # Ok::<(), earnings_engine::error::EngineError>(())
    /// ```
    pub fn get_profile(&self, id: Uuid) -> EngineResult<&CompensationProfile> {
        self.config
            .profiles()
            .get(&id)
            .ok_or(EngineError::ProfileNotFound { id })
    }

    /// Aggregates every loaded interval.
    pub fn summarize(&self) -> EarningsSummary {
        aggregate(self.intervals(), self.profiles())
    }

    /// Aggregates the loaded intervals whose work date lies inside `period`.
    pub fn summarize_period(&self, period: &PayPeriod) -> EarningsSummary {
        aggregate_period(self.intervals(), self.profiles(), period)
    }
}
