//! Error types for the Shift Earnings Engine.
//!
//! Only the configuration layer can fail. The calculation modules never
//! return errors for missing or malformed domain data; they degrade toward
//! zero and report what happened through [`DegradedCondition`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Shift Earnings Engine.
///
/// # Example
///
/// ```
/// use earnings_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profiles.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profiles.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A compensation profile was requested through a strict lookup and does not exist.
    #[error("Compensation profile not found: {id}")]
    ProfileNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A non-fatal condition met while pricing a collection of intervals.
///
/// Each condition carries the position of the offending interval in the
/// input slice so callers can decide whether the report is trustworthy.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegradedCondition {
    /// The interval references a profile that is not in the lookup table.
    /// It contributes nothing and its date is not counted as worked.
    #[error("interval #{index} references unknown compensation profile {profile_id}")]
    UnresolvedProfile {
        /// Index of the interval in the input.
        index: usize,
        /// The identifier that failed to resolve.
        profile_id: Uuid,
    },

    /// The interval starts at or after its end and was priced at zero.
    #[error("interval #{index} is empty or inverted")]
    InvertedOrEmptyInterval {
        /// Index of the interval in the input.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_profile_not_found_displays_id() {
        let error = EngineError::ProfileNotFound { id: Uuid::nil() };
        assert_eq!(
            error.to_string(),
            "Compensation profile not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<DegradedCondition>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }

    #[test]
    fn test_degraded_condition_display() {
        let unresolved = DegradedCondition::UnresolvedProfile {
            index: 2,
            profile_id: Uuid::from_u128(7),
        };
        assert_eq!(
            unresolved.to_string(),
            "interval #2 references unknown compensation profile 00000000-0000-0000-0000-000000000007"
        );

        let empty = DegradedCondition::InvertedOrEmptyInterval { index: 0 };
        assert_eq!(empty.to_string(), "interval #0 is empty or inverted");
    }

    #[test]
    fn test_degraded_condition_serialization() {
        let condition = DegradedCondition::InvertedOrEmptyInterval { index: 3 };
        let json = serde_json::to_string(&condition).unwrap();
        assert_eq!(json, r#"{"kind":"inverted_or_empty_interval","index":3}"#);
    }
}
