//! Audit trail records.
//!
//! Every pricing decision made by [`calculate_shift`](crate::calculation::calculate_shift)
//! is recorded as an [`AuditStep`] so a breakdown can be explained line by line.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use earnings_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "regular_slice".to_string(),
///     rule_name: "Regular Hours".to_string(),
///     input: serde_json::json!({"hours": "1"}),
///     output: serde_json::json!({"amount": "40"}),
///     reasoning: "1 hours × $40 × 1 = $40".to_string(),
/// };
/// assert_eq!(step.rule_id, "regular_slice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "sabbath_slice".to_string(),
            rule_name: "Sabbath Premium".to_string(),
            input: serde_json::json!({"hours": "1"}),
            output: serde_json::json!({"amount": "60"}),
            reasoning: "Friday 18:00 falls inside the premium window".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"sabbath_slice\""));
        assert!(json.contains("\"rule_name\":\"Sabbath Premium\""));
    }

    #[test]
    fn test_audit_step_deserialization() {
        let json = r#"{
            "step_number": 4,
            "rule_id": "travel_pay",
            "rule_name": "Travel Pay",
            "input": {},
            "output": {"amount": "20"},
            "reasoning": "Flat travel rate per shift"
        }"#;

        let step: AuditStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.step_number, 4);
        assert_eq!(step.output["amount"], "20");
    }
}
