//! Golden dataset fixture types
//!
//! Fixtures arrive as newline-delimited JSON records. The `expected` record
//! is partial: an absent field means the extractor is expected to produce
//! nothing for it, and is compared with the same symmetric null rules as any
//! other value.

use crate::{AssistanceCategory, UrgencyLevel};
use serde::{Deserialize, Serialize};

/// Hand-labeled difficulty of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Expected structured output for one fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<AssistanceCategory>,
    #[serde(default, rename = "urgencyLevel")]
    pub urgency: Option<UrgencyLevel>,
    #[serde(default)]
    pub goal_amount: Option<f64>,
}

/// Per-fixture comparison strictness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strictness {
    /// Absolute tolerance for amount comparison; difference equal to the
    /// tolerance still counts as a match
    #[serde(default = "default_amount_tolerance")]
    pub amount_tolerance: f64,
    /// Allow the relaxed name comparison (lowercased, alphabetic-only) as a
    /// fallback after exact match fails
    #[serde(default)]
    pub allow_fuzzy_name: bool,
}

fn default_amount_tolerance() -> f64 {
    100.0
}

impl Default for Strictness {
    fn default() -> Self {
        Self {
            amount_tolerance: default_amount_tolerance(),
            allow_fuzzy_name: false,
        }
    }
}

/// One golden dataset entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub transcript_text: String,
    #[serde(default)]
    pub expected: ExpectedRecord,
    #[serde(default)]
    pub strictness: Strictness,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_fixture_parses_with_defaults() {
        let line = r#"{"id":"t1","transcriptText":"hello"}"#;
        let case: TestCase = serde_json::from_str(line).unwrap();
        assert_eq!(case.id, "t1");
        assert_eq!(case.difficulty, Difficulty::Medium);
        assert_eq!(case.strictness.amount_tolerance, 100.0);
        assert!(!case.strictness.allow_fuzzy_name);
        assert_eq!(case.expected, ExpectedRecord::default());
    }

    #[test]
    fn test_full_fixture_parses() {
        let line = r#"{
            "id": "t2",
            "description": "rent request",
            "difficulty": "easy",
            "transcriptText": "I need $1500 for rent",
            "expected": {"category": "HOUSING", "goalAmount": 1500, "urgencyLevel": "MEDIUM"},
            "strictness": {"amountTolerance": 50, "allowFuzzyName": true}
        }"#;
        let case: TestCase = serde_json::from_str(line).unwrap();
        assert_eq!(case.expected.category, Some(AssistanceCategory::Housing));
        assert_eq!(case.expected.goal_amount, Some(1500.0));
        assert_eq!(case.strictness.amount_tolerance, 50.0);
        assert!(case.strictness.allow_fuzzy_name);
    }

    #[test]
    fn test_legacy_medical_expectation_folds() {
        let line = r#"{"id":"t3","transcriptText":"x","expected":{"category":"MEDICAL"}}"#;
        let case: TestCase = serde_json::from_str(line).unwrap();
        assert_eq!(case.expected.category, Some(AssistanceCategory::Healthcare));
    }
}
