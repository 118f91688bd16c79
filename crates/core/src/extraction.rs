//! Extraction output types
//!
//! One extraction call over a transcript produces an [`ExtractionOutcome`]:
//! the structured fields, a per-field confidence record, and a trace of every
//! candidate considered so disambiguation decisions can be audited after the
//! fact. All three are immutable once built.

use crate::{AssistanceCategory, UrgencyLevel};
use serde::{Deserialize, Serialize};

/// Structured fields derived from one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Requester name, `None` when no introduction pattern survived cleanup
    pub name: Option<String>,
    /// Always a member of the closed category set; `Other` is the fallback
    pub category: AssistanceCategory,
    #[serde(rename = "urgencyLevel")]
    pub urgency: UrgencyLevel,
    /// Non-negative finite amount in dollars, `None` when no candidate
    /// survived the exclusion filter
    pub goal_amount: Option<f64>,
    /// Who the request is for; "myself" unless a relation phrase matched
    pub beneficiary_relationship: String,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            name: None,
            category: AssistanceCategory::Other,
            urgency: UrgencyLevel::Medium,
            goal_amount: None,
            beneficiary_relationship: "myself".to_string(),
        }
    }
}

/// Per-field confidence in [0, 1], plus an overall aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceRecord {
    pub name: f32,
    pub category: f32,
    pub urgency: f32,
    pub amount: f32,
    pub overall: f32,
}

impl ConfidenceRecord {
    /// Build a record with `overall` set to the mean of the four fields
    pub fn new(name: f32, category: f32, urgency: f32, amount: f32) -> Self {
        Self {
            name,
            category,
            urgency,
            amount,
            overall: (name + category + urgency + amount) / 4.0,
        }
    }
}

/// A provisional extracted value, prior to disambiguation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate value rendered as text (amounts keep their numeric form)
    pub value: String,
    /// The transcript span the originating rule matched
    pub matched_text: String,
    /// Identifier of the rule that produced this candidate
    pub rule: String,
    /// Coarse classification assigned during extraction (amount kind, tier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Candidate {
    pub fn new(value: impl Into<String>, matched_text: impl Into<String>, rule: &str) -> Self {
        Self {
            value: value.into(),
            matched_text: matched_text.into(),
            rule: rule.to_string(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Trace of one field's extraction: everything found, what survived
/// filtering, and a short note describing how the winner was picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldTrace {
    pub candidates: Vec<Candidate>,
    pub filtered: Vec<Candidate>,
    pub resolution: String,
}

impl FieldTrace {
    pub fn resolved(
        candidates: Vec<Candidate>,
        filtered: Vec<Candidate>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            candidates,
            filtered,
            resolution: resolution.into(),
        }
    }
}

/// Full extraction trace, one section per field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    pub name: FieldTrace,
    pub amount: FieldTrace,
    pub category: FieldTrace,
    pub urgency: FieldTrace,
}

/// The complete output boundary for a single extraction call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutcome {
    pub results: ExtractionResult,
    pub confidence: ConfidenceRecord,
    pub trace: Trace,
}
