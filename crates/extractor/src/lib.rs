//! Rule-based field extraction from intake call transcripts
//!
//! The [`TranscriptExtractor`] applies the pattern library to one transcript
//! and produces a structured result, a per-field confidence record, and a
//! trace of every candidate considered. Extraction is a pure function over
//! the input string: no I/O, no shared mutable state, and no panics on
//! malformed input — a field with no surviving match comes back as
//! `None`/default rather than an error.

pub mod amount;
pub mod category;
pub mod name;
pub mod normalize;
pub mod patterns;
pub mod relationship;
pub mod urgency;

use careline_core::{ConfidenceRecord, ExtractionOutcome, ExtractionResult, Trace};

use crate::amount::{build_amount_rules, extract_amount, AmountRule};
use crate::category::extract_category;
use crate::name::{build_name_rules, extract_name, NameRule};
use crate::relationship::extract_relationship;
use crate::urgency::extract_urgency;

/// Transcript extractor with pre-compiled pattern rules
pub struct TranscriptExtractor {
    name_rules: Vec<NameRule>,
    amount_rules: Vec<AmountRule>,
}

impl TranscriptExtractor {
    /// Create a new extractor. Pattern compilation happens once here; the
    /// resulting rule tables are read-only for the extractor's lifetime.
    pub fn new() -> Self {
        Self {
            name_rules: build_name_rules(),
            amount_rules: build_amount_rules(),
        }
    }

    /// Extract all fields from one transcript
    pub fn extract(&self, transcript: &str) -> ExtractionOutcome {
        let lower = transcript.to_lowercase();

        let (name, name_confidence, name_trace) = extract_name(&self.name_rules, transcript);
        let (goal_amount, amount_confidence, amount_trace) =
            extract_amount(&self.amount_rules, transcript);
        let (category, category_confidence, category_trace) = extract_category(&lower);
        let (urgency, urgency_confidence, urgency_trace) = extract_urgency(&lower);
        let beneficiary_relationship = extract_relationship(&lower);

        ExtractionOutcome {
            results: ExtractionResult {
                name,
                category,
                urgency,
                goal_amount,
                beneficiary_relationship,
            },
            confidence: ConfidenceRecord::new(
                name_confidence,
                category_confidence,
                urgency_confidence,
                amount_confidence,
            ),
            trace: Trace {
                name: name_trace,
                amount: amount_trace,
                category: category_trace,
                urgency: urgency_trace,
            },
        }
    }
}

impl Default for TranscriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careline_core::{AssistanceCategory, UrgencyLevel};

    #[test]
    fn test_rent_eviction_scenario() {
        let extractor = TranscriptExtractor::new();
        let outcome = extractor.extract(
            "Hi, my name is Dr. Sarah Johnson calling about rent, \
             I need $1500 to avoid eviction, this is urgent",
        );

        assert_eq!(outcome.results.name.as_deref(), Some("Sarah Johnson"));
        assert_eq!(outcome.results.category, AssistanceCategory::Housing);
        assert_eq!(outcome.results.urgency, UrgencyLevel::High);
        assert_eq!(outcome.results.goal_amount, Some(1500.0));
    }

    #[test]
    fn test_legal_fees_scenario() {
        let extractor = TranscriptExtractor::new();
        let outcome = extractor.extract(
            "I make $15/hour right now, and I need $3000 for legal fees and the custody battle",
        );

        assert_eq!(outcome.results.goal_amount, Some(3000.0));
        assert_eq!(outcome.results.category, AssistanceCategory::Legal);
    }

    #[test]
    fn test_empty_transcript_defaults() {
        let extractor = TranscriptExtractor::new();
        let outcome = extractor.extract("");

        assert_eq!(outcome.results.name, None);
        assert_eq!(outcome.results.category, AssistanceCategory::Other);
        assert_eq!(outcome.results.urgency, UrgencyLevel::Medium);
        assert_eq!(outcome.results.goal_amount, None);
        assert_eq!(outcome.results.beneficiary_relationship, "myself");
    }

    #[test]
    fn test_confidence_in_unit_range() {
        let extractor = TranscriptExtractor::new();
        for transcript in [
            "",
            "my name is Liz, I need two thousand for my daughter's surgery right now",
            "no rush, maybe $200 for textbooks someday",
        ] {
            let confidence = extractor.extract(transcript).confidence;
            for value in [
                confidence.name,
                confidence.category,
                confidence.urgency,
                confidence.amount,
                confidence.overall,
            ] {
                assert!((0.0..=1.0).contains(&value), "confidence out of range: {}", value);
            }
        }
    }

    #[test]
    fn test_outcome_serializes_with_trace() {
        let extractor = TranscriptExtractor::new();
        let outcome = extractor.extract("this is Maria, I need $800 for rent");
        let json = serde_json::to_value(&outcome).unwrap();

        assert!(json.get("results").is_some());
        assert!(json.get("confidence").is_some());
        assert!(json["trace"]["amount"]["candidates"].is_array());
    }
}
