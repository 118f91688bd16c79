//! Shared types for the careline intake extraction engine
//!
//! This crate provides the foundational types used across all other crates:
//! - Assistance category and urgency enums (closed sets with wire labels)
//! - Extraction result, confidence record, and candidate trace types
//! - Golden dataset fixture types
//! - Score and evaluation report types
//! - Error types

pub mod category;
pub mod error;
pub mod extraction;
pub mod fixture;
pub mod report;
pub mod urgency;

pub use category::AssistanceCategory;
pub use error::{Error, Result};
pub use extraction::{
    Candidate, ConfidenceRecord, ExtractionOutcome, ExtractionResult, FieldTrace, Trace,
};
pub use fixture::{Difficulty, ExpectedRecord, Strictness, TestCase};
pub use report::{
    CaseOutcome, EvaluationReport, FieldAccuracy, FieldScore, LetterGrade, ScoredField,
    WeightedResult, PASS_THRESHOLD,
};
pub use urgency::UrgencyLevel;
