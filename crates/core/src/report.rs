//! Scoring and evaluation report types
//!
//! A [`WeightedResult`] grades one fixture; an [`EvaluationReport`] aggregates
//! a whole harness run. Total scores are the sum of weighted field
//! contributions and always lie in [0, 1].

use crate::fixture::Difficulty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum weighted score for a fixture (and for the aggregate run) to pass
pub const PASS_THRESHOLD: f64 = 0.85;

/// Fields that contribute to the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoredField {
    Category,
    Amount,
    Name,
    Urgency,
    /// Constant baseline awarded unconditionally
    Completeness,
}

/// One field's contribution to a composite score.
/// `score` is normalized to 0 or 1; the weighted contribution is
/// `score * weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldScore {
    pub field: ScoredField,
    pub score: f64,
    pub weight: f64,
}

impl FieldScore {
    pub fn contribution(&self) -> f64 {
        self.score * self.weight
    }
}

/// Letter grade mapped from a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// Ten-bucket ladder from A+ down to D, else F
    pub fn from_score(score: f64) -> Self {
        if score >= 0.97 {
            LetterGrade::APlus
        } else if score >= 0.93 {
            LetterGrade::A
        } else if score >= 0.90 {
            LetterGrade::AMinus
        } else if score >= 0.87 {
            LetterGrade::BPlus
        } else if score >= 0.83 {
            LetterGrade::B
        } else if score >= 0.80 {
            LetterGrade::BMinus
        } else if score >= 0.77 {
            LetterGrade::CPlus
        } else if score >= 0.73 {
            LetterGrade::C
        } else if score >= 0.70 {
            LetterGrade::CMinus
        } else if score >= 0.65 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graded outcome for one fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedResult {
    pub total_score: f64,
    pub passed: bool,
    pub grade: LetterGrade,
    pub field_scores: Vec<FieldScore>,
}

impl WeightedResult {
    /// The zero-score result recorded when extraction itself fails
    pub fn hard_failure() -> Self {
        Self {
            total_score: 0.0,
            passed: false,
            grade: LetterGrade::F,
            field_scores: Vec::new(),
        }
    }
}

/// Per-case line item in the aggregate report, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    pub id: String,
    pub difficulty: Difficulty,
    pub result: WeightedResult,
    /// True when extraction raised an unexpected error and the case was
    /// downgraded to a zero score
    #[serde(default)]
    pub hard_failure: bool,
}

/// Per-field match counts across the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldAccuracy {
    pub name: usize,
    pub category: usize,
    pub urgency: usize,
    pub amount: usize,
}

/// Aggregate of one harness run over the golden dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub total_cases: usize,
    pub passed_cases: usize,
    /// Malformed dataset lines skipped during loading
    pub skipped_lines: usize,
    pub pass_rate: f64,
    /// Mean of all per-case total scores
    pub weighted_score: f64,
    pub grade: LetterGrade,
    pub field_accuracy: FieldAccuracy,
    pub duration_ms: u64,
    pub outcomes: Vec<CaseOutcome>,
}

impl EvaluationReport {
    /// Run verdict: pass only with at least one fixture and an aggregate
    /// score at or above the threshold
    pub fn passed(&self) -> bool {
        self.total_cases > 0 && self.weighted_score >= PASS_THRESHOLD
    }
}
