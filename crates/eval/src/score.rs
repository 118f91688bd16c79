//! Weighted composite scoring
//!
//! Fixed field weights sum to 1.0 with a constant completeness baseline
//! awarded unconditionally; a case passes at 0.85. Per-field sub-scores are
//! normalized (0 or 1) for diagnostic display, so the weighted contribution
//! of a field is `score * weight`.

use careline_core::{
    ExtractionResult, FieldScore, LetterGrade, ScoredField, TestCase, WeightedResult,
    PASS_THRESHOLD,
};

use crate::compare::{compare_amounts, compare_categories, compare_names, compare_urgencies};

pub const WEIGHT_CATEGORY: f64 = 0.25;
pub const WEIGHT_AMOUNT: f64 = 0.25;
pub const WEIGHT_NAME: f64 = 0.20;
pub const WEIGHT_URGENCY: f64 = 0.20;
pub const WEIGHT_COMPLETENESS: f64 = 0.10;

/// Per-field boolean matches, kept for run-level accuracy aggregation
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMatches {
    pub name: bool,
    pub category: bool,
    pub urgency: bool,
    pub amount: bool,
}

/// Grade one extraction against its fixture's expected record
pub fn evaluate_case(case: &TestCase, result: &ExtractionResult) -> (WeightedResult, FieldMatches) {
    let matches = FieldMatches {
        name: compare_names(
            case.expected.name.as_deref(),
            result.name.as_deref(),
            case.strictness.allow_fuzzy_name,
        ),
        category: compare_categories(case.expected.category, Some(result.category)),
        urgency: compare_urgencies(case.expected.urgency, Some(result.urgency)),
        amount: compare_amounts(
            case.expected.goal_amount,
            result.goal_amount,
            case.strictness.amount_tolerance,
        ),
    };

    let field_scores = vec![
        field_score(ScoredField::Category, matches.category, WEIGHT_CATEGORY),
        field_score(ScoredField::Amount, matches.amount, WEIGHT_AMOUNT),
        field_score(ScoredField::Name, matches.name, WEIGHT_NAME),
        field_score(ScoredField::Urgency, matches.urgency, WEIGHT_URGENCY),
        // Completeness baseline: awarded unconditionally
        field_score(ScoredField::Completeness, true, WEIGHT_COMPLETENESS),
    ];

    let total_score: f64 = field_scores.iter().map(FieldScore::contribution).sum();

    let result = WeightedResult {
        total_score,
        passed: total_score >= PASS_THRESHOLD,
        grade: LetterGrade::from_score(total_score),
        field_scores,
    };
    (result, matches)
}

fn field_score(field: ScoredField, matched: bool, weight: f64) -> FieldScore {
    FieldScore {
        field,
        score: if matched { 1.0 } else { 0.0 },
        weight,
    }
}
