//! Golden-dataset evaluation for the careline extractor
//!
//! Compares extractor output against hand-labeled fixtures, producing a
//! weighted composite score, letter grade, and pass/fail verdict per case
//! and for the run as a whole.

pub mod compare;
pub mod dataset;
pub mod harness;
pub mod score;

pub use compare::{
    compare_amounts, compare_categories, compare_names, compare_urgencies,
    DEFAULT_AMOUNT_TOLERANCE,
};
pub use dataset::{load_dataset, LoadedDataset};
pub use harness::EvaluationHarness;
pub use score::{evaluate_case, FieldMatches};
