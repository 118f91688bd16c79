//! Field-level comparison functions
//!
//! Every comparator is total and symmetric in null handling: both sides
//! absent is a match, one side absent is not, and no input combination can
//! fail. Category and urgency compare by enum equality — the legacy MEDICAL
//! label already folded into HEALTHCARE at the deserialization boundary.

use careline_core::{AssistanceCategory, UrgencyLevel};

/// Default absolute tolerance for amount comparison
pub const DEFAULT_AMOUNT_TOLERANCE: f64 = 100.0;

/// Exact match after trimming; when fuzzy mode is enabled the relaxed form
/// (lowercased, alphabetic-only) is tried as a fallback, never as a
/// replacement for the exact pass.
pub fn compare_names(expected: Option<&str>, actual: Option<&str>, allow_fuzzy: bool) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(e), Some(a)) => {
            if e.trim() == a.trim() {
                return true;
            }
            allow_fuzzy && fold_name(e) == fold_name(a)
        }
        _ => false,
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

pub fn compare_categories(
    expected: Option<AssistanceCategory>,
    actual: Option<AssistanceCategory>,
) -> bool {
    expected == actual
}

pub fn compare_urgencies(expected: Option<UrgencyLevel>, actual: Option<UrgencyLevel>) -> bool {
    expected == actual
}

/// Both absent is a match; both present match iff the absolute difference is
/// at or below the tolerance (difference equal to the tolerance still
/// matches); mixed is never a match.
pub fn compare_amounts(expected: Option<f64>, actual: Option<f64>, tolerance: f64) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(e), Some(a)) => (e - a).abs() <= tolerance,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_exact_and_fuzzy() {
        assert!(compare_names(Some("Sarah Johnson"), Some(" Sarah Johnson "), false));
        assert!(!compare_names(Some("Sarah Johnson"), Some("sarah johnson"), false));
        assert!(compare_names(Some("Sarah Johnson"), Some("sarah johnson"), true));
        assert!(compare_names(Some("O'Brien"), Some("obrien"), true));
        assert!(!compare_names(Some("Sarah"), Some("Maria"), true));
    }

    #[test]
    fn test_name_null_symmetry() {
        assert!(compare_names(None, None, false));
        assert!(!compare_names(Some("Sarah"), None, false));
        assert!(!compare_names(None, Some("Sarah"), true));
    }

    #[test]
    fn test_amount_tolerance_boundary() {
        // difference == tolerance matches; tolerance + 1 does not
        assert!(compare_amounts(Some(5000.0), Some(5080.0), 100.0));
        assert!(compare_amounts(Some(5000.0), Some(5100.0), 100.0));
        assert!(!compare_amounts(Some(5000.0), Some(5101.0), 100.0));
    }

    #[test]
    fn test_amount_round_trip_and_nulls() {
        for x in [0.0, 1.0, 1500.0, 123456.78] {
            assert!(compare_amounts(Some(x), Some(x), 0.0));
        }
        assert!(compare_amounts(None, None, 0.0));
        assert!(!compare_amounts(Some(5000.0), None, 100.0));
        assert!(!compare_amounts(None, Some(5000.0), 100.0));
    }

    #[test]
    fn test_category_equality() {
        assert!(compare_categories(
            Some(AssistanceCategory::Healthcare),
            Some(AssistanceCategory::Healthcare)
        ));
        assert!(!compare_categories(
            Some(AssistanceCategory::Housing),
            Some(AssistanceCategory::Emergency)
        ));
        assert!(compare_categories(None, None));
    }

    #[test]
    fn test_urgency_equality() {
        assert!(compare_urgencies(Some(UrgencyLevel::High), Some(UrgencyLevel::High)));
        assert!(!compare_urgencies(Some(UrgencyLevel::High), None));
    }
}
