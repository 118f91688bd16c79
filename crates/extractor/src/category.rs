//! Assistance category extraction
//!
//! Keyword lists produce a set of detected categories; a transcript can
//! detect several at once. The winner comes from a fixed precedence table
//! evaluated top to bottom, first applicable row wins. The table encodes
//! two deliberate asymmetries carried over from the intake policy: LEGAL
//! needs a strong-context keyword at the top of the table, and EMERGENCY
//! yields to HOUSING when both are detected (a housing emergency is a
//! housing request). Adding a category requires adding an explicit row,
//! never inferring a position.

use careline_core::{AssistanceCategory, Candidate, FieldTrace};

use crate::patterns::{CATEGORY_KEYWORDS, SECONDARY_CATEGORY_ORDER, STRONG_LEGAL_KEYWORDS};

/// Detection state fed to the precedence rows
#[derive(Debug, Default)]
pub struct DetectedCategories {
    detected: Vec<AssistanceCategory>,
    strong_legal: bool,
}

impl DetectedCategories {
    pub fn contains(&self, category: AssistanceCategory) -> bool {
        self.detected.contains(&category)
    }

    pub fn has_strong_legal_context(&self) -> bool {
        self.strong_legal
    }
}

/// One row of the precedence table
struct PrecedenceRule {
    id: &'static str,
    outcome: AssistanceCategory,
    applies: fn(&DetectedCategories) -> bool,
}

/// The precedence table, in evaluation order. The secondary fixed order
/// (HOUSING, LEGAL, EMPLOYMENT, EDUCATION, FAMILY) is handled after these
/// rows decline.
const PRECEDENCE: [PrecedenceRule; 4] = [
    PrecedenceRule {
        id: "safety",
        outcome: AssistanceCategory::Safety,
        applies: |d| d.contains(AssistanceCategory::Safety),
    },
    PrecedenceRule {
        id: "legal_strong",
        outcome: AssistanceCategory::Legal,
        applies: |d| d.contains(AssistanceCategory::Legal) && d.has_strong_legal_context(),
    },
    PrecedenceRule {
        id: "healthcare",
        outcome: AssistanceCategory::Healthcare,
        applies: |d| d.contains(AssistanceCategory::Healthcare),
    },
    PrecedenceRule {
        id: "emergency_unless_housing",
        outcome: AssistanceCategory::Emergency,
        applies: |d| {
            d.contains(AssistanceCategory::Emergency) && !d.contains(AssistanceCategory::Housing)
        },
    },
];

/// Detect categories by keyword and resolve one winner via the precedence
/// table. Always lands in the closed category set; `Other` is the fallback.
pub fn extract_category(lower: &str) -> (AssistanceCategory, f32, FieldTrace) {
    let mut detected = DetectedCategories::default();
    let mut candidates = Vec::new();

    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords {
            if lower.contains(keyword) {
                candidates.push(
                    Candidate::new(category.as_str(), *keyword, "keyword").with_tag("detected"),
                );
                if !detected.detected.contains(&category) {
                    detected.detected.push(category);
                }
            }
        }
    }
    detected.strong_legal = STRONG_LEGAL_KEYWORDS.iter().any(|k| lower.contains(k));

    let (winner, confidence, rule_id) = resolve(&detected);
    tracing::debug!(category = %winner, rule = rule_id, "category resolved");

    let trace = FieldTrace::resolved(
        candidates.clone(),
        candidates,
        format!("precedence rule '{}'", rule_id),
    );
    (winner, confidence, trace)
}

fn resolve(detected: &DetectedCategories) -> (AssistanceCategory, f32, &'static str) {
    for rule in &PRECEDENCE {
        if (rule.applies)(detected) {
            return (rule.outcome, 0.9, rule.id);
        }
    }

    for category in SECONDARY_CATEGORY_ORDER {
        if detected.contains(category) {
            return (category, 0.75, "secondary_order");
        }
    }

    (AssistanceCategory::Other, 0.3, "fallback_other")
}
