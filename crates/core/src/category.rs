//! Assistance category taxonomy
//!
//! Categories form a closed set: every transcript resolves to exactly one of
//! these nine values, with `Other` as the terminal fallback. The legacy
//! `MEDICAL` label from older intake exports is accepted on input and folded
//! into `Healthcare`; it is never emitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of assistance being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistanceCategory {
    #[serde(rename = "SAFETY")]
    Safety,
    #[serde(rename = "EMERGENCY")]
    Emergency,
    #[serde(rename = "HEALTHCARE", alias = "MEDICAL")]
    Healthcare,
    #[serde(rename = "HOUSING")]
    Housing,
    #[serde(rename = "LEGAL")]
    Legal,
    #[serde(rename = "EMPLOYMENT")]
    Employment,
    #[serde(rename = "EDUCATION")]
    Education,
    #[serde(rename = "FAMILY")]
    Family,
    #[serde(rename = "OTHER")]
    Other,
}

impl AssistanceCategory {
    /// All categories that carry keyword lists, in detection order.
    /// `Other` is excluded: it is the fallback, not a detected category.
    pub const DETECTABLE: [AssistanceCategory; 8] = [
        AssistanceCategory::Safety,
        AssistanceCategory::Emergency,
        AssistanceCategory::Healthcare,
        AssistanceCategory::Housing,
        AssistanceCategory::Legal,
        AssistanceCategory::Employment,
        AssistanceCategory::Education,
        AssistanceCategory::Family,
    ];

    /// Canonical wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistanceCategory::Safety => "SAFETY",
            AssistanceCategory::Emergency => "EMERGENCY",
            AssistanceCategory::Healthcare => "HEALTHCARE",
            AssistanceCategory::Housing => "HOUSING",
            AssistanceCategory::Legal => "LEGAL",
            AssistanceCategory::Employment => "EMPLOYMENT",
            AssistanceCategory::Education => "EDUCATION",
            AssistanceCategory::Family => "FAMILY",
            AssistanceCategory::Other => "OTHER",
        }
    }

    /// Parse a label, folding the legacy `MEDICAL` spelling into `Healthcare`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "SAFETY" => Some(AssistanceCategory::Safety),
            "EMERGENCY" => Some(AssistanceCategory::Emergency),
            "HEALTHCARE" | "MEDICAL" => Some(AssistanceCategory::Healthcare),
            "HOUSING" => Some(AssistanceCategory::Housing),
            "LEGAL" => Some(AssistanceCategory::Legal),
            "EMPLOYMENT" => Some(AssistanceCategory::Employment),
            "EDUCATION" => Some(AssistanceCategory::Education),
            "FAMILY" => Some(AssistanceCategory::Family),
            "OTHER" => Some(AssistanceCategory::Other),
            _ => None,
        }
    }
}

impl Default for AssistanceCategory {
    fn default() -> Self {
        AssistanceCategory::Other
    }
}

impl fmt::Display for AssistanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_alias_folds_to_healthcare() {
        assert_eq!(
            AssistanceCategory::from_label("MEDICAL"),
            Some(AssistanceCategory::Healthcare)
        );
        assert_eq!(
            AssistanceCategory::from_label("medical"),
            Some(AssistanceCategory::Healthcare)
        );

        let parsed: AssistanceCategory = serde_json::from_str("\"MEDICAL\"").unwrap();
        assert_eq!(parsed, AssistanceCategory::Healthcare);
    }

    #[test]
    fn test_healthcare_never_serializes_as_medical() {
        let json = serde_json::to_string(&AssistanceCategory::Healthcare).unwrap();
        assert_eq!(json, "\"HEALTHCARE\"");
    }

    #[test]
    fn test_label_round_trip() {
        for cat in AssistanceCategory::DETECTABLE {
            assert_eq!(AssistanceCategory::from_label(cat.as_str()), Some(cat));
        }
        assert_eq!(
            AssistanceCategory::from_label("OTHER"),
            Some(AssistanceCategory::Other)
        );
        assert_eq!(AssistanceCategory::from_label("garbage"), None);
    }
}
