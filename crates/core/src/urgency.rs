//! Urgency levels for assistance requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently the caller needs help. Defaults to `Medium` when no
/// urgency keyword fires in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::Low => "LOW",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "CRITICAL" => Some(UrgencyLevel::Critical),
            "HIGH" => Some(UrgencyLevel::High),
            "MEDIUM" => Some(UrgencyLevel::Medium),
            "LOW" => Some(UrgencyLevel::Low),
            _ => None,
        }
    }
}

impl Default for UrgencyLevel {
    fn default() -> Self {
        UrgencyLevel::Medium
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(UrgencyLevel::default(), UrgencyLevel::Medium);
    }

    #[test]
    fn test_label_round_trip() {
        for level in [
            UrgencyLevel::Critical,
            UrgencyLevel::High,
            UrgencyLevel::Medium,
            UrgencyLevel::Low,
        ] {
            assert_eq!(UrgencyLevel::from_label(level.as_str()), Some(level));
        }
    }
}
