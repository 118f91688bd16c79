//! Urgency extraction
//!
//! Three ordered keyword tiers; the first tier with any hit decides.
//! No hit at all means `Medium`.

use careline_core::{Candidate, FieldTrace, UrgencyLevel};

use crate::patterns::{CRITICAL_KEYWORDS, HIGH_KEYWORDS, LOW_KEYWORDS};

const TIERS: [(UrgencyLevel, &[&str]); 3] = [
    (UrgencyLevel::Critical, &CRITICAL_KEYWORDS),
    (UrgencyLevel::High, &HIGH_KEYWORDS),
    (UrgencyLevel::Low, &LOW_KEYWORDS),
];

pub fn extract_urgency(lower: &str) -> (UrgencyLevel, f32, FieldTrace) {
    let mut candidates = Vec::new();

    for (level, keywords) in TIERS {
        let hits: Vec<Candidate> = keywords
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| Candidate::new(level.as_str(), *k, "keyword_tier"))
            .collect();

        if !hits.is_empty() {
            candidates.extend(hits.clone());
            let trace = FieldTrace::resolved(
                candidates,
                hits,
                format!("first matching tier ({})", level),
            );
            return (level, 0.9, trace);
        }
    }

    let trace = FieldTrace::resolved(Vec::new(), Vec::new(), "no keyword fired; default MEDIUM");
    (UrgencyLevel::Medium, 0.5, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(transcript: &str) -> UrgencyLevel {
        extract_urgency(&transcript.to_lowercase()).0
    }

    #[test]
    fn test_critical_tier_wins() {
        assert_eq!(extract("this is life or death, please help"), UrgencyLevel::Critical);
        assert_eq!(extract("I need it immediately, it's urgent"), UrgencyLevel::Critical);
    }

    #[test]
    fn test_high_tier() {
        assert_eq!(extract("this is urgent, I'm facing eviction"), UrgencyLevel::High);
        assert_eq!(extract("I need help asap"), UrgencyLevel::High);
    }

    #[test]
    fn test_low_tier() {
        assert_eq!(extract("no rush, whenever you can"), UrgencyLevel::Low);
    }

    #[test]
    fn test_default_medium() {
        assert_eq!(extract("I could use some help with bills"), UrgencyLevel::Medium);
        assert_eq!(extract(""), UrgencyLevel::Medium);
    }
}
