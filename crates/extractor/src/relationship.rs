//! Beneficiary relationship extraction
//!
//! "for my daughter", "helping my neighbor" style phrases. Defaults to
//! "myself" when no relation phrase appears.

use crate::patterns::RELATIONS;

const RELATION_LEADS: [&str; 4] = ["for my ", "help my ", "helping my ", "to my "];

pub fn extract_relationship(lower: &str) -> String {
    for lead in RELATION_LEADS {
        let mut search_from = 0;
        while let Some(pos) = lower[search_from..].find(lead) {
            let tail = &lower[search_from + pos + lead.len()..];
            if let Some(relation) = RELATIONS.iter().find(|r| tail.starts_with(*r)) {
                return (*relation).to_string();
            }
            search_from += pos + lead.len();
        }
    }
    "myself".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_phrases() {
        assert_eq!(extract_relationship("I need money for my daughter's surgery"), "daughter");
        assert_eq!(extract_relationship("helping my neighbor with rent"), "neighbor");
        assert_eq!(extract_relationship("it goes to my grandmother"), "grandmother");
    }

    #[test]
    fn test_default_is_myself() {
        assert_eq!(extract_relationship("I need help with rent"), "myself");
        assert_eq!(extract_relationship(""), "myself");
    }

    #[test]
    fn test_skips_non_relation_noun() {
        // "for my rent" is not a relation; keep scanning, then default
        assert_eq!(extract_relationship("I'm asking for my rent payment"), "myself");
    }
}
