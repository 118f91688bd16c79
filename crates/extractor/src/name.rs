//! Name extraction
//!
//! An ordered cascade of introduction patterns, most to least specific. The
//! first rule whose match survives the cleanup pass wins and later rules are
//! never consulted. Cleanup strips honorifics and trailing clauses and
//! rejects degenerate captures; an accepted name then has its first token
//! run through the nickname table.

use careline_core::{Candidate, FieldTrace};
use regex::Regex;

use crate::normalize::expand_nickname;
use crate::patterns::{
    NAME_CLAUSE_WORDS, NAME_RULES, NAME_SEQUENCE, NAME_STOP_WORDS, NAME_TITLES,
};

/// One compiled introduction rule
pub struct NameRule {
    pub id: &'static str,
    pub pattern: Regex,
    pub confidence: f32,
}

/// Compile the ordered rule cascade. Pattern literals are fixed, so
/// compilation cannot fail at runtime.
pub fn build_name_rules() -> Vec<NameRule> {
    NAME_RULES
        .iter()
        .map(|(id, affix, confidence)| {
            // "announcing" anchors the keyword after the capture
            // ("Sarah here"), every other rule before it ("my name is Sarah")
            let pattern = if *id == "announcing" {
                format!("{}{}", NAME_SEQUENCE, affix)
            } else {
                format!("{}{}", affix, NAME_SEQUENCE)
            };
            NameRule {
                id,
                pattern: Regex::new(&pattern).unwrap(),
                confidence: *confidence,
            }
        })
        .collect()
}

/// Run the cascade over a transcript.
/// Returns the accepted name with the winning rule's confidence, plus the
/// trace of every match considered.
pub fn extract_name(rules: &[NameRule], transcript: &str) -> (Option<String>, f32, FieldTrace) {
    let mut candidates = Vec::new();

    for rule in rules {
        let Some(caps) = rule.pattern.captures(transcript) else {
            continue;
        };
        let Some(raw) = caps.get(1) else {
            continue;
        };

        let candidate = Candidate::new(raw.as_str().trim(), raw.as_str(), rule.id);

        match cleanup_name(raw.as_str()) {
            Some(name) => {
                let expanded = expand_nickname(&name);
                tracing::debug!(rule = rule.id, name = %expanded, "name rule accepted");
                let accepted =
                    Candidate::new(expanded.clone(), raw.as_str(), rule.id).with_tag("accepted");
                candidates.push(candidate);
                let trace = FieldTrace::resolved(
                    candidates,
                    vec![accepted],
                    format!("first surviving match from rule '{}'", rule.id),
                );
                return (Some(expanded), rule.confidence, trace);
            }
            None => {
                // Rejected by cleanup: keep it in the trace, consult the
                // next rule in order
                candidates.push(candidate.with_tag("rejected"));
            }
        }
    }

    let trace = FieldTrace::resolved(candidates, Vec::new(), "no pattern survived cleanup");
    (None, 0.0, trace)
}

/// Cleanup and validation pass over a raw capture.
///
/// Strips leading titles, cuts the capture at the first clause word
/// ("calling", "from", ...), then rejects captures that are too short, too
/// long, non-alphabetic, or a lone stop word.
fn cleanup_name(raw: &str) -> Option<String> {
    let mut tokens: Vec<String> = raw
        .split_whitespace()
        .map(|t| t.trim_end_matches('.').to_string())
        .collect();

    while let Some(first) = tokens.first() {
        if NAME_TITLES.contains(&first.to_lowercase().as_str()) {
            tokens.remove(0);
        } else {
            break;
        }
    }

    if let Some(cut) = tokens
        .iter()
        .position(|t| NAME_CLAUSE_WORDS.contains(&t.to_lowercase().as_str()))
    {
        tokens.truncate(cut);
    }

    if tokens.is_empty() || tokens.len() > 4 {
        return None;
    }

    let valid_token = |t: &str| {
        !t.is_empty() && t.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-')
    };
    if !tokens.iter().all(|t| valid_token(t)) {
        return None;
    }

    if tokens.len() == 1 && NAME_STOP_WORDS.contains(&tokens[0].to_lowercase().as_str()) {
        return None;
    }

    let name = tokens.join(" ");
    if name.len() < 2 || name.len() > 40 {
        return None;
    }

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(transcript: &str) -> Option<String> {
        let rules = build_name_rules();
        extract_name(&rules, transcript).0
    }

    #[test]
    fn test_self_introduction_with_title_and_trailing_clause() {
        assert_eq!(
            extract("Hi, my name is Dr. Sarah Johnson calling about rent"),
            Some("Sarah Johnson".to_string())
        );
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // Both "my name is" and "this is" could fire; the cascade stops at
        // the more specific rule
        assert_eq!(
            extract("My name is Maria Lopez, this is Ana speaking"),
            Some("Maria Lopez".to_string())
        );
    }

    #[test]
    fn test_this_is_rule() {
        assert_eq!(extract("Hello, this is James Carter"), Some("James Carter".to_string()));
    }

    #[test]
    fn test_announcing_rule() {
        assert_eq!(extract("Rosa here, I need some help"), Some("Rosa".to_string()));
    }

    #[test]
    fn test_nickname_expansion_on_first_token() {
        assert_eq!(
            extract("my name is Liz Parker"),
            Some("Elizabeth Parker".to_string())
        );
    }

    #[test]
    fn test_from_clause_is_stripped() {
        assert_eq!(
            extract("This is Daniel Reyes from Springfield"),
            Some("Daniel Reyes".to_string())
        );
    }

    #[test]
    fn test_degenerate_captures_rejected() {
        assert_eq!(extract("my name is Dr"), None);
        assert_eq!(extract("no introduction at all, just a request"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_lowercase_fragment_does_not_match() {
        // "this is urgent" must not yield "urgent" as a name
        assert_eq!(extract("please hurry, this is urgent"), None);
    }
}
