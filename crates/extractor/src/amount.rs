//! Goal amount extraction
//!
//! Unlike the name cascade, every amount rule runs over the whole transcript
//! and all matches accumulate as candidates. Candidates then pass an
//! exclusion filter (wages, ages, calendar years, dates, street addresses)
//! and the survivors are assigned to three preference tiers by surrounding
//! context. The first non-empty tier, in fixed order, contributes its first
//! candidate in accumulation order: rules run in a fixed sequence and each
//! rule's matches accumulate in document order.

use careline_core::{Candidate, FieldTrace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{context_window, parse_grouped_number, written_value};
use crate::patterns::{
    ADDRESS_CONTEXT, AGE_CONTEXT, CALENDAR_YEAR_RANGE, MONTH_CONTEXT, TIER_COST, TIER_GENERIC,
    TIER_GOAL, WAGE_CONTEXT,
};

/// Bytes of surrounding transcript examined for exclusion and tier keywords.
/// Kept tight so one number's disqualifying context ("per hour") cannot
/// bleed into a neighboring amount's window.
const CONTEXT_BEFORE: usize = 16;
const CONTEXT_AFTER: usize = 20;

/// Month names matched as whole words only; "may" must not fire inside
/// "maybe" or "mayor"
static MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?:{})\b", MONTH_CONTEXT.join("|"))).unwrap());

/// Coarse origin of an amount candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountKind {
    /// "between $X and $Y", resolved to the arithmetic midpoint
    Range,
    /// Written-number phrase ("two thousand")
    Written,
    /// Digit amount, with or without a dollar sign
    Numeric,
}

impl AmountKind {
    fn tag(&self) -> &'static str {
        match self {
            AmountKind::Range => "range",
            AmountKind::Written => "written",
            AmountKind::Numeric => "numeric",
        }
    }
}

/// One compiled amount rule
pub struct AmountRule {
    pub id: &'static str,
    pub kind: AmountKind,
    pub pattern: Regex,
}

/// Compile the amount rule set, in accumulation order
pub fn build_amount_rules() -> Vec<AmountRule> {
    vec![
        AmountRule {
            id: "range",
            kind: AmountKind::Range,
            pattern: Regex::new(
                r"(?i)between\s+\$?(\d[\d,]*(?:\.\d+)?)\s*(?:and|to)\s+\$?(\d[\d,]*(?:\.\d+)?)",
            )
            .unwrap(),
        },
        AmountRule {
            id: "written",
            kind: AmountKind::Written,
            pattern: Regex::new(r"(?i)\b([a-z]+(?:-[a-z]+)?)\s+(hundred|thousand|grand|k)\b")
                .unwrap(),
        },
        AmountRule {
            id: "dollar_sign",
            kind: AmountKind::Numeric,
            pattern: Regex::new(r"\$\s*(\d[\d,]*(?:\.\d+)?)").unwrap(),
        },
        AmountRule {
            id: "dollars_word",
            kind: AmountKind::Numeric,
            pattern: Regex::new(r"(?i)\b(\d[\d,]*(?:\.\d+)?)\s*(?:dollars|bucks)\b").unwrap(),
        },
        AmountRule {
            id: "bare_number",
            kind: AmountKind::Numeric,
            pattern: Regex::new(r"\b(\d{1,3}(?:,\d{3})+|\d{3,7})\b").unwrap(),
        },
    ]
}

struct AmountCandidate {
    value: f64,
    matched: String,
    rule: &'static str,
    kind: AmountKind,
    window: String,
    tier: Option<usize>,
}

impl AmountCandidate {
    fn to_trace(&self) -> Candidate {
        let mut tag = self.kind.tag().to_string();
        if let Some(tier) = self.tier {
            tag.push_str(&format!(",tier{}", tier));
        }
        Candidate::new(format!("{}", self.value), self.matched.clone(), self.rule).with_tag(tag)
    }
}

/// Run the full accumulate-filter-tier pipeline.
/// Returns the selected amount with its confidence, plus the trace.
pub fn extract_amount(rules: &[AmountRule], transcript: &str) -> (Option<f64>, f32, FieldTrace) {
    let mut found = Vec::new();

    for rule in rules {
        for caps in rule.pattern.captures_iter(transcript) {
            let whole = caps.get(0).unwrap();
            let value = match rule.kind {
                AmountKind::Range => {
                    let lo = caps.get(1).and_then(|m| parse_grouped_number(m.as_str()));
                    let hi = caps.get(2).and_then(|m| parse_grouped_number(m.as_str()));
                    match (lo, hi) {
                        (Some(lo), Some(hi)) => Some((lo + hi) / 2.0),
                        _ => None,
                    }
                }
                AmountKind::Written => {
                    let word = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                    let multiplier = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                    written_value(word, multiplier)
                }
                AmountKind::Numeric => {
                    caps.get(1).and_then(|m| parse_grouped_number(m.as_str()))
                }
            };
            let Some(value) = value else {
                continue;
            };

            let window = context_window(
                transcript,
                whole.start(),
                whole.end(),
                CONTEXT_BEFORE,
                CONTEXT_AFTER,
            );
            found.push(AmountCandidate {
                value,
                matched: whole.as_str().to_string(),
                rule: rule.id,
                kind: rule.kind,
                window,
                tier: None,
            });
        }
    }

    let all_trace: Vec<Candidate> = found.iter().map(|c| c.to_trace()).collect();

    let mut survivors: Vec<AmountCandidate> = found
        .into_iter()
        .filter(|c| !is_excluded(c))
        .collect();
    for candidate in &mut survivors {
        candidate.tier = assign_tier(&candidate.window);
    }

    let survivor_trace: Vec<Candidate> = survivors.iter().map(|c| c.to_trace()).collect();

    for (tier, confidence) in [(1, 0.9f32), (2, 0.8), (3, 0.7)] {
        if let Some(winner) = survivors.iter().find(|c| c.tier == Some(tier)) {
            let trace = FieldTrace::resolved(
                all_trace,
                survivor_trace,
                format!("first candidate in tier {} ({})", tier, winner.rule),
            );
            return (Some(winner.value), confidence, trace);
        }
    }

    if let Some(first) = survivors.first() {
        let value = first.value;
        let rule = first.rule;
        let trace = FieldTrace::resolved(
            all_trace,
            survivor_trace,
            format!("no tier matched; first surviving candidate ({})", rule),
        );
        return (Some(value), 0.6, trace);
    }

    let trace = FieldTrace::resolved(all_trace, survivor_trace, "no candidates survived filtering");
    (None, 0.0, trace)
}

/// Exclusion filter: drop candidates whose surrounding context marks them as
/// something other than a goal amount.
fn is_excluded(candidate: &AmountCandidate) -> bool {
    let window = candidate.window.as_str();

    if WAGE_CONTEXT.iter().any(|k| window.contains(k)) {
        return true;
    }
    if AGE_CONTEXT.iter().any(|k| window.contains(k)) {
        return true;
    }
    if MONTHS.is_match(window) {
        return true;
    }
    if ADDRESS_CONTEXT.iter().any(|k| window.contains(k)) {
        return true;
    }

    // Bare four-digit integers in the calendar range are years, not amounts
    if candidate.kind == AmountKind::Numeric
        && !candidate.matched.contains('$')
        && candidate.value.fract() == 0.0
        && candidate.value >= CALENDAR_YEAR_RANGE.0
        && candidate.value <= CALENDAR_YEAR_RANGE.1
        && !candidate.matched.contains(',')
    {
        return true;
    }

    false
}

/// First tier whose keyword list hits the candidate's context window
fn assign_tier(window: &str) -> Option<usize> {
    if TIER_GOAL.iter().any(|k| window.contains(k)) {
        Some(1)
    } else if TIER_COST.iter().any(|k| window.contains(k)) {
        Some(2)
    } else if TIER_GENERIC.iter().any(|k| window.contains(k)) {
        Some(3)
    } else {
        None
    }
}
