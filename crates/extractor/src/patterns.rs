//! Pattern library: the read-only rule tables behind every extractor
//!
//! Everything in this module is fixed at compile time and never mutated at
//! runtime. Ordering matters throughout: name rules are consulted first to
//! last with first-match-wins, amount tiers are checked tier 1 to tier 3,
//! and the category precedence table is evaluated top to bottom.

use careline_core::AssistanceCategory;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// =============================================================================
// Name patterns
// =============================================================================

/// A capitalized token run of one to four words, optionally dotted ("Dr.")
pub const NAME_SEQUENCE: &str = r"((?:[A-Z][A-Za-z'\-]*\.?(?:\s+|\b)){1,4})";

/// Ordered name introduction rules, most to least specific.
/// Each entry: (rule id, pattern prefix placed before [`NAME_SEQUENCE`],
/// confidence when the rule wins).
pub const NAME_RULES: [(&str, &str, f32); 5] = [
    ("name_is", r"(?i:my name(?:'s| is))\s+", 0.95),
    ("called", r"(?i:i(?:'m| am) called|they call me)\s+", 0.90),
    ("this_is", r"(?i:this is)\s+", 0.85),
    ("i_am", r"(?i:i(?:'m| am))\s+", 0.75),
    // Suffix-anchored form ("Sarah here", "Maria calling") is appended to the
    // sequence instead of prefixed; the builder special-cases this id.
    ("announcing", r"(?i:here|calling|speaking)\b", 0.60),
];

/// Honorifics stripped from the front of an accepted capture
pub const NAME_TITLES: [&str; 9] =
    ["dr", "dr.", "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "miss"];

/// Trailing clause words: the capture is cut at the first occurrence
pub const NAME_CLAUSE_WORDS: [&str; 7] =
    ["calling", "speaking", "here", "from", "and", "about", "with"];

/// Degenerate captures rejected outright when they are the whole remainder
pub const NAME_STOP_WORDS: [&str; 10] = [
    "dr", "a", "the", "me", "just", "not", "so", "hi", "hello", "yes",
];

/// Nickname table; only the first token of an accepted name is expanded
pub static NICKNAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("liz", "Elizabeth"),
        ("beth", "Elizabeth"),
        ("bob", "Robert"),
        ("rob", "Robert"),
        ("bill", "William"),
        ("will", "William"),
        ("mike", "Michael"),
        ("dave", "David"),
        ("tom", "Thomas"),
        ("jim", "James"),
        ("joe", "Joseph"),
        ("sue", "Susan"),
        ("kate", "Katherine"),
        ("katie", "Katherine"),
        ("tony", "Anthony"),
        ("chris", "Christopher"),
        ("alex", "Alexander"),
        ("sam", "Samuel"),
        ("dan", "Daniel"),
        ("ben", "Benjamin"),
    ])
});

// =============================================================================
// Amount patterns
// =============================================================================

/// Written-number words resolvable to a base value
pub static NUMBER_WORDS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("a", 1.0),
        ("an", 1.0),
        ("one", 1.0),
        ("two", 2.0),
        ("three", 3.0),
        ("four", 4.0),
        ("five", 5.0),
        ("six", 6.0),
        ("seven", 7.0),
        ("eight", 8.0),
        ("nine", 9.0),
        ("ten", 10.0),
        ("eleven", 11.0),
        ("twelve", 12.0),
        ("fifteen", 15.0),
        ("twenty", 20.0),
        ("twenty-five", 25.0),
        ("thirty", 30.0),
        ("forty", 40.0),
        ("fifty", 50.0),
        ("sixty", 60.0),
        ("seventy", 70.0),
        ("eighty", 80.0),
        ("ninety", 90.0),
    ])
});

/// Multiplier words following a number word
pub static NUMBER_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("hundred", 100.0),
        ("thousand", 1_000.0),
        ("grand", 1_000.0),
        ("k", 1_000.0),
    ])
});

/// Disqualifying context: hourly-wage language
pub const WAGE_CONTEXT: [&str; 6] =
    ["per hour", "/hour", "/hr", "an hour", "hourly", "per hr"];

/// Disqualifying context: ages
pub const AGE_CONTEXT: [&str; 2] = ["years old", "year old"];

/// Disqualifying context: month names (dates, not amounts)
pub const MONTH_CONTEXT: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december",
];

/// Disqualifying context: street-address tokens
pub const ADDRESS_CONTEXT: [&str; 7] = [
    "street", "avenue", "boulevard", " road", "apartment", "apt ", "suite",
];

/// Bare four-digit numbers in this range are calendar years, not amounts
pub const CALENDAR_YEAR_RANGE: (f64, f64) = (1900.0, 2099.0);

/// Tier 1: explicit goal language
pub const TIER_GOAL: [&str; 8] = [
    "need", "asking for", "ask for", "goal is", "goal of", "raise", "requesting", "request",
];

/// Tier 2: cost/bill context. Substring matching is deliberate so "fees"
/// also catches "fees are"; the bare singular "fee" is omitted because it
/// fires inside "coffee" and "feeding".
pub const TIER_COST: [&str; 12] = [
    "rent", "surgery", "legal fees", "bill", "cost", "fees", "deposit",
    "treatment", "tuition", "repair", "owe", "payment",
];

/// Tier 3: generic goal phrasing
pub const TIER_GENERIC: [&str; 6] = [
    "want", "would help", "could use", "looking for", "hoping for", "help with",
];

// =============================================================================
// Category keywords
// =============================================================================

/// Keyword lists per detectable category. A transcript "detects" a category
/// when any keyword appears; several categories may detect at once and the
/// precedence table picks the winner.
pub const CATEGORY_KEYWORDS: [(AssistanceCategory, &[&str]); 8] = [
    (
        AssistanceCategory::Safety,
        &[
            "domestic violence",
            "abuse",
            "abusive",
            "unsafe",
            "stalking",
            "stalker",
            "restraining order",
            "threatened",
            "threatening",
            "fleeing",
        ],
    ),
    (
        AssistanceCategory::Emergency,
        &[
            "emergency",
            "urgent",
            "urgently",
            "disaster",
            "fire",
            "flood",
            "crisis",
            "accident",
            "wreck",
        ],
    ),
    (
        AssistanceCategory::Healthcare,
        &[
            "surgery",
            "hospital",
            "medical",
            "medication",
            "treatment",
            "doctor",
            "diagnosis",
            "diagnosed",
            "cancer",
            "therapy",
            "prescription",
            "dental",
        ],
    ),
    (
        AssistanceCategory::Housing,
        &[
            "rent",
            "eviction",
            "evicted",
            "homeless",
            "mortgage",
            "housing",
            "apartment",
            "landlord",
            "utilities",
            "utility bill",
            "shelter",
            "security deposit",
        ],
    ),
    (
        AssistanceCategory::Legal,
        &[
            "legal",
            "lawyer",
            "attorney",
            "court",
            "custody",
            "immigration",
            "lawsuit",
            "legal fees",
        ],
    ),
    (
        AssistanceCategory::Employment,
        &[
            "unemployed",
            "laid off",
            "lost my job",
            "job interview",
            "work boots",
            "certification",
            "training program",
            "resume",
        ],
    ),
    (
        AssistanceCategory::Education,
        &[
            "school",
            "tuition",
            "college",
            "education",
            "textbooks",
            "classes",
            "degree",
            "semester",
        ],
    ),
    (
        AssistanceCategory::Family,
        &[
            "my kids",
            "my children",
            "daughter",
            "son",
            "childcare",
            "diapers",
            "baby",
            "foster",
        ],
    ),
];

/// LEGAL detection alone is insufficient at the top of the precedence table;
/// one of these must also be present
pub const STRONG_LEGAL_KEYWORDS: [&str; 4] = ["court", "custody", "lawyer", "legal fees"];

/// Secondary fixed order once the special-case rows have all declined
pub const SECONDARY_CATEGORY_ORDER: [AssistanceCategory; 5] = [
    AssistanceCategory::Housing,
    AssistanceCategory::Legal,
    AssistanceCategory::Employment,
    AssistanceCategory::Education,
    AssistanceCategory::Family,
];

// =============================================================================
// Urgency keywords
// =============================================================================

pub const CRITICAL_KEYWORDS: [&str; 9] = [
    "life or death",
    "life-threatening",
    "life threatening",
    "critical",
    "dying",
    "immediately",
    "emergency room",
    "tonight",
    "right now",
];

pub const HIGH_KEYWORDS: [&str; 9] = [
    "urgent",
    "urgently",
    "asap",
    "as soon as possible",
    "eviction",
    "this week",
    "soon",
    "quickly",
    "deadline",
];

pub const LOW_KEYWORDS: [&str; 7] = [
    "no rush",
    "no hurry",
    "whenever",
    "eventually",
    "someday",
    "planning ahead",
    "down the road",
];

// =============================================================================
// Beneficiary relationships
// =============================================================================

/// Relations recognized after "for my" / "help my"; first hit wins
pub const RELATIONS: [&str; 17] = [
    "daughter",
    "son",
    "mother",
    "father",
    "mom",
    "dad",
    "wife",
    "husband",
    "brother",
    "sister",
    "grandmother",
    "grandfather",
    "grandson",
    "granddaughter",
    "friend",
    "neighbor",
    "family",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_table_lookup() {
        assert_eq!(NICKNAMES.get("liz"), Some(&"Elizabeth"));
        assert_eq!(NICKNAMES.get("sarah"), None);
    }

    #[test]
    fn test_number_word_tables() {
        assert_eq!(NUMBER_WORDS.get("two"), Some(&2.0));
        assert_eq!(NUMBER_MULTIPLIERS.get("thousand"), Some(&1000.0));
        assert_eq!(NUMBER_MULTIPLIERS.get("grand"), Some(&1000.0));
    }

    #[test]
    fn test_category_keyword_lists_cover_detectable_set() {
        let listed: Vec<AssistanceCategory> =
            CATEGORY_KEYWORDS.iter().map(|(c, _)| *c).collect();
        assert_eq!(listed, AssistanceCategory::DETECTABLE.to_vec());
    }
}
