//! Normalizer: canonicalizes extracted values before comparison
//!
//! Covers nickname expansion for names and numeric coercion of comma-grouped
//! digit strings and written-number phrases into one numeric domain. The
//! legacy MEDICAL category label folds at the enum boundary in
//! `careline-core` and needs no handling here.

use crate::patterns::{NICKNAMES, NUMBER_MULTIPLIERS, NUMBER_WORDS};

/// Parse a digit string that may carry comma grouping and a decimal part.
/// Returns `None` for anything that does not resolve to a finite,
/// non-negative number.
pub fn parse_grouped_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// Resolve a written quantity ("two" + "thousand") via the fixed lookup
/// tables. Unknown words yield `None` rather than a guess.
pub fn written_value(word: &str, multiplier: &str) -> Option<f64> {
    let base = NUMBER_WORDS.get(word.to_lowercase().as_str())?;
    let factor = NUMBER_MULTIPLIERS.get(multiplier.to_lowercase().as_str())?;
    Some(base * factor)
}

/// Expand the first token of a name when its lowercase form is a known
/// nickname. Trailing tokens are preserved unexpanded.
pub fn expand_nickname(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(first) = tokens.next() else {
        return name.to_string();
    };

    match NICKNAMES.get(first.to_lowercase().as_str()) {
        Some(canonical) => {
            let rest: Vec<&str> = tokens.collect();
            if rest.is_empty() {
                (*canonical).to_string()
            } else {
                format!("{} {}", canonical, rest.join(" "))
            }
        }
        None => name.to_string(),
    }
}

/// Slice a lowercased context window around a match, clamped to char
/// boundaries. The window is asymmetric: disqualifiers like "per hour" or
/// "years old" trail the number, while goal phrasing ("asking for") leads
/// it by only a few words.
pub fn context_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> String {
    let mut lo = start.saturating_sub(before);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + after).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    text[lo..hi].to_lowercase()
}
