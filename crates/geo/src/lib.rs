//! Geographic tag resolution for Cookbook recipes.
//!
//! This crate provides:
//! - Tag → ISO 3166-1 alpha-2 resolution over a fixed many-to-one table
//! - The set of all mapped country codes
//! - A display adjective per code for category titles
//!
//! Every function is total: unknown or empty input yields `None`, never
//! an error.
//!
//! # Example
//!
//! ```
//! use cookbook_geo::{adjective_for, resolve_country};
//!
//! assert_eq!(resolve_country("  France  "), Some("FR"));
//! assert_eq!(resolve_country("sourdough"), None);
//! assert_eq!(adjective_for("FR").as_deref(), Some("French"));
//! ```

mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use table::COUNTRY_TAGS;

/// Hash index over the static table for O(1) lookups.
static TAG_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_TAGS.iter().copied().collect());

/// Suffixes that mark a key as an adjectival form ("french", "chinese").
const ADJECTIVE_SUFFIXES: &[&str] = &["ese", "an", "ish", "ic", "i", "k", "h"];

/// Resolves a free-form recipe tag to a country code.
///
/// The tag is trimmed and lowercased before lookup. Returns `None` for
/// empty input or an unmapped tag.
pub fn resolve_country(tag: &str) -> Option<&'static str> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return None;
    }
    TAG_INDEX.get(tag.as_str()).copied()
}

/// Distinct country codes appearing in the table, in first-seen order.
pub fn all_country_codes() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    COUNTRY_TAGS
        .iter()
        .filter_map(|&(_, code)| seen.insert(code).then_some(code))
        .collect()
}

/// Picks a human-friendly display adjective for a country code.
///
/// Scans the table for keys mapping to `code` and scores each: length,
/// +100 for an adjectival suffix, -50 for a multi-word key without one
/// (so "American" beats "United States"). Ties keep the first key in
/// table order. The winner is title-cased. Returns `None` only for empty
/// input; an unmapped code comes back as-is, and the pseudo-code
/// `"other"` yields the fixed label `"Global / Other"`.
pub fn adjective_for(code: &str) -> Option<String> {
    if code.is_empty() {
        return None;
    }
    if code == "other" {
        return Some("Global / Other".to_string());
    }

    let mut best: Option<(&str, i32)> = None;
    for &(tag, tag_code) in COUNTRY_TAGS {
        if tag_code != code {
            continue;
        }
        let score = score_adjective(tag);
        // Strictly greater, so the first key in table order wins ties.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((tag, score));
        }
    }

    match best {
        Some((tag, _)) => Some(title_case(tag)),
        None => Some(code.to_string()),
    }
}

fn score_adjective(tag: &str) -> i32 {
    let mut score = tag.len() as i32;
    let adjectival = ADJECTIVE_SUFFIXES.iter().any(|s| tag.ends_with(s));
    if adjectival {
        score += 100;
    }
    if tag.contains(' ') && !adjectival {
        score -= 50;
    }
    score
}

/// Capitalizes the first letter of each whitespace-delimited word.
fn title_case(tag: &str) -> String {
    tag.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
