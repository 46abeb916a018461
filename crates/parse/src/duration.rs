//! Minute extraction from free-form duration strings.

use once_cell::sync::Lazy;
use regex::Regex;

static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*(?:h|hr|hour)").unwrap());
static MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*(?:m|min)").unwrap());

/// Extracts a minute count from a free-form duration string.
///
/// Hour ("1h", "2 hours") and minute ("30m", "15 min") components are
/// summed in whatever order they appear. A string that is nothing but
/// digits is taken as a bare minute count. Anything else is `0` — which
/// the filter engine treats as "matches no duration bucket".
///
/// The parser is total: absurd counts saturate at `u32::MAX` instead of
/// overflowing.
pub fn parse_duration(text: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let text = text.to_lowercase();

    let mut minutes: u32 = 0;
    if let Some(caps) = HOURS_RE.captures(&text) {
        let hours = caps[1].parse::<u32>().unwrap_or(0);
        minutes = minutes.saturating_add(hours.saturating_mul(60));
    }
    if let Some(caps) = MINUTES_RE.captures(&text) {
        minutes = minutes.saturating_add(caps[1].parse::<u32>().unwrap_or(0));
    }

    // Fallback: a bare number like "45" means minutes.
    let trimmed = text.trim();
    if minutes == 0 && !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        minutes = trimmed.parse().unwrap_or(0);
    }

    minutes
}
