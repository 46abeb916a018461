//! Scanning free text for `@name` spans.

use once_cell::sync::Lazy;
use regex::Regex;

/// `@` followed by a maximal run of letters (any script), digits,
/// whitespace, hyphens, and underscores. Any other character ends the
/// name and is not part of the match.
static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@([\p{L}\p{N}\s_-]+)").unwrap());

/// A detected `@name` span in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The name after the `@`, exactly as written (untrimmed).
    pub name: String,
    /// Byte offset of the `@` in the scanned text.
    pub start: usize,
    /// Byte length of the whole span including the `@`.
    pub len: usize,
}

/// Iterates over the non-overlapping references in `text`.
///
/// The iterator is lazy and borrows `text`; call again to rescan.
pub fn detect_references(text: &str) -> impl Iterator<Item = Reference> + '_ {
    REFERENCE_RE.captures_iter(text).map(|caps| {
        let whole = caps.get(0).expect("match group 0 always present");
        Reference {
            name: caps[1].to_string(),
            start: whole.start(),
            len: whole.len(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reference() {
        let refs: Vec<_> = detect_references("See @Tomato Soup for base").collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "Tomato Soup for base");
        assert_eq!(refs[0].start, 4);
    }

    #[test]
    fn test_punctuation_ends_the_name() {
        let refs: Vec<_> = detect_references("Try @Pho! Then rest").collect();
        assert_eq!(refs[0].name, "Pho");
        assert_eq!(refs[0].len, "@Pho".len());
    }

    #[test]
    fn test_unicode_letters_and_digits() {
        let refs: Vec<_> = detect_references("@Crème Brûlée 2").collect();
        assert_eq!(refs[0].name, "Crème Brûlée 2");
    }

    #[test]
    fn test_hyphen_and_underscore_included() {
        let refs: Vec<_> = detect_references("(@stir-fry_v2)").collect();
        assert_eq!(refs[0].name, "stir-fry_v2");
    }

    #[test]
    fn test_multiple_non_overlapping() {
        let refs: Vec<_> = detect_references("@One, @Two, @Three").collect();
        let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_no_references() {
        assert_eq!(detect_references("plain text").count(), 0);
        assert_eq!(detect_references("").count(), 0);
        // A bare @ with no name characters is not a reference.
        assert_eq!(detect_references("a @ b").count(), 1); // "@ b" is a valid span
    }

    #[test]
    fn test_restartable() {
        let text = "@One and @Two";
        assert_eq!(detect_references(text).count(), 2);
        assert_eq!(detect_references(text).count(), 2);
    }
}
