//! Resolving detected references against the catalog.

use crate::detect::detect_references;
use cookbook_model::Catalog;

/// One piece of rendered text: either literal text or a resolved
/// reference marker the presentation layer can make clickable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including any unresolved `@name` spans.
    Text(String),
    /// A resolved reference to another recipe.
    Reference {
        /// Id of the target recipe.
        id: String,
        /// The literal span, `@` included, as it appeared in the text.
        text: String,
    },
}

/// Renders `text` with references resolved against `catalog`.
pub fn render(text: &str, catalog: &Catalog) -> Vec<Segment> {
    render_with(text, |name| {
        catalog.find_by_exact_title(name).map(|r| r.id.clone())
    })
}

/// Renders `text` resolving names through `lookup`.
///
/// `lookup` receives a trimmed candidate name and returns the target
/// recipe id. Because detection grabs the maximal run of name
/// characters (spaces included), a span like `@Tomato Soup for base`
/// is resolved by trying successively shorter word prefixes until one
/// matches a title; the unmatched tail stays literal. Spans that never
/// resolve stay part of the surrounding literal text.
///
/// Nothing is memoized: every call re-resolves against the current
/// collection, so a rename immediately changes what resolves.
pub fn render_with<F>(text: &str, mut lookup: F) -> Vec<Segment>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut last = 0;

    for reference in detect_references(text) {
        let span_end = reference.start + reference.len;
        match resolve_prefix(&reference.name, &mut lookup) {
            Some((id, matched_len)) => {
                literal.push_str(&text[last..reference.start]);
                if !literal.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut literal)));
                }
                // '@' plus the matched part of the name.
                let marker_end = reference.start + 1 + matched_len;
                segments.push(Segment::Reference {
                    id,
                    text: text[reference.start..marker_end].to_string(),
                });
                last = marker_end;
            }
            None => {
                literal.push_str(&text[last..span_end]);
                last = span_end;
            }
        }
    }

    literal.push_str(&text[last..]);
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }
    segments
}

/// Tries the full name, then successively shorter word prefixes.
///
/// Returns the id and the byte length of the matched prefix within the
/// name. Cutting only at word boundaries keeps `@Tomato Soupy` from
/// resolving to "Tomato Soup".
fn resolve_prefix<F>(name: &str, lookup: &mut F) -> Option<(String, usize)>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut end = name.len();
    loop {
        let candidate = name[..end].trim();
        if !candidate.is_empty() {
            if let Some(id) = lookup(candidate) {
                return Some((id, end));
            }
        }
        match name[..end].trim_end().rfind(char::is_whitespace) {
            Some(cut) => end = cut,
            None => return None,
        }
    }
}
