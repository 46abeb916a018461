//! Canonical ingredient names out of structured or legacy free-form items.

use cookbook_model::IngredientItem;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading quantity expression: digits, slashes, decimal points, unicode
/// fraction glyphs, an optional unit token, an optional "of".
static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[\d\s/.\x{00BC}-\x{00BE}\x{2150}-\x{215E}\x{2189}]+(?:(?:cups?|tsp|tbsp|teaspoons?|tablespoons?|grams?|g|kg|oz|ounces?|lbs?|pounds?|ml|l|liters?|pinch|dash|cloves?|slices?|pieces?|cans?|jars?|packages?|bags?|box|boxes|sticks?)\b)?\s*(?:of\b)?\s*",
    )
    .unwrap()
});

/// Strips a leading quantity expression from a free-form ingredient line.
///
/// `"2 cups flour"` becomes `"flour"`, `"½ tsp of salt"` becomes
/// `"salt"`. When no quantity pattern is recognized the input comes back
/// trimmed and lowercased, unchanged otherwise.
pub fn strip_quantity(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    QUANTITY_RE.replace(text, "").trim().to_lowercase()
}

/// Canonical name for an ingredient item.
///
/// Structured items return their `name` field verbatim; callers lowercase
/// for comparison. Legacy free-form items go through `strip_quantity`.
pub fn ingredient_name(item: &IngredientItem) -> String {
    match item {
        IngredientItem::Structured { name, .. } => name.clone(),
        IngredientItem::Freeform(text) => strip_quantity(text),
    }
}
