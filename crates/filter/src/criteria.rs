//! Ephemeral filter criteria, rebuilt per evaluation.

use crate::DurationBucket;
use serde::{Deserialize, Serialize};

/// The five independent filter criteria, combined with logical AND.
///
/// Each empty or unset field is vacuously true, so the default value
/// matches every recipe. Criteria are transient: the UI layer rebuilds
/// them from its controls on every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring required in the title.
    pub search: String,
    /// Tags that must all be present, exact as stored.
    pub tags: Vec<String>,
    /// Normalized (lowercase) ingredient names that must all be present.
    pub ingredients: Vec<String>,
    /// Required duration bucket, if any.
    pub bucket: Option<DurationBucket>,
    /// Minimum rating; 0 disables the criterion.
    pub min_rating: f32,
}

impl FilterCriteria {
    /// True if every criterion is vacuous.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.tags.is_empty()
            && self.ingredients.is_empty()
            && self.bucket.is_none()
            && self.min_rating == 0.0
    }

    /// Adds a required ingredient, normalizing to lowercase.
    pub fn require_ingredient(mut self, name: &str) -> Self {
        self.ingredients.push(name.to_lowercase());
        self
    }

    /// Adds a required tag, kept exact as stored on recipes.
    pub fn require_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn test_require_ingredient_lowercases() {
        let criteria = FilterCriteria::default().require_ingredient("Flour");
        assert_eq!(criteria.ingredients, vec!["flour"]);
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_serde_names() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"search":"pho","bucket":"quick","min_rating":3.5}"#).unwrap();
        assert_eq!(criteria.search, "pho");
        assert_eq!(criteria.bucket, Some(DurationBucket::Quick));
        assert_eq!(criteria.min_rating, 3.5);
    }
}
