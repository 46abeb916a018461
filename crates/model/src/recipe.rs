//! The recipe record as persisted in the catalog file.

use serde::{Deserialize, Serialize};

/// A single catalog entry with ingredients, instructions, and metadata.
///
/// Field names serialize in camelCase to stay compatible with the JSON
/// catalog produced by earlier versions of the app. Every field besides
/// `id` and `title` is optional so partial records still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    /// Opaque unique identifier, assigned by storage.
    pub id: String,
    /// Display name; also the lookup key for `@` cross-references.
    pub title: String,
    /// Free-form tags, in entry order. Used for both general filtering
    /// and geographic inference.
    pub labels: Vec<String>,
    /// Ingredient sections, in display order.
    pub ingredients: Vec<IngredientSection>,
    /// Instruction sections, in display order.
    pub instructions: Vec<InstructionSection>,
    /// Free-form total duration, e.g. "1h 30m" or "45".
    pub total_time: Option<String>,
    /// Free-form hands-on duration.
    pub active_time: Option<String>,
    /// Rating in half-star steps from 0 to 5.
    pub rating: Option<f32>,
    /// Short description shown on the card.
    pub description: Option<String>,
    /// Free-form notes; may contain `@` references.
    pub notes: Option<String>,
    /// Where the recipe came from.
    pub source: Option<String>,
    /// Link to the source, if any.
    pub source_url: Option<String>,
    /// Image file name under the storage directory.
    pub image: Option<String>,
    /// Meal category (breakfast, dinner, ...).
    pub meal: Option<String>,
    /// Dish type category.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// How many servings the recipe yields.
    #[serde(rename = "yield")]
    pub servings: Option<String>,
}

impl Recipe {
    /// Creates a minimal recipe with just an id and a title.
    pub fn titled(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Iterates over every ingredient item across all sections.
    pub fn ingredient_items(&self) -> impl Iterator<Item = &IngredientItem> {
        self.ingredients.iter().flat_map(|s| s.items.iter())
    }
}

/// A titled group of ingredient items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientSection {
    /// Optional section heading.
    pub title: Option<String>,
    /// Items in display order.
    pub items: Vec<IngredientItem>,
}

/// One ingredient line.
///
/// Current records store a structured quantity/name pair; legacy records
/// store the whole line as a single string. The untagged representation
/// accepts both when deserializing the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientItem {
    /// Structured pair, e.g. `{ "quantity": "2 cups", "name": "flour" }`.
    Structured {
        /// Free-form amount, may be empty.
        #[serde(default)]
        quantity: String,
        /// The ingredient name as entered.
        name: String,
    },
    /// Legacy free-form line, e.g. `"2 cups flour"`.
    Freeform(String),
}

/// A titled group of instruction steps.
///
/// Section titles may contain `@` references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionSection {
    /// Optional section heading.
    pub title: Option<String>,
    /// Steps in order.
    pub steps: Vec<String>,
}
