//! An immutable snapshot of the recipe collection.

use crate::Recipe;

/// The full recipe collection as supplied by storage.
///
/// The catalog is a read-only snapshot: queries never mutate it, and a
/// fresh snapshot replaces it wholesale when the collection changes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Wraps a loaded collection.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// All recipes, in collection order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes in the snapshot.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True if the snapshot holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Finds a recipe by exact title: trimmed, case-insensitive.
    ///
    /// This is the lookup used to resolve `@` references, so a rename
    /// immediately changes which references resolve.
    pub fn find_by_exact_title(&self, name: &str) -> Option<&Recipe> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.recipes
            .iter()
            .find(|r| r.title.trim().to_lowercase() == needle)
    }

    /// Distinct labels across the collection, sorted.
    pub fn all_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .recipes
            .iter()
            .flat_map(|r| r.labels.iter().cloned())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}

impl From<Vec<Recipe>> for Catalog {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
