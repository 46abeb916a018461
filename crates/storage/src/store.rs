//! The JSON-backed recipe store.

use crate::error::{Result, StorageError};
use cookbook_model::Recipe;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the catalog within the storage directory.
pub const CATALOG_FILE: &str = "recipes.json";

/// Supplies whole collection snapshots to the query layer.
///
/// The query layer never pages or partially loads; each call returns
/// the full collection.
pub trait RecipeSource {
    /// Loads the full recipe collection.
    fn load_recipe_collection(&self) -> Result<Vec<Recipe>>;
}

/// The recipe collection as a single `recipes.json` under a storage
/// directory, images and all other assets beside it.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Opens a store over `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(StorageError::NotADirectory(dir.display().to_string()));
        }
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
            info!(dir = %dir.display(), "created storage directory");
        }
        Ok(Self { dir })
    }

    /// The storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join(CATALOG_FILE)
    }

    /// Loads all recipes, sorted by case-insensitive title.
    ///
    /// A missing catalog file is an empty collection, not an error; the
    /// file appears on first save.
    pub fn load(&self) -> Result<Vec<Recipe>> {
        let path = self.catalog_path();
        if !path.exists() {
            debug!(path = %path.display(), "no catalog file, empty collection");
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        let mut recipes: Vec<Recipe> = serde_json::from_str(&content)?;
        recipes.sort_by_key(|r| r.title.to_lowercase());
        debug!(count = recipes.len(), "loaded catalog");
        Ok(recipes)
    }

    /// Writes the whole collection back, pretty-printed.
    pub fn save(&self, recipes: &[Recipe]) -> Result<()> {
        let json = serde_json::to_string_pretty(recipes)?;
        std::fs::write(self.catalog_path(), json)?;
        info!(count = recipes.len(), "saved catalog");
        Ok(())
    }
}

impl RecipeSource for JsonStore {
    fn load_recipe_collection(&self) -> Result<Vec<Recipe>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store
            .save(&[
                Recipe::titled("2", "pho"),
                Recipe::titled("1", "Bread"),
                Recipe::titled("3", "Aioli"),
            ])
            .unwrap();
        let loaded = store.load().unwrap();
        let titles: Vec<_> = loaded.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Aioli", "Bread", "pho"]);
    }

    #[test]
    fn test_legacy_freeform_ingredients_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        std::fs::write(
            store.catalog_path(),
            r#"[{"id":"1","title":"Bread","ingredients":[{"items":["2 cups flour"]}]}]"#,
        )
        .unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].ingredients[0].items.len(), 1);
    }

    #[test]
    fn test_corrupt_catalog_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        std::fs::write(store.catalog_path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_open_on_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            JsonStore::open(&file),
            Err(StorageError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }
}
