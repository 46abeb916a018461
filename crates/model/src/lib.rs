//! Recipe data model for Cookbook tools.
//!
//! This crate provides:
//! - The `Recipe` record and its nested ingredient/instruction sections
//! - The `Catalog` snapshot with title-based lookup
//! - Serde wire format matching the persisted `recipes.json`
//!
//! # Example
//!
//! ```
//! use cookbook_model::{Catalog, Recipe};
//!
//! let catalog = Catalog::new(vec![Recipe::titled("1", "Tomato Soup")]);
//! assert!(catalog.find_by_exact_title("  tomato soup ").is_some());
//! ```

#![warn(missing_docs)]

mod catalog;
mod recipe;

pub use catalog::Catalog;
pub use recipe::{IngredientItem, IngredientSection, InstructionSection, Recipe};
