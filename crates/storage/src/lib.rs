//! Catalog persistence for Cookbook tools.
//!
//! This crate provides:
//! - `JsonStore` — the recipe collection as a `recipes.json` file under
//!   a storage directory
//! - `StorageConfig` — TOML configuration with an optional storage-path
//!   override
//! - `RecipeSource` — the loading contract the query layer consumes
//!
//! The query crates never touch the filesystem; they receive whole
//! collection snapshots from here.

mod config;
mod error;
mod store;

pub use config::StorageConfig;
pub use error::{Result, StorageError};
pub use store::{JsonStore, RecipeSource, CATALOG_FILE};
