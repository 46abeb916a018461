//! Multi-criterion recipe filtering.
//!
//! This crate provides:
//! - `FilterCriteria` — search text, tags, ingredients, duration bucket,
//!   minimum rating, combined with logical AND
//! - `matches` / `evaluate` — deterministic, order-preserving filtering
//! - `all_ingredients` — the normalized ingredient vocabulary of a catalog
//!
//! Evaluation is synchronous and recomputed in full on every call; at
//! personal-catalog scale there is nothing to cache.
//!
//! # Example
//!
//! ```
//! use cookbook_filter::{evaluate, FilterCriteria};
//! use cookbook_model::Recipe;
//!
//! let recipes = vec![Recipe::titled("1", "Pasta"), Recipe::titled("2", "Pho")];
//! let criteria = FilterCriteria {
//!     search: "pas".into(),
//!     ..FilterCriteria::default()
//! };
//! let hits = evaluate(&recipes, &criteria);
//! assert_eq!(hits.len(), 1);
//! ```

mod bucket;
mod criteria;
mod engine;

pub use bucket::{DurationBucket, ParseBucketError};
pub use criteria::FilterCriteria;
pub use engine::{all_ingredients, evaluate, matches};
