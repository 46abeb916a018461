//! Free-form text parsing for Cookbook recipes.
//!
//! This crate provides:
//! - `parse_duration` — minutes out of strings like "1h 30m" or "45"
//! - `strip_quantity` / `ingredient_name` — canonical ingredient names
//!
//! Both parsers are deliberately permissive and never fail: unparseable
//! input degrades to a documented default (`0` minutes, or the original
//! text lowercased).

mod duration;
mod ingredient;

pub use duration::parse_duration;
pub use ingredient::{ingredient_name, strip_quantity};
