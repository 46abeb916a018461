//! Inline `@RecipeName` cross-references.
//!
//! This crate provides:
//! - `detect_references` — scans free text for `@name` spans
//! - `render` — resolves spans against the catalog into segments
//! - `Autocomplete` — the suggestion state machine driven by caret
//!   position, over both plain and rich text buffers
//!
//! Unresolved references are never an error: they stay literal text.
//!
//! # Example
//!
//! ```
//! use cookbook_model::{Catalog, Recipe};
//! use cookbook_refs::{render, Segment};
//!
//! let catalog = Catalog::new(vec![Recipe::titled("42", "Tomato Soup")]);
//! let segments = render("See @Tomato Soup for the base", &catalog);
//! assert!(matches!(&segments[1], Segment::Reference { id, .. } if id == "42"));
//! ```

mod autocomplete;
mod cursor;
mod detect;
mod render;

pub use autocomplete::{Autocomplete, AutocompleteState, Completion, Suggestion};
pub use cursor::{LinearCursor, NodeCursor, RichCaret, TextCursor, TextNode};
pub use detect::{detect_references, Reference};
pub use render::{render, render_with, Segment};
