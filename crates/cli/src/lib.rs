//! CLI utilities for Cookbook tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Recipe-specific formatters (ratings, durations)

#![warn(missing_docs)]

pub mod output;
