//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Format a half-star rating as a five-star row, e.g. `★★★½☆`.
pub fn format_stars(rating: f32) -> String {
    let mut out = String::new();
    for i in 1..=5 {
        let star = i as f32;
        if rating >= star {
            out.push('★');
        } else if rating >= star - 0.5 {
            out.push('½');
        } else {
            out.push('☆');
        }
    }
    out
}

/// Format a minute count for display, e.g. `90` becomes `1h 30m`.
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 0 {
        return "—".to_string();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Left-align `text` in a cell of `width` columns.
///
/// Pad before styling: ANSI escape bytes count toward `format!` widths,
/// so padding a styled value breaks column alignment.
pub fn pad_cell(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
