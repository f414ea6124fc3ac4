//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write an ordered sequence of tokens, sentences, or n-grams
    fn write_items(&mut self, items: &[String]) -> Result<()>;

    /// Write frequency counts, most frequent first
    fn write_counts(&mut self, counts: &[(String, usize)]) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
