//! Rule-based tokenization for the Bambara language
//!
//! This crate segments raw Bambara text into a normalized sequence of
//! words, numbers, and punctuation while handling the language's
//! orthography: apostrophe-marked contractions (`n’tɛ`), hyphenated
//! compounds (`tɔgɔ-ɲuman`), and the special letters ɛ, ɔ, ɲ. Analysis
//! helpers for sentence splitting, token frequency, character n-grams, and
//! a shallow morphology pass are built on the same engine.
//!
//! ```
//! use bambara_core::Tokenizer;
//!
//! let tokenizer = Tokenizer::builder()
//!     .lowercase(true)
//!     .split_compounds(true)
//!     .build()?;
//!
//! let tokens = tokenizer.tokenize("N’tɛ donni kɛnɛya 1000 la.");
//! assert_eq!(
//!     tokens,
//!     vec!["n’tɛ", "donni", "kɛnɛya", "<num_1000>", "la", "."]
//! );
//! # Ok::<(), bambara_core::TokenizerError>(())
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod rules;
pub mod tokenizer;

// Re-export key types
pub use analysis::MorphAnalysis;
pub use config::{ConfigBuilder, TokenizerConfig};
pub use error::{Result, TokenizerError};
pub use rules::{RawToken, SegmentRule, Segments, CONTRACTIONS, DIACRITIC_MAP, MORPH_SUFFIXES};
pub use tokenizer::{Tokenizer, TokenizerBuilder};

// Convenience functions

/// Tokenize text with the default configuration
pub fn tokenize_text(text: &str) -> Result<Vec<String>> {
    Ok(Tokenizer::new()?.tokenize(text))
}

/// Tokenize text with a custom configuration
pub fn tokenize_with_config(text: &str, config: TokenizerConfig) -> Result<Vec<String>> {
    Ok(Tokenizer::with_config(config)?.tokenize(text))
}
