//! Tokenizer error types

use thiserror::Error;

/// Errors raised while constructing a tokenizer.
///
/// Tokenization itself never fails: malformed or empty input yields an
/// empty token sequence, not an error.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A rule pattern failed to compile
    #[error("pattern `{pattern}` failed to compile: {message}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// The regex engine's diagnostic
        message: String,
    },
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
