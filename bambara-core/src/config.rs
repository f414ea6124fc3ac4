//! Tokenizer configuration
//!
//! The configuration is an immutable snapshot: the tokenizer captures it at
//! construction and never mutates it afterwards.

use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Options for the tokenization pipeline.
///
/// Unknown fields are rejected during deserialization, so a misspelled
/// option in a configuration file fails loudly instead of being silently
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Lowercase every token that survives filtering
    pub lowercase: bool,

    /// Drop tokens that are not entirely alphabetic
    pub remove_punct: bool,

    /// Tokens excluded after processing, matched case-sensitively as given
    pub stopwords: HashSet<String>,

    /// Pass contracted forms through unexpanded
    pub keep_contractions: bool,

    /// Split hyphenated compounds into their parts
    pub split_compounds: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: false,
            remove_punct: false,
            stopwords: HashSet::new(),
            keep_contractions: true,
            split_compounds: false,
        }
    }
}

impl TokenizerConfig {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`TokenizerConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: TokenizerConfig,
}

impl ConfigBuilder {
    /// Lowercase every output token
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.config.lowercase = enabled;
        self
    }

    /// Drop tokens that are not entirely alphabetic
    pub fn remove_punct(mut self, enabled: bool) -> Self {
        self.config.remove_punct = enabled;
        self
    }

    /// Add stopwords to exclude from the output
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .stopwords
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Pass contracted forms through unexpanded
    pub fn keep_contractions(mut self, enabled: bool) -> Self {
        self.config.keep_contractions = enabled;
        self
    }

    /// Split hyphenated compounds into their parts
    pub fn split_compounds(mut self, enabled: bool) -> Self {
        self.config.split_compounds = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        if self.config.stopwords.iter().any(|word| word.is_empty()) {
            return Err(TokenizerError::Config(
                "stopwords must not be empty strings".to_string(),
            ));
        }

        Ok(self.config)
    }
}
