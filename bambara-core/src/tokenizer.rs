//! The tokenizer engine and its transformation pipeline

use crate::config::{ConfigBuilder, TokenizerConfig};
use crate::error::Result;
use crate::rules::{self, SegmentRule, Segments, SENTENCE_END_PATTERN};
use regex::Regex;
use std::collections::HashSet;

/// Preprocessing hook applied to the input before segmentation.
type Preprocessor = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Rule-based tokenizer for Bambara text.
///
/// The configuration is captured at construction and never mutated. Every
/// call to [`tokenize`](Self::tokenize) is a pure function of the input
/// text and that configuration, so shared references may tokenize
/// concurrently; the one mutating operation,
/// [`add_domain_words`](Self::add_domain_words), takes `&mut self` and must
/// therefore be serialized against readers by the caller.
pub struct Tokenizer {
    pub(crate) config: TokenizerConfig,
    pub(crate) rule: SegmentRule,
    pub(crate) sentence_end: Regex,
    domain_words: HashSet<String>,
    preprocessor: Option<Preprocessor>,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("config", &self.config)
            .field("domain_words", &self.domain_words)
            .field(
                "preprocessor",
                &self.preprocessor.as_ref().map(|_| "<hook>"),
            )
            .finish()
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TokenizerConfig::default())
    }

    /// Create a tokenizer with a custom configuration
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        Ok(Self {
            config,
            rule: SegmentRule::new()?,
            sentence_end: rules::compile(SENTENCE_END_PATTERN)?,
            domain_words: HashSet::new(),
            preprocessor: None,
        })
    }

    /// Create a builder
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// The captured configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Raw matches of the segmentation rule, before any post-processing
    pub fn segments<'r, 't>(&'r self, text: &'t str) -> Segments<'r, 't> {
        self.rule.segments(text)
    }

    /// Tokenize `text` into an ordered sequence of words, numbers, and
    /// punctuation.
    ///
    /// Pure digit runs are emitted as `<NUM_{value}>` markers. Contraction
    /// expansion and compound splitting run per token, in that order, and a
    /// final pass applies stopword filtering, the `remove_punct` alphabetic
    /// filter, and lowercasing. Stopword membership and the alphabetic test
    /// see the pre-lowercase value; kept tokens are emitted lowercased.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = match &self.preprocessor {
            Some(hook) => hook(text),
            None => text.to_string(),
        };

        let mut processed = Vec::new();
        for raw in self.rule.segments(&text) {
            let token = raw.text();

            if is_integer(token) {
                processed.push(format!("<NUM_{token}>"));
                continue;
            }

            for part in self.split_contractions(token) {
                self.split_compounds_into(part, &mut processed);
            }
        }

        processed
            .into_iter()
            .filter(|t| !self.config.stopwords.contains(t))
            .filter(|t| !self.config.remove_punct || is_alphabetic(t))
            .map(|t| {
                if self.config.lowercase {
                    t.to_lowercase()
                } else {
                    t
                }
            })
            .collect()
    }

    /// Register domain-specific vocabulary.
    ///
    /// The words are stored for callers to consult; the pipeline itself
    /// does not use them.
    pub fn add_domain_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_words.extend(words.into_iter().map(Into::into));
    }

    /// Registered domain vocabulary
    pub fn domain_words(&self) -> &HashSet<String> {
        &self.domain_words
    }

    /// Expand a leading contraction into `[expansion, remainder]` unless
    /// the configuration keeps contracted forms intact. The remainder may
    /// be empty; only the final filters drop empty tokens.
    fn split_contractions<'a>(&self, token: &'a str) -> Vec<&'a str> {
        if self.config.keep_contractions {
            return vec![token];
        }

        match rules::expand_contraction(token) {
            Some((expansion, rest)) => vec![expansion, rest],
            None => vec![token],
        }
    }

    /// Append `token` to `out`, split at every hyphen when compound
    /// splitting is enabled. Empty parts from leading, trailing, or doubled
    /// hyphens are kept as-is.
    fn split_compounds_into(&self, token: &str, out: &mut Vec<String>) {
        if self.config.split_compounds && token.contains('-') {
            out.extend(token.split('-').map(str::to_string));
        } else {
            out.push(token.to_string());
        }
    }
}

/// Pure ASCII digit run with at least one digit. Groups carrying comma or
/// period separators do not qualify and flow through the normal pipeline.
fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty and entirely alphabetic, the survival condition under
/// `remove_punct`. `<NUM_…>` markers fail it and are dropped too.
fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Builder for [`Tokenizer`].
///
/// Wraps the configuration builder and adds the preprocessing hook, which
/// is applied to the input text before segmentation.
pub struct TokenizerBuilder {
    config: ConfigBuilder,
    preprocessor: Option<Preprocessor>,
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ConfigBuilder::default(),
            preprocessor: None,
        }
    }

    /// Lowercase every output token
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.config = self.config.lowercase(enabled);
        self
    }

    /// Drop tokens that are not entirely alphabetic
    pub fn remove_punct(mut self, enabled: bool) -> Self {
        self.config = self.config.remove_punct(enabled);
        self
    }

    /// Add stopwords to exclude from the output
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.stopwords(words);
        self
    }

    /// Pass contracted forms through unexpanded
    pub fn keep_contractions(mut self, enabled: bool) -> Self {
        self.config = self.config.keep_contractions(enabled);
        self
    }

    /// Split hyphenated compounds into their parts
    pub fn split_compounds(mut self, enabled: bool) -> Self {
        self.config = self.config.split_compounds(enabled);
        self
    }

    /// Install a preprocessing hook run on the input before segmentation
    pub fn preprocessor<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.preprocessor = Some(Box::new(hook));
        self
    }

    /// Build the tokenizer
    pub fn build(self) -> Result<Tokenizer> {
        let mut tokenizer = Tokenizer::with_config(self.config.build()?)?;
        tokenizer.preprocessor = self.preprocessor;
        Ok(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(tokenizer: &Tokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text)
    }

    #[test]
    fn test_contractions_kept_by_default() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokens(&tokenizer, "n’tɛ"), vec!["n’tɛ"]);
    }

    #[test]
    fn test_contraction_expansion() {
        let tokenizer = Tokenizer::builder()
            .keep_contractions(false)
            .build()
            .unwrap();
        assert_eq!(tokens(&tokenizer, "n’tɛ"), vec!["ne", "tɛ"]);
    }

    #[test]
    fn test_bare_contraction_keeps_empty_remainder() {
        let tokenizer = Tokenizer::builder()
            .keep_contractions(false)
            .build()
            .unwrap();
        assert_eq!(tokens(&tokenizer, "n’"), vec!["ne", ""]);
    }

    #[test]
    fn test_compounds_intact_by_default() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokens(&tokenizer, "tɔgɔ-ɲuman"), vec!["tɔgɔ-ɲuman"]);
    }

    #[test]
    fn test_compound_splitting() {
        let tokenizer = Tokenizer::builder().split_compounds(true).build().unwrap();
        assert_eq!(tokens(&tokenizer, "tɔgɔ-ɲuman"), vec!["tɔgɔ", "ɲuman"]);
        assert_eq!(
            tokens(&tokenizer, "tɔgɔ-ɲuman-fana"),
            vec!["tɔgɔ", "ɲuman", "fana"]
        );
    }

    #[test]
    fn test_trailing_hyphen_keeps_empty_part() {
        let tokenizer = Tokenizer::builder().split_compounds(true).build().unwrap();
        assert_eq!(tokens(&tokenizer, "tɔgɔ-"), vec!["tɔgɔ", ""]);
    }

    #[test]
    fn test_numeric_marker() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokens(&tokenizer, "1000"), vec!["<NUM_1000>"]);
    }

    #[test]
    fn test_numeric_marker_is_lowercased_with_the_rest() {
        let tokenizer = Tokenizer::builder().lowercase(true).build().unwrap();
        assert_eq!(tokens(&tokenizer, "1000"), vec!["<num_1000>"]);
    }

    #[test]
    fn test_separated_digits_are_not_marked_whole() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(
            tokens(&tokenizer, "1,000"),
            vec!["<NUM_1>", ",", "<NUM_000>"]
        );
    }

    #[test]
    fn test_remove_punct_drops_markers_and_punctuation() {
        let tokenizer = Tokenizer::builder().remove_punct(true).build().unwrap();
        assert_eq!(tokens(&tokenizer, "muso 1000 don."), vec!["muso", "don"]);
    }

    #[test]
    fn test_remove_punct_drops_contracted_forms() {
        // The right-quote is not alphabetic, so unexpanded contractions go.
        let tokenizer = Tokenizer::builder().remove_punct(true).build().unwrap();
        assert_eq!(tokens(&tokenizer, "n’tɛ muso"), vec!["muso"]);
    }

    #[test]
    fn test_stopwords_match_before_lowercasing() {
        let tokenizer = Tokenizer::builder()
            .lowercase(true)
            .stopwords(["Ye"])
            .build()
            .unwrap();
        assert_eq!(tokens(&tokenizer, "Ye ye"), vec!["ye"]);
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokens(&tokenizer, "").is_empty());
        assert!(tokens(&tokenizer, "   \n\t").is_empty());
    }

    #[test]
    fn test_pipeline_order_end_to_end() {
        let tokenizer = Tokenizer::builder()
            .lowercase(true)
            .split_compounds(true)
            .build()
            .unwrap();
        assert_eq!(
            tokens(&tokenizer, "N’tɛ donni kɛnɛya 1000 la."),
            vec!["n’tɛ", "donni", "kɛnɛya", "<num_1000>", "la", "."]
        );
    }

    #[test]
    fn test_contraction_split_runs_before_compound_split() {
        let tokenizer = Tokenizer::builder()
            .keep_contractions(false)
            .split_compounds(true)
            .build()
            .unwrap();
        assert_eq!(
            tokens(&tokenizer, "n’tɔgɔ-ɲuman"),
            vec!["ne", "tɔgɔ", "ɲuman"]
        );
    }

    #[test]
    fn test_preprocessor_hook_runs_first() {
        let tokenizer = Tokenizer::builder()
            .preprocessor(|text| text.replace('_', " "))
            .build()
            .unwrap();
        assert_eq!(tokens(&tokenizer, "muso_don"), vec!["muso", "don"]);
    }

    #[test]
    fn test_segments_exposes_raw_matches() {
        use crate::rules::RawToken;

        let tokenizer = Tokenizer::new().unwrap();
        let raw: Vec<_> = tokenizer.segments("muso don.").collect();
        assert_eq!(
            raw,
            vec![
                RawToken::Word("muso"),
                RawToken::Word("don"),
                RawToken::Punct("."),
            ]
        );
    }

    #[test]
    fn test_add_domain_words() {
        let mut tokenizer = Tokenizer::new().unwrap();
        tokenizer.add_domain_words(["kɛnɛya", "dɔgɔtɔrɔ"]);
        assert!(tokenizer.domain_words().contains("kɛnɛya"));
        assert_eq!(tokenizer.domain_words().len(), 2);
    }

    #[test]
    fn test_domain_words_do_not_affect_tokenize() {
        let mut tokenizer = Tokenizer::new().unwrap();
        let before = tokens(&tokenizer, "kɛnɛya so");
        tokenizer.add_domain_words(["kɛnɛya"]);
        assert_eq!(tokens(&tokenizer, "kɛnɛya so"), before);
    }
}
