//! Analysis operations built on the tokenizer engine
//!
//! Secondary entry points: they consume the token sequence `tokenize`
//! produces or reuse the compiled rule machinery, and keep no state of
//! their own.

use crate::rules;
use crate::tokenizer::Tokenizer;
use std::collections::HashMap;

/// Result of the shallow morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphAnalysis {
    /// The token with the matched suffix removed, or the whole token
    pub root: String,
    /// The matched suffix, if any
    pub suffix: Option<String>,
}

impl Tokenizer {
    /// Split `text` into sentences on runs of `.`, `!`, `?`.
    ///
    /// Terminators stay attached to the segment they close. Segments are
    /// trimmed and empty ones discarded.
    pub fn sentence_tokenize(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut last = 0;

        for m in self.sentence_end.find_iter(text) {
            push_trimmed(&mut sentences, &text[last..m.end()]);
            last = m.end();
        }
        push_trimmed(&mut sentences, &text[last..]);

        sentences
    }

    /// Tokenize `text` and count token occurrences
    pub fn word_frequency(&self, text: &str) -> HashMap<String, usize> {
        let mut freq = HashMap::new();
        for token in self.tokenize(text) {
            *freq.entry(token).or_insert(0) += 1;
        }
        freq
    }

    /// Rewrite the alternative diacritic spellings ɛ, ɔ, ɲ as è, ò, ñ.
    ///
    /// Opt-in transform over the whole string; `tokenize` never applies it.
    pub fn normalize_diacritics(&self, text: &str) -> String {
        rules::normalize_diacritics(text)
    }

    /// Tokens that fall outside the accepted Bambara orthography set.
    ///
    /// Meant for external token lists as much as for this engine's output:
    /// anything containing a character beyond word characters, apostrophes,
    /// and the hyphen is flagged.
    pub fn detect_non_bambara(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.rule.is_bambara_word(token))
            .cloned()
            .collect()
    }

    /// Character n-grams of every token of `text`, flattened in order.
    ///
    /// A token shorter than `n` contributes nothing; `n == 0` yields an
    /// empty sequence.
    pub fn ngrams(&self, text: &str, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }

        let mut grams = Vec::new();
        for token in self.tokenize(text) {
            let chars: Vec<char> = token.chars().collect();
            for window in chars.windows(n) {
                grams.push(window.iter().collect());
            }
        }
        grams
    }

    /// Shallow suffix-strip analysis of a single token.
    ///
    /// Tries the fixed suffix list in order and splits on the first match.
    pub fn analyze_morphology(&self, token: &str) -> MorphAnalysis {
        match rules::strip_morph_suffix(token) {
            Some((root, suffix)) => MorphAnalysis {
                root: root.to_string(),
                suffix: Some(suffix.to_string()),
            },
            None => MorphAnalysis {
                root: token.to_string(),
                suffix: None,
            },
        }
    }
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
