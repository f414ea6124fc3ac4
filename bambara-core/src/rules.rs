//! Segmentation rule and fixed orthography tables
//!
//! Bambara orthography correctness depends on exact character class
//! membership, so the rule patterns keep their classes verbatim: word
//! characters plus both apostrophe variants plus the hyphen, a fixed ASCII
//! punctuation set, and digit groups.

use crate::error::{Result, TokenizerError};
use regex::{CaptureMatches, Regex};

/// The segmentation rule: word-like span, punctuation character, or digit
/// group, preferred in that order at every text position.
pub(crate) const TOKEN_PATTERN: &str =
    r##"([\w'’-]+(?:-\w+)*)|([!"#$%&'()*+,./:;<=>?@\[\\\]^_`{|}~])|(\d[\d,.]*)"##;

/// Accepted Bambara orthography: word characters, apostrophes, hyphen.
pub(crate) const BAMBARA_WORD_PATTERN: &str = r"^[\w'’-]+$";

/// Sentence-terminator runs with optional trailing whitespace.
pub(crate) const SENTENCE_END_PATTERN: &str = r"[.!?]+\s*";

/// Contraction prefixes and their expansions.
///
/// Scanned top-down; the first prefix a token starts with wins, so table
/// order is part of the contract.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("n’", "ne"),
    ("m’", "ma"),
    ("t’", "te"),
    ("b’", "be"),
];

/// Suffixes tried by the morphology stub, in order. First match wins; there
/// is no longest-suffix preference.
pub const MORPH_SUFFIXES: &[&str] = &["-la", "-ma", "-ya", "-w"];

/// Alternative diacritic spellings and their normalized forms.
pub const DIACRITIC_MAP: &[(char, char)] = &[('ɛ', 'è'), ('ɔ', 'ò'), ('ɲ', 'ñ')];

/// A single classified match from the segmentation rule.
///
/// Exactly one classification applies per match; the enum makes a
/// multiply-classified match unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'t> {
    /// Word-like span: word characters, apostrophes, hyphens
    Word(&'t str),
    /// Single punctuation character
    Punct(&'t str),
    /// Digit group, possibly with comma or period separators
    Number(&'t str),
}

impl<'t> RawToken<'t> {
    /// The matched text, regardless of classification
    pub fn text(&self) -> &'t str {
        match self {
            RawToken::Word(s) | RawToken::Punct(s) | RawToken::Number(s) => s,
        }
    }
}

/// Compiled segmentation rule for Bambara text.
#[derive(Debug, Clone)]
pub struct SegmentRule {
    pattern: Regex,
    bambara_word: Regex,
}

impl SegmentRule {
    /// Compile the rule patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(TOKEN_PATTERN)?,
            bambara_word: compile(BAMBARA_WORD_PATTERN)?,
        })
    }

    /// Scan `text` left to right, lazily yielding every maximal match.
    ///
    /// Characters no alternative matches (whitespace, mostly) are skipped.
    pub fn segments<'r, 't>(&'r self, text: &'t str) -> Segments<'r, 't> {
        Segments {
            inner: self.pattern.captures_iter(text),
        }
    }

    /// Whether `token` stays within the accepted Bambara orthography set
    pub fn is_bambara_word(&self, token: &str) -> bool {
        self.bambara_word.is_match(token)
    }
}

/// Lazy iterator over raw matches of the segmentation rule.
pub struct Segments<'r, 't> {
    inner: CaptureMatches<'r, 't>,
}

impl<'r, 't> Iterator for Segments<'r, 't> {
    type Item = RawToken<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        // A capture with no participating group is discarded.
        for caps in self.inner.by_ref() {
            if let Some(m) = caps.get(1) {
                return Some(RawToken::Word(m.as_str()));
            }
            if let Some(m) = caps.get(2) {
                return Some(RawToken::Punct(m.as_str()));
            }
            if let Some(m) = caps.get(3) {
                return Some(RawToken::Number(m.as_str()));
            }
        }
        None
    }
}

/// Compile a rule pattern, carrying the pattern text in the error.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| TokenizerError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Expansion for a token that starts with a known contraction prefix.
///
/// Returns the expansion and the remainder after the prefix; the remainder
/// is empty when the token equals the prefix exactly.
pub(crate) fn expand_contraction(token: &str) -> Option<(&'static str, &str)> {
    for &(prefix, expansion) in CONTRACTIONS {
        if let Some(rest) = token.strip_prefix(prefix) {
            return Some((expansion, rest));
        }
    }
    None
}

/// Split off the first matching morphology suffix.
pub(crate) fn strip_morph_suffix(token: &str) -> Option<(&str, &'static str)> {
    for &suffix in MORPH_SUFFIXES {
        if let Some(root) = token.strip_suffix(suffix) {
            return Some((root, suffix));
        }
    }
    None
}

/// Rewrite alternative diacritic spellings across the whole string.
pub(crate) fn normalize_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| {
            DIACRITIC_MAP
                .iter()
                .find(|&&(from, _)| from == c)
                .map_or(c, |&(_, to)| to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> SegmentRule {
        SegmentRule::new().unwrap()
    }

    #[test]
    fn test_words_and_punctuation() {
        let segments: Vec<_> = rule().segments("Aw ye!").collect();
        assert_eq!(
            segments,
            vec![
                RawToken::Word("Aw"),
                RawToken::Word("ye"),
                RawToken::Punct("!"),
            ]
        );
    }

    #[test]
    fn test_compound_matches_as_one_token() {
        let segments: Vec<_> = rule().segments("tɔgɔ-ɲuman-fana").collect();
        assert_eq!(segments, vec![RawToken::Word("tɔgɔ-ɲuman-fana")]);
    }

    #[test]
    fn test_apostrophes_are_word_forming() {
        let segments: Vec<_> = rule().segments("n’tɛ n'ta").collect();
        assert_eq!(
            segments,
            vec![RawToken::Word("n’tɛ"), RawToken::Word("n'ta")]
        );
    }

    #[test]
    fn test_digit_runs_match_the_word_alternative() {
        // \w subsumes digits, so the word alternative wins at a digit.
        let segments: Vec<_> = rule().segments("kalo 12").collect();
        assert_eq!(segments, vec![RawToken::Word("kalo"), RawToken::Word("12")]);
    }

    #[test]
    fn test_separated_digit_group_splits_at_separators() {
        let segments: Vec<_> = rule().segments("1,000").collect();
        assert_eq!(
            segments,
            vec![
                RawToken::Word("1"),
                RawToken::Punct(","),
                RawToken::Word("000"),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let segments: Vec<_> = rule().segments("  \t\n ").collect();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_raw_token_text() {
        assert_eq!(RawToken::Word("muso").text(), "muso");
        assert_eq!(RawToken::Punct(".").text(), ".");
        assert_eq!(RawToken::Number("12").text(), "12");
    }

    #[test]
    fn test_is_bambara_word() {
        let rule = rule();
        assert!(rule.is_bambara_word("tɔgɔ-ɲuman"));
        assert!(rule.is_bambara_word("n’tɛ"));
        assert!(!rule.is_bambara_word("<NUM_5>"));
        assert!(!rule.is_bambara_word("hello!"));
        assert!(!rule.is_bambara_word(""));
    }

    #[test]
    fn test_expand_contraction() {
        assert_eq!(expand_contraction("n’tɛ"), Some(("ne", "tɛ")));
        assert_eq!(expand_contraction("m’a"), Some(("ma", "a")));
        assert_eq!(expand_contraction("t’a"), Some(("te", "a")));
        assert_eq!(expand_contraction("b’a"), Some(("be", "a")));
        assert_eq!(expand_contraction("muso"), None);
    }

    #[test]
    fn test_expand_contraction_exact_prefix_leaves_empty_remainder() {
        assert_eq!(expand_contraction("n’"), Some(("ne", "")));
    }

    #[test]
    fn test_ascii_apostrophe_is_not_a_contraction_mark() {
        // The table only carries the right-quote forms.
        assert_eq!(expand_contraction("n'tɛ"), None);
    }

    #[test]
    fn test_strip_morph_suffix() {
        assert_eq!(strip_morph_suffix("sigi-la"), Some(("sigi", "-la")));
        assert_eq!(strip_morph_suffix("so-ma"), Some(("so", "-ma")));
        assert_eq!(strip_morph_suffix("den-w"), Some(("den", "-w")));
        assert_eq!(strip_morph_suffix("muso"), None);
        // Unhyphenated forms never match; the stub is literal about hyphens.
        assert_eq!(strip_morph_suffix("musow"), None);
    }

    #[test]
    fn test_normalize_diacritics() {
        assert_eq!(normalize_diacritics("ɛɔɲ"), "èòñ");
        assert_eq!(normalize_diacritics("kɛnɛya"), "kènèya");
        assert_eq!(normalize_diacritics("muso"), "muso");
    }
}
