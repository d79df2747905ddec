// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token normalization: the seam between the engine and whatever produced
//! the dictionary.
//!
//! The engine never tokenizes documents - that happened upstream, when the
//! term dictionary was built. What it does need is to push *query operands*
//! through the same normalization, so `Yonder,` finds the term `yonder`
//! and a stop word collapses to the match-everything marker. The
//! [`Tokenizer`] trait is that seam; [`BasicTokenizer`] is the default
//! binding and should mirror the pipeline that built the dictionary.

use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Words too common to carry any retrieval signal.
///
/// Filtering these at query time is what makes a lower-case `and` or `or`
/// operand behave as "no constraint" rather than as a term lookup that
/// matches nothing. Negation words (`no`, `not`) are deliberately absent -
/// they carry meaning in queries.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as",
        "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
        "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
        "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
        "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my",
        "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
        "same", "she", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
        "who", "whom", "why", "will", "with", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Normalize a single word: strip diacritics, lowercase, and drop anything
/// that is not alphanumeric.
///
/// - "Café!" → "cafe"
/// - "naïve" → "naive"
/// - "--" → ""
///
/// Uses NFD decomposition so accented characters reduce to their base
/// letter plus combining marks, which are then filtered out.
pub fn normalize(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Normalize a wildcard pattern: each literal segment goes through
/// [`normalize`], the `*` markers stay put.
///
/// - "Yok*" → "yok*"
/// - "Y*L," → "y*l"
///
/// Patterns never pass through a [`Tokenizer`] - tokenizers strip
/// punctuation, and `*` would not survive.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern
        .split('*')
        .map(|segment| normalize(segment))
        .collect::<Vec<_>>()
        .join("*")
}

/// Check if a character is a combining mark (diacritic).
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// The external-collaborator shape fixed by the engine: text in,
/// `(byte offset, normalized token)` pairs out. Stop words, pure
/// punctuation, and accent-only words yield nothing.
///
/// `Send + Sync` so a loaded engine can be shared across threads.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<(usize, String)>;
}

/// Default tokenizer: whitespace splitting, diacritic folding, lowercase,
/// punctuation stripping, stop-word removal.
///
/// Deliberately does *not* stem or lemmatize; if the dictionary was built
/// with a heavier pipeline, bind that pipeline through [`Tokenizer`]
/// instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTokenizer;

impl Tokenizer for BasicTokenizer {
    fn tokenize(&self, text: &str) -> Vec<(usize, String)> {
        let mut tokens = Vec::new();
        let mut rest = text;
        let mut offset = 0;
        while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
            let word_start = offset + start;
            rest = &rest[start..];
            let end = rest
                .find(char::is_whitespace)
                .unwrap_or(rest.len());
            let normalized = normalize(&rest[..end]);
            if !normalized.is_empty() && !is_stop_word(&normalized) {
                tokens.push((word_start, normalized));
            }
            offset = word_start + end;
            rest = &rest[end..];
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let tokens = BasicTokenizer.tokenize("hello world");
        assert_eq!(tokens, vec![(0, "hello".to_string()), (6, "world".to_string())]);
    }

    #[test]
    fn test_tokenize_offsets_skip_whitespace_runs() {
        let tokens = BasicTokenizer.tokenize("  hello   world");
        assert_eq!(tokens, vec![(2, "hello".to_string()), (10, "world".to_string())]);
    }

    #[test]
    fn test_tokenize_normalizes_case_and_punctuation() {
        let tokens = BasicTokenizer.tokenize("Hello, WORLD!");
        assert_eq!(tokens[0].1, "hello");
        assert_eq!(tokens[1].1, "world");
    }

    #[test]
    fn test_tokenize_folds_diacritics() {
        let tokens = BasicTokenizer.tokenize("café naïve");
        assert_eq!(tokens[0].1, "cafe");
        assert_eq!(tokens[1].1, "naive");
    }

    #[test]
    fn test_stop_words_and_punctuation_yield_nothing() {
        assert!(BasicTokenizer.tokenize("and").is_empty());
        assert!(BasicTokenizer.tokenize("or").is_empty());
        assert!(BasicTokenizer.tokenize("the").is_empty());
        assert!(BasicTokenizer.tokenize("!!! ...").is_empty());
    }

    #[test]
    fn test_negation_words_survive() {
        assert_eq!(BasicTokenizer.tokenize("not")[0].1, "not");
        assert_eq!(BasicTokenizer.tokenize("no")[0].1, "no");
    }

    #[test]
    fn test_normalize_pattern_keeps_stars() {
        assert_eq!(normalize_pattern("Yok*"), "yok*");
        assert_eq!(normalize_pattern("Y*L,"), "y*l");
        assert_eq!(normalize_pattern("*"), "*");
        assert_eq!(normalize_pattern("caf*é"), "caf*e");
    }
}
