//! Token filter implementations for token transformation.
//!
//! Filters run after the tokenizer and transform the token stream in place:
//! lowercasing, stop-word removal, and suffix stemming. Each filter is
//! independent; the [`PipelineAnalyzer`](crate::analysis::analyzer::PipelineAnalyzer)
//! chains them in the order they were added.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A filter that converts token text to lowercase.
///
/// # Examples
///
/// ```
/// use spamsift::analysis::token::Token;
/// use spamsift::analysis::token_filter::{Filter, LowercaseFilter};
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
/// let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(filtered[0].text, "hello");
/// assert_eq!(filtered[1].text, "world");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            token.text = token.text.to_lowercase();
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Default English stop words list.
///
/// Common English words that carry no class signal in short comments.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_STOP_WORD_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|word| word.to_string())
            .collect(),
    )
});

/// A filter that removes stop words from the token stream.
#[derive(Debug, Clone)]
pub struct StopFilter {
    /// The set of stop words to remove.
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_STOP_WORD_SET),
        }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Get the number of stop words in this filter.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// Common English suffixes stripped by the stem filter, longest first.
const DEFAULT_SUFFIXES: &[&str] = &[
    "ment", "ness", "tion", "sion", "able", "ible", "ies", "ied", "ful", "ing", "est", "ed", "er",
    "ly", "es", "s",
];

/// A filter that applies light suffix stemming to each token.
///
/// This is not a full Porter stemmer; it strips one common English suffix
/// when the remaining stem keeps at least three characters, which is enough
/// to collapse the inflection variants seen in short comments.
#[derive(Debug, Clone)]
pub struct StemFilter {
    /// Suffixes to strip, tried longest first.
    suffixes: Vec<String>,
}

impl StemFilter {
    /// Create a stem filter with the default suffix list.
    pub fn new() -> Self {
        StemFilter {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a stem filter with custom suffixes.
    pub fn with_suffixes(mut suffixes: Vec<String>) -> Self {
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.len()));
        StemFilter { suffixes }
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> String {
        if word.len() <= 3 {
            return word.to_string();
        }

        for suffix in &self.suffixes {
            if word.len() > suffix.len() + 2 && word.ends_with(suffix.as_str()) {
                return word[..word.len() - suffix.len()].to_string();
            }
        }

        word.to_string()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = self.clone();
        Ok(Box::new(tokens.map(move |mut token| {
            token.text = stemmer.stem(&token.text);
            token
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn stream(words: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let result: Vec<_> = filter.filter(stream(&["FREE", "Money"])).unwrap().collect();

        assert_eq!(result[0].text, "free");
        assert_eq!(result[1].text, "money");
    }

    #[test]
    fn test_stop_filter_removes_default_words() {
        let filter = StopFilter::new();
        let result: Vec<_> = filter
            .filter(stream(&["the", "quick", "brown"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "quick");
        assert_eq!(result[1].text, "brown");
    }

    #[test]
    fn test_stop_filter_custom_words() {
        let filter = StopFilter::from_words(vec!["quick"]);
        let result: Vec<_> = filter
            .filter(stream(&["the", "quick", "brown"]))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "the");
    }

    #[test]
    fn test_stem_filter_strips_suffixes() {
        let filter = StemFilter::new();
        assert_eq!(filter.stem("winning"), "winn");
        assert_eq!(filter.stem("subscribers"), "subscriber");
        assert_eq!(filter.stem("payment"), "pay");
        assert_eq!(filter.stem("free"), "free");
        // Short words are left alone
        assert_eq!(filter.stem("is"), "is");
    }

    #[test]
    fn test_stem_filter_keeps_minimum_stem_length() {
        let filter = StemFilter::new();
        // "song" ends with "g"? no suffix matches; "sing" would lose too much
        assert_eq!(filter.stem("sing"), "sing");
    }
}
