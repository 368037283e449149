//! Analyzer implementations that combine tokenizers and filters.
//!
//! An [`Analyzer`] is the complete text processing pipeline: raw comment text
//! in, normalized token stream out. [`CommentAnalyzer`] provides the default
//! pipeline the CLI uses; [`PipelineAnalyzer`] lets callers assemble their
//! own tokenizer and filter chain.
//!
//! # Examples
//!
//! ```
//! use spamsift::analysis::analyzer::{Analyzer, CommentAnalyzer};
//!
//! let analyzer = CommentAnalyzer::new().unwrap();
//! let tokens: Vec<String> = analyzer.analyze_to_terms("Get FREE money now!").unwrap();
//!
//! assert!(tokens.contains(&"free".to_string()));
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert raw text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;

    /// Analyze the given text and collect the token terms.
    ///
    /// Convenience for callers (the classifier, the CLI) that only need the
    /// normalized strings.
    fn analyze_to_terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the number of filters in the pipeline.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The default analyzer for comment text.
///
/// Pipeline: regex word tokenizer, lowercasing, English stop-word removal,
/// light suffix stemming. This mirrors the preprocessing the training
/// datasets went through, so tokens line up with trained vocabularies.
#[derive(Clone)]
pub struct CommentAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl CommentAnalyzer {
    /// Create a new comment analyzer with the default pipeline.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let pipeline = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("comment");

        Ok(CommentAnalyzer { pipeline })
    }
}

impl Analyzer for CommentAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &str {
        self.pipeline.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_analyzer_applies_filters_in_order() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));

        let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_comment_analyzer_normalizes() {
        let analyzer = CommentAnalyzer::new().unwrap();
        let terms = analyzer.analyze_to_terms("The FREE money!!").unwrap();

        // "The" is a stop word after lowercasing never reaches the output
        assert_eq!(terms, vec!["free".to_string(), "money".to_string()]);
    }

    #[test]
    fn test_comment_analyzer_empty_text() {
        let analyzer = CommentAnalyzer::new().unwrap();
        let terms = analyzer.analyze_to_terms("").unwrap();
        assert!(terms.is_empty());
    }
}
