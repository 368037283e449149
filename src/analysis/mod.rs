//! Text analysis pipeline for comment preprocessing.
//!
//! The classifier core consumes already-tokenized documents; this module is
//! the collaborator that produces them. Raw comment text flows through a
//! tokenizer and a chain of token filters:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! [`analyzer::CommentAnalyzer`] is the canned pipeline used by the CLI:
//! word extraction, lowercasing, English stop-word removal, and light
//! suffix stemming.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, CommentAnalyzer, PipelineAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter, StemFilter, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer};
