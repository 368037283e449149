//! # Spamsift
//!
//! A multinomial Naive-Bayes classifier for filtering spam in short comments.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Laplace-smoothed multinomial Naive-Bayes training
//! - Ratio-threshold binary decision rule tuned for imbalanced data
//! - JSON model snapshots reusable without retraining
//! - Pluggable text analysis pipeline

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod evaluation;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, CommentAnalyzer};
    pub use crate::classifier::{MultinomialNb, MultinomialNbConfig};
    pub use crate::dataset::Dataset;
    pub use crate::error::{Result, SpamsiftError};
    pub use crate::evaluation::ConfusionMatrix;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
