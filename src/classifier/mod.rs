//! Multinomial Naive-Bayes classifier core.
//!
//! This module is the numeric heart of the crate: vocabulary and frequency
//! accumulation, Laplace-smoothed parameter estimation, the ratio-threshold
//! decision rule, and JSON model snapshots.
//!
//! # Architecture
//!
//! - [`Vocabulary`] / [`FrequencyTable`]: token bookkeeping built during `fit`
//! - [`MultinomialNb`]: the model — `fit`, `predict`, `class_scores`
//! - [`snapshot`]: `save`/`load` of the full parameter set
//!
//! # Example
//!
//! ```
//! use spamsift::classifier::MultinomialNb;
//!
//! # fn main() -> spamsift::error::Result<()> {
//! let documents = vec![
//!     vec!["free".to_string(), "money".to_string()],
//!     vec!["hi".to_string()],
//! ];
//! let labels = vec![1, 0];
//!
//! let mut model = MultinomialNb::new();
//! model.fit(&documents, &labels)?;
//!
//! let predictions = model.predict(&[vec!["free".to_string(), "money".to_string()]])?;
//! assert_eq!(predictions, vec!["1".to_string()]);
//! # Ok(())
//! # }
//! ```

mod multinomial_nb;
pub mod snapshot;
mod vocabulary;

pub use multinomial_nb::{
    DEFAULT_DECISION_THRESHOLD, MODEL_NAME, MultinomialNb, MultinomialNbConfig,
};
pub use snapshot::ModelSnapshot;
pub use vocabulary::{FrequencyTable, Vocabulary};
