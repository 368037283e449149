//! Evaluation metrics for classifier output.
//!
//! The positive class is `"1"` (spam); everything else counts as negative.

use crate::error::{Result, SpamsiftError};

/// The positive class for confusion-matrix bookkeeping.
const POSITIVE_CLASS: &str = "1";

/// A binary confusion matrix over predicted and actual labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    /// Spam predicted as spam.
    pub true_positives: usize,
    /// Spam predicted as ham.
    pub false_negatives: usize,
    /// Ham predicted as spam.
    pub false_positives: usize,
    /// Ham predicted as ham.
    pub true_negatives: usize,
}

impl ConfusionMatrix {
    /// Build a confusion matrix from aligned prediction and truth slices.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when the slices differ in length.
    pub fn from_labels(predicted: &[String], actual: &[String]) -> Result<Self> {
        if predicted.len() != actual.len() {
            return Err(SpamsiftError::invalid_argument(format!(
                "predicted and actual labels have different lengths ({} vs {})",
                predicted.len(),
                actual.len()
            )));
        }

        let mut matrix = ConfusionMatrix::default();
        for (pred, real) in predicted.iter().zip(actual.iter()) {
            match (real == POSITIVE_CLASS, pred == POSITIVE_CLASS) {
                (true, true) => matrix.true_positives += 1,
                (true, false) => matrix.false_negatives += 1,
                (false, true) => matrix.false_positives += 1,
                (false, false) => matrix.true_negatives += 1,
            }
        }

        Ok(matrix)
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.true_positives + self.false_negatives + self.false_positives + self.true_negatives
    }

    /// Fraction of samples classified correctly.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / total as f64
    }
}
