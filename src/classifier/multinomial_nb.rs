//! Multinomial Naive-Bayes model: training, scoring, and the decision rule.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classifier::vocabulary::{FrequencyTable, Vocabulary};
use crate::error::{Result, SpamsiftError};

/// Model-kind tag written into every snapshot.
pub const MODEL_NAME: &str = "MultinomialNB";

/// Default cutoff for the spam/ham score ratio.
///
/// Values between 1.0 and 1.8 work well depending on the corpus; 1.2 keeps
/// the false positive rate low on the comment datasets this was tuned on.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 1.2;

/// Additive Laplace smoothing count applied to every (token, class) pair.
const LAPLACE_SMOOTHING: u64 = 1;

/// The positive (spam) class label.
const SPAM_CLASS: &str = "1";

/// The negative (ham) class label.
const HAM_CLASS: &str = "0";

/// Configuration for the multinomial Naive-Bayes classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNbConfig {
    /// Decision threshold for the spam/ham score ratio.
    pub threshold: f64,
}

impl Default for MultinomialNbConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }
}

/// A multinomial Naive-Bayes classifier over tokenized documents.
///
/// `fit` populates every field in one pass over the training data; the model
/// is read-only afterwards, so `&self` methods are safe to call from multiple
/// threads concurrently.
///
/// # Scoring
///
/// This model deviates from textbook Naive Bayes in two deliberate,
/// compatibility-bearing ways:
///
/// - The `log_likelihood` table stores *linear* Laplace-smoothed
///   probabilities, not their logarithms. The historical name is kept so
///   snapshots stay interchangeable with previously trained models.
/// - Document scores are the plain sum of those weights over in-vocabulary
///   tokens; the log-prior is computed during `fit` but excluded from the
///   score, which classifies better under class imbalance.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    config: MultinomialNbConfig,
    /// Per-token, per-class occurrence counts from training.
    frequency: FrequencyTable,
    /// Distinct class labels in first-seen order.
    class_names: Vec<String>,
    /// Distinct training tokens in first-seen order.
    vocabulary: Vocabulary,
    /// ln(documents in class / total documents), per class.
    log_prior: HashMap<String, f64>,
    /// Laplace-smoothed linear conditional weight per (token, class).
    /// Linear despite the name; see the type-level docs.
    log_likelihood: HashMap<String, HashMap<String, f64>>,
}

impl MultinomialNb {
    /// Create a new untrained classifier with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MultinomialNbConfig::default())
    }

    /// Create a new untrained classifier with the given configuration.
    pub fn with_config(config: MultinomialNbConfig) -> Self {
        Self {
            config,
            frequency: FrequencyTable::new(),
            class_names: Vec::new(),
            vocabulary: Vocabulary::new(),
            log_prior: HashMap::new(),
            log_likelihood: HashMap::new(),
        }
    }

    /// Reassemble a trained classifier from its parts (snapshot load path).
    pub(crate) fn from_parts(
        frequency: FrequencyTable,
        class_names: Vec<String>,
        vocabulary: Vocabulary,
        log_prior: HashMap<String, f64>,
        log_likelihood: HashMap<String, HashMap<String, f64>>,
    ) -> Self {
        Self {
            config: MultinomialNbConfig::default(),
            frequency,
            class_names,
            vocabulary,
            log_prior,
            log_likelihood,
        }
    }

    /// Train the classifier on tokenized documents and their labels.
    ///
    /// Labels are coerced to their string representation before use, so
    /// numeric `0`/`1` and string `"0"`/`"1"` labels build the same model.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when `documents` and `labels` have
    /// different lengths, or when the training set is empty.
    pub fn fit<L: ToString>(&mut self, documents: &[Vec<String>], labels: &[L]) -> Result<()> {
        if documents.len() != labels.len() {
            return Err(SpamsiftError::invalid_argument(format!(
                "documents and labels have different lengths ({} vs {})",
                documents.len(),
                labels.len()
            )));
        }
        if documents.is_empty() {
            return Err(SpamsiftError::invalid_argument(
                "training requires at least one document",
            ));
        }

        let labels: Vec<String> = labels.iter().map(|label| label.to_string()).collect();

        // Refitting rebuilds the model from scratch.
        self.frequency = FrequencyTable::new();
        self.vocabulary = Vocabulary::new();
        self.class_names = Vec::new();
        self.log_prior = HashMap::new();
        self.log_likelihood = HashMap::new();

        for label in &labels {
            if !self.class_names.contains(label) {
                self.class_names.push(label.clone());
            }
        }

        // Builder pass: vocabulary and per-class token counts.
        for (document, label) in documents.iter().zip(labels.iter()) {
            for token in document {
                self.vocabulary.insert(token);
                self.frequency.increment(token, label);
            }
        }

        // Estimator pass: priors and smoothed likelihood weights.
        let num_documents = documents.len();
        for class_name in &self.class_names {
            let num_documents_class = labels.iter().filter(|label| *label == class_name).count();

            self.log_prior.insert(
                class_name.clone(),
                (num_documents_class as f64 / num_documents as f64).ln(),
            );

            let denominator = self.frequency.class_total(class_name) as f64
                + self.vocabulary.len() as f64 * LAPLACE_SMOOTHING as f64;

            for token in self.vocabulary.terms() {
                let weight = (self.frequency.count(token, class_name) + LAPLACE_SMOOTHING) as f64
                    / denominator;
                self.log_likelihood
                    .entry(token.clone())
                    .or_default()
                    .insert(class_name.clone(), weight);
            }
        }

        Ok(())
    }

    /// Predict a class label for each document, in input order.
    ///
    /// A document is labeled `"1"` (spam) when its spam/ham score ratio
    /// reaches the configured threshold, `"0"` otherwise. IEEE float
    /// semantics give the two degenerate cases their intended meaning: a
    /// zero ham score with a positive spam score yields an infinite ratio
    /// (spam), and a document with no in-vocabulary tokens yields a NaN
    /// ratio, which fails the comparison and defaults to ham.
    ///
    /// # Errors
    ///
    /// Returns a model error when called before `fit` (or `load`).
    pub fn predict(&self, documents: &[Vec<String>]) -> Result<Vec<String>> {
        if !self.is_trained() {
            return Err(SpamsiftError::model(
                "predict called on an untrained model; call fit or load first",
            ));
        }

        let mut predictions = Vec::with_capacity(documents.len());
        for document in documents {
            let scores = self.class_scores(document);
            let spam_score = scores.get(SPAM_CLASS).copied().unwrap_or(0.0);
            let ham_score = scores.get(HAM_CLASS).copied().unwrap_or(0.0);

            let label = if spam_score / ham_score >= self.config.threshold {
                SPAM_CLASS
            } else {
                HAM_CLASS
            };
            predictions.push(label.to_string());
        }

        Ok(predictions)
    }

    /// Per-class additive score for a single document.
    ///
    /// Tokens outside the vocabulary are ignored; no smoothing is applied at
    /// inference time. Exposed for diagnostics and threshold tuning.
    pub fn class_scores(&self, document: &[String]) -> HashMap<String, f64> {
        let mut scores: HashMap<String, f64> = self
            .class_names
            .iter()
            .map(|class_name| (class_name.clone(), 0.0))
            .collect();

        for token in document {
            if !self.vocabulary.contains(token) {
                continue;
            }
            if let Some(weights) = self.log_likelihood.get(token) {
                for (class_name, score) in scores.iter_mut() {
                    if let Some(weight) = weights.get(class_name) {
                        *score += weight;
                    }
                }
            }
        }

        scores
    }

    /// Check if the model has been trained.
    pub fn is_trained(&self) -> bool {
        !self.class_names.is_empty()
    }

    /// Get the decision threshold.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Set the decision threshold.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.config.threshold = threshold;
    }

    /// Get the training vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the class labels in first-seen order.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Get the per-token, per-class training counts.
    pub fn frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    /// Get the log-prior for a class, if known.
    ///
    /// Priors are estimated during `fit` but intentionally excluded from the
    /// default decision rule.
    pub fn log_prior(&self, class_name: &str) -> Option<f64> {
        self.log_prior.get(class_name).copied()
    }

    /// Get the likelihood weight for a (token, class) pair, if known.
    pub fn likelihood(&self, token: &str, class_name: &str) -> Option<f64> {
        self.log_likelihood
            .get(token)
            .and_then(|weights| weights.get(class_name))
            .copied()
    }

    /// Access the full prior table (snapshot save path).
    pub(crate) fn log_prior_table(&self) -> &HashMap<String, f64> {
        &self.log_prior
    }

    /// Access the full likelihood table (snapshot save path).
    pub(crate) fn log_likelihood_table(&self) -> &HashMap<String, HashMap<String, f64>> {
        &self.log_likelihood
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|doc| doc.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn spam_ham_model() -> MultinomialNb {
        let documents = docs(&[&["free", "money"], &["hi"]]);
        let mut model = MultinomialNb::new();
        model.fit(&documents, &[1, 0]).unwrap();
        model
    }

    #[test]
    fn test_fit_rejects_length_mismatch() {
        let documents = docs(&[&["free"]]);
        let mut model = MultinomialNb::new();
        let result = model.fit(&documents, &[1, 0]);
        assert!(result.is_err());
        assert!(!model.is_trained());
    }

    #[test]
    fn test_fit_rejects_empty_training_set() {
        let mut model = MultinomialNb::new();
        let result = model.fit(&[], &Vec::<String>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_fit_builds_vocabulary_and_frequency() {
        let model = spam_ham_model();

        assert_eq!(model.vocabulary().terms(), &["free", "money", "hi"]);
        assert_eq!(model.frequency().count("free", "1"), 1);
        assert_eq!(model.frequency().count("money", "1"), 1);
        assert_eq!(model.frequency().count("hi", "0"), 1);
        assert_eq!(model.frequency().count("hi", "1"), 0);
        assert_eq!(model.class_names(), &["1", "0"]);
    }

    #[test]
    fn test_likelihood_formula() {
        let model = spam_ham_model();

        // Class 1: denominator = (1 + 1 + 0) + 3 = 5
        assert!((model.likelihood("free", "1").unwrap() - 0.4).abs() < 1e-12);
        assert!((model.likelihood("money", "1").unwrap() - 0.4).abs() < 1e-12);
        assert!((model.likelihood("hi", "1").unwrap() - 0.2).abs() < 1e-12);

        // Class 0: denominator = (0 + 0 + 1) + 3 = 4
        assert!((model.likelihood("free", "0").unwrap() - 0.25).abs() < 1e-12);
        assert!((model.likelihood("money", "0").unwrap() - 0.25).abs() < 1e-12);
        assert!((model.likelihood("hi", "0").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_likelihood_covers_every_token_class_pair() {
        let model = spam_ham_model();

        for token in model.vocabulary().iter() {
            for class_name in model.class_names() {
                assert!(
                    model.likelihood(token, class_name).is_some(),
                    "missing likelihood for ({token}, {class_name})"
                );
            }
        }
    }

    #[test]
    fn test_log_prior_is_logarithmic() {
        let model = spam_ham_model();

        let expected = (1.0f64 / 2.0).ln();
        assert!((model.log_prior("1").unwrap() - expected).abs() < 1e-12);
        assert!((model.log_prior("0").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_predict_spam_by_ratio() {
        let model = spam_ham_model();

        let predictions = model.predict(&docs(&[&["free", "money"]])).unwrap();
        // score[1] = 0.8, score[0] = 0.5, ratio 1.6 >= 1.2
        assert_eq!(predictions, vec!["1".to_string()]);
    }

    #[test]
    fn test_predict_empty_document_defaults_to_ham() {
        let model = spam_ham_model();

        let predictions = model.predict(&docs(&[&[]])).unwrap();
        assert_eq!(predictions, vec!["0".to_string()]);
    }

    #[test]
    fn test_predict_unknown_tokens_default_to_ham() {
        let model = spam_ham_model();

        let predictions = model.predict(&docs(&[&["unseen", "words"]])).unwrap();
        assert_eq!(predictions, vec!["0".to_string()]);
    }

    #[test]
    fn test_predict_preserves_input_order() {
        let model = spam_ham_model();

        let predictions = model
            .predict(&docs(&[&["hi"], &["free", "money"], &[]]))
            .unwrap();
        assert_eq!(predictions, vec!["0", "1", "0"]);
    }

    #[test]
    fn test_untrained_predict_is_an_error() {
        let model = MultinomialNb::new();
        let result = model.predict(&docs(&[&["free"]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_and_string_labels_build_same_model() {
        let documents = docs(&[&["free", "money"], &["hi"]]);

        let mut numeric = MultinomialNb::new();
        numeric.fit(&documents, &[1, 0]).unwrap();

        let mut textual = MultinomialNb::new();
        textual.fit(&documents, &["1", "0"]).unwrap();

        assert_eq!(numeric.class_names(), textual.class_names());
        for token in numeric.vocabulary().iter() {
            for class_name in numeric.class_names() {
                assert_eq!(
                    numeric.likelihood(token, class_name),
                    textual.likelihood(token, class_name)
                );
            }
        }
    }

    #[test]
    fn test_threshold_is_tunable() {
        let mut model = spam_ham_model();
        assert_eq!(model.threshold(), DEFAULT_DECISION_THRESHOLD);

        // Ratio for ["free", "money"] is 1.6; a stricter threshold flips it.
        model.set_threshold(1.7);
        let predictions = model.predict(&docs(&[&["free", "money"]])).unwrap();
        assert_eq!(predictions, vec!["0".to_string()]);
    }

    #[test]
    fn test_class_scores_sum_in_vocabulary_weights() {
        let model = spam_ham_model();

        let scores = model.class_scores(&["free".to_string(), "money".to_string()]);
        assert!((scores["1"] - 0.8).abs() < 1e-12);
        assert!((scores["0"] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_refit_replaces_previous_model() {
        let mut model = spam_ham_model();
        model
            .fit(&docs(&[&["new"], &["words"]]), &["1", "0"])
            .unwrap();

        assert_eq!(model.vocabulary().terms(), &["new", "words"]);
        assert!(model.likelihood("free", "1").is_none());
    }
}
