//! Model snapshots: JSON persistence of the full parameter set.
//!
//! A snapshot carries the five model fields plus a model-kind tag, field for
//! field in the shape previously trained models were saved in:
//!
//! ```json
//! {
//!   "name": "MultinomialNB",
//!   "frequency":      { "token": { "class": 1 } },
//!   "class_names":    [ "1", "0" ],
//!   "vocabulary":     [ "token" ],
//!   "log_prior":      { "class": -0.69 },
//!   "log_likelihood": { "token": { "class": 0.4 } }
//! }
//! ```
//!
//! Loading performs no recomputation; the parsed fields are validated
//! structurally and installed as-is. A malformed or incomplete snapshot is
//! an explicit error, never an empty default-constructed model.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::multinomial_nb::{MODEL_NAME, MultinomialNb};
use crate::classifier::vocabulary::{FrequencyTable, Vocabulary};
use crate::error::{Result, SpamsiftError};

/// Serializable form of a trained model.
///
/// All fields are required; deserialization fails on a missing field rather
/// than defaulting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// Model-kind tag; must equal `"MultinomialNB"`.
    pub name: String,
    /// Per-token, per-class training counts.
    pub frequency: HashMap<String, HashMap<String, u64>>,
    /// Class labels in first-seen order.
    pub class_names: Vec<String>,
    /// Vocabulary terms in first-seen order.
    pub vocabulary: Vec<String>,
    /// ln(class document share), per class.
    pub log_prior: HashMap<String, f64>,
    /// Laplace-smoothed linear weights (linear despite the field name,
    /// kept for compatibility with existing snapshots).
    pub log_likelihood: HashMap<String, HashMap<String, f64>>,
}

impl ModelSnapshot {
    /// Capture a snapshot of a trained model.
    pub fn from_model(model: &MultinomialNb) -> Self {
        ModelSnapshot {
            name: MODEL_NAME.to_string(),
            frequency: model.frequency().as_counts().clone(),
            class_names: model.class_names().to_vec(),
            vocabulary: model.vocabulary().terms().to_vec(),
            log_prior: model.log_prior_table().clone(),
            log_likelihood: model.log_likelihood_table().clone(),
        }
    }

    /// Validate the snapshot structurally and turn it into a model.
    pub fn into_model(self) -> Result<MultinomialNb> {
        self.validate()?;

        let vocabulary = Vocabulary::from_terms(self.vocabulary)?;
        let frequency = FrequencyTable::from_counts(self.frequency);

        Ok(MultinomialNb::from_parts(
            frequency,
            self.class_names,
            vocabulary,
            self.log_prior,
            self.log_likelihood,
        ))
    }

    /// Check the invariants a well-formed snapshot must hold.
    fn validate(&self) -> Result<()> {
        if self.name != MODEL_NAME {
            return Err(SpamsiftError::snapshot(format!(
                "unexpected model kind {:?}, expected {MODEL_NAME:?}",
                self.name
            )));
        }
        if self.class_names.is_empty() {
            return Err(SpamsiftError::snapshot("snapshot has no classes"));
        }

        for class_name in &self.class_names {
            if !self.log_prior.contains_key(class_name) {
                return Err(SpamsiftError::snapshot(format!(
                    "missing log_prior entry for class {class_name:?}"
                )));
            }
        }

        // Total coverage: every vocabulary term needs a likelihood weight
        // for every class.
        for term in &self.vocabulary {
            let Some(weights) = self.log_likelihood.get(term) else {
                return Err(SpamsiftError::snapshot(format!(
                    "missing log_likelihood row for term {term:?}"
                )));
            };
            for class_name in &self.class_names {
                if !weights.contains_key(class_name) {
                    return Err(SpamsiftError::snapshot(format!(
                        "missing log_likelihood entry for ({term:?}, {class_name:?})"
                    )));
                }
            }
        }

        for term in self.frequency.keys() {
            if !self.vocabulary.iter().any(|v| v == term) {
                return Err(SpamsiftError::snapshot(format!(
                    "frequency entry for term {term:?} outside the vocabulary"
                )));
            }
        }

        Ok(())
    }
}

impl MultinomialNb {
    /// Persist the trained model as a JSON snapshot, overwriting `path`.
    ///
    /// # Errors
    ///
    /// Returns a model error when the model is untrained, and an I/O error
    /// when the destination cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if !self.is_trained() {
            return Err(SpamsiftError::model("cannot save an untrained model"));
        }

        let snapshot = ModelSnapshot::from_model(self);
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Rehydrate a model from a JSON snapshot.
    ///
    /// The loaded model uses the default configuration; adjust with
    /// [`MultinomialNb::set_threshold`] if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error for an unreadable file, a JSON error for
    /// malformed content, and a snapshot error for structurally invalid
    /// snapshots (wrong model kind, missing fields or entries).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: ModelSnapshot = serde_json::from_str(&content)?;
        snapshot.into_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained_model() -> MultinomialNb {
        let documents = vec![
            vec!["free".to_string(), "money".to_string()],
            vec!["hi".to_string()],
        ];
        let mut model = MultinomialNb::new();
        model.fit(&documents, &[1, 0]).unwrap();
        model
    }

    #[test]
    fn test_snapshot_carries_all_fields() {
        let snapshot = ModelSnapshot::from_model(&trained_model());

        assert_eq!(snapshot.name, MODEL_NAME);
        assert_eq!(snapshot.vocabulary, vec!["free", "money", "hi"]);
        assert_eq!(snapshot.class_names, vec!["1", "0"]);
        assert_eq!(snapshot.frequency["free"]["1"], 1);
        assert!(snapshot.log_prior.contains_key("1"));
        assert!((snapshot.log_likelihood["free"]["1"] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_round_trip_in_memory() {
        let model = trained_model();
        let snapshot = ModelSnapshot::from_model(&model);
        let restored = snapshot.into_model().unwrap();

        assert_eq!(restored.class_names(), model.class_names());
        assert_eq!(
            restored.likelihood("free", "1"),
            model.likelihood("free", "1")
        );
        assert_eq!(restored.log_prior("0"), model.log_prior("0"));
    }

    #[test]
    fn test_snapshot_rejects_wrong_model_kind() {
        let mut snapshot = ModelSnapshot::from_model(&trained_model());
        snapshot.name = "BernoulliNB".to_string();

        assert!(snapshot.into_model().is_err());
    }

    #[test]
    fn test_snapshot_rejects_incomplete_likelihood_coverage() {
        let mut snapshot = ModelSnapshot::from_model(&trained_model());
        snapshot.log_likelihood.remove("money");

        assert!(snapshot.into_model().is_err());
    }

    #[test]
    fn test_snapshot_rejects_missing_prior() {
        let mut snapshot = ModelSnapshot::from_model(&trained_model());
        snapshot.log_prior.remove("0");

        assert!(snapshot.into_model().is_err());
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let snapshot = ModelSnapshot::from_model(&trained_model());
        let json = serde_json::to_value(&snapshot).unwrap();

        for field in [
            "name",
            "frequency",
            "class_names",
            "vocabulary",
            "log_prior",
            "log_likelihood",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["name"], "MultinomialNB");
    }

    #[test]
    fn test_snapshot_deserialization_requires_all_fields() {
        let result: std::result::Result<ModelSnapshot, _> =
            serde_json::from_str(r#"{"name": "MultinomialNB"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_untrained_model_is_an_error() {
        let model = MultinomialNb::new();
        let dir = tempfile::TempDir::new().unwrap();
        let result = model.save(&dir.path().join("model.json"));
        assert!(result.is_err());
    }
}
