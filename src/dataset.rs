//! Dataset loading for training and evaluation.
//!
//! Datasets are JSON files with pre-partitioned training/testing splits:
//!
//! ```json
//! {
//!   "training": { "x": ["comment", ...], "y": [1, 0, ...] },
//!   "testing":  { "x": ["comment", ...], "y": [0, 1, ...] }
//! }
//! ```
//!
//! Labels may be JSON numbers or strings; both coerce to the string form the
//! classifier uses, so `1` and `"1"` are the same class.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamsiftError};

/// A class label as it appears in a dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Numeric label, e.g. `0` or `1`.
    Number(i64),
    /// String label, e.g. `"0"` or `"1"`.
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{n}"),
            Label::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One partition of a dataset: raw comments and their labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    /// Raw comment texts.
    pub x: Vec<String>,
    /// Class labels, one per comment.
    pub y: Vec<Label>,
}

impl Split {
    /// Get the labels coerced to their string form.
    pub fn labels(&self) -> Vec<String> {
        self.y.iter().map(|label| label.to_string()).collect()
    }

    /// Get the number of samples in this split.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the split is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.x.len() != self.y.len() {
            return Err(SpamsiftError::dataset(format!(
                "{name} split has {} comments but {} labels",
                self.x.len(),
                self.y.len()
            )));
        }
        Ok(())
    }
}

/// A dataset partitioned into training and testing splits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Samples used to fit the model.
    pub training: Split,
    /// Held-out samples used for evaluation.
    pub testing: Split,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error for an unreadable file, a JSON error for
    /// malformed content, and a dataset error when a split's comments and
    /// labels disagree in length.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&content)?;

        dataset.training.validate("training")?;
        dataset.testing.validate("testing")?;

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_label_coercion() {
        assert_eq!(Label::Number(1).to_string(), "1");
        assert_eq!(Label::Text("1".to_string()).to_string(), "1");
    }

    #[test]
    fn test_split_labels_mixes_numbers_and_strings() {
        let split: Split =
            serde_json::from_str(r#"{"x": ["a", "b"], "y": [1, "0"]}"#).unwrap();
        assert_eq!(split.labels(), vec!["1".to_string(), "0".to_string()]);
    }

    #[test]
    fn test_load_json_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dataset.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "training": {{"x": ["free money", "hi there"], "y": [1, 0]}},
                "testing":  {{"x": ["free stuff"], "y": [1]}}
            }}"#
        )
        .unwrap();

        let dataset = Dataset::load_json(&path).unwrap();
        assert_eq!(dataset.training.len(), 2);
        assert_eq!(dataset.testing.len(), 1);
        assert_eq!(dataset.training.labels(), vec!["1", "0"]);
    }

    #[test]
    fn test_load_json_rejects_length_mismatch() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(
            &path,
            r#"{"training": {"x": ["a"], "y": [1, 0]}, "testing": {"x": [], "y": []}}"#,
        )
        .unwrap();

        assert!(Dataset::load_json(&path).is_err());
    }

    #[test]
    fn test_load_json_missing_file() {
        let result = Dataset::load_json(Path::new("/nonexistent/dataset.json"));
        assert!(matches!(result, Err(SpamsiftError::Io(_))));
    }
}
