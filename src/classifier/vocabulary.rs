//! Vocabulary and token frequency bookkeeping for training.

use std::collections::HashMap;

use ahash::AHashSet;

use crate::error::{Result, SpamsiftError};

/// The set of distinct tokens observed across all training documents.
///
/// Terms are kept in first-seen order so a trained model serializes its
/// vocabulary deterministically; membership checks go through a hash set.
/// The vocabulary grows monotonically during `fit` and is frozen afterward.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Distinct terms in first-seen order.
    terms: Vec<String>,
    /// Fast membership index over `terms`.
    seen: AHashSet<String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Rebuild a vocabulary from an ordered term list (snapshot load path).
    ///
    /// Returns an error if the list contains duplicates.
    pub fn from_terms(terms: Vec<String>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(terms.len());
        for term in &terms {
            if !seen.insert(term.clone()) {
                return Err(SpamsiftError::snapshot(format!(
                    "duplicate vocabulary term: {term}"
                )));
            }
        }
        Ok(Vocabulary { terms, seen })
    }

    /// Insert a term if it is not already present.
    ///
    /// Returns `true` if the term was newly inserted.
    pub fn insert(&mut self, term: &str) -> bool {
        if self.seen.contains(term) {
            return false;
        }
        self.seen.insert(term.to_string());
        self.terms.push(term.to_string());
        true
    }

    /// Check whether a term is in the vocabulary (exact match).
    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    /// Get the number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get the terms in first-seen order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterate over the terms in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.terms.iter()
    }
}

/// Per-token, per-class occurrence counts accumulated during training.
///
/// A missing (token, class) entry is equivalent to a count of zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, HashMap<String, u64>>,
}

impl FrequencyTable {
    /// Create a new empty frequency table.
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Rebuild a frequency table from raw counts (snapshot load path).
    pub fn from_counts(counts: HashMap<String, HashMap<String, u64>>) -> Self {
        FrequencyTable { counts }
    }

    /// Record one co-occurrence of a token with a class.
    pub fn increment(&mut self, token: &str, class: &str) {
        *self
            .counts
            .entry(token.to_string())
            .or_default()
            .entry(class.to_string())
            .or_insert(0) += 1;
    }

    /// Get the count for a (token, class) pair, defaulting to zero.
    pub fn count(&self, token: &str, class: &str) -> u64 {
        self.counts
            .get(token)
            .and_then(|row| row.get(class))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of counts for a class over every token in the table.
    ///
    /// Tokens never seen with the class contribute zero, so this equals the
    /// class total over the entire vocabulary.
    pub fn class_total(&self, class: &str) -> u64 {
        self.counts
            .values()
            .filter_map(|row| row.get(class))
            .sum()
    }

    /// Get the number of tokens with at least one recorded count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Access the raw counts (snapshot save path).
    pub fn as_counts(&self) -> &HashMap<String, HashMap<String, u64>> {
        &self.counts
    }
}
