//! Search tunables.
//!
//! Defaults reproduce the shop's ranking exactly; a config file only needs to
//! mention the fields it changes.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Upper bound on the merged suggestion list.
pub const SUGGESTION_LIMIT: usize = 5;

/// Thresholds, weights and limits used by search and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fuzzy-phase records must score strictly above this
    pub fuzzy_threshold: f64,
    /// Weight of the query score in the combined fuzzy score
    pub query_weight: f64,
    /// Weight of the category score in the combined fuzzy score
    pub category_weight: f64,
    /// Vocabulary words must score strictly above this to be suggested
    pub term_threshold: f64,
    /// Product names must score strictly above this to be suggested
    pub name_threshold: f64,
    /// Total suggestions returned
    pub max_suggestions: usize,
    /// Vocabulary words considered before merging
    pub max_term_suggestions: usize,
    /// Product names considered before merging
    pub max_name_suggestions: usize,
    /// Minimum length of words harvested from the catalog
    pub min_word_len: usize,
    /// Terms appended to the common vocabulary
    pub extra_terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.3,
            query_weight: 0.7,
            category_weight: 0.3,
            term_threshold: 0.4,
            name_threshold: 0.3,
            max_suggestions: 5,
            max_term_suggestions: 5,
            max_name_suggestions: 3,
            min_word_len: 3,
            extra_terms: Vec::new(),
        }
    }
}

impl SearchConfig {
    /// Check that every ratio lies in `[0, 1]`, that the two weights sum to at
    /// most 1 so combined scores stay in `[0, 1]`, and that limits are usable.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("fuzzy_threshold", self.fuzzy_threshold),
            ("query_weight", self.query_weight),
            ("category_weight", self.category_weight),
            ("term_threshold", self.term_threshold),
            ("name_threshold", self.name_threshold),
        ];

        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(SearchError::InvalidConfig(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.query_weight + self.category_weight > 1.0 {
            return Err(SearchError::InvalidConfig(format!(
                "query_weight + category_weight must not exceed 1, got {} + {}",
                self.query_weight, self.category_weight
            )));
        }

        if !(1..=SUGGESTION_LIMIT).contains(&self.max_suggestions) {
            return Err(SearchError::InvalidConfig(format!(
                "max_suggestions must be between 1 and {}, got {}",
                SUGGESTION_LIMIT, self.max_suggestions
            )));
        }

        Ok(())
    }
}
