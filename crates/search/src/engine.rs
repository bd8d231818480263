//! Two-phase product search.
//!
//! The exact phase keeps records whose normalized fields contain the
//! normalized query and category. Only when it finds nothing does the fuzzy
//! phase score the whole catalog and rank what clears the threshold.

use crate::catalog::{CatalogRecord, RecordText};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::vocabulary::Vocabulary;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine with default settings, used by the free functions.
static DEFAULT_SEARCH: Lazy<ProductSearch> = Lazy::new(ProductSearch::new);

/// Which pass produced a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    /// No query and no category: the whole catalog
    All,
    /// Substring containment
    Exact,
    /// Similarity ranking
    Fuzzy,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchPhase::All => "all",
            MatchPhase::Exact => "exact",
            MatchPhase::Fuzzy => "fuzzy",
        };
        f.write_str(name)
    }
}

/// A record paired with its fuzzy score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord<'a> {
    /// The matched record
    pub record: &'a CatalogRecord,
    /// Combined score in `[0, 1]`
    pub score: f64,
}

/// Result list together with the phase that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome<'a> {
    /// Pass that produced the records
    pub phase: MatchPhase,
    /// Matching records, catalog order or best first
    pub records: Vec<&'a CatalogRecord>,
}

/// Search form input as the shop front end sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text product query
    #[serde(default)]
    pub product: Option<String>,
    /// Category filter
    #[serde(default)]
    pub category: Option<String>,
    /// Accepted for compatibility, not used for matching
    #[serde(default)]
    pub location: Option<String>,
}

/// Catalog search engine.
///
/// Holds only configuration and the fixed vocabulary; the catalog is
/// borrowed per call, so one engine can serve any number of snapshots.
#[derive(Debug, Clone)]
pub struct ProductSearch {
    pub(crate) config: SearchConfig,
    pub(crate) vocabulary: Vocabulary,
}

impl Default for ProductSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSearch {
    /// Engine with default thresholds and weights.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            vocabulary: Vocabulary::with_terms([]),
        }
    }

    /// Engine with custom tunables. Fails if the config does not validate.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let vocabulary = Vocabulary::with_terms(config.extra_terms.iter().map(String::as_str));
        Ok(Self { config, vocabulary })
    }

    /// Active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the catalog and return matching records.
    ///
    /// # Arguments
    /// * `records` - Catalog snapshot, in display order
    /// * `query` - Free-text query
    /// * `category` - Optional category filter
    ///
    /// # Returns
    /// Exact matches in catalog order, or fuzzy matches best first.
    pub fn search<'c>(
        &self,
        records: &'c [CatalogRecord],
        query: &str,
        category: Option<&str>,
    ) -> Vec<&'c CatalogRecord> {
        self.search_detailed(records, query, category).records
    }

    /// Like [`ProductSearch::search`] but also reports the phase used.
    pub fn search_detailed<'c>(
        &self,
        records: &'c [CatalogRecord],
        query: &str,
        category: Option<&str>,
    ) -> SearchOutcome<'c> {
        if query.is_empty() && category.is_none_or(str::is_empty) {
            return SearchOutcome {
                phase: MatchPhase::All,
                records: records.iter().collect(),
            };
        }

        let query = normalize(query);
        let category = normalize(category.unwrap_or(""));
        let texts: Vec<RecordText<'c>> = records.iter().map(RecordText::new).collect();

        let exact: Vec<&'c CatalogRecord> = texts
            .iter()
            .filter(|text| exact_match(text, &query, &category))
            .map(|text| text.record)
            .collect();

        if !exact.is_empty() {
            tracing::debug!(
                query = %query,
                category = %category,
                hits = exact.len(),
                "Exact phase matched"
            );
            return SearchOutcome {
                phase: MatchPhase::Exact,
                records: exact,
            };
        }

        let ranked = self.rank(&texts, &query, &category);
        tracing::debug!(
            query = %query,
            category = %category,
            hits = ranked.len(),
            "Exact phase empty, fell back to fuzzy ranking"
        );

        SearchOutcome {
            phase: MatchPhase::Fuzzy,
            records: ranked.into_iter().map(|scored| scored.record).collect(),
        }
    }

    /// Search from front-end filters. `location` is ignored.
    pub fn search_filters<'c>(
        &self,
        records: &'c [CatalogRecord],
        filters: &SearchFilters,
    ) -> Vec<&'c CatalogRecord> {
        self.search(
            records,
            filters.product.as_deref().unwrap_or(""),
            filters.category.as_deref(),
        )
    }

    /// Score every record, keep those above the threshold, best first.
    ///
    /// Ties keep catalog order.
    fn rank<'c>(&self, texts: &[RecordText<'c>], query: &str, category: &str) -> Vec<ScoredRecord<'c>> {
        let threshold = self.config.fuzzy_threshold;
        let score = |text: &RecordText<'c>| ScoredRecord {
            record: text.record,
            score: self.score(text, query, category),
        };

        #[cfg(feature = "parallel")]
        let mut scored: Vec<ScoredRecord<'c>> = {
            use rayon::prelude::*;
            texts
                .par_iter()
                .map(score)
                .filter(|s| s.score > threshold)
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let mut scored: Vec<ScoredRecord<'c>> = texts
            .iter()
            .map(score)
            .filter(|s| s.score > threshold)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    /// Combined fuzzy score of one record.
    pub(crate) fn score(&self, text: &RecordText<'_>, query: &str, category: &str) -> f64 {
        let category_score = if category.is_empty() {
            1.0
        } else {
            similarity(category, &text.category)
        };

        if query.is_empty() {
            return category_score;
        }

        let query_score = text
            .query_fields()
            .map(|field| similarity(query, field))
            .fold(0.0, f64::max);

        tracing::trace!(
            name = %text.record.name,
            query_score,
            category_score,
            "Scored record"
        );

        query_score * self.config.query_weight + category_score * self.config.category_weight
    }
}

fn exact_match(text: &RecordText<'_>, query: &str, category: &str) -> bool {
    let matches_query = query.is_empty() || text.query_fields().any(|field| field.contains(query));
    let matches_category = category.is_empty() || text.category.contains(category);
    matches_query && matches_category
}

/// Search a catalog with default settings.
///
/// # Example
/// ```
/// use ecrist_search::{search_products, Catalog};
///
/// let catalog = Catalog::seed();
/// let hits = search_products(catalog.records(), "bambu", None);
/// assert_eq!(hits[0].name, "Cepillo de Bambú");
/// ```
pub fn search_products<'c>(
    records: &'c [CatalogRecord],
    query: &str,
    category: Option<&str>,
) -> Vec<&'c CatalogRecord> {
    DEFAULT_SEARCH.search(records, query, category)
}

/// Suggest alternate terms with default settings.
pub fn get_search_suggestions(records: &[CatalogRecord], query: &str) -> Vec<String> {
    DEFAULT_SEARCH.suggest(records, query)
}
