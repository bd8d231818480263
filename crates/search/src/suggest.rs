//! "Did you mean" suggestions.

use crate::catalog::CatalogRecord;
use crate::engine::ProductSearch;
use crate::normalize::normalize;
use crate::similarity::similarity;
use std::cmp::Ordering;
use std::collections::HashSet;

fn by_score_desc<T>(a: &(T, f64), b: &(T, f64)) -> Ordering {
    b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal)
}

impl ProductSearch {
    /// Suggest alternate search terms for a query.
    ///
    /// Vocabulary words (common terms plus words harvested from the catalog)
    /// come first, then up to three product names as they are displayed.
    /// The merged list is deduplicated and capped at `max_suggestions`.
    ///
    /// An empty query scores every candidate at the containment bonus, so
    /// it returns the leading common terms.
    pub fn suggest(&self, records: &[CatalogRecord], query: &str) -> Vec<String> {
        let query = normalize(query);

        let mut vocabulary = self.vocabulary.clone();
        vocabulary.harvest(records, self.config.min_word_len);

        let mut terms: Vec<(&str, f64)> = vocabulary
            .iter()
            .filter(|word| *word != query.as_str())
            .map(|word| (word, similarity(&query, word)))
            .filter(|(_, score)| *score > self.config.term_threshold)
            .collect();
        terms.sort_by(by_score_desc);
        terms.truncate(self.config.max_term_suggestions);

        let mut names: Vec<(&str, f64)> = records
            .iter()
            .map(|record| (record.name.as_str(), similarity(&query, &normalize(&record.name))))
            .filter(|(_, score)| *score > self.config.name_threshold)
            .collect();
        names.sort_by(by_score_desc);
        names.truncate(self.config.max_name_suggestions);

        let mut seen = HashSet::new();
        let suggestions: Vec<String> = terms
            .into_iter()
            .chain(names)
            .map(|(text, _)| text)
            .filter(|text| seen.insert(*text))
            .take(self.config.max_suggestions)
            .map(String::from)
            .collect();

        tracing::debug!(
            query = %query,
            vocabulary = vocabulary.len(),
            suggestions = suggestions.len(),
            "Generated suggestions"
        );

        suggestions
    }
}
