//! Suggestion vocabulary.
//!
//! A fixed list of common shop terms merged with words harvested from the
//! catalog at call time.

use crate::catalog::CatalogRecord;
use crate::normalize::normalize;
use std::collections::HashSet;

/// Common search terms for the eco catalog, already in normalized form.
///
/// Categories, materials and product attributes shoppers type most often.
/// Extend through `SearchConfig::extra_terms` rather than editing scoring code.
pub const COMMON_SEARCH_TERMS: &[&str] = &[
    "ecologico",
    "sostenible",
    "natural",
    "organico",
    "biodegradable",
    "reutilizable",
    "reciclado",
    "compostable",
    "vegano",
    "artesanal",
    "bambu",
    "algodon",
    "acero",
    "soja",
    "cera",
    "jabon",
    "champu",
    "cepillo",
    "bolsa",
    "vela",
    "termo",
    "cosmetica",
    "higiene",
    "hogar",
    "residuos",
];

/// Ordered set of candidate words, first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl Vocabulary {
    /// Empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed common terms followed by any configured extras.
    pub fn with_terms<'a>(extra: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocabulary = Self::new();
        for term in COMMON_SEARCH_TERMS.iter().copied().chain(extra) {
            vocabulary.insert(normalize(term).as_str());
        }
        vocabulary
    }

    /// Add a word unless it is empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.words.push(word.to_string());
        true
    }

    /// Harvest every word of at least `min_len` characters from the
    /// searchable text of each record.
    pub fn harvest<'r>(&mut self, records: impl IntoIterator<Item = &'r CatalogRecord>, min_len: usize) {
        for record in records {
            let text = normalize(&record.searchable_text());
            for word in text.words() {
                if word.len() >= min_len {
                    self.insert(word);
                }
            }
        }
    }

    /// Words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when no words are present.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_common_terms_are_normalized() {
        for term in COMMON_SEARCH_TERMS {
            assert_eq!(normalize(term), *term);
        }
    }

    #[test]
    fn test_common_terms_are_unique() {
        let vocabulary = Vocabulary::with_terms([]);
        assert_eq!(vocabulary.len(), COMMON_SEARCH_TERMS.len());
    }

    #[test]
    fn test_extra_terms_are_normalized_and_appended() {
        let vocabulary = Vocabulary::with_terms(["Lavavajillas Ecológico", "bambu"]);
        let words: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(words.last(), Some(&"lavavajillas ecologico"));
        assert_eq!(vocabulary.len(), COMMON_SEARCH_TERMS.len() + 1);
    }

    #[test]
    fn test_harvest_skips_short_words_and_duplicates() {
        let catalog = Catalog::seed();
        let mut vocabulary = Vocabulary::new();
        vocabulary.harvest(catalog.records(), 3);

        let words: Vec<&str> = vocabulary.iter().collect();
        assert!(words.contains(&"champu"));
        assert!(words.contains(&"inoxidable"));
        assert!(!words.contains(&"de"));
        assert!(!words.contains(&"la"));
        assert!(words.contains(&"12h"));
        assert_eq!(words.iter().filter(|w| **w == "organico").count(), 1);
    }

    #[test]
    fn test_insert_rejects_empty() {
        let mut vocabulary = Vocabulary::new();
        assert!(!vocabulary.insert(""));
        assert!(vocabulary.is_empty());
    }
}
