//! Product search for the Ecrist eco shop.
//!
//! This crate provides:
//! - Accent-insensitive text normalization
//! - A word-overlap similarity heuristic
//! - Two-phase search: exact containment first, similarity ranking as fallback
//! - "Did you mean" suggestions from common terms, catalog words and product names
//!
//! Everything is a pure function of the query and a borrowed catalog
//! snapshot; there is no global store and nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use ecrist_search::{get_search_suggestions, search_products, Catalog};
//!
//! let catalog = Catalog::seed();
//!
//! let hits = search_products(catalog.records(), "jabon", None);
//! assert_eq!(hits[0].name, "Jabón Artesanal");
//!
//! let suggestions = get_search_suggestions(catalog.records(), "jabones");
//! assert_eq!(suggestions[0], "jabon");
//! ```

mod catalog;
mod config;
mod engine;
mod error;
mod normalize;
mod similarity;
mod suggest;
mod vocabulary;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, CatalogRecord, NewProduct};
pub use config::SearchConfig;
pub use engine::{
    get_search_suggestions, search_products, MatchPhase, ProductSearch, ScoredRecord,
    SearchFilters, SearchOutcome,
};
pub use error::{Result, SearchError, SearchErrorCode};
pub use normalize::{normalize, NormalizedText};
pub use similarity::{similarity, CONTAINMENT_SCORE};
pub use vocabulary::{Vocabulary, COMMON_SEARCH_TERMS};
