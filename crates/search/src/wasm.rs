//! WASM bindings for catalog search.

use crate::{Catalog, ProductSearch};
use wasm_bindgen::prelude::*;

/// Normalize text the way search compares it.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::normalize(text).into_string()
}

/// Similarity score between two texts, normalized first.
#[wasm_bindgen]
pub fn similarity_score(a: &str, b: &str) -> f64 {
    crate::similarity(&crate::normalize(a), &crate::normalize(b))
}

/// Search a catalog and return matching records as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `category` - Category filter (empty for none)
/// * `catalog_json` - JSON array of products
///
/// # Returns
/// JSON object with `phase` and `records`, or `{"phase":"all","records":[]}`
/// when the catalog cannot be parsed.
#[wasm_bindgen]
pub fn search_catalog(query: &str, category: &str, catalog_json: &str) -> String {
    const EMPTY: &str = r#"{"phase":"all","records":[]}"#;

    let catalog = match Catalog::from_json(catalog_json) {
        Ok(catalog) => catalog,
        Err(_) => return EMPTY.to_string(),
    };

    let category = (!category.is_empty()).then_some(category);
    let outcome = ProductSearch::new().search_detailed(catalog.records(), query, category);

    serde_json::to_string(&outcome).unwrap_or_else(|_| EMPTY.to_string())
}

/// Suggestions for a query as a JSON array of strings.
#[wasm_bindgen]
pub fn suggest_terms(query: &str, catalog_json: &str) -> String {
    let catalog = Catalog::from_json(catalog_json).unwrap_or_default();
    let suggestions = crate::get_search_suggestions(catalog.records(), query);
    serde_json::to_string(&suggestions).unwrap_or_else(|_| "[]".to_string())
}
