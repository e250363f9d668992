//! WASM bindings for the search engine.

use wasm_bindgen::prelude::*;

/// Normalize text for comparison: lowercase, accents stripped, whitespace
/// collapsed.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::normalize(text)
}

/// Check whether a candidate matches a query under the tolerant comparison.
///
/// An empty query matches everything.
#[wasm_bindgen]
pub fn search_matches(query: &str, candidate: &str) -> bool {
    crate::intelligent_search(query, candidate)
}

/// Calculate the relevance score of a candidate for a query.
///
/// Returns 0 for non-matches; higher is better.
#[wasm_bindgen]
pub fn relevance_score(query: &str, candidate: &str) -> u32 {
    crate::calculate_relevance(query, candidate)
}

/// Search records and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of items with `id` and `fields` (array of
///   searchable strings: name, code, class, ...)
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `id` and `score` fields, ranked by score
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, max_results: usize) -> String {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Item {
        id: String,
        fields: Vec<String>,
    }

    #[derive(Serialize)]
    struct Ranked {
        id: String,
        score: u32,
    }

    let items: Vec<Item> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let mut results: Vec<Ranked> = items
        .into_iter()
        .map(|item| {
            let fields: Vec<&str> = item.fields.iter().map(String::as_str).collect();
            let score = crate::record_score(query, &fields);
            Ranked { id: item.id, score }
        })
        .filter(|r| r.score > 0)
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));

    if max_results > 0 {
        results.truncate(max_results);
    }

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
