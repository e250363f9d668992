//! Record-level aggregation with optional parallelism.
//!
//! Every search screen repeats the same contract: a record matches when any
//! of its searchable fields matches, its score is the maximum over its
//! fields (never the sum), and results are ordered by descending score with
//! ties kept in their original order so the list does not reshuffle on
//! every keystroke. This module implements that contract once.

use crate::{SearchResult, calculate_relevance, intelligent_search};

/// Check whether a record matches: logical OR across its fields.
pub fn record_matches(query: &str, fields: &[&str]) -> bool {
    fields.iter().any(|field| intelligent_search(query, field))
}

/// Score a record: maximum relevance across its fields.
///
/// Taking the max (not the sum) keeps a record from outranking another
/// merely for having more fields that weakly match.
pub fn record_score(query: &str, fields: &[&str]) -> u32 {
    fields
        .iter()
        .map(|field| calculate_relevance(query, field))
        .max()
        .unwrap_or(0)
}

/// Filter and rank records against a query.
///
/// Scores every record via `fields` (which lists the record's searchable
/// text fields, e.g. name, code, class, observation), drops non-matches,
/// and sorts the rest by descending score. The sort is stable, so records
/// with equal scores keep their input order. An empty query matches every
/// record with a flat score, returning the list unfiltered and unshuffled.
///
/// # Arguments
/// * `items` - Records to search
/// * `query` - User-typed query
/// * `fields` - Accessor returning the searchable fields of a record
/// * `max_results` - Maximum results to return (None for all)
///
/// # Example
/// ```
/// use farmaguia_search::rank_records;
///
/// struct Med { name: &'static str, code: &'static str }
/// let meds = [
///     Med { name: "Metadipirona", code: "MED044" },
///     Med { name: "Dipirona Sódica", code: "MED001" },
/// ];
///
/// let results = rank_records(&meds, "dipirona", |m| vec![m.name, m.code], None);
/// assert_eq!(results[0].item.code, "MED001");
/// ```
pub fn rank_records<'a, T, F>(
    items: &'a [T],
    query: &str,
    fields: F,
    max_results: Option<usize>,
) -> Vec<SearchResult<&'a T>>
where
    T: Sync,
    F: Fn(&'a T) -> Vec<&'a str> + Sync,
{
    #[cfg(feature = "parallel")]
    let scores: Vec<u32> = {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| record_score(query, &fields(item)))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<u32> = items
        .iter()
        .map(|item| record_score(query, &fields(item)))
        .collect();

    let mut results: Vec<SearchResult<&T>> = items
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score > 0)
        .map(|(item, score)| SearchResult { item, score })
        .collect();

    // Stable: equal scores keep their original relative order.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}
