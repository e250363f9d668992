//! Tolerant text matching for FarmaGuia clinical search.
//!
//! This crate provides:
//! - Accent-, case-, and whitespace-insensitive normalization
//! - A tolerant match predicate (substring, token, and typo matching)
//! - Multi-band relevance scoring for ranking
//! - Record-level aggregation (OR across fields, MAX score, stable order)
//!
//! Every search screen — medication lookup, material and diet filtering,
//! the drug-interaction autocomplete — runs the same three pure functions
//! per keystroke: [`normalize`], [`intelligent_search`], and
//! [`calculate_relevance`]. The engine is stateless and carries no index;
//! callers hand it their in-memory candidate list on every query.
//!
//! # Example
//!
//! ```rust
//! use farmaguia_search::{intelligent_search, calculate_relevance};
//!
//! assert!(intelligent_search("dipirona sodica", "Dipirona Sódica"));
//! assert!(intelligent_search("ceftriaxon", "Ceftriaxona"));
//!
//! let prefix = calculate_relevance("dipirona", "Dipirona Sódica");
//! let mid = calculate_relevance("dipirona", "Metadipirona");
//! assert!(prefix > mid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod fuzzy;
mod normalize;
mod rank;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use fuzzy::{edit_distance, typo_tolerance, within_typo_tolerance};
pub use normalize::normalize;
pub use rank::{rank_records, record_matches, record_score};
pub use relevance::{RelevanceBand, calculate_relevance, intelligent_search};

/// Search result with relevance score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}
