//! Tolerant match predicate and relevance scoring.

use crate::fuzzy::{closest_distance, typo_tolerance};
use crate::normalize;

/// Base score for each match quality band.
///
/// Bands are spaced 1000 apart so that the fuzzy sub-bands (100 per edit of
/// headroom) and the length tie-break (at most 99) can never lift a score
/// into the band above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceBand {
    /// No match
    None = 0,
    /// Within typo tolerance only
    Fuzzy = 1000,
    /// Every query token appears somewhere in the candidate
    TokenMatch = 2000,
    /// Contiguous substring match, either direction
    Contains = 3000,
    /// Candidate starts with the query
    Prefix = 4000,
    /// Equal after normalization
    Exact = 5000,
}

/// Tie-break within a band: shorter candidates edge out longer ones.
fn length_bonus(normalized_candidate: &str) -> u32 {
    99 - normalized_candidate.chars().count().min(99) as u32
}

/// Calculate the relevance score of a candidate for a query.
///
/// Both inputs are normalized first (see [`normalize`]), then classified
/// into one of the [`RelevanceBand`]s, first tier that applies wins:
///
/// 1. exact normalized equality;
/// 2. candidate starts with the query;
/// 3. substring containment in either direction (codes are often shorter
///    than the names that embed them);
/// 4. every query token is a substring of the candidate, any order;
/// 5. typo-tolerant: bounded edit distance against the candidate or its
///    closest token, smaller distances scoring higher within the band.
///
/// An empty query scores every candidate identically at the top band so an
/// untyped search box shows the unfiltered list in its original order. A
/// score of `0` means no match; [`intelligent_search`] returns `true`
/// exactly when this function returns a positive score.
///
/// Pure and deterministic: identical inputs always produce identical scores.
///
/// # Examples
/// ```
/// use farmaguia_search::calculate_relevance;
///
/// let exact = calculate_relevance("dipirona sodica", "Dipirona Sódica");
/// let prefix = calculate_relevance("dipirona", "Dipirona Sódica");
/// let substring = calculate_relevance("dipirona", "Metadipirona");
/// assert!(exact > prefix && prefix > substring && substring > 0);
/// assert_eq!(calculate_relevance("paracetamol", "Dipirona Sódica"), 0);
/// ```
pub fn calculate_relevance(query: &str, candidate: &str) -> u32 {
    let query = normalize(query);
    let candidate = normalize(candidate);

    if query.is_empty() {
        return RelevanceBand::Exact as u32;
    }
    if candidate.is_empty() {
        return RelevanceBand::None as u32;
    }

    let bonus = length_bonus(&candidate);

    if candidate == query {
        return RelevanceBand::Exact as u32 + bonus;
    }

    if candidate.starts_with(&query) {
        return RelevanceBand::Prefix as u32 + bonus;
    }

    if candidate.contains(&query) || query.contains(&candidate) {
        return RelevanceBand::Contains as u32 + bonus;
    }

    if query.split_whitespace().all(|token| candidate.contains(token)) {
        return RelevanceBand::TokenMatch as u32 + bonus;
    }

    let tolerance = typo_tolerance(query.chars().count());
    if tolerance > 0 {
        if let Some(distance) = closest_distance(&query, &candidate) {
            if distance <= tolerance {
                let closeness = 3u32.saturating_sub(distance as u32) * 100;
                return RelevanceBand::Fuzzy as u32 + closeness + bonus;
            }
        }
    }

    RelevanceBand::None as u32
}

/// Decide whether a candidate matches a query under the tolerant comparison.
///
/// Accent-, case-, and whitespace-insensitive; accepts substring matches in
/// either direction, multi-word queries with tokens in any order, and typos
/// within a length-scaled edit-distance budget. An empty (or whitespace-only)
/// query matches everything — callers rely on that to show unfiltered lists
/// before the user types.
///
/// Equivalent to `calculate_relevance(query, candidate) > 0`.
///
/// # Examples
/// ```
/// use farmaguia_search::intelligent_search;
///
/// assert!(intelligent_search("dipirona sodica", "Dipirona Sódica"));
/// assert!(intelligent_search("sodica dipirona", "Dipirona Sódica"));
/// assert!(intelligent_search("ceftriaxon", "Ceftriaxona"));
/// assert!(!intelligent_search("paracetamol", "Dipirona Sódica"));
/// ```
pub fn intelligent_search(query: &str, candidate: &str) -> bool {
    calculate_relevance(query, candidate) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(intelligent_search("", "Dipirona Sódica"));
        assert!(intelligent_search("   ", "Dipirona Sódica"));
        assert!(intelligent_search("", ""));
    }

    #[test]
    fn test_empty_candidate_matches_nothing() {
        assert!(!intelligent_search("dipirona", ""));
        assert!(!intelligent_search("dipirona", "   "));
    }

    #[test]
    fn test_accent_insensitive() {
        assert!(intelligent_search("dipirona sodica", "Dipirona Sódica"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(intelligent_search("CIPROFLOXACINO", "ciprofloxacino"));
    }

    #[test]
    fn test_code_matching() {
        assert!(intelligent_search("MED001", "MED001"));
        assert!(intelligent_search("med", "MED001"));
    }

    #[test]
    fn test_containment_either_direction() {
        // The query may be the longer, more specific side.
        assert!(intelligent_search("dipirona sodica 500mg", "Dipirona Sódica"));
    }

    #[test]
    fn test_token_order_independent() {
        assert!(intelligent_search("sodica dipirona", "Dipirona Sódica"));
    }

    #[test]
    fn test_typo_omitted_character() {
        assert!(intelligent_search("ceftriaxon", "Ceftriaxona"));
    }

    #[test]
    fn test_typo_transposition() {
        assert!(intelligent_search("ceftirazona", "Ceftriaxona"));
    }

    #[test]
    fn test_negative() {
        assert!(!intelligent_search("paracetamol", "Dipirona Sódica"));
    }

    #[test]
    fn test_band_ordering() {
        assert!(RelevanceBand::Exact > RelevanceBand::Prefix);
        assert!(RelevanceBand::Prefix > RelevanceBand::Contains);
        assert!(RelevanceBand::Contains > RelevanceBand::TokenMatch);
        assert!(RelevanceBand::TokenMatch > RelevanceBand::Fuzzy);
        assert!(RelevanceBand::Fuzzy > RelevanceBand::None);
    }

    #[test]
    fn test_exact_is_maximum_for_pair() {
        let score = calculate_relevance("Dipirona Sódica", "dipirona sodica");
        assert!(score >= RelevanceBand::Exact as u32);
    }

    #[test]
    fn test_prefix_outranks_mid_string() {
        let query = "dipirona";
        let prefix_a = calculate_relevance(query, "Dipirona Sódica");
        let prefix_b = calculate_relevance(query, "Dipirona Monoidratada");
        let mid = calculate_relevance(query, "Metadipirona");
        assert!(prefix_a > mid);
        assert!(prefix_b > mid);
        assert!(mid > 0);
    }

    #[test]
    fn test_token_match_band() {
        let score = calculate_relevance("sodica dipirona", "Dipirona Sódica");
        assert!(score >= RelevanceBand::TokenMatch as u32);
        assert!(score < RelevanceBand::Contains as u32);
    }

    #[test]
    fn test_smaller_edit_distance_scores_higher() {
        // Distance 1 vs distance 2, same candidate length so the
        // tie-break cancels out and only the sub-band differs.
        let close = calculate_relevance("ceftriaxon", "zeftriaxon");
        let far = calculate_relevance("ceftriaxon", "zeftriaxun");
        assert!(close > far, "{close} <= {far}");
        assert!(far >= RelevanceBand::Fuzzy as u32);
        assert!(close < RelevanceBand::TokenMatch as u32);
    }

    #[test]
    fn test_shorter_candidate_wins_within_band() {
        let short = calculate_relevance("dipirona", "Dipirona Sódica");
        let long = calculate_relevance("dipirona", "Dipirona Sódica Monoidratada");
        assert!(short > long);
        // Still the same band.
        assert!(long >= RelevanceBand::Prefix as u32);
    }

    #[test]
    fn test_empty_query_scores_are_flat() {
        assert_eq!(
            calculate_relevance("", "Dipirona Sódica"),
            calculate_relevance("", "Omeprazol"),
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_score_zero_iff_no_match(q in "\\PC{0,16}", c in "\\PC{0,16}") {
            let score = calculate_relevance(&q, &c);
            proptest::prop_assert_eq!(score > 0, intelligent_search(&q, &c));
        }

        #[test]
        fn prop_self_match(s in "[a-zà-ÿ0-9]{1,16}") {
            proptest::prop_assert!(intelligent_search(&s, &s));
            let self_score = calculate_relevance(&s, &s);
            proptest::prop_assert!(self_score >= RelevanceBand::Exact as u32);
        }

        #[test]
        fn prop_deterministic(q in "\\PC{0,16}", c in "\\PC{0,16}") {
            proptest::prop_assert_eq!(
                calculate_relevance(&q, &c),
                calculate_relevance(&q, &c)
            );
        }
    }
}
