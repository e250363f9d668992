//! Typo-tolerant matching via bounded edit distance.

/// Calculate the optimal-string-alignment edit distance between two strings.
///
/// Counts single-character insertions, deletions, substitutions, and adjacent
/// transpositions — the transposition case is what lets "ceftirazona" sit at
/// distance 2 from "ceftriaxona" instead of 3.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of edits needed to transform a into b
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Three rolling rows: transpositions look two rows back.
    let mut prev2 = vec![0usize; n + 1];
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            let mut d = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                d = d.min(prev2[j - 2] + 1);
            }

            curr[j] = d;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit-distance budget for a query of the given normalized character length.
///
/// Scales with query length so short queries are not over-matched: one- and
/// two-letter queries get no typo budget at all, while long clinical names
/// forgive up to three keystrokes.
pub fn typo_tolerance(query_chars: usize) -> usize {
    match query_chars {
        0..=2 => 0,
        3..=4 => 1,
        5..=8 => 2,
        _ => 3,
    }
}

/// Check whether `query` is within typo tolerance of `candidate`.
///
/// Both inputs must already be normalized. The query is compared against the
/// whole candidate and against each of its whitespace tokens, taking the
/// closest; that way "ceftriaxon" still matches "ceftriaxona 500mg".
pub fn within_typo_tolerance(query: &str, candidate: &str) -> bool {
    let tolerance = typo_tolerance(query.chars().count());
    if tolerance == 0 {
        return false;
    }

    closest_distance(query, candidate)
        .map(|d| d <= tolerance)
        .unwrap_or(false)
}

/// Smallest edit distance between `query` and the candidate or any of its
/// whitespace tokens. `None` when the candidate is empty.
pub(crate) fn closest_distance(query: &str, candidate: &str) -> Option<usize> {
    if candidate.is_empty() {
        return None;
    }

    let mut best = edit_distance(query, candidate);
    if candidate.contains(' ') {
        for token in candidate.split_whitespace() {
            best = best.min(edit_distance(query, token));
        }
    }
    Some(best)
}
