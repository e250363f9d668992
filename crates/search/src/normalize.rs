//! Text normalization for tolerant comparison.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a string for comparison.
///
/// Lower-cases, strips diacritics (NFD decomposition followed by removal of
/// combining marks, so "Sódica" becomes "sodica" and "ç" becomes "c"),
/// collapses whitespace runs to a single space, and trims the ends.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` for any `s`.
/// Total: never fails, returns an empty string for whitespace-only input.
///
/// # Examples
/// ```
/// use farmaguia_search::normalize;
///
/// assert_eq!(normalize("  Dipirona   Sódica "), "dipirona sodica");
/// assert_eq!(normalize("CIPROFLOXACINO"), "ciprofloxacino");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped = strip_diacritics(text);
    let lower = stripped.to_lowercase();

    // Collapse internal whitespace and trim in one pass.
    let mut out = String::with_capacity(lower.len());
    for word in lower.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Strip combining marks after NFD decomposition.
///
/// NFD splits precomposed characters like U+00E9 (é) into their base letter
/// plus a combining mark; dropping the marks removes the diacritics. Returns
/// borrowed when nothing changes (ASCII never carries marks).
fn strip_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}
