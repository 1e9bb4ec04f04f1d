//! Category key normalization.
//!
//! Free-text category labels ("Gavetas", " Dobradiça ") are folded into a
//! matching key before any catalog lookup. Keys are never shown to users.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a label into its matching key.
///
/// Lowercases, trims, decomposes accented characters and drops the combining
/// marks, then strips a single trailing `s` as a naive singular.
pub fn normalize(text: &str) -> String {
    let mut key: String = text
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    if key.ends_with('s') {
        key.pop();
    }
    key
}
