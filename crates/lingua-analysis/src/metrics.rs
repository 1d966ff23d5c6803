//! Lexical metrics.
//!
//! A token is a maximal run of non-whitespace characters
//! (`char::is_whitespace`). Punctuation stays attached to its token, so
//! `mat` and `mat.` are different types.

use std::collections::HashSet;

/// Splits `text` into whitespace-delimited tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Type-Token Ratio: distinct lowercased tokens / total tokens.
///
/// Returns `0.0` for empty or whitespace-only input.
pub fn calculate_ttr(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let lowered = text.to_lowercase();
    let all: Vec<&str> = tokens(&lowered).collect();
    if all.is_empty() {
        return 0.0;
    }
    let types: HashSet<&str> = all.iter().copied().collect();
    types.len() as f64 / all.len() as f64
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    tokens(text).count()
}

/// Token with the most characters; the first one wins ties.
///
/// Length is counted in `char`s, not bytes. Returns `""` when there are
/// no tokens.
pub fn find_longest_word(text: &str) -> &str {
    let mut longest = "";
    let mut longest_len = 0;
    for token in tokens(text) {
        let len = token.chars().count();
        if len > longest_len {
            longest = token;
            longest_len = len;
        }
    }
    longest
}
