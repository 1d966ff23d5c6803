//! Prompt templates.
//!
//! Templates use `__PLACEHOLDER__` substitution so the `{text_id}` URI
//! notation can appear in them literally.

/// Instructions for a complexity analysis of one corpus text.
///
/// Placeholders: `__TEXT_ID__` (twice).
pub const ANALYZE_COMPLEXITY_TEMPLATE: &str = "
Please analyze the linguistic complexity of corpus://__TEXT_ID__.

Steps:
1. First, read the text using the corpus://__TEXT_ID__ resource
2. Calculate its Type-Token Ratio using the calculate_ttr tool
3. Find the longest word using the find_longest_word tool
4. Provide a brief assessment of lexical complexity

A TTR above 0.7 typically indicates rich vocabulary.
";

const TEXT_ID_PLACEHOLDER: &str = "__TEXT_ID__";

/// Renders the complexity-analysis prompt for `text_id`.
///
/// The id is embedded verbatim and not checked against the corpus; an
/// unknown id produces a prompt whose resource read will fail downstream.
pub fn analyze_complexity(text_id: &str) -> String {
    ANALYZE_COMPLEXITY_TEMPLATE.replace(TEXT_ID_PLACEHOLDER, text_id)
}
