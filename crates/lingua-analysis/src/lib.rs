//! # lingua-analysis
//!
//! Pure text analysis: lexical metrics over whitespace-delimited tokens
//! and the prompt templates that tell a client how to combine them.
//! Every function here is total; none of them can fail.

pub mod metrics;
pub mod prompts;

pub use metrics::{calculate_ttr, count_words, find_longest_word, tokens};
pub use prompts::analyze_complexity;
