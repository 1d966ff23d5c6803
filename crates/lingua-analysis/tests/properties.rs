//! Property tests for the lexical metrics.

use lingua_analysis::{analyze_complexity, calculate_ttr, count_words, find_longest_word};
use proptest::prelude::*;

proptest! {
    /// Word count equals the number of whitespace-split tokens.
    #[test]
    fn count_matches_split(text in "\\PC{0,200}") {
        prop_assert_eq!(count_words(&text), text.split_whitespace().count());
    }

    /// TTR stays within [0, 1] for every input.
    #[test]
    fn ttr_is_bounded(text in "\\PC{0,200}") {
        let ttr = calculate_ttr(&text);
        prop_assert!((0.0..=1.0).contains(&ttr), "ttr {} out of range", ttr);
    }

    /// Non-blank input always has a strictly positive TTR.
    #[test]
    fn ttr_positive_for_tokens(words in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let text = words.join(" ");
        prop_assert!(calculate_ttr(&text) > 0.0);
    }

    /// Repeating a text never increases its diversity.
    #[test]
    fn ttr_repetition_does_not_increase(words in prop::collection::vec("[a-z]{1,6}", 1..12)) {
        let text = words.join(" ");
        let doubled = format!("{text} {text}");
        prop_assert!(calculate_ttr(&doubled) <= calculate_ttr(&text));
    }

    /// The longest word is a token, no token is longer, and no earlier token ties it.
    #[test]
    fn longest_is_maximal_and_first(words in prop::collection::vec("[a-zé學]{1,8}", 0..20)) {
        let text = words.join("  ");
        let longest = find_longest_word(&text);
        let len = longest.chars().count();
        if words.is_empty() {
            prop_assert_eq!(longest, "");
        } else {
            let first = words.iter().position(|w| w == longest);
            prop_assert!(first.is_some());
            let first = first.expect("test: checked above");
            prop_assert!(words.iter().all(|w| w.chars().count() <= len));
            prop_assert!(words[..first].iter().all(|w| w.chars().count() < len));
        }
    }

    /// The prompt embeds the id twice whatever it is.
    #[test]
    fn prompt_embeds_id(id in "[a-z0-9_]{1,16}") {
        let prompt = analyze_complexity(&id);
        let uri = format!("corpus://{id}");
        prop_assert!(prompt.matches(&uri).count() >= 2);
    }
}

#[test]
fn spec_examples() {
    assert!((calculate_ttr("the cat sat on the mat") - 5.0 / 6.0).abs() < 1e-12);
    assert_eq!(calculate_ttr(""), 0.0);
    assert_eq!(calculate_ttr("   "), 0.0);
    assert_eq!(find_longest_word(""), "");
    assert_eq!(find_longest_word("a bb ccc"), "ccc");
    assert_eq!(find_longest_word("ab cd"), "ab");
    assert_eq!(count_words(""), 0);
}
