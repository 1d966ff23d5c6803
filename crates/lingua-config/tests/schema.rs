//! Integration tests for lingua-config schema types and file loading.

use std::io::Write;

use lingua_config::{load_config, CorpusConfig, LinguaConfig, TextConfig};

#[test]
fn default_values() {
    let config = LinguaConfig::default();
    assert_eq!(config.server.name, "LinguistHelper");
    assert!(config.server.instructions.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.corpus.texts.is_none());
}

#[test]
fn serde_roundtrip_keeps_text_order() {
    let config = LinguaConfig {
        corpus: CorpusConfig {
            texts: Some(vec![
                TextConfig {
                    id: "b".into(),
                    body: "second letter".into(),
                },
                TextConfig {
                    id: "a".into(),
                    body: "first letter".into(),
                },
            ]),
        },
        ..LinguaConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let back: LinguaConfig = serde_json::from_str(&json).expect("deserialize");
    let ids: Vec<_> = back
        .corpus
        .texts
        .expect("texts")
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn empty_sections_fall_back_to_defaults() {
    let config: LinguaConfig = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(config.server.name, "LinguistHelper");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_from_absolute_temp_path() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tempfile");
    writeln!(
        file,
        "[server]\ninstructions = \"Read corpus://list first.\"\n"
    )
    .expect("write");
    let path = file.path().to_str().expect("utf8").to_string();
    let config = load_config(Some(&path)).expect("load");
    assert_eq!(
        config.server.instructions.as_deref(),
        Some("Read corpus://list first.")
    );
    assert!(config.corpus.texts.is_none());
}
