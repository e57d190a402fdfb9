use noesis_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NoesisConfig::from_toml("").unwrap();

    // Corpus defaults
    assert_eq!(config.corpus.base_url, "books/");
    assert_eq!(config.corpus.catalog_file, "catalog.json");
    assert!(config.corpus.collection_books.is_empty());
    assert_eq!(config.corpus.max_concurrent_loads, 3);
    assert_eq!(config.corpus.fetch_timeout_secs, 30);
    assert_eq!(config.corpus.fetch_retries, 2);

    // Analysis defaults
    assert_eq!(config.analysis.min_term_frequency, 2);
    assert_eq!(config.analysis.max_concepts_per_chapter, 30);
    assert_eq!(config.analysis.min_shared_chapters, 2);
    assert_eq!(config.analysis.categories.len(), 6);
    assert_eq!(config.analysis.tension_pairs.len(), 10);

    // Meditation defaults
    assert_eq!(config.meditation.passes, 5);
    assert_eq!(config.meditation.min_shared_concepts, 5);

    // Synthesis defaults
    assert_eq!(config.synthesis.chapters, 21);
    assert_eq!(config.synthesis.practices, 21);
    assert_eq!(config.synthesis.practices_per_category, 3);

    // Dialogue defaults
    assert_eq!(config.dialogue.max_history, 20);
    assert_eq!(config.dialogue.search_limit, 5);

    // Persistence and observability defaults
    assert_eq!(config.persistence.snapshot_path, "noesis-state.json");
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[corpus]
base_url = "https://library.example.org/books/"
max_concurrent_loads = 8

[synthesis]
chapters = 12
"#;
    let config = NoesisConfig::from_toml(toml).unwrap();
    assert_eq!(config.corpus.base_url, "https://library.example.org/books/");
    assert_eq!(config.corpus.max_concurrent_loads, 8);
    // Non-overridden fields keep defaults
    assert_eq!(config.corpus.fetch_retries, 2);
    assert_eq!(config.synthesis.chapters, 12);
    assert_eq!(config.synthesis.practices, 21); // default
}

#[test]
fn config_serde_roundtrip() {
    let config = NoesisConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = NoesisConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.corpus.base_url, config.corpus.base_url);
    assert_eq!(roundtripped.meditation.passes, config.meditation.passes);
    assert_eq!(
        roundtripped.analysis.tension_pairs,
        config.analysis.tension_pairs
    );
}

#[test]
fn config_rejects_malformed_toml() {
    let err = NoesisConfig::from_toml("[corpus\nbase_url = 3").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("config"), "unexpected error: {msg}");
}
