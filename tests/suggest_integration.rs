// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the suggestion pipeline.
//!
//! These go through the public API only: configuration, vocabulary file,
//! engine and session.

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use mauka_suggest_lib::config::{EngineConfig, MaukaConfig};
use mauka_suggest_lib::data_structures::fuzzy_matcher::{
    levenshtein, FuzzyMatcher, MatcherOptions,
};
use mauka_suggest_lib::data_structures::NiihauTrie;
use mauka_suggest_lib::engine::{SuggestionEngine, SuggestionSource};
use mauka_suggest_lib::session::SuggestionSession;

#[test]
fn test_engine_from_vocabulary_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, "cat, car,\ncart , dog,,\n").unwrap();

    let mut config = MaukaConfig::default();
    config.vocabulary.path = path;

    let (engine, report) = SuggestionEngine::from_config(&config);
    assert_eq!(report.inserted, 4);

    let result = engine.suggest("ca");
    assert_eq!(result.source, SuggestionSource::Prefix);
    assert_eq!(result.entries, vec!["car", "cart", "cat"]);

    let result = engine.suggest("xyz");
    assert_eq!(result.source, SuggestionSource::Empty);
    assert!(result.entries.is_empty());
}

#[test]
fn test_missing_vocabulary_yields_empty_engine() {
    let dir = tempdir().unwrap();

    let mut config = MaukaConfig::default();
    config.vocabulary.path = dir.path().join("missing.txt");

    let (engine, report) = SuggestionEngine::from_config(&config);
    assert_eq!(report.tokens, 0);
    assert!(engine.index().is_empty());
    assert_eq!(engine.suggest("a").source, SuggestionSource::Empty);
}

#[test]
fn test_trie_does_not_fall_back_on_its_own() {
    let trie: NiihauTrie = ["cat", "car", "cart", "dog"].into_iter().collect();

    // The index only answers prefixes; the caller decides to go fuzzy.
    assert!(trie.suggest_prefix("cst", 10).is_empty());

    let matcher = FuzzyMatcher::with_options(MatcherOptions::new().max_distance(2));
    assert_eq!(matcher.rank("cst", &trie.entries()), vec!["cat", "car", "cart"]);
}

#[test]
fn test_session_round_trip() {
    let index = ["new york", "newark", "new orleans", "boston"].into_iter().collect();
    let engine = SuggestionEngine::new(index, &EngineConfig::default());
    let mut session = SuggestionSession::new(&engine);

    session.type_str("New ");
    assert_eq!(session.render(), "new orleans\nnew york");

    assert_eq!(session.accept_top(), Some("new orleans"));
    session.backspace();
    assert_eq!(session.query(), "new orlean");
    assert_eq!(session.suggestions().entries, vec!["new orleans"]);

    session.clear();
    session.type_str("bostn");
    assert_eq!(session.suggestions().source, SuggestionSource::Fuzzy);
    assert_eq!(session.suggestions().top(), Some("boston"));
}

proptest! {
    // Property: every stored entry is found under each of its prefixes when the cap allows it
    #[test]
    fn prop_prefix_correctness(words in prop::collection::vec("[a-c]{1,5}", 1..25)) {
        let trie: NiihauTrie = words.iter().collect();

        for word in &words {
            for end in 0..=word.len() {
                let prefix = &word[..end];
                let below = trie.entries().iter().filter(|e| e.starts_with(prefix)).count();
                let found = trie.suggest_prefix(prefix, below);
                prop_assert!(found.contains(word));
            }
        }
    }

    // Property: truncated results are the smallest matches regardless of insertion order
    #[test]
    fn prop_truncation_is_deterministic(
        words in prop::collection::vec("[a-c]{1,5}", 1..25),
        limit in 0usize..8,
    ) {
        let forward: NiihauTrie = words.iter().collect();
        let backward: NiihauTrie = words.iter().rev().collect();

        let mut expected: Vec<String> = words.clone();
        expected.sort();
        expected.dedup();
        let expected: Vec<String> = expected
            .into_iter()
            .filter(|w| w.starts_with('a'))
            .take(limit)
            .collect();

        prop_assert_eq!(forward.suggest_prefix("a", limit), expected.clone());
        prop_assert_eq!(backward.suggest_prefix("a", limit), expected);
    }

    // Property: the engine never returns a fuzzy entry beyond the threshold
    #[test]
    fn prop_engine_fuzzy_within_threshold(
        words in prop::collection::vec("[a-d]{1,6}", 0..25),
        query in "[a-e]{0,6}",
        max in 0usize..3,
    ) {
        let config = EngineConfig { max_edit_distance: max, ..EngineConfig::default() };
        let engine = SuggestionEngine::new(words.iter().collect(), &config);
        let result = engine.suggest(&query);

        if result.source == SuggestionSource::Fuzzy {
            for entry in &result.entries {
                prop_assert!(levenshtein(&query, entry) <= max);
            }
        }
    }
}
