// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the fuzzy matcher.


use super::*;

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_ranks_by_ascending_distance() {
    // Distances to "cart": 2, 0, 1
    let candidates = owned(&["cab", "cart", "car"]);
    let matcher = FuzzyMatcher::new();

    let scored = matcher.rank_scored("cart", &candidates);
    let distances: Vec<usize> = scored.iter().map(|m| m.distance).collect();

    assert_eq!(distances, vec![0, 1, 2]);
    assert_eq!(matcher.rank("cart", &candidates), vec!["cart", "car", "cab"]);
}

#[test]
fn test_ties_keep_enumeration_order() {
    let candidates = owned(&["bat", "cat", "hat", "cot"]);
    let matcher = FuzzyMatcher::with_options(MatcherOptions::new().max_distance(1));

    assert_eq!(matcher.rank("xat", &candidates), vec!["bat", "cat", "hat"]);

    let reversed: Vec<String> = candidates.iter().rev().cloned().collect();
    assert_eq!(matcher.rank("xat", &reversed), vec!["hat", "cat", "bat"]);
}

#[test]
fn test_never_exceeds_max_distance() {
    let candidates = owned(&["cat", "car", "cart", "dog", "catalog", "c"]);

    for max in 0..4 {
        let matcher = FuzzyMatcher::with_options(MatcherOptions::new().max_distance(max));
        for m in matcher.rank_scored("cats", &candidates) {
            assert!(m.distance <= max, "{} at {} exceeds {}", m.entry, m.distance, max);
            assert_eq!(m.distance, levenshtein("cats", &m.entry));
        }
    }
}

#[test]
fn test_zero_distance_keeps_exact_matches_only() {
    let candidates = owned(&["cat", "car", "cart"]);
    let matcher = FuzzyMatcher::with_options(MatcherOptions::new().max_distance(0));

    assert_eq!(matcher.rank("CAT", &candidates), vec!["cat"]);
    assert!(matcher.rank("cab", &candidates).is_empty());
}

#[test]
fn test_no_match_is_empty() {
    let candidates = owned(&["cat", "car", "cart", "dog"]);
    let matcher = FuzzyMatcher::new();

    assert!(matcher.rank("xyz", &candidates).is_empty());
    assert!(matcher.rank("anything", &Vec::<String>::new()).is_empty());
}

#[test]
fn test_limit_truncates_after_ranking() {
    let candidates = owned(&["cab", "cart", "car", "cat"]);
    let matcher = FuzzyMatcher::with_options(MatcherOptions::new().limit(Some(2)));

    assert_eq!(matcher.rank("cart", &candidates), vec!["cart", "car"]);

    let matcher = FuzzyMatcher::with_options(MatcherOptions::new().limit(Some(0)));
    assert!(matcher.rank("cart", &candidates).is_empty());
}

#[test]
fn test_default_options() {
    let matcher = FuzzyMatcher::new();
    assert_eq!(matcher.options().max_distance, DEFAULT_MAX_DISTANCE);
    assert_eq!(matcher.options().limit, None);
}
