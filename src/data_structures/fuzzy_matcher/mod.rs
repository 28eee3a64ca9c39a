// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fuzzy Matcher for typo-tolerant suggestions.
//!
//! When a query has no exact-prefix completions, the fuzzy matcher compares it
//! against every stored entry with the Levenshtein edit distance, keeps the
//! entries within a configured threshold and ranks them by distance.
//!
//! # Example
//!
//! ```
//! use mauka_suggest_lib::data_structures::fuzzy_matcher::{FuzzyMatcher, MatcherOptions};
//!
//! let matcher = FuzzyMatcher::with_options(MatcherOptions::new().max_distance(1));
//! let candidates = vec!["cart".to_string(), "cat".to_string(), "dog".to_string()];
//!
//! assert_eq!(matcher.rank("Cst", &candidates), vec!["cat"]);
//! ```
//!
//! # Performance Characteristics
//!
//! - One comparison costs O(|query| * |entry|) time and O(|entry|) space
//! - A query costs one comparison per candidate, so O(V) comparisons for a
//!   vocabulary of size V
//! - Comparisons bail out early once the distance provably exceeds the
//!   threshold, which does not change the results

mod distance;

#[cfg(test)]
mod tests;

pub use distance::{bounded_levenshtein, levenshtein};

use crate::data_structures::niihau_trie::normalize;

/// Default maximum edit distance accepted by the matcher.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Options for configuring the fuzzy matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Largest edit distance at which a candidate is still accepted
    pub max_distance: usize,

    /// Maximum number of ranked results to return (`None` for all)
    pub limit: Option<usize>,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            limit: None,
        }
    }
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the acceptance threshold.
    ///
    /// # Arguments
    ///
    /// * `value` - Largest edit distance still considered a match.
    ///
    /// # Returns
    ///
    /// Updated options object with the specified setting.
    pub fn max_distance(mut self, value: usize) -> Self {
        self.max_distance = value;
        self
    }

    /// Caps the number of ranked results.
    ///
    /// # Arguments
    ///
    /// * `value` - Maximum number of results, or `None` to keep every match.
    ///
    /// # Returns
    ///
    /// Updated options object with the specified setting.
    pub fn limit(mut self, value: Option<usize>) -> Self {
        self.limit = value;
        self
    }
}

/// A candidate accepted by the matcher, with its distance to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// The stored entry
    pub entry: String,

    /// Edit distance between the normalized query and the entry
    pub distance: usize,
}

/// Ranks stored entries by edit distance to a query.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    options: MatcherOptions,
}

impl FuzzyMatcher {
    /// Creates a matcher with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with the given options.
    pub fn with_options(options: MatcherOptions) -> Self {
        Self { options }
    }

    /// Returns the options this matcher was built with.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Returns the candidates within the distance threshold, closest first.
    ///
    /// The query is lower-cased before comparison; candidates are expected to
    /// be normalized already, as entries enumerated from the trie are. The
    /// sort is stable on distance alone, so candidates at equal distance keep
    /// the order in which they were supplied.
    ///
    /// # Arguments
    ///
    /// * `query` - The text the user typed.
    /// * `candidates` - The entries to compare against.
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        self.rank_scored(query, candidates)
            .into_iter()
            .map(|m| m.entry)
            .collect()
    }

    /// Like [`FuzzyMatcher::rank`], but keeps the distance of every match.
    pub fn rank_scored<S>(&self, query: &str, candidates: &[S]) -> Vec<FuzzyMatch>
    where
        S: AsRef<str>,
    {
        let query = normalize(query);
        let max = self.options.max_distance;

        let mut matches: Vec<FuzzyMatch> = candidates
            .iter()
            .filter_map(|candidate| {
                let candidate = candidate.as_ref();
                bounded_levenshtein(&query, candidate, max).map(|distance| FuzzyMatch {
                    entry: candidate.to_string(),
                    distance,
                })
            })
            .collect();

        matches.sort_by_key(|m| m.distance);
        if let Some(limit) = self.options.limit {
            matches.truncate(limit);
        }

        tracing::debug!(
            query = %query,
            candidates = candidates.len(),
            matches = matches.len(),
            max_distance = max,
            "fuzzy ranking complete"
        );

        matches
    }
}
