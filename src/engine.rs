// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suggestion engine.
//!
//! The engine owns a frozen [`NiihauTrie`] and a [`FuzzyMatcher`] and runs the
//! per-query decision: try an exact-prefix completion first, and only when
//! that comes back empty rank the whole vocabulary by edit distance.

use serde::Serialize;

use crate::config::{EngineConfig, MaukaConfig};
use crate::data_structures::fuzzy_matcher::FuzzyMatcher;
use crate::data_structures::niihau_trie::{normalize, NiihauTrie};
use crate::vocabulary::{LoadReport, VocabularyLoader};

/// Which stage produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// Exact-prefix completions
    Prefix,
    /// Edit-distance matches, used when no prefix completion exists
    Fuzzy,
    /// Neither stage found anything
    Empty,
}

/// The ordered result of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// The normalized query
    pub query: String,

    /// Stage that produced `entries`
    pub source: SuggestionSource,

    /// Suggestions, best first
    pub entries: Vec<String>,
}

impl Suggestions {
    /// Returns the best suggestion, if any.
    pub fn top(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Returns `true` if there are no suggestions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Answers suggestion queries against a loaded vocabulary.
#[derive(Debug)]
pub struct SuggestionEngine {
    index: NiihauTrie,
    matcher: FuzzyMatcher,
    prefix_limit: usize,
}

impl SuggestionEngine {
    /// Creates an engine over an already populated trie.
    ///
    /// # Arguments
    ///
    /// * `index` - The vocabulary; it is not modified afterwards.
    /// * `config` - Result caps and fuzzy threshold.
    pub fn new(index: NiihauTrie, config: &EngineConfig) -> Self {
        Self {
            index,
            matcher: FuzzyMatcher::with_options(config.matcher_options()),
            prefix_limit: config.prefix_limit,
        }
    }

    /// Loads the configured vocabulary and builds an engine over it.
    ///
    /// A missing or unreadable vocabulary is reported through the global
    /// error reporter and yields an engine with an empty index.
    pub fn from_config(config: &MaukaConfig) -> (Self, LoadReport) {
        let mut index = NiihauTrie::new();
        let report = VocabularyLoader::new(&config.vocabulary.path).load_or_empty(&mut index);
        (Self::new(index, &config.engine), report)
    }

    /// Returns the frozen vocabulary index.
    pub fn index(&self) -> &NiihauTrie {
        &self.index
    }

    /// Returns the fuzzy matcher used for the fallback stage.
    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Suggests completions for `query`.
    pub fn suggest(&self, query: &str) -> Suggestions {
        let query = normalize(query);

        let prefix = self.index.suggest_prefix(&query, self.prefix_limit);
        if !prefix.is_empty() {
            tracing::debug!(query = %query, count = prefix.len(), "prefix suggestions");
            return Suggestions {
                query,
                source: SuggestionSource::Prefix,
                entries: prefix,
            };
        }

        let fuzzy = self.matcher.rank(&query, &self.index.entries());
        let source = if fuzzy.is_empty() {
            SuggestionSource::Empty
        } else {
            SuggestionSource::Fuzzy
        };
        tracing::debug!(
            query = %query,
            count = fuzzy.len(),
            ?source,
            "no prefix match, used fuzzy fallback"
        );

        Suggestions {
            query,
            source,
            entries: fuzzy,
        }
    }
}
