// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mauka Suggest Library
//!
//! An in-memory autocomplete engine. A vocabulary of comma-separated entries
//! is loaded once into a character trie; each query is answered with
//! exact-prefix completions when there are any, and with typo-tolerant
//! edit-distance matches otherwise.
//!
//! # Architecture
//!
//! - [`data_structures::NiihauTrie`]: the prefix index, built then frozen
//! - [`data_structures::FuzzyMatcher`]: Levenshtein ranking over all entries
//! - [`vocabulary`]: parses the vocabulary source and fills the index
//! - [`engine::SuggestionEngine`]: chains prefix lookup and fuzzy fallback
//! - [`session::SuggestionSession`]: per-keystroke query state for a front end
//!
//! ```
//! use mauka_suggest_lib::config::EngineConfig;
//! use mauka_suggest_lib::engine::SuggestionEngine;
//!
//! let index = ["cat", "car", "cart", "dog"].into_iter().collect();
//! let engine = SuggestionEngine::new(index, &EngineConfig::default());
//!
//! assert_eq!(engine.suggest("ca").entries, vec!["car", "cart", "cat"]);
//! assert_eq!(engine.suggest("dgo").entries, vec!["dog"]);
//! ```

pub mod config;
pub mod data_structures;
pub mod engine;
pub mod error;
pub mod session;
pub mod vocabulary;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the suggestion engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
