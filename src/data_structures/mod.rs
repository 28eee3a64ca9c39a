// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the suggestion engine.
//!
//! This module contains the two algorithmic cores of the crate:
//! - [`niihau_trie`]: the prefix index that owns the vocabulary
//! - [`fuzzy_matcher`]: edit-distance ranking for typo-tolerant lookups
//!
//! Neither structure calls the other; the engine chains them.

pub mod fuzzy_matcher;
pub mod niihau_trie;

// Re-export common data structures
pub use fuzzy_matcher::{FuzzyMatch, FuzzyMatcher, MatcherOptions};
pub use niihau_trie::NiihauTrie;
