// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Nodes are the building blocks of the trie. Each one owns its children
//! by value, so dropping the root releases the whole tree.

use std::collections::BTreeMap;

/// A node in the Niihau Trie.
///
/// Each node represents one character of a stored entry. Terminal nodes mark
/// the end of a complete entry.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Child nodes keyed by character, kept in character order
    pub(crate) children: BTreeMap<char, TrieNode>,

    /// Whether the path to this node spells a stored entry
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Returns `true` if this node has no children and does not end an entry.
    pub(crate) fn is_leaf_empty(&self) -> bool {
        self.children.is_empty() && !self.is_terminal
    }
}
