// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Niihau Trie Implementation
//!
//! This module provides the prefix index behind the suggestion engine: a
//! character trie that stores a vocabulary of normalized entries and answers
//! bounded, deterministic prefix completions.
//!
//! The trie follows a build-then-freeze lifecycle. Entries are inserted while
//! the vocabulary loads; afterwards every query takes `&self`, so the index can
//! be shared between readers without any locking.
//!
//! # Example
//!
//! ```
//! use mauka_suggest_lib::data_structures::NiihauTrie;
//!
//! let trie: NiihauTrie = ["cat", "car", "cart", "dog"].into_iter().collect();
//!
//! assert_eq!(trie.suggest_prefix("CA", 10), vec!["car", "cart", "cat"]);
//! assert!(trie.suggest_prefix("xyz", 10).is_empty());
//! ```

mod node;

use node::TrieNode;

/// Normalizes an entry or query the way the trie stores it.
///
/// Only ASCII letters are folded; other characters are kept as they are.
pub fn normalize(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Niihau Trie is a character trie for storing a vocabulary and retrieving
/// completions by prefix.
///
/// Key features:
/// * Case-insensitive (ASCII) storage and lookup
/// * Lexicographically ordered, deterministic prefix results
/// * Iterative traversal, so deep entries cannot exhaust the call stack
/// * Memory efficient representation for shared prefixes
#[derive(Debug, Default)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct entries stored
    len: usize,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry into the trie.
    ///
    /// The entry is lower-cased before it is stored. Inserting an entry that
    /// is already present leaves the trie unchanged. Empty entries are
    /// ignored.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to insert.
    ///
    /// # Returns
    ///
    /// `true` if a new entry was stored, `false` if it was already present or empty.
    pub fn insert<E>(&mut self, entry: E) -> bool
    where
        E: AsRef<str>,
    {
        let entry = entry.as_ref();
        if entry.is_empty() {
            tracing::trace!("ignoring empty entry");
            return false;
        }

        let mut node = &mut self.root;
        for c in entry.chars() {
            node = node.children.entry(c.to_ascii_lowercase()).or_default();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Checks whether an entry is stored in the trie.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to look up, matched case-insensitively.
    pub fn contains<E>(&self, entry: E) -> bool
    where
        E: AsRef<str>,
    {
        let entry = entry.as_ref();
        !entry.is_empty() && self.find_node(entry).is_some_and(|node| node.is_terminal)
    }

    /// Returns up to `limit` stored entries that start with `query`.
    ///
    /// The query is lower-cased first. If some character of the query has no
    /// matching child the result is empty. Otherwise the entries below the
    /// reached node are returned in lexicographic order, truncated to `limit`.
    /// Children are visited in character order, so the walk stops as soon as
    /// `limit` entries are collected and the result never depends on the
    /// order in which entries were inserted.
    ///
    /// # Arguments
    ///
    /// * `query` - The prefix to complete.
    /// * `limit` - Maximum number of entries to return.
    ///
    /// # Returns
    ///
    /// The lexicographically smallest `limit` entries with the given prefix.
    pub fn suggest_prefix<Q>(&self, query: Q, limit: usize) -> Vec<String>
    where
        Q: AsRef<str>,
    {
        if limit == 0 {
            return Vec::new();
        }

        let query = normalize(query.as_ref());
        match self.find_node(&query) {
            Some(node) => Self::collect(node, query, Some(limit)),
            None => Vec::new(),
        }
    }

    /// Returns every stored entry.
    ///
    /// This is the input feed for fuzzy matching. Callers should treat the
    /// order as unspecified.
    pub fn entries(&self) -> Vec<String> {
        Self::collect(&self.root, String::new(), None)
    }

    /// Returns the number of distinct entries in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf_empty()
    }

    /// Walks the path spelled by `key` (already normalized for queries).
    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c.to_ascii_lowercase())?;
        }
        Some(node)
    }

    /// Depth-first, pre-order collection of the terminals below `start`.
    ///
    /// Children are pushed in reverse so the smallest character is popped
    /// first; with pre-order visiting this yields entries in lexicographic
    /// order.
    fn collect(start: &TrieNode, prefix: String, limit: Option<usize>) -> Vec<String> {
        let mut results = Vec::new();
        let mut stack = vec![(start, prefix)];

        while let Some((node, path)) = stack.pop() {
            if node.is_terminal {
                results.push(path.clone());
                if limit.is_some_and(|limit| results.len() >= limit) {
                    break;
                }
            }

            for (c, child) in node.children.iter().rev() {
                let mut child_path = String::with_capacity(path.len() + c.len_utf8());
                child_path.push_str(&path);
                child_path.push(*c);
                stack.push((child, child_path));
            }
        }

        results
    }
}

impl Drop for NiihauTrie {
    fn drop(&mut self) {
        // Unlink children before they drop so freeing a deep tree stays iterative.
        let mut pending = vec![std::mem::take(&mut self.root)];
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<E> Extend<E> for NiihauTrie
where
    E: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<E> FromIterator<E> for NiihauTrie
where
    E: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
