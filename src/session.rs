// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keystroke-driven suggestion session.
//!
//! A session holds the query a user is typing and the result set of the most
//! recent query. Every accepted keystroke re-runs the engine. Accepting the
//! top suggestion replaces the query without querying again.

use crate::engine::{SuggestionEngine, Suggestions, SuggestionSource};

/// Interactive state for one user typing against an engine.
#[derive(Debug)]
pub struct SuggestionSession<'e> {
    engine: &'e SuggestionEngine,
    query: String,
    last: Suggestions,
}

impl<'e> SuggestionSession<'e> {
    /// Starts a session with an empty query and no suggestions.
    pub fn new(engine: &'e SuggestionEngine) -> Self {
        Self {
            engine,
            query: String::new(),
            last: Suggestions {
                query: String::new(),
                source: SuggestionSource::Empty,
                entries: Vec::new(),
            },
        }
    }

    /// Appends a typed character and refreshes the suggestions.
    ///
    /// Only printable ASCII (space through `~`) is accepted; it is stored
    /// lower-cased. Anything else is ignored.
    ///
    /// # Returns
    ///
    /// `true` if the character was accepted.
    pub fn push(&mut self, ch: char) -> bool {
        if !(ch == ' ' || ch.is_ascii_graphic()) {
            return false;
        }
        self.query.push(ch.to_ascii_lowercase());
        self.refresh();
        true
    }

    /// Types every character of `text`, skipping the ones [`push`](Self::push) rejects.
    ///
    /// # Returns
    ///
    /// The number of characters accepted.
    pub fn type_str(&mut self, text: &str) -> usize {
        text.chars().filter(|&ch| self.push(ch)).count()
    }

    /// Removes the last character and refreshes the suggestions.
    ///
    /// The refresh also happens on an empty query, which lists the first
    /// entries of the vocabulary.
    ///
    /// # Returns
    ///
    /// `false` if the query was already empty.
    pub fn backspace(&mut self) -> bool {
        let removed = self.query.pop().is_some();
        self.refresh();
        removed
    }

    /// Replaces the query with the top suggestion of the last result set.
    ///
    /// The suggestion list is left as it was; the next keystroke refreshes it.
    ///
    /// # Returns
    ///
    /// The accepted suggestion, or `None` if there was nothing to accept.
    pub fn accept_top(&mut self) -> Option<&str> {
        let top = self.last.top()?;
        self.query = top.to_string();
        Some(&self.query)
    }

    /// Clears the query and the suggestions.
    pub fn clear(&mut self) {
        *self = Self::new(self.engine);
    }

    /// Returns the query typed so far.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the most recent result set.
    pub fn suggestions(&self) -> &Suggestions {
        &self.last
    }

    /// Renders the most recent suggestions, one per line.
    pub fn render(&self) -> String {
        self.last.entries.join("\n")
    }

    fn refresh(&mut self) {
        self.last = self.engine.suggest(&self.query);
    }
}
