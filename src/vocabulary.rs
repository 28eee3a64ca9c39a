// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Vocabulary loading.
//!
//! A vocabulary source is plain text holding comma-separated tokens over one
//! or more lines. Tokens are trimmed, blank ones are dropped, and the rest are
//! inserted lower-cased into a [`NiihauTrie`]. There is no quoting or escaping.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::data_structures::niihau_trie::{normalize, NiihauTrie};
use crate::error::vocabulary::VocabularyError;
use crate::error::{report_error, ErrorContext};

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Summary of one vocabulary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-blank tokens found in the source
    pub tokens: usize,

    /// Tokens that added a new entry
    pub inserted: usize,

    /// Tokens whose entry was already present
    pub duplicates: usize,
}

/// Splits vocabulary text into normalized entries.
///
/// Commas and line breaks both end a token.
pub fn parse_entries(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(normalize)
        .collect()
}

/// Reads a whole vocabulary source and inserts its entries into `trie`.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD and logged as a warning;
/// every other token still loads.
///
/// # Errors
///
/// Returns [`VocabularyError::Read`] if reading fails. Nothing is inserted in
/// that case.
pub fn load_reader<R: Read>(
    mut reader: R,
    trie: &mut NiihauTrie,
) -> VocabularyResult<LoadReport> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            tracing::warn!(
                error = %VocabularyError::InvalidEncoding { valid_up_to },
                valid_up_to,
                "decoding vocabulary lossily"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let mut report = LoadReport::default();
    for entry in parse_entries(&text) {
        report.tokens += 1;
        if trie.insert(&entry) {
            report.inserted += 1;
        } else {
            report.duplicates += 1;
        }
    }

    Ok(report)
}

/// Loads a vocabulary file into a trie.
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    path: PathBuf,
}

impl VocabularyLoader {
    /// Creates a loader for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file and inserts its entries into `trie`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::SourceUnavailable`] if the file cannot be
    /// opened, or any error from [`load_reader`].
    pub fn load_into(&self, trie: &mut NiihauTrie) -> VocabularyResult<LoadReport> {
        let file = File::open(&self.path).map_err(|source| VocabularyError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let report = load_reader(file, trie)?;
        tracing::debug!(
            path = %self.path.display(),
            tokens = report.tokens,
            inserted = report.inserted,
            duplicates = report.duplicates,
            "vocabulary loaded"
        );
        Ok(report)
    }

    /// Loads the vocabulary, treating any failure as an empty vocabulary.
    ///
    /// Failures are sent to the global error reporter rather than returned,
    /// so the caller can keep serving (empty) suggestions.
    pub fn load_or_empty(&self, trie: &mut NiihauTrie) -> LoadReport {
        match self.load_into(trie) {
            Ok(report) => report,
            Err(e) => {
                report_error(
                    ErrorContext::new(e, "vocabulary")
                        .with_details(format!("continuing with {} entries", trie.len())),
                );
                LoadReport::default()
            }
        }
    }
}
