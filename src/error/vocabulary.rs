// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Vocabulary error module.
//!
//! This module defines error types that may occur while reading a vocabulary
//! source. All of them are recoverable: the loader can fall back to an empty
//! vocabulary and keep serving queries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Error when the vocabulary file cannot be opened.
    #[error("Vocabulary source unavailable at {path}: {source}")]
    SourceUnavailable {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Error when reading from an already opened source fails.
    #[error("Failed to read vocabulary source: {0}")]
    Read(#[from] io::Error),

    /// The source is not valid UTF-8. Logged when the loader falls back to a
    /// lossy decode.
    #[error("Vocabulary source is not valid UTF-8 (at byte {valid_up_to})")]
    InvalidEncoding {
        /// Length of the valid prefix
        valid_up_to: usize,
    },
}
