// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Vocabulary configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default vocabulary file, relative to the working directory.
pub const DEFAULT_VOCABULARY_PATH: &str = "text.txt";

/// Vocabulary source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Path of the comma-separated vocabulary file
    pub path: PathBuf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_VOCABULARY_PATH),
        }
    }
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "vocabulary.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
