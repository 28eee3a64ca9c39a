// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Engine configuration module.
//!
//! This module defines the query-time parameters of the suggestion engine:
//! how many prefix completions to return and how tolerant fuzzy matching is.

use super::{ConfigResult, Validate};
use crate::data_structures::fuzzy_matcher::{MatcherOptions, DEFAULT_MAX_DISTANCE};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default cap on prefix completions.
pub const DEFAULT_PREFIX_LIMIT: usize = 10;

/// Largest accepted value for either result cap.
pub const MAX_RESULT_LIMIT: usize = 10_000;

/// Largest accepted fuzzy threshold.
pub const MAX_EDIT_DISTANCE: usize = 16;

/// Suggestion engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of prefix completions returned per query
    pub prefix_limit: usize,

    /// Largest edit distance accepted by the fuzzy fallback
    pub max_edit_distance: usize,

    /// Maximum number of fuzzy suggestions returned (unbounded when unset)
    pub fuzzy_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prefix_limit: DEFAULT_PREFIX_LIMIT,
            max_edit_distance: DEFAULT_MAX_DISTANCE,
            fuzzy_limit: None,
        }
    }
}

impl EngineConfig {
    /// Builds the fuzzy matcher options described by this configuration.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::new()
            .max_distance(self.max_edit_distance)
            .limit(self.fuzzy_limit)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prefix_limit > MAX_RESULT_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.prefix_limit".to_string(),
                message: format!("must be at most {MAX_RESULT_LIMIT}"),
            });
        }

        if self.max_edit_distance > MAX_EDIT_DISTANCE {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.max_edit_distance".to_string(),
                message: format!("must be at most {MAX_EDIT_DISTANCE}"),
            });
        }

        if self.fuzzy_limit.is_some_and(|limit| limit > MAX_RESULT_LIMIT) {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.fuzzy_limit".to_string(),
                message: format!("must be at most {MAX_RESULT_LIMIT}"),
            });
        }

        Ok(())
    }
}
