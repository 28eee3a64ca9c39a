// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the suggestion engine.
//!
//! Component tests that need files, environment variables or the global
//! error reporter live here; pure unit tests sit next to the code they test.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{install_recorder, vocabulary_strategy, TestFixture};
