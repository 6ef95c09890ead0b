//! Common test utilities for Bindigo CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
