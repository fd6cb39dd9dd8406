//! Common test utilities for reposweep CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated workspace with a `.repo/` directory and a private HOME
//! - `TestResult`: captured exit code and output of one CLI run

pub mod env;

pub use env::*;
