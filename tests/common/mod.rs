//! Common test utilities for fabexport CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory, HOME and fake `kicad-cli`
//! - Assertion macros: `assert_exported!`, `assert_not_exported!`, etc.
//! - Fixtures: project descriptor, design files and the fake tool script

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
