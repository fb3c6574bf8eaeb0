//! Common test utilities for pyseal integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated build root in a temp directory, plus CLI helpers
//! - `FakeCython`: an `ExtensionCompiler` that writes artifacts without a toolchain
//! - Fixtures: small package layouts

#![allow(dead_code)]

pub mod compiler;
pub mod env;
pub mod fixtures;

pub use compiler::*;
pub use env::*;
pub use fixtures::*;
