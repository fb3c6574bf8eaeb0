//! Compiler backends
//!
//! Concrete implementations of the ExtensionCompiler port.

mod cython;
mod toolchain;

pub use cython::{CythonCompiler, ToolPaths};
pub use toolchain::PythonToolchain;
