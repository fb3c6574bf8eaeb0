//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (local disk, in-memory)
//! - `compiler/` - Cython + C compiler backend

pub mod compiler;
pub mod fs;

pub use compiler::{CythonCompiler, PythonToolchain, ToolPaths};
pub use fs::{LocalFs, MemoryFs};
