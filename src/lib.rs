//! pyseal - source protection for Python packages
//!
//! pyseal compiles every module of a Python package tree into a native
//! extension (Cython, then a C compiler) and, in release mode, deletes the
//! plaintext `.py` sources and generated `.c` files once every module has
//! compiled. Package markers and other allow-listed files are never touched.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BuildOptions, BuildOutcome, BuildPipeline, BuildPlan, CompileUseCase, CompiledBuild,
    RemovalReport, SanitizeUseCase,
};
pub use config::Config;
pub use domain::entities::{CompiledArtifact, ExtensionDescriptor, SourceModule};
pub use domain::ports::{CompileRequest, CompilerError, ExtensionCompiler, FileSystem, FsError};
pub use domain::value_objects::{
    AllowList, CompilerDirectives, DirectiveValue, ExcludedDirs, ModuleIdentity, ReleaseMode,
};
pub use error::{SealError, SealResult};
pub use infrastructure::{CythonCompiler, LocalFs, MemoryFs, PythonToolchain, ToolPaths};
