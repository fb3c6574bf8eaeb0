//! Error types for pyseal
//!
//! Library code returns `SealResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for pyseal operations
pub type SealResult<T> = Result<T, SealError>;

/// Main error type for pyseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Scan root is missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Traversal failed part way through a tree
    #[error("failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// A path component cannot be expressed as a module name
    #[error("path '{path}' is not valid UTF-8 and cannot name a module")]
    NonUtf8Path { path: PathBuf },

    /// Path escapes the build root
    #[error("path '{path}' escapes build root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Auto-detection found nothing to compile
    #[error("no packages found under {root} (expected a directory containing __init__.py)")]
    NoPackages { root: PathBuf },

    /// Two sources map to the same dotted module name
    #[error("module '{module}' is produced by both {first} and {second}")]
    IdentityCollision {
        module: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The external compiler rejected a module
    #[error("failed to compile module '{module}' ({source_path}): {message}")]
    Compile {
        module: String,
        source_path: PathBuf,
        message: String,
    },

    /// Release cleanup could not delete a file
    #[error("failed to remove {path} after removing {removed} file(s): {source}")]
    Sanitize {
        path: PathBuf,
        removed: usize,
        #[source]
        source: FsError,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
