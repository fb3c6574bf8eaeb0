//! FileSystem port - abstraction over the tree under the build root
//!
//! Lets discovery and release cleanup run against the local disk or an
//! in-memory fake without changing the domain code.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExcludedDirs;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MemoryFs` (tests) - in-memory tree with injectable removal failures
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Every regular file beneath `root`, in no particular order.
    ///
    /// Directories whose name is an excluded marker are not descended into.
    fn walk_files(&self, root: &Path, skip: &ExcludedDirs) -> FsResult<Vec<PathBuf>>;

    /// Immediate subdirectories of `dir`
    fn child_dirs(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Remove a single file
    fn remove(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn walk_files(&self, root: &Path, skip: &ExcludedDirs) -> FsResult<Vec<PathBuf>> {
        (**self).walk_files(root, skip)
    }

    fn child_dirs(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).child_dirs(dir)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }
}
