//! SourceModule entity - a discovered file under the build root

use std::path::{Path, PathBuf};

use crate::error::{SealError, SealResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// Absolute location on disk
    path: PathBuf,
    /// Location relative to the build root (never empty)
    relative: PathBuf,
}

impl SourceModule {
    /// Anchor `path` to `root`.
    ///
    /// Fails with `PathEscape` when `path` is not strictly beneath `root`.
    pub fn new(root: &Path, path: impl Into<PathBuf>) -> SealResult<Self> {
        let path = path.into();
        let relative = match path.strip_prefix(root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => {
                return Err(SealError::PathEscape {
                    path,
                    root: root.to_path_buf(),
                })
            }
        };
        Ok(Self { path, relative })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Bare filename, e.g. `b.py`.
    pub fn file_name(&self) -> Option<&str> {
        self.relative.file_name().and_then(|n| n.to_str())
    }
}
