//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ExcludedDirs;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, root: &Path, skip: &ExcludedDirs) -> FsResult<Vec<PathBuf>> {
        let skip = skip.clone();

        // Hidden files and .gitignore'd paths are still sources; see everything.
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && entry.file_name().to_str().is_some_and(|n| skip.is_marker(n)))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| match e.io_error() {
                Some(io) => FsError::at(root, std::io::Error::new(io.kind(), e.to_string())),
                None => FsError::Other(format!("{}: {}", root.display(), e)),
            })?;
            // Links are not followed, but a link to a file is itself a source
            let is_file = match entry.file_type() {
                Some(t) if t.is_symlink() => entry.path().is_file(),
                Some(t) => t.is_file(),
                None => false,
            };
            if is_file {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn child_dirs(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| FsError::at(dir, e))? {
            let entry = entry.map_err(|e| FsError::at(dir, e))?;
            if entry.file_type().map_err(|e| FsError::at(dir, e))?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }
}
