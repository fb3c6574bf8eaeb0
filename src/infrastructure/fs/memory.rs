//! In-memory file system
//!
//! Holds a set of file paths; directories exist implicitly. Removal of
//! selected paths can be made to fail, which a real disk cannot reproduce
//! reliably when tests run as root.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ExcludedDirs;

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<BTreeSet<PathBuf>>>,
    locked: Arc<Mutex<BTreeSet<PathBuf>>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let fs = Self::new();
        for path in paths {
            fs.add_file(path);
        }
        fs
    }

    pub fn add_file(&self, path: impl Into<PathBuf>) {
        guard(&self.files).insert(path.into());
    }

    /// Make every later `remove(path)` fail with `PermissionDenied`.
    pub fn lock_file(&self, path: impl Into<PathBuf>) {
        guard(&self.locked).insert(path.into());
    }

    /// Snapshot of all files, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        guard(&self.files).iter().cloned().collect()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        guard(&self.files).contains(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        guard(&self.files)
            .iter()
            .any(|f| f != path && f.starts_with(path))
    }

    fn walk_files(&self, root: &Path, skip: &ExcludedDirs) -> FsResult<Vec<PathBuf>> {
        let files = guard(&self.files);
        Ok(files
            .iter()
            .filter_map(|f| {
                let rel = f.strip_prefix(root).ok()?;
                let pruned = rel.parent().is_some_and(|dirs| {
                    dirs.components().any(|c| match c {
                        Component::Normal(name) => name.to_str().is_some_and(|n| skip.is_marker(n)),
                        _ => false,
                    })
                });
                (!rel.as_os_str().is_empty() && !pruned).then(|| f.clone())
            })
            .collect())
    }

    fn child_dirs(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let files = guard(&self.files);
        let dirs: BTreeSet<PathBuf> = files
            .iter()
            .filter_map(|f| {
                let rel = f.strip_prefix(dir).ok()?;
                let mut components = rel.components();
                let first = components.next()?;
                components.next().map(|_| dir.join(first))
            })
            .collect();
        Ok(dirs.into_iter().collect())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        if guard(&self.locked).contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if guard(&self.files).remove(path) {
            Ok(())
        } else {
            Err(FsError::NotFound(path.to_path_buf()))
        }
    }
}
