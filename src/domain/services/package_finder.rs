//! Package auto-detection
//!
//! When no packages are configured, every top-level directory of the build
//! root that carries a package marker is compiled.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ExcludedDirs;
use crate::error::{SealError, SealResult};

pub const PACKAGE_MARKER: &str = "__init__.py";

/// Top-level package directories, relative to `build_root`, sorted.
pub fn find_packages<FS>(
    fs: &FS,
    build_root: &Path,
    excluded: &ExcludedDirs,
) -> SealResult<Vec<PathBuf>>
where
    FS: FileSystem + ?Sized,
{
    if !fs.is_dir(build_root) {
        return Err(SealError::DirectoryNotFound {
            path: build_root.to_path_buf(),
        });
    }

    let dirs = fs.child_dirs(build_root).map_err(|e| SealError::Walk {
        path: build_root.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut packages: Vec<PathBuf> = dirs
        .into_iter()
        .filter(|dir| fs.exists(&dir.join(PACKAGE_MARKER)))
        .filter_map(|dir| {
            let name = dir.file_name()?.to_str()?.to_string();
            (!name.starts_with('.') && !excluded.is_marker(&name)).then(|| PathBuf::from(name))
        })
        .collect();

    packages.sort();
    Ok(packages)
}
