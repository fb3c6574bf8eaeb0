//! Source discovery
//!
//! One walk abstraction serves both the compile phase (which `.py` files
//! become extension modules) and release cleanup (which `.py`/`.c` files get
//! stripped). Both phases therefore agree on what counts as source.

use std::path::{Path, PathBuf};

use crate::domain::entities::SourceModule;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{AllowList, ExcludedDirs, SuffixSet};
use crate::error::{SealError, SealResult};

#[derive(Debug, Clone)]
pub struct SourceDiscovery {
    build_root: PathBuf,
    keep: AllowList,
    suffixes: SuffixSet,
    excluded: ExcludedDirs,
}

impl SourceDiscovery {
    /// Discovery of compilable sources under `build_root`.
    pub fn new(build_root: impl Into<PathBuf>, keep: AllowList) -> Self {
        Self {
            build_root: build_root.into(),
            keep,
            suffixes: SuffixSet::sources(),
            excluded: ExcludedDirs::none(),
        }
    }

    pub fn with_suffixes(mut self, suffixes: SuffixSet) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn excluding(mut self, excluded: ExcludedDirs) -> Self {
        self.excluded = excluded;
        self
    }

    /// Walk `scan_root` and return matching modules sorted by relative path.
    ///
    /// `scan_root` must be the build root or lie beneath it.
    pub fn discover<FS>(&self, fs: &FS, scan_root: &Path) -> SealResult<Vec<SourceModule>>
    where
        FS: FileSystem + ?Sized,
    {
        if !fs.is_dir(scan_root) {
            return Err(SealError::DirectoryNotFound {
                path: scan_root.to_path_buf(),
            });
        }

        let files = fs
            .walk_files(scan_root, &self.excluded)
            .map_err(|e| SealError::Walk {
                path: scan_root.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut modules = Vec::new();
        for file in files {
            if !self.suffixes.matches(&file) || self.keep.keeps(&file) {
                continue;
            }
            let module = SourceModule::new(&self.build_root, file)?;
            if self.excluded.covers(module.relative()) {
                continue;
            }
            modules.push(module);
        }

        modules.sort_by(|a, b| a.relative().cmp(b.relative()));
        Ok(modules)
    }
}
