//! Build Options
//!
//! Everything one invocation needs, fixed before any stage runs.

use std::path::PathBuf;

use crate::domain::value_objects::{AllowList, CompilerDirectives, ExcludedDirs};

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Anchor for module names and the tree release cleanup walks
    pub build_root: PathBuf,
    /// Package dirs relative to the build root (empty = auto-detect)
    pub packages: Vec<PathBuf>,
    /// Filenames never compiled and never deleted
    pub keep: AllowList,
    /// Directory names exempt from release cleanup
    pub excluded: ExcludedDirs,
    /// Directives every module is compiled under
    pub directives: CompilerDirectives,
    /// Forwarded to the compiler verbatim
    pub extra_args: Vec<String>,
}

impl BuildOptions {
    pub fn new(build_root: impl Into<PathBuf>) -> Self {
        Self {
            build_root: build_root.into(),
            packages: Vec::new(),
            keep: AllowList::default(),
            excluded: ExcludedDirs::default(),
            directives: CompilerDirectives::default(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_packages<I, P>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.packages = packages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keep(mut self, keep: AllowList) -> Self {
        self.keep = keep;
        self
    }

    pub fn with_excluded(mut self, excluded: ExcludedDirs) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_directives(mut self, directives: CompilerDirectives) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }
}
