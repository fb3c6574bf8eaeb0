//! Sanitize Use Case
//!
//! Strips plaintext sources and intermediate C files from the build root
//! after a successful compile.

use std::path::PathBuf;

use crate::application::compile::CompiledBuild;
use crate::domain::ports::FileSystem;
use crate::domain::services::SourceDiscovery;
use crate::domain::value_objects::{AllowList, ExcludedDirs, SuffixSet};
use crate::error::{SealError, SealResult};

use super::result::RemovalReport;

pub struct SanitizeUseCase<FS: FileSystem> {
    fs: FS,
    build_root: PathBuf,
    keep: AllowList,
    discovery: SourceDiscovery,
}

impl<FS: FileSystem> SanitizeUseCase<FS> {
    pub fn new(
        fs: FS,
        build_root: impl Into<PathBuf>,
        keep: AllowList,
        excluded: ExcludedDirs,
    ) -> Self {
        let build_root = build_root.into();
        let discovery = SourceDiscovery::new(build_root.clone(), keep.clone())
            .with_suffixes(SuffixSet::strippable())
            .excluding(excluded);
        Self {
            fs,
            build_root,
            keep,
            discovery,
        }
    }

    /// Delete every strippable file under the build root.
    ///
    /// Allow-listed names and anything under an excluded directory are never
    /// touched. The first failed deletion stops the run; files removed before
    /// it stay removed and the error carries how many there were.
    pub fn execute(&self, _build: &CompiledBuild) -> SealResult<RemovalReport> {
        let candidates = self.discovery.discover(&self.fs, &self.build_root)?;
        let mut report = RemovalReport::new(self.keep.names().map(str::to_string).collect());

        for candidate in candidates {
            self.fs
                .remove(candidate.path())
                .map_err(|source| SealError::Sanitize {
                    path: candidate.path().to_path_buf(),
                    removed: report.removed_count(),
                    source,
                })?;
            tracing::debug!(path = %candidate.relative().display(), "removed");
            report.add_removed(candidate.relative().to_path_buf());
        }

        Ok(report)
    }
}
