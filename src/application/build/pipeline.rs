//! Build pipeline
//!
//! Two phases with the ordering contract in the types:
//!
//! ```text
//! plan()      discovery -> module identity -> extension descriptors
//! compile()   every descriptor, or an error        => CompiledBuild
//! sanitize()  needs a CompiledBuild                 => RemovalReport
//! ```
//!
//! `run()` strings them together and calls `sanitize()` only for
//! `ReleaseMode::Release` after `compile()` succeeded.

use std::path::PathBuf;

use crate::application::compile::{CompileUseCase, CompiledBuild};
use crate::application::sanitize::{RemovalReport, SanitizeUseCase};
use crate::domain::ports::{ExtensionCompiler, FileSystem};
use crate::domain::services::{build_extensions, find_packages, SourceDiscovery};
use crate::domain::value_objects::ReleaseMode;
use crate::error::{SealError, SealResult};

use super::options::BuildOptions;
use super::result::{BuildOutcome, BuildPlan};

pub struct BuildPipeline<C, FS>
where
    C: ExtensionCompiler,
    FS: FileSystem,
{
    options: BuildOptions,
    fs: FS,
    compile: CompileUseCase<C>,
}

impl<C, FS> BuildPipeline<C, FS>
where
    C: ExtensionCompiler,
    FS: FileSystem,
{
    pub fn new(options: BuildOptions, compiler: C, fs: FS) -> Self {
        let compile = CompileUseCase::new(compiler, options.directives.clone())
            .with_extra_args(options.extra_args.clone());
        Self {
            options,
            fs,
            compile,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn compiler(&self) -> &C {
        self.compile.compiler()
    }

    /// Configured packages, or the auto-detected top-level packages.
    pub fn packages(&self) -> SealResult<Vec<PathBuf>> {
        if !self.options.packages.is_empty() {
            return Ok(self.options.packages.clone());
        }

        let found = find_packages(&self.fs, &self.options.build_root, &self.options.excluded)?;
        if found.is_empty() {
            return Err(SealError::NoPackages {
                root: self.options.build_root.clone(),
            });
        }
        tracing::debug!(packages = ?found, "auto-detected packages");
        Ok(found)
    }

    /// Discover sources and derive one extension descriptor per module.
    pub fn plan(&self) -> SealResult<BuildPlan> {
        let root = &self.options.build_root;
        let packages = self.packages()?;
        let discovery = SourceDiscovery::new(root.clone(), self.options.keep.clone());

        let mut modules = Vec::new();
        for package in &packages {
            modules.extend(discovery.discover(&self.fs, &root.join(package))?);
        }
        // Overlapping package entries (pkg and pkg/sub) must not compile twice
        modules.sort_by(|a, b| a.relative().cmp(b.relative()));
        modules.dedup_by(|a, b| a.relative() == b.relative());

        let extensions = build_extensions(&modules)?;
        tracing::info!(
            packages = packages.len(),
            modules = extensions.len(),
            "planned build"
        );

        Ok(BuildPlan {
            packages,
            extensions,
        })
    }

    /// Compile every planned module. Any failure is returned as-is.
    pub fn compile(&self, plan: &BuildPlan) -> SealResult<CompiledBuild> {
        self.compile
            .execute(&self.options.build_root, &plan.extensions)
    }

    /// Strip sources and intermediates. Requires proof of a finished compile.
    pub fn sanitize(&self, build: &CompiledBuild) -> SealResult<RemovalReport> {
        SanitizeUseCase::new(
            &self.fs,
            self.options.build_root.clone(),
            self.options.keep.clone(),
            self.options.excluded.clone(),
        )
        .execute(build)
    }

    pub fn run(&self, mode: ReleaseMode) -> SealResult<BuildOutcome> {
        let plan = self.plan()?;
        let build = self.compile(&plan)?;

        let report = match mode {
            ReleaseMode::Release => {
                let report = self.sanitize(&build)?;
                tracing::info!(removed = report.removed_count(), "release cleanup finished");
                Some(report)
            }
            ReleaseMode::Development => None,
        };

        Ok(BuildOutcome {
            mode,
            artifacts: build.into_artifacts(),
            report,
        })
    }
}
