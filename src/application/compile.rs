//! Compile orchestration
//!
//! Hands every extension descriptor to the compiler port under one fixed set
//! of directives. The first failure aborts the whole step; nothing is retried.

use std::path::Path;

use crate::domain::entities::{CompiledArtifact, ExtensionDescriptor};
use crate::domain::ports::{CompileRequest, ExtensionCompiler};
use crate::domain::value_objects::CompilerDirectives;
use crate::error::{SealError, SealResult};

/// Proof that every planned module compiled.
///
/// Only `CompileUseCase::execute` can construct one, and release cleanup
/// requires one, so sources cannot be stripped after a failed compile.
#[derive(Debug)]
pub struct CompiledBuild {
    artifacts: Vec<CompiledArtifact>,
}

impl CompiledBuild {
    pub fn artifacts(&self) -> &[CompiledArtifact] {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> Vec<CompiledArtifact> {
        self.artifacts
    }
}

pub struct CompileUseCase<C: ExtensionCompiler> {
    compiler: C,
    directives: CompilerDirectives,
    extra_args: Vec<String>,
}

impl<C: ExtensionCompiler> CompileUseCase<C> {
    pub fn new(compiler: C, directives: CompilerDirectives) -> Self {
        Self {
            compiler,
            directives,
            extra_args: Vec::new(),
        }
    }

    /// Arguments forwarded to the compiler for every module.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Compile all descriptors in order; returns only once each has finished.
    pub fn execute(
        &self,
        build_root: &Path,
        extensions: &[ExtensionDescriptor],
    ) -> SealResult<CompiledBuild> {
        let mut artifacts = Vec::with_capacity(extensions.len());

        for ext in extensions {
            tracing::info!(
                module = %ext.name(),
                compiler = self.compiler.name(),
                "compiling {}",
                ext.source().display()
            );

            let request = CompileRequest {
                build_root,
                extension: ext,
                directives: &self.directives,
                extra_args: &self.extra_args,
            };

            let artifact = self
                .compiler
                .compile(&request)
                .map_err(|e| SealError::Compile {
                    module: ext.name().to_string(),
                    source_path: ext.source().to_path_buf(),
                    message: e.to_string(),
                })?;

            tracing::debug!(module = %ext.name(), output = %artifact.output.display(), "compiled");
            artifacts.push(artifact);
        }

        Ok(CompiledBuild { artifacts })
    }
}
