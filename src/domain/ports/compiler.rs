//! ExtensionCompiler port - the native toolchain seen as a black box
//!
//! One call turns one extension descriptor into one compiled artifact or a
//! failure. The orchestrator decides what a failure means for the build.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{CompiledArtifact, ExtensionDescriptor};
use crate::domain::value_objects::CompilerDirectives;

/// Everything a compiler needs to build one module.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    pub build_root: &'a Path,
    pub extension: &'a ExtensionDescriptor,
    pub directives: &'a CompilerDirectives,
    /// Forwarded verbatim from the invocation
    pub extra_args: &'a [String],
}

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("'{tool}' could not be started: {message}")]
    ToolUnavailable { tool: String, message: String },

    #[error("'{tool}' exited with {}: {stderr}", describe_status(.status))]
    Failed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("compiler reported success but {0} was not written")]
    MissingArtifact(PathBuf),

    #[error("{0}")]
    Other(String),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}

pub trait ExtensionCompiler {
    /// Short name for logs, e.g. `cython`
    fn name(&self) -> &'static str;

    fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledArtifact, CompilerError>;
}
