//! Build result types

use std::path::PathBuf;

use serde::Serialize;

use crate::application::sanitize::RemovalReport;
use crate::domain::entities::{CompiledArtifact, ExtensionDescriptor};
use crate::domain::value_objects::ReleaseMode;

/// What a build will compile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildPlan {
    /// Package dirs scanned, relative to the build root
    pub packages: Vec<PathBuf>,
    pub extensions: Vec<ExtensionDescriptor>,
}

impl BuildPlan {
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub mode: ReleaseMode,
    pub artifacts: Vec<CompiledArtifact>,
    /// Present only when release cleanup ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RemovalReport>,
}

impl BuildOutcome {
    pub fn compiled_count(&self) -> usize {
        self.artifacts.len()
    }
}
