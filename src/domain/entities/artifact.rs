//! CompiledArtifact entity

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::ModuleIdentity;

/// A native extension module written by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledArtifact {
    pub module: ModuleIdentity,
    /// Source it was built from (absolute)
    pub source: PathBuf,
    /// Loadable binary (absolute), e.g. `b.cpython-311-x86_64-linux-gnu.so`
    pub output: PathBuf,
}
