//! ExtensionDescriptor entity - one native module to build

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ModuleIdentity;
use crate::error::SealResult;

use super::SourceModule;

/// A module name paired with the single source file it is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionDescriptor {
    name: ModuleIdentity,
    /// Sources relative to the build root; always exactly one entry
    sources: Vec<PathBuf>,
    #[serde(skip)]
    origin: PathBuf,
}

impl ExtensionDescriptor {
    pub fn from_module(module: &SourceModule) -> SealResult<Self> {
        Ok(Self {
            name: ModuleIdentity::from_relative(module.relative())?,
            sources: vec![module.relative().to_path_buf()],
            origin: module.path().to_path_buf(),
        })
    }

    pub fn name(&self) -> &ModuleIdentity {
        &self.name
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// The sole source, relative to the build root.
    pub fn source(&self) -> &Path {
        &self.sources[0]
    }

    /// The sole source as an absolute path.
    pub fn source_path(&self) -> &Path {
        &self.origin
    }
}
