//! Excluded directory markers
//!
//! Directory names (virtual environments by default) whose subtrees are never
//! scanned for deletion.

use std::collections::BTreeSet;
use std::path::{Component, Path};

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".venv", "venv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedDirs {
    markers: BTreeSet<String>,
}

impl Default for ExcludedDirs {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS.iter().copied())
    }
}

impl ExcludedDirs {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Matches nothing.
    pub fn none() -> Self {
        Self {
            markers: BTreeSet::new(),
        }
    }

    /// True if any component of `relative` equals a marker.
    ///
    /// Callers pass paths relative to the build root so that a build root which
    /// itself lives under e.g. `venv/` is not exempted wholesale.
    pub fn covers(&self, relative: &Path) -> bool {
        if self.markers.is_empty() {
            return false;
        }
        relative.components().any(|component| match component {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.is_marker(n)),
            _ => false,
        })
    }

    /// True if a single directory name is a marker.
    pub fn is_marker(&self, name: &str) -> bool {
        self.markers.contains(name)
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}
