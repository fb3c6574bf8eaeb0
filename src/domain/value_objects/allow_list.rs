//! Allow-list value object
//!
//! Bare filenames that are never compiled and never deleted, at any depth.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

/// Filenames kept by default: package marker, entry-point script, build descriptor.
pub const DEFAULT_KEEP: &[&str] = &["__init__.py", "__main__.py", "setup.py"];

/// Set of bare filenames exempt from compilation and deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: BTreeSet<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_KEEP.iter().copied())
    }
}

impl AllowList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check a bare filename.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// Check the final component of a path.
    pub fn keeps(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.contains(name))
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names joined for display, e.g. `__init__.py/__main__.py`.
    pub fn display_joined(&self) -> String {
        self.names().collect::<Vec<_>>().join("/")
    }
}
