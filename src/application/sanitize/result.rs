//! Removal report

use std::path::PathBuf;

use serde::Serialize;

/// What release cleanup removed and which filenames it kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    /// Files that were deleted, in deletion order
    pub removed: Vec<PathBuf>,
    /// Allow-listed filenames that are never deleted
    pub preserved: Vec<String>,
}

impl RemovalReport {
    pub fn new(preserved: Vec<String>) -> Self {
        Self {
            removed: Vec::new(),
            preserved,
        }
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Single status line, e.g. `2 files removed, preserved: __init__.py`.
    pub fn summary(&self) -> String {
        let preserved = if self.preserved.is_empty() {
            "(none)".to_string()
        } else {
            self.preserved.join("/")
        };
        format!(
            "{} {} removed, preserved: {}",
            self.removed_count(),
            if self.removed_count() == 1 { "file" } else { "files" },
            preserved
        )
    }
}
