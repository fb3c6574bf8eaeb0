//! File suffixes a discovery walk matches

use std::path::Path;

/// Compilable source modules.
pub const SOURCE_SUFFIX: &str = "py";

/// C translation units Cython writes before linking.
pub const INTERMEDIATE_SUFFIX: &str = "c";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSet {
    suffixes: Vec<&'static str>,
}

impl SuffixSet {
    /// What gets compiled.
    pub fn sources() -> Self {
        Self {
            suffixes: vec![SOURCE_SUFFIX],
        }
    }

    /// What release mode strips: sources plus intermediates.
    pub fn strippable() -> Self {
        Self {
            suffixes: vec![SOURCE_SUFFIX, INTERMEDIATE_SUFFIX],
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.suffixes.contains(&ext))
    }
}
