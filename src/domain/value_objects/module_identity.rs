//! Module identity value object
//!
//! The dotted name an extension module is importable under, derived from the
//! module's location relative to the build root:
//!
//! ```text
//! pkg/sub/b.py   -> pkg.sub.b
//! pkg/a.b.py     -> pkg.a.b     (only the final suffix is removed)
//! ```

use std::fmt;
use std::path::{Component, Path};

use serde::Serialize;

use crate::error::{SealError, SealResult};

const NAMESPACE_DELIMITER: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleIdentity(String);

impl ModuleIdentity {
    /// Derive the identity from a path relative to the build root.
    pub fn from_relative(relative: &Path) -> SealResult<Self> {
        let mut parts: Vec<&str> = Vec::new();

        for component in relative.components() {
            match component {
                Component::Normal(name) => {
                    let name = name.to_str().ok_or_else(|| SealError::NonUtf8Path {
                        path: relative.to_path_buf(),
                    })?;
                    parts.push(name);
                }
                Component::CurDir => {}
                _ => {
                    return Err(SealError::PathEscape {
                        path: relative.to_path_buf(),
                        root: Default::default(),
                    })
                }
            }
        }

        let Some(last) = parts.pop() else {
            return Err(SealError::PathEscape {
                path: relative.to_path_buf(),
                root: Default::default(),
            });
        };

        // file_stem keeps every dot except the final one
        let stem = Path::new(last)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(last);
        parts.push(stem);

        Ok(Self(parts.join(NAMESPACE_DELIMITER)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
