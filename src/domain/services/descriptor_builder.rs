//! Extension descriptor builder

use std::collections::HashMap;
use std::path::Path;

use crate::domain::entities::{ExtensionDescriptor, SourceModule};
use crate::error::{SealError, SealResult};

/// One descriptor per module, in discovery order.
///
/// Directory names containing dots can make two files map to one dotted name
/// (`a.b/c.py` and `a/b/c.py`); that is rejected rather than letting one
/// compiled module silently overwrite the other.
pub fn build_extensions(modules: &[SourceModule]) -> SealResult<Vec<ExtensionDescriptor>> {
    let mut seen: HashMap<String, &Path> = HashMap::with_capacity(modules.len());
    let mut extensions = Vec::with_capacity(modules.len());

    for module in modules {
        let ext = ExtensionDescriptor::from_module(module)?;
        if let Some(first) = seen.insert(ext.name().to_string(), module.relative()) {
            return Err(SealError::IdentityCollision {
                module: ext.name().to_string(),
                first: first.to_path_buf(),
                second: module.relative().to_path_buf(),
            });
        }
        extensions.push(ext);
    }

    Ok(extensions)
}
