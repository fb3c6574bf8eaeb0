//! Stand-in compiler for tests that run the real pipeline on disk.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use pyseal::{CompileRequest, CompiledArtifact, CompilerError, ExtensionCompiler};

/// Writes `<stem>.so` (and optionally `<stem>.c`) beside each source.
///
/// Fails on the module named by `fail_on` without writing anything for it.
#[derive(Default)]
pub struct FakeCython {
    pub fail_on: Option<String>,
    pub intermediates: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeCython {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(module: &str) -> Self {
        Self {
            fail_on: Some(module.to_string()),
            ..Self::default()
        }
    }

    /// Also leave a generated `.c` file behind, like real cython does.
    pub fn with_intermediates(mut self) -> Self {
        self.intermediates = true;
        self
    }

    /// Module names in the order they were submitted.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ExtensionCompiler for FakeCython {
    fn name(&self) -> &'static str {
        "fake-cython"
    }

    fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledArtifact, CompilerError> {
        let ext = request.extension;
        self.calls.borrow_mut().push(ext.name().to_string());

        if self.fail_on.as_deref() == Some(ext.name().as_str()) {
            return Err(CompilerError::Failed {
                tool: "fake-cython".to_string(),
                status: Some(1),
                stderr: format!("{}: invalid syntax", ext.source().display()),
            });
        }

        let source = ext.source_path();
        if self.intermediates {
            fs::write(source.with_extension("c"), "/* generated */")
                .map_err(|e| CompilerError::Other(e.to_string()))?;
        }
        let output: PathBuf = source.with_extension("so");
        fs::write(&output, b"\x7fELF").map_err(|e| CompilerError::Other(e.to_string()))?;

        Ok(CompiledArtifact {
            module: ext.name().clone(),
            source: source.to_path_buf(),
            output,
        })
    }
}
