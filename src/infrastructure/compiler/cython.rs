//! Cython + C compiler backend
//!
//! Builds one module in two steps, both run from the build root:
//!
//! ```text
//! cython -X <directives> --module-name pkg.sub.b -o pkg/sub/b.c pkg/sub/b.py
//! cc -shared -fPIC -O2 -I<python include> pkg/sub/b.c -o pkg/sub/b<EXT_SUFFIX>
//! ```
//!
//! The `.c` file is left beside its source; release cleanup removes it. The
//! loadable module goes where the import system looks for its dotted name, so
//! `pkg/a.b.py` (`pkg.a.b`) is linked to `pkg/a/b<EXT_SUFFIX>`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use crate::domain::entities::CompiledArtifact;
use crate::domain::ports::{CompileRequest, CompilerError, ExtensionCompiler};
use crate::domain::value_objects::{ModuleIdentity, INTERMEDIATE_SUFFIX};

use super::toolchain::PythonToolchain;

/// Executables the backend shells out to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub cython: PathBuf,
    pub cc: PathBuf,
    pub python: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            cython: PathBuf::from("cython"),
            cc: PathBuf::from("cc"),
            python: PathBuf::from("python3"),
        }
    }
}

#[derive(Debug)]
pub struct CythonCompiler {
    tools: ToolPaths,
    toolchain: OnceLock<PythonToolchain>,
}

impl CythonCompiler {
    pub fn new(tools: ToolPaths) -> Self {
        Self {
            tools,
            toolchain: OnceLock::new(),
        }
    }

    /// Use an already known toolchain instead of querying the interpreter.
    pub fn with_toolchain(tools: ToolPaths, toolchain: PythonToolchain) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(toolchain);
        Self {
            tools,
            toolchain: cell,
        }
    }

    /// Check that `cython --version` starts and succeeds.
    pub fn check_available(&self) -> Result<(), CompilerError> {
        run(&self.tools.cython, &[OsString::from("--version")], Path::new("."))
    }

    fn toolchain(&self) -> Result<&PythonToolchain, CompilerError> {
        if let Some(tc) = self.toolchain.get() {
            return Ok(tc);
        }
        let tc = PythonToolchain::query(&self.tools.python)?;
        tracing::debug!(
            include = %tc.include_dir.display(),
            suffix = %tc.ext_suffix,
            "resolved python toolchain"
        );
        Ok(self.toolchain.get_or_init(|| tc))
    }

    /// Arguments for the cython translation step.
    pub fn cython_args(&self, request: &CompileRequest<'_>, c_file: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        for pair in request.directives.pairs() {
            args.push("-X".into());
            args.push(pair.into());
        }
        args.push("--module-name".into());
        args.push(request.extension.name().as_str().into());
        args.push("-o".into());
        args.push(c_file.into());
        args.extend(request.extra_args.iter().map(OsString::from));
        args.push(request.extension.source().into());
        args
    }

    /// Arguments for the C compile-and-link step.
    pub fn cc_args(toolchain: &PythonToolchain, c_file: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-shared".into(), "-fPIC".into(), "-O2".into()];
        let mut include = OsString::from("-I");
        include.push(&toolchain.include_dir);
        args.push(include);
        args.push(c_file.into());
        args.push("-o".into());
        args.push(output.into());
        if cfg!(target_os = "macos") {
            args.push("-undefined".into());
            args.push("dynamic_lookup".into());
        }
        args
    }

    /// Where the loadable module for `name` is written, relative to the build root.
    ///
    /// Every dotted segment but the last is a directory. Distinct names give
    /// distinct paths.
    pub fn artifact_path(name: &ModuleIdentity, toolchain: &PythonToolchain) -> PathBuf {
        let mut segments: Vec<&str> = name.as_str().split('.').collect();
        let leaf = segments.pop().unwrap_or_default();
        let mut path: PathBuf = segments.into_iter().collect();
        path.push(format!("{}{}", leaf, toolchain.ext_suffix));
        path
    }
}

fn run(tool: &Path, args: &[OsString], cwd: &Path) -> Result<(), CompilerError> {
    let name = tool.display().to_string();
    tracing::trace!(tool = %name, ?args, "running");

    let output = Command::new(tool)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| CompilerError::ToolUnavailable {
            tool: name.clone(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(CompilerError::Failed {
            tool: name,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

impl ExtensionCompiler for CythonCompiler {
    fn name(&self) -> &'static str {
        "cython"
    }

    fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledArtifact, CompilerError> {
        let toolchain = self.toolchain()?;
        let source = request.extension.source();
        let c_file = source.with_extension(INTERMEDIATE_SUFFIX);
        let output = Self::artifact_path(request.extension.name(), toolchain);

        run(
            &self.tools.cython,
            &self.cython_args(request, &c_file),
            request.build_root,
        )?;
        if let Some(parent) = request.build_root.join(&output).parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CompilerError::Other(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        run(
            &self.tools.cc,
            &Self::cc_args(toolchain, &c_file, &output),
            request.build_root,
        )?;

        let output = request.build_root.join(output);
        if !output.is_file() {
            return Err(CompilerError::MissingArtifact(output));
        }

        Ok(CompiledArtifact {
            module: request.extension.name().clone(),
            source: request.extension.source_path().to_path_buf(),
            output,
        })
    }
}
