//! Python toolchain facts needed to link an extension module

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::CompilerError;

const QUERY: &str = "import sysconfig\n\
print(sysconfig.get_paths()['include'])\n\
print(sysconfig.get_config_var('EXT_SUFFIX') or '.so')";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonToolchain {
    /// Directory holding `Python.h`
    pub include_dir: PathBuf,
    /// Suffix of loadable modules, e.g. `.cpython-311-x86_64-linux-gnu.so`
    pub ext_suffix: String,
}

impl PythonToolchain {
    /// Ask the interpreter at `python` for its include dir and module suffix.
    pub fn query(python: &Path) -> Result<Self, CompilerError> {
        let tool = python.display().to_string();
        let output = Command::new(python)
            .arg("-c")
            .arg(QUERY)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CompilerError::ToolUnavailable {
                tool: tool.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(CompilerError::Failed {
                tool,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }

    /// Parse the two-line answer of the query script.
    pub fn parse(stdout: &str) -> Result<Self, CompilerError> {
        let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
        match (lines.next(), lines.next()) {
            (Some(include), Some(suffix)) => Ok(Self {
                include_dir: PathBuf::from(include),
                ext_suffix: suffix.to_string(),
            }),
            _ => Err(CompilerError::Other(format!(
                "unexpected sysconfig output: {:?}",
                stdout
            ))),
        }
    }
}
