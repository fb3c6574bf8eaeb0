//! Test environment builder for isolated pyseal testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the pyseal binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// A build root in a temp directory.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Canonical path of the build root.
    pub fn root(&self) -> PathBuf {
        self.root
            .path()
            .canonicalize()
            .expect("temp dir should canonicalize")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Every file under the root, relative and `/`-separated, sorted.
    pub fn files(&self) -> Vec<String> {
        list_all_files(&self.root())
    }

    /// Run the pyseal binary with the build root as working directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pyseal"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("PYSEAL_LOG")
            .env("XDG_CONFIG_HOME", self.root.path().join(".no-user-config"));

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute pyseal"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[derive(Default)]
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
}

impl TestEnvBuilder {
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_files(mut self, files: &[(&str, &str)]) -> Self {
        for (relative, content) in files {
            self = self.with_file(relative, content);
        }
        self
    }

    pub fn with_dir(mut self, relative: &str) -> Self {
        self.dirs.push(relative.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("create temp dir");
        for dir in &self.dirs {
            fs::create_dir_all(root.path().join(dir)).expect("create dir");
        }
        for (relative, content) in &self.files {
            let path = root.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent dirs");
            }
            fs::write(&path, content).expect("write fixture file");
        }
        TestEnv { root }
    }
}

/// Every file under `root`, relative and `/`-separated, sorted.
pub fn list_all_files(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else if let Ok(rel) = path.strip_prefix(root) {
                let parts: Vec<_> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
