//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::BuildOptions;
use crate::domain::value_objects::{
    AllowList, CompilerDirectives, DirectiveValue, ExcludedDirs, DEFAULT_EXCLUDED_DIRS,
    DEFAULT_KEEP, DEFAULT_LANGUAGE_LEVEL,
};
use crate::infrastructure::ToolPaths;

/// What gets compiled and what survives release cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Package dirs relative to the build root; empty means auto-detect
    #[serde(default)]
    pub packages: Vec<PathBuf>,

    #[serde(default = "default_keep")]
    pub keep: Vec<String>,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            keep: default_keep(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_keep() -> Vec<String> {
    DEFAULT_KEEP.iter().map(|s| s.to_string()).collect()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

/// External tools and the directives modules are compiled under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default = "default_cython")]
    pub cython: PathBuf,

    #[serde(default = "default_cc")]
    pub cc: PathBuf,

    #[serde(default = "default_python")]
    pub python: PathBuf,

    #[serde(default = "default_language_level")]
    pub language_level: String,

    /// Appended to every cython invocation
    #[serde(default)]
    pub extra_args: Vec<String>,

    /// Per-directive overrides on top of the built-in set
    #[serde(default)]
    pub directives: BTreeMap<String, DirectiveValue>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            cython: default_cython(),
            cc: default_cc(),
            python: default_python(),
            language_level: default_language_level(),
            extra_args: Vec::new(),
            directives: BTreeMap::new(),
        }
    }
}

fn default_cython() -> PathBuf {
    ToolPaths::default().cython
}

fn default_cc() -> PathBuf {
    ToolPaths::default().cc
}

fn default_python() -> PathBuf {
    ToolPaths::default().python
}

fn default_language_level() -> String {
    DEFAULT_LANGUAGE_LEVEL.to_string()
}

impl CompilerConfig {
    pub fn tool_paths(&self) -> ToolPaths {
        ToolPaths {
            cython: self.cython.clone(),
            cc: self.cc.clone(),
            python: self.python.clone(),
        }
    }

    pub fn directives(&self) -> CompilerDirectives {
        CompilerDirectives::default()
            .with_language_level(self.language_level.clone())
            .with_overrides(self.directives.clone())
    }
}

/// Main configuration structure (`pyseal.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,
}

impl Config {
    /// Options for one build rooted at `build_root`.
    pub fn to_build_options(&self, build_root: impl Into<PathBuf>) -> BuildOptions {
        BuildOptions::new(build_root)
            .with_packages(self.build.packages.iter().cloned())
            .with_keep(AllowList::new(self.build.keep.iter().cloned()))
            .with_excluded(ExcludedDirs::new(self.build.exclude_dirs.iter().cloned()))
            .with_directives(self.compiler.directives())
            .with_extra_args(self.compiler.extra_args.clone())
    }
}
