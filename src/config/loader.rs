//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SealError, SealResult};

use super::types::Config;

/// Project config file, looked up in the build root.
pub const CONFIG_FILE_NAME: &str = "pyseal.toml";

/// Non-fatal configuration warning (unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Parse one file and collect unknown keys instead of rejecting them.
pub fn load_with_warnings(path: &Path) -> SealResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| SealError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown.push(p.to_string());
    })
    .map_err(|e| SealError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown
        .into_iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(&dotted).to_string();
            ConfigWarning {
                line: line_of(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a build root.
///
/// Lookup order: `explicit` (must exist), `<build_root>/pyseal.toml`,
/// `<config dir>/pyseal/config.toml`, built-in defaults. Environment
/// overrides are applied on top of whichever was found.
pub fn load(explicit: Option<&Path>, build_root: &Path) -> SealResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = build_root.join(CONFIG_FILE_NAME);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `~/.config/pyseal/config.toml` (platform config dir).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pyseal").join("config.toml"))
}

/// Apply `PYSEAL_*` overrides from the process environment.
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |name| std::env::var(name).ok())
}

/// Apply `PYSEAL_*` overrides from `lookup`. Empty values are ignored.
pub fn apply_env<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(cython) = get("PYSEAL_CYTHON") {
        config.compiler.cython = PathBuf::from(cython);
    }
    if let Some(cc) = get("PYSEAL_CC") {
        config.compiler.cc = PathBuf::from(cc);
    }
    if let Some(python) = get("PYSEAL_PYTHON") {
        config.compiler.python = PathBuf::from(python);
    }
    if let Some(keep) = get("PYSEAL_KEEP") {
        config.build.keep = split_list(&keep);
    }
    if let Some(dirs) = get("PYSEAL_EXCLUDE_DIRS") {
        config.build.exclude_dirs = split_list(&dirs);
    }

    config
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn line_of(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "build",
    "packages",
    "keep",
    "exclude_dirs",
    "compiler",
    "cython",
    "cc",
    "python",
    "language_level",
    "extra_args",
    "directives",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b.len()]
}
