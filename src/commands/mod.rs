//! Command handlers for the `pyseal` binary

pub mod build;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::Result;

use pyseal::application::BuildOptions;
use pyseal::config::{self, Config};
use pyseal::SealError;

/// Canonical build root, merged config and the options derived from it.
pub struct Resolved {
    pub root: PathBuf,
    pub config: Config,
    pub options: BuildOptions,
}

/// Merge CLI flags over env, config file and defaults.
///
/// Non-empty CLI lists replace the configured list outright.
pub fn resolve(
    root: &Path,
    config_path: Option<&Path>,
    packages: Vec<PathBuf>,
    keep: Vec<String>,
    exclude_dirs: Vec<String>,
) -> Result<Resolved> {
    let root = root
        .canonicalize()
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| SealError::DirectoryNotFound {
            path: root.to_path_buf(),
        })?;

    let (mut config, warnings) = config::load(config_path, &root)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    if !packages.is_empty() {
        config.build.packages = packages;
    }
    if !keep.is_empty() {
        config.build.keep = keep;
    }
    if !exclude_dirs.is_empty() {
        config.build.exclude_dirs = exclude_dirs;
    }

    let options = config.to_build_options(&root);
    Ok(Resolved {
        root,
        config,
        options,
    })
}
