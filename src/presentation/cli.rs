//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Everything after `--` on `build` goes to the cython invocation, except
//!   `--release`, which is consumed here

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pyseal - compile Python packages to native extensions and strip the sources
#[derive(Parser, Debug)]
#[command(name = "pyseal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: <root>/pyseal.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile every module; with --release, delete sources afterwards
    Build {
        /// Build root (module names are relative to it)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Package directory relative to the root (repeatable; default: auto-detect)
        #[arg(short, long = "package", value_name = "DIR")]
        packages: Vec<PathBuf>,

        /// Filename never compiled or deleted (repeatable; replaces the default list)
        #[arg(long = "keep", value_name = "NAME")]
        keep: Vec<String>,

        /// Directory name skipped by release cleanup (repeatable; replaces the default list)
        #[arg(long = "exclude-dir", value_name = "NAME")]
        exclude_dirs: Vec<String>,

        /// Delete .py and .c files after a successful compile
        #[arg(long)]
        release: bool,

        /// Extra arguments forwarded to cython
        #[arg(last = true, value_name = "COMPILER_ARGS")]
        compiler_args: Vec<String>,
    },

    /// Show the modules a build would compile
    List {
        /// Build root (module names are relative to it)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Package directory relative to the root (repeatable; default: auto-detect)
        #[arg(short, long = "package", value_name = "DIR")]
        packages: Vec<PathBuf>,

        /// Filename never compiled (repeatable; replaces the default list)
        #[arg(long = "keep", value_name = "NAME")]
        keep: Vec<String>,
    },
}
