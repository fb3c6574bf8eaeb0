//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/NDJSON)

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{clean_line, emit, outcome_lines, plan_lines, write_event, Event};
