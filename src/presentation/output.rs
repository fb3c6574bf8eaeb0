//! Output Rendering
//!
//! Text lines for humans and NDJSON events (one object per line) for `--json`.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::{BuildOutcome, BuildPlan, RemovalReport};
use crate::domain::value_objects::{ModuleIdentity, ReleaseMode};

/// Prefix of the release cleanup status line.
pub const CLEAN_TAG: &str = "[CLEAN]";

/// Events emitted in `--json` mode.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<'a> {
    Start {
        command: &'a str,
        root: &'a Path,
        #[serde(skip_serializing_if = "Option::is_none")]
        mode: Option<ReleaseMode>,
    },
    Module {
        name: &'a ModuleIdentity,
        source: &'a Path,
    },
    Compiled {
        module: &'a ModuleIdentity,
        output: &'a Path,
    },
    Clean {
        removed: usize,
        preserved: &'a [String],
        summary: String,
    },
    Complete {
        command: &'a str,
        modules: usize,
    },
    Error {
        message: String,
    },
}

/// Write one event as a single JSON line.
pub fn write_event(out: &mut impl Write, event: &Event<'_>) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// Write one event to stdout.
pub fn emit(event: &Event<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// `[CLEAN] 2 files removed, preserved: __init__.py`
pub fn clean_line(report: &RemovalReport) -> String {
    format!("{} {}", CLEAN_TAG, report.summary())
}

pub fn plan_lines(plan: &BuildPlan) -> Vec<String> {
    let width = plan
        .extensions
        .iter()
        .map(|ext| ext.name().as_str().len())
        .max()
        .unwrap_or(0);

    plan.extensions
        .iter()
        .map(|ext| {
            format!(
                "{:<width$}  {}",
                ext.name().as_str(),
                ext.source().display(),
                width = width
            )
        })
        .collect()
}

pub fn outcome_lines(outcome: &BuildOutcome, root: &Path) -> Vec<String> {
    let mut lines: Vec<String> = outcome
        .artifacts
        .iter()
        .map(|artifact| {
            let output = artifact.output.strip_prefix(root).unwrap_or(&artifact.output);
            format!("[OK] {} -> {}", artifact.module, output.display())
        })
        .collect();

    lines.push(format!(
        "Compiled {} {} ({})",
        outcome.compiled_count(),
        if outcome.compiled_count() == 1 {
            "module"
        } else {
            "modules"
        },
        outcome.mode
    ));

    if let Some(report) = &outcome.report {
        lines.push(clean_line(report));
    }
    lines
}
