use std::path::PathBuf;

use anyhow::{Context, Result};

use pyseal::application::BuildPipeline;
use pyseal::domain::value_objects::ReleaseMode;
use pyseal::infrastructure::{CythonCompiler, LocalFs};
use pyseal::presentation::{emit, outcome_lines, Event};

pub struct BuildArgs {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub packages: Vec<PathBuf>,
    pub keep: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub release: bool,
    pub compiler_args: Vec<String>,
    pub json: bool,
}

pub fn cmd_build(args: BuildArgs) -> Result<()> {
    // --release may also arrive among the pass-through args; never forward it
    let (trailing_mode, compiler_args) = ReleaseMode::split_args(args.compiler_args);
    let mode = ReleaseMode::from_flag(args.release || trailing_mode.is_release());

    let resolved = super::resolve(
        &args.root,
        args.config.as_deref(),
        args.packages,
        args.keep,
        args.exclude_dirs,
    )?;
    let root = resolved.root;

    let mut extra_args = resolved.config.compiler.extra_args.clone();
    extra_args.extend(compiler_args);
    let options = resolved.options.with_extra_args(extra_args);

    let compiler = CythonCompiler::new(resolved.config.compiler.tool_paths());
    compiler
        .check_available()
        .context("compiler toolchain is not usable")?;

    if args.json {
        emit(&Event::Start {
            command: "build",
            root: &root,
            mode: Some(mode),
        })?;
    } else {
        println!("Building {} ({})", root.display(), mode);
    }

    let pipeline = BuildPipeline::new(options, compiler, LocalFs::new());
    let outcome = pipeline
        .run(mode)
        .with_context(|| format!("build failed in {}", root.display()))?;

    if args.json {
        for artifact in &outcome.artifacts {
            emit(&Event::Compiled {
                module: &artifact.module,
                output: &artifact.output,
            })?;
        }
        if let Some(report) = &outcome.report {
            emit(&Event::Clean {
                removed: report.removed_count(),
                preserved: &report.preserved,
                summary: report.summary(),
            })?;
        }
        emit(&Event::Complete {
            command: "build",
            modules: outcome.compiled_count(),
        })?;
    } else {
        for line in outcome_lines(&outcome, &root) {
            println!("{}", line);
        }
    }

    Ok(())
}
