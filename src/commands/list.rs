use std::path::{Path, PathBuf};

use anyhow::Result;

use pyseal::application::BuildPipeline;
use pyseal::infrastructure::{CythonCompiler, LocalFs};
use pyseal::presentation::{emit, plan_lines, Event};

pub fn cmd_list(
    root: &Path,
    config: Option<&Path>,
    packages: Vec<PathBuf>,
    keep: Vec<String>,
    json: bool,
) -> Result<()> {
    let resolved = super::resolve(root, config, packages, keep, Vec::new())?;

    // Planning never invokes the compiler, so no toolchain check here
    let compiler = CythonCompiler::new(resolved.config.compiler.tool_paths());
    let pipeline = BuildPipeline::new(resolved.options, compiler, LocalFs::new());
    let plan = pipeline.plan()?;

    if json {
        emit(&Event::Start {
            command: "list",
            root: &resolved.root,
            mode: None,
        })?;
        for ext in &plan.extensions {
            emit(&Event::Module {
                name: ext.name(),
                source: ext.source(),
            })?;
        }
        emit(&Event::Complete {
            command: "list",
            modules: plan.extensions.len(),
        })?;
    } else if plan.is_empty() {
        println!("No modules to compile");
    } else {
        for line in plan_lines(&plan) {
            println!("{}", line);
        }
    }

    Ok(())
}
