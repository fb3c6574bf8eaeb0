//! pyseal CLI - compile Python packages to native extensions
//!
//! Usage: pyseal <COMMAND>
//!
//! Commands:
//!   build   Compile every module (add --release to strip sources)
//!   list    Show the modules a build would compile

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pyseal::presentation::{write_event, Cli, Commands, Event};

mod commands;

/// Overrides the `-v` derived log level when set.
const LOG_ENV: &str = "PYSEAL_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    let result = match cli.command {
        Commands::Build {
            root,
            packages,
            keep,
            exclude_dirs,
            release,
            compiler_args,
        } => commands::build::cmd_build(commands::build::BuildArgs {
            root,
            config: cli.config,
            packages,
            keep,
            exclude_dirs,
            release,
            compiler_args,
            json,
        }),
        Commands::List {
            root,
            packages,
            keep,
        } => commands::list::cmd_list(&root, cli.config.as_deref(), packages, keep, json),
    };

    if let Err(err) = &result {
        if json {
            report_error(&mut std::io::stdout().lock(), err);
        }
    }
    result
}

/// Emit the final `error` event; a failed write is logged, the original error still wins.
fn report_error(out: &mut impl std::io::Write, err: &anyhow::Error) {
    let event = Event::Error {
        message: format!("{:#}", err),
    };
    if let Err(write_err) = write_event(out, &event) {
        tracing::warn!(error = %write_err, "failed to write error event");
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| level.to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
