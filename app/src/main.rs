use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use stock_core::{Aggregator, LoadOptions, write_report};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod input;
use input::{Invocation, VERSION_BANNER, classify};

#[derive(Parser, Debug)]
#[command(name = "stock-analyser")]
#[command(about = "Volume share per tick and high/low bounds per stock")]
struct Args {
    /// Whitespace-separated tick file (`symbol interval volume high low`),
    /// or `version` to print the version banner.
    path: PathBuf,

    /// Drop lines that do not parse instead of aborting the run.
    #[arg(long)]
    skip_malformed: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match classify(&args.path, args.skip_malformed) {
        Invocation::Version => print_version(io::stderr()),
        Invocation::Analyse { path, options } => match run(&path, options, io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Prints the version banner. The `version` run always exits with failure.
fn print_version<W: Write>(mut out: W) -> ExitCode {
    let _ = writeln!(out, "{VERSION_BANNER}");
    ExitCode::FAILURE
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run<W: Write>(path: &Path, options: LoadOptions, out: W) -> Result<()> {
    let aggregator = Aggregator::from_path(path, options)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(path = %path.display(), records = aggregator.len(), "analysing ticks");

    write_report(&aggregator, out).context("failed to write report")?;
    Ok(())
}
