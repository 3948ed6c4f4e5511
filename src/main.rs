//! `graphlib` binary
//!
//! Reads a JSON graph definition and prints a dump, a shortest path, a
//! minimum spanning tree or a topological order.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphlib_core::error::{ExitCode as GraphlibExitCode, GraphError};
use graphlib_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = env::args().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if wants_json(args.get(1..).unwrap_or(&[])) && !is_informational(&err) => {
            return report(&usage_failure(&err), OutputFormat::Json, false);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging unavailable: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "arguments parsed");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphlibExitCode::Success as u8),
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Write `error` to stderr in the requested format and pick the exit status
fn report(error: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {error}"),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
    )
}

fn usage_failure(err: &clap::Error) -> GraphError {
    match err.kind() {
        ClapErrorKind::ValueValidation
        | ClapErrorKind::InvalidValue
        | ClapErrorKind::InvalidSubcommand
        | ClapErrorKind::UnknownArgument
        | ClapErrorKind::MissingRequiredArgument
        | ClapErrorKind::ArgumentConflict => GraphError::UsageError(err.to_string()),
        _ => GraphError::Other(err.to_string()),
    }
}

/// Scan raw arguments for `--format json`, since clap has not produced a
/// `Cli` when parsing fails
fn wants_json(args: &[String]) -> bool {
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|next| next == "json"))
    })
}
