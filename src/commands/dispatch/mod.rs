//! Command dispatch logic for graphlib

use std::time::Instant;

use graphlib_core::config::GraphlibConfig;
use graphlib_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

pub mod command;
mod macros;

pub(crate) use macros::trace_command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GraphlibConfig::load(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
