//! Command trait and context for dispatching commands

use std::time::Instant;

use graphlib_core::config::{Backend, GraphlibConfig};
use graphlib_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GraphlibConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a GraphlibConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Backend chosen on the command line, else the configured one
    pub fn backend(&self) -> Backend {
        self.config.backend(self.cli.backend)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphlib {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Topological sort, shortest path and minimum spanning tree search.");
        println!();
        println!("Run `graphlib --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Dump(args) => commands::dump::execute(ctx, args),
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Mst(args) => commands::mst::execute(ctx, args),
            Commands::Sort(args) => commands::sort::execute(ctx, args),
        }
    }
}
