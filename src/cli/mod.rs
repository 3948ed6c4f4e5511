//! CLI argument parsing for graphlib
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --backend

pub mod commands;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{Commands, DumpArgs, MstArgs, PathArgs, SortArgs};
pub use graphlib_core::config::Backend;
pub use graphlib_core::format::OutputFormat;

/// Graphlib - topological sort, shortest path and minimum spanning tree
#[derive(Parser, Debug)]
#[command(name = "graphlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, graphlib_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "GRAPHLIB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Graph storage backend (set, matrix); overrides the configuration
    #[arg(long, global = true, value_parser = parse::parse_backend)]
    pub backend: Option<Backend>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
