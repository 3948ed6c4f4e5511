//! `graphlib path` command - shortest path between two vertices

use graphlib_core::dump::dump_shortest_path;
use graphlib_core::error::Result;
use graphlib_core::format::OutputFormat;
use graphlib_core::graph::{find_shortest_path, ShortestPathSearchRequest};
use serde_json::json;

use crate::cli::PathArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::helpers::{load_graph, print_human, print_json};

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;

    let request = ShortestPathSearchRequest::new(graph.as_ref(), &args.from, &args.to);
    let result = find_shortest_path(&request)?;
    trace_command!(ctx.cli, ctx.start, "find_shortest_path");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "start": result.start(),
            "destination": result.destination(),
            "overall_distance": result.overall_distance(),
            "path": result.path,
        })),
        OutputFormat::Human => print_human(|out| dump_shortest_path(&result, out)),
    }
}
