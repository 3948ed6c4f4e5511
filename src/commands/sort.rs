//! `graphlib sort` command - topological order of a directed acyclic graph

use graphlib_core::dump::dump_topological_order;
use graphlib_core::error::Result;
use graphlib_core::format::OutputFormat;
use graphlib_core::graph::sort_topologically;
use serde_json::json;

use crate::cli::SortArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::helpers::{load_graph, print_human, print_json};

/// Execute the sort command
pub fn execute(ctx: &CommandContext, args: &SortArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;

    let order = sort_topologically(graph.as_ref())?;
    trace_command!(ctx.cli, ctx.start, "sort_topologically");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({ "order": order })),
        OutputFormat::Human => print_human(|out| dump_topological_order(&order, out)),
    }
}
