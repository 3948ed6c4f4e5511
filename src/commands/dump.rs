//! `graphlib dump` command - print a graph's vertices and edges

use graphlib_core::dump::dump_graph;
use graphlib_core::error::Result;
use graphlib_core::format::OutputFormat;
use graphlib_core::graph::Graph;
use serde_json::json;

use crate::cli::DumpArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_human, print_json};

/// Execute the dump command
pub fn execute(ctx: &CommandContext, args: &DumpArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&graph_to_json(graph.as_ref())?),
        OutputFormat::Human => print_human(|out| dump_graph(graph.as_ref(), out)),
    }
}

fn graph_to_json(graph: &dyn Graph) -> Result<serde_json::Value> {
    let edges = graph.edges()?;
    Ok(json!({
        "graph_type": graph.graph_type(),
        "weighted": graph.is_weighted(),
        "vertices": graph.sorted_vertices(),
        "edges": edges,
    }))
}
