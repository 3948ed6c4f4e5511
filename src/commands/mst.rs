//! `graphlib mst` command - minimum spanning tree of an undirected graph

use graphlib_core::dump::dump_minimum_spanning_tree;
use graphlib_core::error::Result;
use graphlib_core::format::OutputFormat;
use graphlib_core::graph::{
    find_minimum_spanning_tree, MinimumSpanningTreeAlgorithm, MinimumSpanningTreeSearchRequest,
};
use serde_json::json;

use crate::cli::MstArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::helpers::{load_graph, print_human, print_json};

/// Execute the mst command
pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;
    let algorithm = args.algorithm.unwrap_or(ctx.config.search.mst_algorithm);

    // Prim grows from the first vertex unless told otherwise
    let vertices = graph.sorted_vertices();
    let search_start = match algorithm {
        MinimumSpanningTreeAlgorithm::Prim => args
            .start
            .as_deref()
            .or_else(|| vertices.first().copied()),
        MinimumSpanningTreeAlgorithm::Kruskal => None,
    };

    let request = MinimumSpanningTreeSearchRequest::new(graph.as_ref(), algorithm, search_start);
    let tree = find_minimum_spanning_tree(&request)?;
    trace_command!(ctx.cli, ctx.start, "find_minimum_spanning_tree");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "algorithm": tree.algorithm,
            "search_start": tree.search_start,
            "overall_weight": tree.overall_weight(),
            "edges": tree.edges,
        })),
        OutputFormat::Human => print_human(|out| dump_minimum_spanning_tree(&tree, out)),
    }
}
