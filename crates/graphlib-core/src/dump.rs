//! Plain-text rendering of graphs and search results

use std::io::Write;

use crate::error::Result;
use crate::graph::{Graph, MinimumSpanningTree, ShortestPathSearchResult};

pub fn dump_graph(graph: &dyn Graph, out: &mut dyn Write) -> Result<()> {
    let weighted = if graph.is_weighted() { "YES" } else { "NO" };
    writeln!(out)?;
    writeln!(out, "Graph type: {}", graph.graph_type())?;
    writeln!(out, "Weighted: {}", weighted)?;
    writeln!(out, "Vertices (totally {}):", graph.vertex_count())?;
    for vertex in graph.sorted_vertices() {
        writeln!(out, " - {}", vertex)?;
    }
    writeln!(out, "Edges:")?;
    for edge in graph.edges()? {
        writeln!(out, " - {}", edge)?;
    }
    Ok(())
}

pub fn dump_shortest_path(path: &ShortestPathSearchResult, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Shortest path from {} to {}",
        path.start(),
        path.destination()
    )?;
    writeln!(out, "Overall distance {}", path.overall_distance())?;
    writeln!(out, "Path:")?;
    for edge in &path.path {
        writeln!(out, " - {}", edge)?;
    }
    Ok(())
}

/// Tree edges are written in the order the search accepted them
pub fn dump_minimum_spanning_tree(tree: &MinimumSpanningTree, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    match &tree.search_start {
        Some(start) => writeln!(out, "Minimum spanning tree (search start {})", start)?,
        None => writeln!(out, "Minimum spanning tree")?,
    }
    writeln!(out, "Search algorithm {}", tree.algorithm)?;
    writeln!(out, "Overall weight {}", tree.overall_weight())?;
    writeln!(out, "Edges:")?;
    for edge in &tree.edges {
        writeln!(out, " - {}", edge)?;
    }
    Ok(())
}

pub fn dump_topological_order(order: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Topological order (totally {}):", order.len())?;
    for vertex in order {
        writeln!(out, " - {}", vertex)?;
    }
    Ok(())
}
