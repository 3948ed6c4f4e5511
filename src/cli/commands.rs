//! Subcommands and their arguments

use std::path::PathBuf;

use clap::{Args, Subcommand};

use graphlib_core::graph::MinimumSpanningTreeAlgorithm;

use crate::cli::parse::parse_mst_algorithm;

/// Top-level graphlib commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the vertices and edges of a graph
    Dump(DumpArgs),

    /// Find the shortest path between two vertices
    Path(PathArgs),

    /// Find a minimum spanning tree of an undirected graph
    Mst(MstArgs),

    /// Sort the vertices of a directed acyclic graph topologically
    Sort(SortArgs),
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// JSON graph definition
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// JSON graph definition
    pub file: PathBuf,

    /// Start vertex
    #[arg(long)]
    pub from: String,

    /// Destination vertex
    #[arg(long)]
    pub to: String,
}

#[derive(Args, Debug)]
pub struct MstArgs {
    /// JSON graph definition
    pub file: PathBuf,

    /// Search algorithm (prim, kruskal); defaults to the configured one
    #[arg(long, short, value_parser = parse_mst_algorithm)]
    pub algorithm: Option<MinimumSpanningTreeAlgorithm>,

    /// Start vertex for Prim; defaults to the first vertex in sorted order
    #[arg(long)]
    pub start: Option<String>,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// JSON graph definition
    pub file: PathBuf,
}
