//! Graph model and search algorithms
//!
//! - `types`: edges, weights and graph kinds
//! - `capability`: the read-only `Graph` trait the algorithms consume
//! - `set`/`matrix`: the two storage backends
//! - `algos`: shortest path, minimum spanning tree and topological sort

pub mod algos;
pub mod capability;
pub mod matrix;
pub mod set;
pub mod types;

pub use algos::{
    find_minimum_spanning_tree, find_shortest_path, sort_topologically, MinimumSpanningTree,
    MinimumSpanningTreeAlgorithm, MinimumSpanningTreeSearchRequest, ShortestPathSearchRequest,
    ShortestPathSearchResult,
};
pub use capability::{Graph, GraphMut};
pub use matrix::{AdjacencyMatrixGraph, MAX_MATRIX_CAPACITY};
pub use set::AdjacencySetGraph;
pub use types::{Edge, GraphType, Weight, DEFAULT_WEIGHT};

#[cfg(test)]
mod tests;
