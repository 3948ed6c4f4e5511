use crate::error::Result;
use crate::graph::types::{Edge, GraphType, Weight};

/// Read-only view of a graph, as needed by the search algorithms.
///
/// Algorithms take `&dyn Graph` and never look at the concrete storage.
/// Vertex sequences are always sorted so every algorithm is deterministic.
pub trait Graph {
    fn graph_type(&self) -> GraphType;

    /// True unless every edge present carries the same weight
    fn is_weighted(&self) -> bool;

    fn vertex_count(&self) -> usize;

    fn sorted_vertices(&self) -> Vec<&str>;

    /// Number of edges ending in `vertex`
    fn in_degree(&self, vertex: &str) -> Result<usize>;

    /// Sorted destinations of the edges starting in `vertex`
    fn adjacent_vertices(&self, vertex: &str) -> Result<Vec<&str>>;

    fn edge_weight(&self, start: &str, destination: &str) -> Result<Weight>;

    /// All stored edges, ordered by start and then by destination.
    /// Undirected edges appear once per direction.
    fn edges(&self) -> Result<Vec<Edge>> {
        let mut edges = Vec::new();
        for start in self.sorted_vertices() {
            for destination in self.adjacent_vertices(start)? {
                let weight = self.edge_weight(start, destination)?;
                edges.push(Edge::new(start, destination, weight));
            }
        }
        Ok(edges)
    }
}

/// Graphs that can be built edge by edge
pub trait GraphMut: Graph {
    /// Add an edge, creating missing vertices. Re-adding an existing edge
    /// replaces its weight. Undirected graphs store both directions.
    fn add_edge(&mut self, start: &str, destination: &str, weight: Weight) -> Result<()>;
}
