//! Adjacency-set graph backend

use std::collections::BTreeMap;

use crate::bail_vertex_not_found;
use crate::error::{GraphError, Result};
use crate::graph::capability::{Graph, GraphMut};
use crate::graph::types::{GraphType, Weight};

/// Graph stored as an ordered map from each vertex to its outgoing
/// neighbors and their weights.
#[derive(Debug, Clone)]
pub struct AdjacencySetGraph {
    graph_type: GraphType,
    adjacency: BTreeMap<String, BTreeMap<String, Weight>>,
    in_degrees: BTreeMap<String, usize>,
}

impl AdjacencySetGraph {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            adjacency: BTreeMap::new(),
            in_degrees: BTreeMap::new(),
        }
    }

    fn ensure_vertex(&mut self, vertex: &str) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.to_string(), BTreeMap::new());
            self.in_degrees.insert(vertex.to_string(), 0);
        }
    }

    fn insert_directed(&mut self, start: &str, destination: &str, weight: Weight) {
        let neighbors = self.adjacency.entry(start.to_string()).or_default();
        if neighbors.insert(destination.to_string(), weight).is_none() {
            *self.in_degrees.entry(destination.to_string()).or_default() += 1;
        }
    }

    fn neighbors(&self, vertex: &str) -> Result<&BTreeMap<String, Weight>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }
}

impl Graph for AdjacencySetGraph {
    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn is_weighted(&self) -> bool {
        let mut weights = self.adjacency.values().flat_map(|n| n.values());
        match weights.next() {
            Some(first) => weights.any(|w| w != first),
            None => false,
        }
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn sorted_vertices(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    fn in_degree(&self, vertex: &str) -> Result<usize> {
        match self.in_degrees.get(vertex) {
            Some(degree) => Ok(*degree),
            None => bail_vertex_not_found!(vertex),
        }
    }

    fn adjacent_vertices(&self, vertex: &str) -> Result<Vec<&str>> {
        Ok(self.neighbors(vertex)?.keys().map(String::as_str).collect())
    }

    fn edge_weight(&self, start: &str, destination: &str) -> Result<Weight> {
        let neighbors = self.neighbors(start)?;
        if !self.adjacency.contains_key(destination) {
            bail_vertex_not_found!(destination);
        }
        neighbors
            .get(destination)
            .copied()
            .ok_or_else(|| GraphError::no_edge(start, destination))
    }
}

impl GraphMut for AdjacencySetGraph {
    fn add_edge(&mut self, start: &str, destination: &str, weight: Weight) -> Result<()> {
        crate::graph::types::validate_weight(i64::from(weight))?;
        self.ensure_vertex(start);
        self.ensure_vertex(destination);
        self.insert_directed(start, destination, weight);
        if self.graph_type == GraphType::Undirected && start != destination {
            self.insert_directed(destination, start, weight);
        }
        Ok(())
    }
}
