//! Adjacency-matrix graph backend

use std::collections::BTreeMap;

use crate::bail_vertex_not_found;
use crate::error::{GraphError, Result};
use crate::graph::capability::{Graph, GraphMut};
use crate::graph::types::{GraphType, Weight};

/// Largest capacity a matrix may be created with (`capacity^2` slots)
pub const MAX_MATRIX_CAPACITY: usize = 4096;

/// Graph stored as a dense `capacity x capacity` weight matrix.
///
/// Vertices get matrix slots in insertion order; the capacity is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    graph_type: GraphType,
    capacity: usize,
    indices: BTreeMap<String, usize>,
    names: Vec<String>,
    matrix: Vec<Option<Weight>>,
}

impl AdjacencyMatrixGraph {
    /// Allocate an empty `capacity x capacity` matrix.
    ///
    /// Fails for capacities above [`MAX_MATRIX_CAPACITY`].
    pub fn new(capacity: usize, graph_type: GraphType) -> Result<Self> {
        let slots = capacity
            .checked_mul(capacity)
            .filter(|_| capacity <= MAX_MATRIX_CAPACITY)
            .ok_or(GraphError::CapacityTooLarge {
                capacity,
                max: MAX_MATRIX_CAPACITY,
            })?;
        Ok(Self {
            graph_type,
            capacity,
            indices: BTreeMap::new(),
            names: Vec::new(),
            matrix: vec![None; slots],
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn index_of(&self, vertex: &str) -> Result<usize> {
        match self.indices.get(vertex) {
            Some(index) => Ok(*index),
            None => bail_vertex_not_found!(vertex),
        }
    }

    fn slot(&self, row: usize, column: usize) -> usize {
        row * self.capacity + column
    }

    fn ensure_vertex(&mut self, vertex: &str) -> usize {
        if let Some(index) = self.indices.get(vertex) {
            return *index;
        }
        let index = self.names.len();
        self.names.push(vertex.to_string());
        self.indices.insert(vertex.to_string(), index);
        index
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    fn is_weighted(&self) -> bool {
        let mut weights = self.matrix.iter().flatten();
        match weights.next() {
            Some(first) => weights.any(|w| w != first),
            None => false,
        }
    }

    fn vertex_count(&self) -> usize {
        self.names.len()
    }

    fn sorted_vertices(&self) -> Vec<&str> {
        self.indices.keys().map(String::as_str).collect()
    }

    fn in_degree(&self, vertex: &str) -> Result<usize> {
        let column = self.index_of(vertex)?;
        Ok((0..self.names.len())
            .filter(|row| self.matrix[self.slot(*row, column)].is_some())
            .count())
    }

    fn adjacent_vertices(&self, vertex: &str) -> Result<Vec<&str>> {
        let row = self.index_of(vertex)?;
        let mut adjacent: Vec<&str> = (0..self.names.len())
            .filter(|column| self.matrix[self.slot(row, *column)].is_some())
            .map(|column| self.names[column].as_str())
            .collect();
        adjacent.sort_unstable();
        Ok(adjacent)
    }

    fn edge_weight(&self, start: &str, destination: &str) -> Result<Weight> {
        let row = self.index_of(start)?;
        let column = self.index_of(destination)?;
        self.matrix[self.slot(row, column)].ok_or_else(|| GraphError::no_edge(start, destination))
    }
}

impl GraphMut for AdjacencyMatrixGraph {
    fn add_edge(&mut self, start: &str, destination: &str, weight: Weight) -> Result<()> {
        crate::graph::types::validate_weight(i64::from(weight))?;

        let mut missing = usize::from(!self.indices.contains_key(start));
        if start != destination && !self.indices.contains_key(destination) {
            missing += 1;
        }
        if self.names.len() + missing > self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let row = self.ensure_vertex(start);
        let column = self.ensure_vertex(destination);
        let slot = self.slot(row, column);
        self.matrix[slot] = Some(weight);
        if self.graph_type == GraphType::Undirected {
            let mirrored = self.slot(column, row);
            self.matrix[mirrored] = Some(weight);
        }
        Ok(())
    }
}
