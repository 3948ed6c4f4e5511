use std::collections::{HashMap, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::capability::Graph;
use crate::graph::types::GraphType;

/// Sort the vertices of a directed acyclic graph with Kahn's algorithm.
///
/// Vertices whose in-degree is zero from the start are taken in sorted
/// order; later ones in the order they become free.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn sort_topologically(graph: &dyn Graph) -> Result<Vec<String>> {
    if graph.graph_type() != GraphType::Directed {
        return Err(GraphError::NotDirected);
    }

    let vertices = graph.sorted_vertices();
    let mut in_degrees: HashMap<&str, usize> = HashMap::with_capacity(vertices.len());
    let mut queue = VecDeque::new();
    for vertex in &vertices {
        let degree = graph.in_degree(vertex)?;
        if degree == 0 {
            queue.push_back(*vertex);
        }
        in_degrees.insert(*vertex, degree);
    }

    if queue.is_empty() && !vertices.is_empty() {
        return Err(GraphError::Cyclic);
    }

    let mut order = Vec::with_capacity(vertices.len());
    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.to_string());
        for adjacent in graph.adjacent_vertices(vertex)? {
            if let Some(degree) = in_degrees.get_mut(adjacent) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(adjacent);
                }
            }
        }
    }

    // Vertices on a cycle never reach in-degree zero
    if order.len() < vertices.len() {
        tracing::debug!(
            sorted = order.len(),
            vertices = vertices.len(),
            "cycle found after acyclic prefix"
        );
        return Err(GraphError::Cyclic);
    }
    Ok(order)
}
