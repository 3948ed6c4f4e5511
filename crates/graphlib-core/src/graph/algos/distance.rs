//! Distance table built by a single shortest-path search

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::capability::Graph;
use crate::graph::types::Edge;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DistanceTableEntry {
    predecessor: String,
    distance: u64,
}

/// Best known distance and predecessor for every vertex discovered so far.
///
/// The start vertex is always present at distance 0 and is its own
/// predecessor.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    start: String,
    entries: HashMap<String, DistanceTableEntry>,
}

impl DistanceTable {
    pub fn new(start: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            start.to_string(),
            DistanceTableEntry {
                predecessor: start.to_string(),
                distance: 0,
            },
        );
        Self {
            start: start.to_string(),
            entries,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.entries.contains_key(vertex)
    }

    fn entry(&self, vertex: &str) -> Result<&DistanceTableEntry> {
        self.entries
            .get(vertex)
            .ok_or_else(|| GraphError::no_distance_entry(vertex))
    }

    pub fn distance(&self, vertex: &str) -> Result<u64> {
        Ok(self.entry(vertex)?.distance)
    }

    pub fn predecessor(&self, vertex: &str) -> Result<&str> {
        Ok(self.entry(vertex)?.predecessor.as_str())
    }

    /// Relax `vertex` with a candidate distance reached via `predecessor`.
    ///
    /// Returns `true` when the entry was created or the candidate was
    /// strictly shorter than the recorded distance.
    pub fn update(&mut self, vertex: &str, predecessor: &str, distance: u64) -> bool {
        match self.entries.get_mut(vertex) {
            Some(entry) if distance < entry.distance => {
                entry.distance = distance;
                entry.predecessor = predecessor.to_string();
                true
            }
            Some(_) => false,
            None => {
                self.entries.insert(
                    vertex.to_string(),
                    DistanceTableEntry {
                        predecessor: predecessor.to_string(),
                        distance,
                    },
                );
                true
            }
        }
    }

    /// Edges from the start vertex to `destination`, in travel order.
    ///
    /// Weights are looked up in `graph`. Fails when `destination` was never
    /// reached or is the start vertex itself.
    pub fn backtrack(&self, graph: &dyn Graph, destination: &str) -> Result<Vec<Edge>> {
        if destination == self.start {
            return Err(GraphError::TrivialPath {
                vertex: destination.to_string(),
            });
        }

        let mut path = Vec::new();
        let mut current = destination;
        while current != self.start {
            let predecessor = self.predecessor(current)?;
            let weight = graph.edge_weight(predecessor, current)?;
            path.push(Edge::new(predecessor, current, weight));
            current = predecessor;
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencySetGraph, GraphMut, GraphType};

    #[test]
    fn test_start_vertex_is_present_from_construction() {
        let table = DistanceTable::new("A");

        assert!(table.contains("A"));
        assert_eq!(table.distance("A").unwrap(), 0);
        assert_eq!(table.predecessor("A").unwrap(), "A");
        assert_eq!(table.start(), "A");
    }

    #[test]
    fn test_missing_entry_is_reported() {
        let table = DistanceTable::new("A");

        assert!(!table.contains("B"));
        assert_eq!(
            table.distance("B").unwrap_err().to_string(),
            "No distance table entry found for the vertex B."
        );
        assert!(matches!(
            table.predecessor("B"),
            Err(GraphError::NoDistanceEntry { .. })
        ));
    }

    #[test]
    fn test_update_only_applies_strictly_shorter_distances() {
        let mut table = DistanceTable::new("A");

        assert!(table.update("B", "A", 5));
        assert!(table.update("B", "C", 3));
        assert_eq!(table.distance("B").unwrap(), 3);
        assert_eq!(table.predecessor("B").unwrap(), "C");

        assert!(!table.update("B", "D", 3));
        assert!(!table.update("B", "D", 9));
        assert_eq!(table.predecessor("B").unwrap(), "C");

        assert!(!table.update("A", "B", 0));
        assert_eq!(table.predecessor("A").unwrap(), "A");
    }

    #[test]
    fn test_backtrack_returns_path_in_travel_order() {
        let mut graph = AdjacencySetGraph::new(GraphType::Directed);
        graph.add_edge("A", "B", 2).unwrap();
        graph.add_edge("B", "C", 4).unwrap();

        let mut table = DistanceTable::new("A");
        table.update("B", "A", 2);
        table.update("C", "B", 6);

        let path = table.backtrack(&graph, "C").unwrap();
        assert_eq!(path, vec![Edge::new("A", "B", 2), Edge::new("B", "C", 4)]);
    }

    #[test]
    fn test_backtrack_to_unreached_vertex_fails() {
        let mut graph = AdjacencySetGraph::new(GraphType::Directed);
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("C", "B", 1).unwrap();

        let mut table = DistanceTable::new("A");
        table.update("B", "A", 1);

        let err = table.backtrack(&graph, "C").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No distance table entry found for the vertex C."
        );
    }

    #[test]
    fn test_backtrack_to_start_is_rejected() {
        let graph = AdjacencySetGraph::new(GraphType::Directed);
        let table = DistanceTable::new("A");

        assert!(matches!(
            table.backtrack(&graph, "A"),
            Err(GraphError::TrivialPath { .. })
        ));
    }
}
