//! Behavior shared by every graph backend.
//!
//! `backend_tests!` expands the same suite once per backend.

use crate::error::GraphError;
use crate::graph::{AdjacencyMatrixGraph, AdjacencySetGraph, Graph, GraphMut, GraphType};

macro_rules! backend_tests {
    ($module:ident, $create:expr) => {
        mod $module {
            use super::*;

            fn create(graph_type: GraphType) -> impl GraphMut {
                ($create)(graph_type)
            }

            #[test]
            fn test_graph_with_equal_weights_is_unweighted() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "B", 3).unwrap();
                graph.add_edge("A", "C", 3).unwrap();
                graph.add_edge("B", "C", 3).unwrap();
                graph.add_edge("C", "D", 3).unwrap();

                assert!(!graph.is_weighted());
            }

            #[test]
            fn test_graph_with_distinct_weights_is_weighted() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "B", 2).unwrap();
                graph.add_edge("A", "C", 3).unwrap();
                graph.add_edge("B", "C", 2).unwrap();
                graph.add_edge("C", "D", 4).unwrap();

                assert!(graph.is_weighted());
            }

            #[test]
            fn test_empty_graph_has_no_vertices() {
                let graph = create(GraphType::Directed);

                assert_eq!(graph.vertex_count(), 0);
                assert!(graph.sorted_vertices().is_empty());
                assert!(!graph.is_weighted());
            }

            #[test]
            fn test_vertex_count_and_order_follow_added_edges() {
                let mut graph = create(GraphType::Directed);
                let steps = [
                    ("A", "B", vec!["A", "B"]),
                    ("A", "C", vec!["A", "B", "C"]),
                    ("B", "C", vec!["A", "B", "C"]),
                    ("B", "E", vec!["A", "B", "C", "E"]),
                    ("C", "D", vec!["A", "B", "C", "D", "E"]),
                    ("D", "F", vec!["A", "B", "C", "D", "E", "F"]),
                    ("F", "E", vec!["A", "B", "C", "D", "E", "F"]),
                ];

                for (start, destination, expected) in steps {
                    graph.add_edge(start, destination, 1).unwrap();
                    assert_eq!(graph.vertex_count(), expected.len(), "after {start} -> {destination}");
                    assert_eq!(graph.sorted_vertices(), expected, "after {start} -> {destination}");
                }
            }

            #[test]
            fn test_edge_weights_are_returned() {
                let mut graph = create(GraphType::Directed);
                let edges = [
                    ("A", "B", 2),
                    ("A", "C", 3),
                    ("B", "C", 5),
                    ("B", "E", 4),
                    ("C", "D", 7),
                    ("D", "F", 3),
                    ("F", "E", 5),
                ];
                for (start, destination, weight) in edges {
                    graph.add_edge(start, destination, weight).unwrap();
                }

                for (start, destination, weight) in edges {
                    assert_eq!(graph.edge_weight(start, destination).unwrap(), weight);
                }
            }

            #[test]
            fn test_undirected_edge_weight_is_symmetric() {
                let mut graph = create(GraphType::Undirected);
                graph.add_edge("A", "B", 6).unwrap();

                assert_eq!(graph.edge_weight("A", "B").unwrap(), 6);
                assert_eq!(graph.edge_weight("B", "A").unwrap(), 6);
            }

            #[test]
            fn test_re_adding_an_edge_replaces_its_weight() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "B", 6).unwrap();
                graph.add_edge("A", "B", 2).unwrap();

                assert_eq!(graph.edge_weight("A", "B").unwrap(), 2);
                assert_eq!(graph.in_degree("B").unwrap(), 1);
            }

            #[test]
            fn test_adjacent_vertices_of_directed_graph() {
                let mut graph = create(GraphType::Directed);
                for (start, destination) in [
                    ("A", "B"),
                    ("A", "C"),
                    ("B", "C"),
                    ("B", "E"),
                    ("C", "D"),
                    ("D", "F"),
                    ("F", "E"),
                ] {
                    graph.add_edge(start, destination, 1).unwrap();
                }

                assert_eq!(graph.adjacent_vertices("A").unwrap(), vec!["B", "C"]);
                assert_eq!(graph.adjacent_vertices("B").unwrap(), vec!["C", "E"]);
                assert_eq!(graph.adjacent_vertices("C").unwrap(), vec!["D"]);
                assert_eq!(graph.adjacent_vertices("D").unwrap(), vec!["F"]);
                assert!(graph.adjacent_vertices("E").unwrap().is_empty());
                assert_eq!(graph.adjacent_vertices("F").unwrap(), vec!["E"]);
            }

            #[test]
            fn test_adjacent_vertices_of_undirected_graph() {
                let mut graph = create(GraphType::Undirected);
                for (start, destination) in [
                    ("A", "B"),
                    ("A", "C"),
                    ("B", "C"),
                    ("B", "E"),
                    ("C", "D"),
                    ("D", "F"),
                    ("F", "E"),
                ] {
                    graph.add_edge(start, destination, 1).unwrap();
                }

                assert_eq!(graph.adjacent_vertices("A").unwrap(), vec!["B", "C"]);
                assert_eq!(graph.adjacent_vertices("B").unwrap(), vec!["A", "C", "E"]);
                assert_eq!(graph.adjacent_vertices("C").unwrap(), vec!["A", "B", "D"]);
                assert_eq!(graph.adjacent_vertices("D").unwrap(), vec!["C", "F"]);
                assert_eq!(graph.adjacent_vertices("E").unwrap(), vec!["B", "F"]);
                assert_eq!(graph.adjacent_vertices("F").unwrap(), vec!["D", "E"]);
            }

            #[test]
            fn test_in_degree() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "C", 1).unwrap();
                graph.add_edge("B", "C", 1).unwrap();
                graph.add_edge("C", "D", 1).unwrap();

                assert_eq!(graph.in_degree("A").unwrap(), 0);
                assert_eq!(graph.in_degree("C").unwrap(), 2);
                assert_eq!(graph.in_degree("D").unwrap(), 1);
                assert!(matches!(
                    graph.in_degree("X"),
                    Err(GraphError::VertexNotFound { .. })
                ));
            }

            #[test]
            fn test_edges_are_enumerated_in_sorted_order() {
                let mut graph = create(GraphType::Undirected);
                graph.add_edge("B", "C", 2).unwrap();
                graph.add_edge("A", "B", 1).unwrap();

                let edges: Vec<String> = graph
                    .edges()
                    .unwrap()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                assert_eq!(
                    edges,
                    vec![
                        "A -> B (weight = 1)",
                        "B -> A (weight = 1)",
                        "B -> C (weight = 2)",
                        "C -> B (weight = 2)",
                    ]
                );
            }

            #[test]
            fn test_edge_weight_for_missing_start_vertex() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "B", 1).unwrap();
                graph.add_edge("B", "C", 1).unwrap();

                let err = graph.edge_weight("X", "B").unwrap_err();
                assert_eq!(err.to_string(), "Vertex with the name X not found.");
            }

            #[test]
            fn test_edge_weight_for_missing_destination_vertex() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "B", 1).unwrap();
                graph.add_edge("B", "C", 1).unwrap();

                let err = graph.edge_weight("B", "X").unwrap_err();
                assert_eq!(err.to_string(), "Vertex with the name X not found.");
            }

            #[test]
            fn test_edge_weight_for_missing_edge() {
                let mut graph = create(GraphType::Directed);
                graph.add_edge("A", "B", 1).unwrap();
                graph.add_edge("B", "C", 1).unwrap();

                let err = graph.edge_weight("B", "A").unwrap_err();
                assert_eq!(err.to_string(), "There is no edge from B to A.");
            }

            #[test]
            fn test_zero_weight_is_rejected() {
                let mut graph = create(GraphType::Directed);

                let err = graph.add_edge("A", "B", 0).unwrap_err();
                assert_eq!(err.to_string(), "Invalid weight: 0.");
                assert_eq!(graph.vertex_count(), 0);
            }
        }
    };
}

backend_tests!(adjacency_set, AdjacencySetGraph::new);
backend_tests!(adjacency_matrix, |graph_type| AdjacencyMatrixGraph::new(20, graph_type).unwrap());
