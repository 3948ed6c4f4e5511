use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::algos::queue::{PriorityQueue, QueueableItem};
use crate::graph::algos::union_find::UnionFind;
use crate::graph::capability::Graph;
use crate::graph::types::{Edge, GraphType};

/// How the minimum spanning tree is grown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MinimumSpanningTreeAlgorithm {
    /// Grow a single tree from a start vertex
    #[default]
    #[serde(alias = "prim")]
    Prim,
    /// Merge forests over globally sorted edges
    #[serde(alias = "kruskal")]
    Kruskal,
}

impl fmt::Display for MinimumSpanningTreeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimumSpanningTreeAlgorithm::Prim => write!(f, "PRIM"),
            MinimumSpanningTreeAlgorithm::Kruskal => write!(f, "KRUSKAL"),
        }
    }
}

impl FromStr for MinimumSpanningTreeAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(MinimumSpanningTreeAlgorithm::Prim),
            "kruskal" => Ok(MinimumSpanningTreeAlgorithm::Kruskal),
            other => Err(GraphError::UsageError(format!(
                "unknown minimum spanning tree algorithm '{}' (expected: prim, kruskal)",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy)]
pub struct MinimumSpanningTreeSearchRequest<'a> {
    pub graph: &'a dyn Graph,
    pub algorithm: MinimumSpanningTreeAlgorithm,
    /// Required by Prim, ignored by Kruskal
    pub search_start: Option<&'a str>,
}

impl<'a> MinimumSpanningTreeSearchRequest<'a> {
    pub fn new(
        graph: &'a dyn Graph,
        algorithm: MinimumSpanningTreeAlgorithm,
        search_start: Option<&'a str>,
    ) -> Self {
        Self {
            graph,
            algorithm,
            search_start,
        }
    }

    pub fn prim(graph: &'a dyn Graph, search_start: &'a str) -> Self {
        Self::new(graph, MinimumSpanningTreeAlgorithm::Prim, Some(search_start))
    }

    pub fn kruskal(graph: &'a dyn Graph) -> Self {
        Self::new(graph, MinimumSpanningTreeAlgorithm::Kruskal, None)
    }
}

/// Edges of a minimum spanning tree, in the order they were accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimumSpanningTree {
    pub algorithm: MinimumSpanningTreeAlgorithm,
    pub search_start: Option<String>,
    pub edges: Vec<Edge>,
}

impl MinimumSpanningTree {
    pub fn new(
        algorithm: MinimumSpanningTreeAlgorithm,
        search_start: Option<String>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            algorithm,
            search_start,
            edges,
        }
    }

    pub fn overall_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight)).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Exact match, orientation included
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }
}

/// Find a minimum spanning tree of an undirected graph.
#[tracing::instrument(skip(request), fields(algorithm = %request.algorithm, search_start = ?request.search_start, vertices = request.graph.vertex_count()))]
pub fn find_minimum_spanning_tree(
    request: &MinimumSpanningTreeSearchRequest<'_>,
) -> Result<MinimumSpanningTree> {
    if request.graph.graph_type() != GraphType::Undirected {
        return Err(GraphError::NotUndirected);
    }

    let tree = match request.algorithm {
        MinimumSpanningTreeAlgorithm::Prim => {
            let start = request
                .search_start
                .ok_or_else(|| GraphError::MissingSearchStart {
                    algorithm: MinimumSpanningTreeAlgorithm::Prim.to_string(),
                })?;
            let edges = prim(request.graph, start)?;
            MinimumSpanningTree::new(request.algorithm, Some(start.to_string()), edges)
        }
        MinimumSpanningTreeAlgorithm::Kruskal => {
            MinimumSpanningTree::new(request.algorithm, None, kruskal(request.graph)?)
        }
    };

    if tree.len() + 1 < request.graph.vertex_count() {
        tracing::debug!(
            edges = tree.len(),
            vertices = request.graph.vertex_count(),
            "graph is not connected, spanning tree covers only part of it"
        );
    }
    tracing::debug!(
        edges = tree.len(),
        overall_weight = tree.overall_weight(),
        "minimum spanning tree found"
    );
    Ok(tree)
}

/// Prim's algorithm. Vertices not connected to `start` are never reached.
fn prim(graph: &dyn Graph, start: &str) -> Result<Vec<Edge>> {
    let mut settled: HashSet<&str> = HashSet::new();
    let mut queue: PriorityQueue<&str, Edge> = PriorityQueue::new();
    let mut tree = Vec::new();

    settled.insert(start);
    for adjacent in graph.adjacent_vertices(start)? {
        if adjacent == start {
            continue;
        }
        let weight = graph.edge_weight(start, adjacent)?;
        queue.enqueue(QueueableItem::with_value(
            adjacent,
            u64::from(weight),
            Edge::new(start, adjacent, weight),
        ));
    }

    while !queue.is_empty() {
        let item = queue.dequeue()?;
        let current = item.key;
        if !settled.insert(current) {
            continue;
        }
        if let Some(edge) = item.value {
            tracing::trace!(edge = %edge, "accepted");
            tree.push(edge);
        }

        for adjacent in graph.adjacent_vertices(current)? {
            if settled.contains(adjacent) {
                continue;
            }
            let weight = graph.edge_weight(current, adjacent)?;
            let lighter = queue
                .priority(&adjacent)
                .map_or(true, |known| u64::from(weight) < known);
            if lighter {
                queue.enqueue(QueueableItem::with_value(
                    adjacent,
                    u64::from(weight),
                    Edge::new(current, adjacent, weight),
                ));
            }
        }
    }
    Ok(tree)
}

/// Kruskal's algorithm over every undirected edge, each taken once with
/// start < destination. Equal weights keep their enumeration order.
fn kruskal(graph: &dyn Graph) -> Result<Vec<Edge>> {
    let vertices = graph.sorted_vertices();
    let indices: HashMap<&str, usize> = vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| (*vertex, index))
        .collect();

    let mut candidates = Vec::new();
    for start in &vertices {
        for destination in graph.adjacent_vertices(start)? {
            if *start < destination {
                let weight = graph.edge_weight(start, destination)?;
                candidates.push(Edge::new(*start, destination, weight));
            }
        }
    }
    candidates.sort_by_key(|edge| edge.weight);

    let target = vertices.len().saturating_sub(1);
    let mut subsets = UnionFind::new(vertices.len());
    let mut tree = Vec::with_capacity(target);
    for edge in candidates {
        if tree.len() == target {
            break;
        }
        let (Some(&a), Some(&b)) = (
            indices.get(edge.start.as_str()),
            indices.get(edge.destination.as_str()),
        ) else {
            continue;
        };
        if subsets.union(a, b)? {
            tracing::trace!(edge = %edge, "accepted");
            tree.push(edge);
        }
    }
    Ok(tree)
}
