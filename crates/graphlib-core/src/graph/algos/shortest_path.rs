use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::distance::DistanceTable;
use crate::graph::algos::queue::{PriorityQueue, QueueableItem};
use crate::graph::capability::Graph;
use crate::graph::types::Edge;
use crate::trace_time;

/// Graph plus the two vertices to connect
#[derive(Clone, Copy)]
pub struct ShortestPathSearchRequest<'a> {
    pub graph: &'a dyn Graph,
    pub start: &'a str,
    pub destination: &'a str,
}

impl<'a> ShortestPathSearchRequest<'a> {
    pub fn new(graph: &'a dyn Graph, start: &'a str, destination: &'a str) -> Self {
        Self {
            graph,
            start,
            destination,
        }
    }
}

/// A shortest path: contiguous edges leading from start to destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathSearchResult {
    pub path: Vec<Edge>,
}

impl ShortestPathSearchResult {
    pub fn new(path: Vec<Edge>) -> Self {
        Self { path }
    }

    pub fn start(&self) -> &str {
        self.path.first().map_or("", |edge| edge.start.as_str())
    }

    pub fn destination(&self) -> &str {
        self.path.last().map_or("", |edge| edge.destination.as_str())
    }

    /// Sum of the weights along the path
    pub fn overall_distance(&self) -> u64 {
        self.path.iter().map(|edge| u64::from(edge.weight)).sum()
    }
}

/// Find the shortest path from `request.start` to `request.destination`.
///
/// Unweighted graphs are searched breadth-first; weighted graphs with
/// Dijkstra's algorithm. The whole reachable part of the graph is explored
/// before the path is read back from the distance table.
#[tracing::instrument(skip(request), fields(start = %request.start, destination = %request.destination, weighted = request.graph.is_weighted()))]
pub fn find_shortest_path(request: &ShortestPathSearchRequest<'_>) -> Result<ShortestPathSearchResult> {
    let started = Instant::now();
    let table = if request.graph.is_weighted() {
        build_weighted_distance_table(request.graph, request.start)?
    } else {
        build_unweighted_distance_table(request.graph, request.start)?
    };
    trace_time!(started, "distance_table");

    let path = table.backtrack(request.graph, request.destination)?;
    let result = ShortestPathSearchResult::new(path);
    tracing::debug!(
        edges = result.path.len(),
        overall_distance = result.overall_distance(),
        "shortest path found"
    );
    Ok(result)
}

fn build_unweighted_distance_table(graph: &dyn Graph, start: &str) -> Result<DistanceTable> {
    let mut table = DistanceTable::new(start);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let distance = table.distance(current)? + 1;
        for adjacent in graph.adjacent_vertices(current)? {
            if table.update(adjacent, current, distance) {
                tracing::trace!(vertex = adjacent, distance, "relaxed");
                queue.push_back(adjacent);
            }
        }
    }
    Ok(table)
}

fn build_weighted_distance_table(graph: &dyn Graph, start: &str) -> Result<DistanceTable> {
    let mut table = DistanceTable::new(start);
    let mut settled: HashSet<&str> = HashSet::new();
    let mut queue: PriorityQueue<&str> = PriorityQueue::new();
    queue.enqueue(QueueableItem::new(start, 0));

    while !queue.is_empty() {
        let current = queue.dequeue()?.key;
        settled.insert(current);
        let distance = table.distance(current)?;

        for adjacent in graph.adjacent_vertices(current)? {
            if settled.contains(adjacent) {
                continue;
            }
            let candidate = distance + u64::from(graph.edge_weight(current, adjacent)?);
            if table.update(adjacent, current, candidate) {
                tracing::trace!(vertex = adjacent, distance = candidate, "relaxed");
                queue.enqueue(QueueableItem::new(adjacent, candidate));
            }
        }
    }
    Ok(table)
}
