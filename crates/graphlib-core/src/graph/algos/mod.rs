//! Graph algorithm implementations
//!
//! Contains the search algorithms and the data structures they share:
//! - `queue`: priority queue with lazy invalidation
//! - `union_find`: disjoint sets for Kruskal
//! - `distance`: distance table and path backtracking
//! - `shortest_path`: BFS or Dijkstra, chosen by weightedness
//! - `mst`: Prim and Kruskal
//! - `topological`: Kahn's algorithm

pub mod distance;
pub mod mst;
pub mod queue;
pub mod shortest_path;
pub mod topological;
pub mod union_find;

pub use distance::DistanceTable;
pub use mst::{
    find_minimum_spanning_tree, MinimumSpanningTree, MinimumSpanningTreeAlgorithm,
    MinimumSpanningTreeSearchRequest,
};
pub use queue::PriorityQueue;
pub use shortest_path::{find_shortest_path, ShortestPathSearchRequest, ShortestPathSearchResult};
pub use topological::sort_topologically;
pub use union_find::UnionFind;
