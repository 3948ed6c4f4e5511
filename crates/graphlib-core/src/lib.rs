//! Graphlib Core Library
//!
//! Graph algorithms over a pluggable graph representation: topological
//! sort, shortest path and minimum spanning tree, plus JSON graph
//! definitions and plain-text dumps.

pub mod config;
pub mod dump;
pub mod error;
pub mod format;
pub mod graph;
pub mod jsondef;
pub mod logging;
