//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::MinimumSpanningTreeAlgorithm;

/// Matrix capacity used when the configuration does not set one
pub const DEFAULT_MATRIX_CAPACITY: usize = 100;

/// graphlib configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphlibConfig {
    /// Graph storage settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Storage backend for loaded graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    #[default]
    AdjacencySet,
    AdjacencyMatrix,
}

impl FromStr for Backend {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "set" | "adjacency-set" => Ok(Backend::AdjacencySet),
            "matrix" | "adjacency-matrix" => Ok(Backend::AdjacencyMatrix),
            other => Err(GraphError::UsageError(format!(
                "unknown backend '{}' (expected: set, matrix)",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::AdjacencySet => write!(f, "adjacency-set"),
            Backend::AdjacencyMatrix => write!(f, "adjacency-matrix"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Maximum number of vertices of an adjacency-matrix graph
    #[serde(default = "default_matrix_capacity")]
    pub matrix_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            matrix_capacity: DEFAULT_MATRIX_CAPACITY,
        }
    }
}

fn default_matrix_capacity() -> usize {
    DEFAULT_MATRIX_CAPACITY
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used by `mst` when none is given on the command line
    #[serde(default)]
    pub mst_algorithm: MinimumSpanningTreeAlgorithm,
}
