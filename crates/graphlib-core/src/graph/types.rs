use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_invalid_weight;
use crate::error::{GraphError, Result};

/// Weight of a single edge. Always at least 1.
pub type Weight = u32;

/// Weight used when an edge is added without one
pub const DEFAULT_WEIGHT: Weight = 1;

/// Whether edges are one-way or two-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GraphType {
    Directed,
    Undirected,
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Directed => write!(f, "DIRECTED"),
            GraphType::Undirected => write!(f, "UNDIRECTED"),
        }
    }
}

impl FromStr for GraphType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DIRECTED" => Ok(GraphType::Directed),
            "UNDIRECTED" => Ok(GraphType::Undirected),
            other => Err(GraphError::InvalidGraphType(other.to_string())),
        }
    }
}

/// An immutable weighted edge, as returned by the search algorithms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub start: String,
    pub destination: String,
    pub weight: Weight,
}

impl Edge {
    pub fn new(start: impl Into<String>, destination: impl Into<String>, weight: Weight) -> Self {
        Self {
            start: start.into(),
            destination: destination.into(),
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (weight = {})",
            self.start, self.destination, self.weight
        )
    }
}

/// Check that a raw weight is a positive integer that fits a [`Weight`]
pub fn validate_weight(weight: i64) -> Result<Weight> {
    if weight < 1 {
        bail_invalid_weight!(weight);
    }
    Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight(weight.to_string()))
}
