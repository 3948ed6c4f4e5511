//! Graph definitions stored as JSON
//!
//! ```json
//! { "graphType": "DIRECTED",
//!   "edges": [ { "start": "A", "destination": "B", "weight": 3 } ] }
//! ```
//!
//! `weight` is optional and defaults to 1. A field of the wrong JSON type
//! is reported as a JSON error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::types::{validate_weight, Edge, GraphType, Weight, DEFAULT_WEIGHT};
use crate::graph::{AdjacencyMatrixGraph, AdjacencySetGraph, GraphMut};

/// A validated graph definition, not yet loaded into a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDefinition {
    pub graph_type: GraphType,
    pub edges: Vec<Edge>,
}

impl GraphDefinition {
    /// Parse and validate a JSON definition.
    ///
    /// The whole definition is checked before any edge is returned.
    pub fn parse(json: &str) -> Result<Self> {
        let raw: RawDefinition = serde_json::from_str(json)?;
        raw.validate()
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read graph definition", path.display(), e))?;
        let definition = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            graph_type = %definition.graph_type,
            edges = definition.edges.len(),
            "graph definition loaded"
        );
        Ok(definition)
    }

    /// Add every edge of this definition to `graph`
    pub fn populate(&self, graph: &mut dyn GraphMut) -> Result<()> {
        for edge in &self.edges {
            graph.add_edge(&edge.start, &edge.destination, edge.weight)?;
        }
        Ok(())
    }

    pub fn to_adjacency_set_graph(&self) -> Result<AdjacencySetGraph> {
        let mut graph = AdjacencySetGraph::new(self.graph_type);
        self.populate(&mut graph)?;
        Ok(graph)
    }

    pub fn to_adjacency_matrix_graph(&self, capacity: usize) -> Result<AdjacencyMatrixGraph> {
        let mut graph = AdjacencyMatrixGraph::new(capacity, self.graph_type)?;
        self.populate(&mut graph)?;
        Ok(graph)
    }
}

/// Definition as written, before any field is checked
#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(rename = "graphType")]
    graph_type: Option<String>,
    edges: Option<Vec<RawEdge>>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    start: Option<String>,
    destination: Option<String>,
    weight: Option<RawWeight>,
}

/// Weights may be written as JSON numbers or as integer strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Number(serde_json::Number),
    Text(String),
}

impl RawDefinition {
    fn validate(self) -> Result<GraphDefinition> {
        let graph_type = self
            .graph_type
            .ok_or(GraphError::UndefinedGraphType)?
            .parse::<GraphType>()?;
        let edges = self.edges.ok_or(GraphError::MissingEdgeList)?;
        if edges.is_empty() {
            return Err(GraphError::EmptyEdgeList);
        }
        let edges = edges
            .into_iter()
            .map(RawEdge::validate)
            .collect::<Result<Vec<_>>>()?;
        Ok(GraphDefinition { graph_type, edges })
    }
}

impl RawEdge {
    fn validate(self) -> Result<Edge> {
        let start = self.start.ok_or(GraphError::UndefinedStartVertex)?;
        let destination = self
            .destination
            .ok_or(GraphError::UndefinedDestinationVertex)?;
        let weight = match self.weight {
            Some(weight) => weight.validate()?,
            None => DEFAULT_WEIGHT,
        };
        Ok(Edge::new(start, destination, weight))
    }
}

impl RawWeight {
    fn validate(self) -> Result<Weight> {
        let (parsed, written) = match self {
            RawWeight::Number(number) => (number.as_i64(), number.to_string()),
            RawWeight::Text(text) => (text.trim().parse::<i64>().ok(), text),
        };
        match parsed {
            Some(weight) => validate_weight(weight),
            None => Err(GraphError::InvalidWeight(written)),
        }
    }
}

pub fn build_adjacency_set_graph_from_json_string(json: &str) -> Result<AdjacencySetGraph> {
    GraphDefinition::parse(json)?.to_adjacency_set_graph()
}

pub fn build_adjacency_set_graph(path: &Path) -> Result<AdjacencySetGraph> {
    GraphDefinition::read(path)?.to_adjacency_set_graph()
}

pub fn build_adjacency_matrix_graph_from_json_string(
    json: &str,
    capacity: usize,
) -> Result<AdjacencyMatrixGraph> {
    GraphDefinition::parse(json)?.to_adjacency_matrix_graph(capacity)
}

pub fn build_adjacency_matrix_graph(path: &Path, capacity: usize) -> Result<AdjacencyMatrixGraph> {
    GraphDefinition::read(path)?.to_adjacency_matrix_graph(capacity)
}
