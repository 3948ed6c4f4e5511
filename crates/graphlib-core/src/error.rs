//! Error types and exit codes for graphlib
//!
//! Every error is fatal to the single call that raised it; nothing is retried.
//! Exit codes used by the CLI:
//! - 0: Success
//! - 1: Generic failure (I/O and similar)
//! - 2: Usage or precondition error (bad flags, wrong graph kind)
//! - 3: Data error (missing vertex/edge, invalid graph definition)

mod macros;

use thiserror::Error;

/// Exit codes returned by the graphlib binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or precondition error (2)
    Usage = 2,
    /// Data error - missing entity, invalid definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Coarse classification of [`GraphError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not satisfy an algorithm's precondition
    Precondition,
    /// A vertex, edge, table entry or union-find element is absent
    MissingEntity,
    /// An operation needs at least one element but the structure is empty
    EmptyStructure,
    /// Graph definition, configuration or I/O problem
    Input,
}

/// Errors that can occur during graphlib operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Preconditions
    #[error("Topological sort can only be applied to directed graphs.")]
    NotDirected,

    #[error("Topological sort can only be applied to acyclic graphs.")]
    Cyclic,

    #[error("Minimum spanning tree search can only be applied to undirected graphs.")]
    NotUndirected,

    #[error("{algorithm} requires a search start vertex.")]
    MissingSearchStart { algorithm: String },

    #[error("Start and destination are the same vertex {vertex}.")]
    TrivialPath { vertex: String },

    #[error("Invalid weight: {0}.")]
    InvalidWeight(String),

    // Missing entities
    #[error("Vertex with the name {vertex} not found.")]
    VertexNotFound { vertex: String },

    #[error("There is no edge from {start} to {destination}.")]
    NoEdge { start: String, destination: String },

    #[error("No distance table entry found for the vertex {vertex}.")]
    NoDistanceEntry { vertex: String },

    #[error("Element {index} is out of range for union-find of size {size}.")]
    ElementOutOfRange { index: usize, size: usize },

    // Empty structures
    #[error("Cannot dequeue from empty queue.")]
    EmptyQueue,

    // Graph definitions
    #[error("Undefined graph type.")]
    UndefinedGraphType,

    #[error("Invalid graph type: {0}.")]
    InvalidGraphType(String),

    #[error("Missing edge list.")]
    MissingEdgeList,

    #[error("Empty edge list.")]
    EmptyEdgeList,

    #[error("Edge with undefined start vertex.")]
    UndefinedStartVertex,

    #[error("Edge with undefined destination vertex.")]
    UndefinedDestinationVertex,

    #[error("Adjacency matrix capacity {capacity} exceeded.")]
    CapacityExceeded { capacity: usize },

    #[error("Adjacency matrix capacity {capacity} exceeds the maximum of {max}.")]
    CapacityTooLarge { capacity: usize, max: usize },

    // Usage and plumbing
    #[error("{0}")]
    UsageError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex absent from a graph
    pub fn vertex_not_found(vertex: impl std::fmt::Display) -> Self {
        GraphError::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for an edge absent from a graph
    pub fn no_edge(start: impl std::fmt::Display, destination: impl std::fmt::Display) -> Self {
        GraphError::NoEdge {
            start: start.to_string(),
            destination: destination.to_string(),
        }
    }

    /// Create an error for a vertex absent from a distance table
    pub fn no_distance_entry(vertex: impl std::fmt::Display) -> Self {
        GraphError::NoDistanceEntry {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NotDirected
            | GraphError::Cyclic
            | GraphError::NotUndirected
            | GraphError::MissingSearchStart { .. }
            | GraphError::TrivialPath { .. }
            | GraphError::InvalidWeight(_)
            | GraphError::CapacityTooLarge { .. }
            | GraphError::UsageError(_) => ErrorKind::Precondition,

            GraphError::VertexNotFound { .. }
            | GraphError::NoEdge { .. }
            | GraphError::NoDistanceEntry { .. }
            | GraphError::ElementOutOfRange { .. } => ErrorKind::MissingEntity,

            GraphError::EmptyQueue => ErrorKind::EmptyStructure,

            GraphError::UndefinedGraphType
            | GraphError::InvalidGraphType(_)
            | GraphError::MissingEdgeList
            | GraphError::EmptyEdgeList
            | GraphError::UndefinedStartVertex
            | GraphError::UndefinedDestinationVertex
            | GraphError::CapacityExceeded { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ErrorKind::Input,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::Io(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_)
            | GraphError::EmptyQueue => ExitCode::Failure,
            _ => match self.kind() {
                ErrorKind::Precondition => ExitCode::Usage,
                ErrorKind::MissingEntity | ErrorKind::Input => ExitCode::Data,
                ErrorKind::EmptyStructure => ExitCode::Failure,
            },
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::NotDirected => "not_directed",
            GraphError::Cyclic => "cyclic",
            GraphError::NotUndirected => "not_undirected",
            GraphError::MissingSearchStart { .. } => "missing_search_start",
            GraphError::TrivialPath { .. } => "trivial_path",
            GraphError::InvalidWeight(_) => "invalid_weight",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::NoEdge { .. } => "no_edge",
            GraphError::NoDistanceEntry { .. } => "no_distance_entry",
            GraphError::ElementOutOfRange { .. } => "element_out_of_range",
            GraphError::EmptyQueue => "empty_queue",
            GraphError::UndefinedGraphType => "undefined_graph_type",
            GraphError::InvalidGraphType(_) => "invalid_graph_type",
            GraphError::MissingEdgeList => "missing_edge_list",
            GraphError::EmptyEdgeList => "empty_edge_list",
            GraphError::UndefinedStartVertex => "undefined_start_vertex",
            GraphError::UndefinedDestinationVertex => "undefined_destination_vertex",
            GraphError::CapacityExceeded { .. } => "capacity_exceeded",
            GraphError::CapacityTooLarge { .. } => "capacity_too_large",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphlib operations
pub type Result<T> = std::result::Result<T, GraphError>;
