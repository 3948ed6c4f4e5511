//! Configuration for graphlib
//!
//! Read from `--config <PATH>`, otherwise from
//! `$GRAPHLIB_CONFIG_DIR/config.toml` or `<config dir>/graphlib/config.toml`.
//! Every key is optional.

mod global;
pub mod types;

pub use types::{Backend, GraphConfig, GraphlibConfig, SearchConfig, DEFAULT_MATRIX_CAPACITY};

use crate::bail_usage;
use crate::error::Result;
use crate::graph::MAX_MATRIX_CAPACITY;

impl GraphlibConfig {
    /// Reject settings no backend can work with
    pub fn validate(&self) -> Result<()> {
        if self.graph.matrix_capacity == 0 {
            bail_usage!("graph.matrix_capacity must be at least 1");
        }
        if self.graph.matrix_capacity > MAX_MATRIX_CAPACITY {
            bail_usage!(format!(
                "graph.matrix_capacity must be at most {}",
                MAX_MATRIX_CAPACITY
            ));
        }
        Ok(())
    }

    /// Backend to use, preferring an explicit choice over the configured one
    pub fn backend(&self, requested: Option<Backend>) -> Backend {
        requested.unwrap_or(self.graph.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphlibConfig::default();
        assert_eq!(config.graph.backend, Backend::AdjacencySet);
        assert_eq!(config.graph.matrix_capacity, DEFAULT_MATRIX_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_matrix_capacity_bounds() {
        let mut config = GraphlibConfig::default();
        config.graph.matrix_capacity = MAX_MATRIX_CAPACITY;
        assert!(config.validate().is_ok());

        config.graph.matrix_capacity = MAX_MATRIX_CAPACITY + 1;
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "graph.matrix_capacity must be at most 4096"
        );
    }

    #[test]
    fn test_requested_backend_wins() {
        let config = GraphlibConfig::default();
        assert_eq!(
            config.backend(Some(Backend::AdjacencyMatrix)),
            Backend::AdjacencyMatrix
        );
        assert_eq!(config.backend(None), Backend::AdjacencySet);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!("set".parse::<Backend>().unwrap(), Backend::AdjacencySet);
        assert_eq!(
            "adjacency-matrix".parse::<Backend>().unwrap(),
            Backend::AdjacencyMatrix
        );
        assert!("list".parse::<Backend>().is_err());
        assert_eq!(Backend::AdjacencyMatrix.to_string(), "adjacency-matrix");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = GraphlibConfig::default();
        config.graph.backend = Backend::AdjacencyMatrix;

        let content = toml::to_string_pretty(&config).unwrap();
        let loaded: GraphlibConfig = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }
}
