//! Config file discovery (`~/.config/graphlib/config.toml`)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::GraphlibConfig;
use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "graphlib";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHLIB_CONFIG_DIR";

impl GraphlibConfig {
    /// Default location of the config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config from an explicit path, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config from", path.display(), e))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| GraphError::io_operation("parse config from", path.display(), e))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), backend = %config.graph.backend, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Backend;
    use crate::graph::MinimumSpanningTreeAlgorithm;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[graph]\nbackend = \"adjacency-matrix\"\nmatrix_capacity = 12\n\n[search]\nmst_algorithm = \"kruskal\"\n",
        )
        .unwrap();

        let config = GraphlibConfig::load(Some(&path)).unwrap();
        assert_eq!(config.graph.backend, Backend::AdjacencyMatrix);
        assert_eq!(config.graph.matrix_capacity, 12);
        assert_eq!(
            config.search.mst_algorithm,
            MinimumSpanningTreeAlgorithm::Kruskal
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nmst_algorithm = \"PRIM\"\n").unwrap();

        let config = GraphlibConfig::load_from(&path).unwrap();
        assert_eq!(config.graph.backend, Backend::AdjacencySet);
        assert_eq!(config.graph.matrix_capacity, 100);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = GraphlibConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\nbackend = \"linked-list\"\n").unwrap();

        let err = GraphlibConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config from"));
    }

    #[test]
    fn test_huge_matrix_capacity_is_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\nmatrix_capacity = 4294967296\n").unwrap();

        let err = GraphlibConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, GraphError::UsageError(_)));
    }

    #[test]
    fn test_zero_matrix_capacity_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\nmatrix_capacity = 0\n").unwrap();

        assert!(GraphlibConfig::load_from(&path).is_err());
    }
}
