use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path of a JSON graph definition under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// An isolated config directory for one test
pub struct TestEnv {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `config.toml` into the isolated config directory
    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.dir.path().join("config.toml"), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get a Command for graphlib that only sees this environment's config
    pub fn graphlib(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("graphlib");
        cmd.env("GRAPHLIB_CONFIG_DIR", self.dir.path())
            .env_remove("GRAPHLIB_CONFIG")
            .env_remove("GRAPHLIB_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}
