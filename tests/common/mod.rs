//! Shared testing utilities for txfetch CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated host application root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated host root with an empty `packages/` directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("packages"))
            .expect("Failed to create packages directory");
        Self { root }
    }

    /// Absolute path of the host root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Create a module directory under `packages/` and return its path.
    pub fn add_module(&self, name: &str) -> PathBuf {
        let path = self.root().join("packages").join(name);
        fs::create_dir_all(&path).expect("Failed to create module directory");
        path
    }

    /// Write the fetcher's own configuration file, creating its module directory.
    pub fn write_config(&self, content: &str) {
        let own = self.add_module("transifex-fetcher");
        fs::write(own.join("config.toml"), content).expect("Failed to write config file");
    }

    /// Build a command for invoking the compiled `txfetch` binary in the host root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("txfetch").expect("Failed to locate txfetch binary");
        cmd.current_dir(self.root());
        cmd
    }
}
