//! Shared test utilities for the pkghash workspace.
//!
//! Used by the repo crate's unit tests, the app crate, and the CLI integration and BDD
//! tests, so it lives outside any `#[cfg(test)]` module.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// File the marker install command appends to, one line per invocation.
pub const INSTALL_MARKER: &str = ".install-marker";

/// `package.json` used by the end-to-end scenarios.
pub const SAMPLE_PACKAGE_JSON: &str = r#"{"dependencies":{"test":"1.0.0"}}"#;

/// A throwaway project directory, removed on drop.
#[derive(Debug)]
pub struct TempProject {
    // Kept alive for the lifetime of the project.
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        Self { _dir: dir, root }
    }

    /// Project with the sample `package.json` and nothing else.
    pub fn with_sample_manifest() -> Self {
        let project = Self::new();
        project.write("package.json", SAMPLE_PACKAGE_JSON);
        project
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn path(&self, rel: &str) -> Utf8PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) {
        self.write_bytes(rel, contents.as_bytes());
    }

    pub fn write_bytes(&self, rel: &str, contents: &[u8]) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("read file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.path(rel)).expect("create dir");
    }

    pub fn remove(&self, rel: &str) {
        let path = self.path(rel);
        if path.is_dir() {
            std::fs::remove_dir_all(&path).expect("remove dir");
        } else {
            std::fs::remove_file(&path).expect("remove file");
        }
    }

    /// Number of times the marker install command ran in this project.
    pub fn install_count(&self) -> usize {
        if !self.exists(INSTALL_MARKER) {
            return 0;
        }
        self.read(INSTALL_MARKER)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count()
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell command that records an invocation instead of installing anything.
///
/// It runs in the project directory, so the marker lands next to `package.json`.
/// The syntax works under both `sh -c` and `cmd /C`.
pub fn marker_install_command() -> String {
    format!("echo installed >> {INSTALL_MARKER}")
}

/// Shell command that fails with the given exit code.
pub fn failing_install_command(code: i32) -> String {
    format!("exit {code}")
}
