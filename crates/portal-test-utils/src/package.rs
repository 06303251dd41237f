//! [`TestPackage`] builder for manifest-loading test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary package directory with helpers for writing its manifest.
///
/// # Example
///
/// ```rust,no_run
/// use portal_test_utils::package::TestPackage;
/// use serde_json::json;
///
/// let pkg = TestPackage::new();
/// pkg.write_new_config(json!({ "globals": { "license": "MIT" } }));
/// assert!(pkg.manifest_path().exists());
/// ```
pub struct TestPackage {
    temp_dir: TempDir,
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPackage {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `package.json` in the root.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join("package.json")
    }

    /// Write `manifest` as `package.json`.
    pub fn write_manifest(&self, manifest: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(manifest).unwrap();
        self.write_raw(&content)
    }

    /// Write `content` verbatim as `package.json`.
    pub fn write_raw(&self, content: &str) -> PathBuf {
        let path = self.manifest_path();
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        path
    }

    /// Write a workspace-root manifest whose `backstage.new` block is `block`.
    pub fn write_new_config(&self, block: Value) -> PathBuf {
        self.write_manifest(&json!({
            "name": "root",
            "private": true,
            "workspaces": { "packages": ["packages/*", "plugins/*"] },
            "backstage": { "new": block }
        }))
    }
}
