//! Target root discovery
//!
//! The target root is the directory of the nearest enclosing workspace
//! manifest, i.e. the closest `package.json` (searching upward) that declares
//! `workspaces`. When no such manifest exists the starting directory is used.

use std::path::Path;

use serde_json::Value;

use crate::constants::{PACKAGE_MANIFEST, WORKSPACES_FIELD};
use crate::{ConfigStore, Error, NormalizedPath, Result};

/// Find the target root starting from `start`.
///
/// Candidate manifests that cannot be read or parsed are skipped.
pub fn find_target_root(start: impl AsRef<Path>) -> NormalizedPath {
    let start = NormalizedPath::canonical(start);
    let store = ConfigStore::new();

    let mut current = Some(start.clone());
    while let Some(dir) = current {
        let manifest = dir.join(PACKAGE_MANIFEST);
        if manifest.is_file() {
            match store.load_json::<Value>(&manifest) {
                Ok(value) if declares_workspaces(&value) => {
                    tracing::debug!(root = %dir, "found workspace root");
                    return dir;
                }
                Ok(_) => {}
                Err(e) => tracing::trace!(path = %manifest, error = %e, "skipping manifest"),
            }
        }
        current = dir.parent();
    }

    tracing::debug!(root = %start, "no workspace root found, using start directory");
    start
}

/// Find the target root for the current working directory.
pub fn target_root() -> Result<NormalizedPath> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    Ok(find_target_root(cwd))
}

/// Location of the package manifest at the target root.
pub fn default_package_path() -> Result<NormalizedPath> {
    Ok(target_root()?.join(PACKAGE_MANIFEST))
}

/// Truthiness of the `workspaces` field, as a JavaScript toolchain would see it.
fn declares_workspaces(manifest: &Value) -> bool {
    match manifest.get(WORKSPACES_FIELD) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
