//! Well-known file names.

/// File name of a package manifest.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Manifest field marking a workspace (monorepo) root.
pub const WORKSPACES_FIELD: &str = "workspaces";
