//! Error types for portal-templates

use portal_fs::NormalizedPath;

use crate::schema::ValidationIssue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] portal_fs::Error),

    /// The `backstage.new` block did not match its schema.
    #[error(
        "Failed to load templating configuration from '{path}'; caused by Validation error: {}",
        render_issues(.issues)
    )]
    InvalidConfig {
        path: NormalizedPath,
        issues: Vec<ValidationIssue>,
    },
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
