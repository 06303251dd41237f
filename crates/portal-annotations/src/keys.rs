//! Annotation key names

/// Namespace used by the Azure DevOps integration.
pub const DEFAULT_NAMESPACE: &str = "dev.azure.com";

/// Fully qualified annotation keys for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationKeys {
    /// `<ns>/project-repo`, holding `<project>/<repo>`.
    pub project_repo: String,
    pub project: String,
    pub build_definition: String,
    pub organization: String,
}

impl AnnotationKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            project_repo: format!("{namespace}/project-repo"),
            project: format!("{namespace}/project"),
            build_definition: format!("{namespace}/build-definition"),
            organization: format!("{namespace}/organization"),
        }
    }
}

impl Default for AnnotationKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
