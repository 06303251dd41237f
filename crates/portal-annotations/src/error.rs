//! Error types for portal-annotations

pub type Result<T> = std::result::Result<T, AnnotationError>;

/// Why an entity's annotations could not be turned into identifiers.
///
/// Messages name the offending annotation key and are stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    /// The combined annotation has no `/` separator.
    #[error(
        "Value for annotation {annotation} was not in the correct format: <project-name>/<repo-name>"
    )]
    IncorrectFormat { annotation: String },

    #[error(
        "Project Name for annotation {annotation} was not found; expected format is: <project-name>/<repo-name>"
    )]
    MissingProjectName { annotation: String },

    #[error(
        "Repo Name for annotation {annotation} was not found; expected format is: <project-name>/<repo-name>"
    )]
    MissingRepoName { annotation: String },

    /// A required standalone annotation is absent.
    #[error("Value for annotation {annotation} was not found")]
    MissingValue { annotation: String },
}

impl AnnotationError {
    /// The annotation key the error refers to.
    pub fn annotation(&self) -> &str {
        match self {
            Self::IncorrectFormat { annotation }
            | Self::MissingProjectName { annotation }
            | Self::MissingRepoName { annotation }
            | Self::MissingValue { annotation } => annotation,
        }
    }
}
