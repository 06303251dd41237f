//! Identifier extraction

use serde::Serialize;

use crate::{AnnotationError, AnnotationKeys, Annotations, Result};

/// Identifiers read from an entity's annotations.
///
/// `repo` is only set from the combined annotation and `definition` only from
/// the standalone pair, so at most one of them is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationValues {
    pub project: Option<String>,
    pub repo: Option<String>,
    pub definition: Option<String>,
    pub org: Option<String>,
}

impl AnnotationKeys {
    /// Extract identifiers using this namespace's keys.
    ///
    /// When the combined annotation is present it alone decides the result;
    /// the standalone pair is not consulted. An empty value counts as absent.
    pub fn extract(&self, annotations: &impl Annotations) -> Result<AnnotationValues> {
        let lookup = |key: &str| annotations.annotation(key).filter(|v| !v.is_empty());

        let mut values = match lookup(&self.project_repo) {
            Some(project_repo) => {
                tracing::trace!(annotation = %self.project_repo, "using combined annotation");
                let (project, repo) = self.split_project_repo(project_repo)?;
                AnnotationValues {
                    project: Some(project.to_string()),
                    repo: Some(repo.to_string()),
                    ..Default::default()
                }
            }
            None => {
                tracing::trace!("using standalone project and build-definition annotations");
                let project = lookup(&self.project).ok_or_else(|| AnnotationError::MissingValue {
                    annotation: self.project.clone(),
                })?;
                let definition =
                    lookup(&self.build_definition).ok_or_else(|| AnnotationError::MissingValue {
                        annotation: self.build_definition.clone(),
                    })?;
                AnnotationValues {
                    project: Some(project.to_string()),
                    definition: Some(definition.to_string()),
                    ..Default::default()
                }
            }
        };

        values.org = lookup(&self.organization).map(str::to_string);
        Ok(values)
    }

    /// Split `<project>/<repo>` on the first `/`. The repo part may contain
    /// further slashes.
    fn split_project_repo<'a>(&self, value: &'a str) -> Result<(&'a str, &'a str)> {
        let Some((project, repo)) = value.split_once('/') else {
            return Err(AnnotationError::IncorrectFormat {
                annotation: self.project_repo.clone(),
            });
        };
        if project.is_empty() {
            return Err(AnnotationError::MissingProjectName {
                annotation: self.project_repo.clone(),
            });
        }
        if repo.is_empty() {
            return Err(AnnotationError::MissingRepoName {
                annotation: self.project_repo.clone(),
            });
        }
        Ok((project, repo))
    }
}

/// Extract identifiers using the `dev.azure.com` annotations.
pub fn get_annotation_values(annotations: &impl Annotations) -> Result<AnnotationValues> {
    AnnotationKeys::default().extract(annotations)
}
