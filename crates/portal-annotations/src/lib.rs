//! Catalog entity annotation parsing for portal-kit.
//!
//! Extracts the Azure DevOps project, repository, build definition and
//! organization an entity points at. An entity either names a repository
//! through the combined annotation:
//!
//! ```yaml
//! metadata:
//!   annotations:
//!     dev.azure.com/project-repo: my-project/my-repo
//! ```
//!
//! or a build definition through the standalone pair:
//!
//! ```yaml
//! metadata:
//!   annotations:
//!     dev.azure.com/project: my-project
//!     dev.azure.com/build-definition: my-pipeline
//! ```
//!
//! `dev.azure.com/organization` may accompany either form.

pub mod error;
pub mod extract;
pub mod keys;
pub mod source;

pub use error::{AnnotationError, Result};
pub use extract::{AnnotationValues, get_annotation_values};
pub use keys::{AnnotationKeys, DEFAULT_NAMESPACE};
pub use source::Annotations;
