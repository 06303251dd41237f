//! Templating configuration for portal-kit.
//!
//! Reads the `backstage.new` block of a package manifest, validates it and
//! resolves a complete [`TemplateConfig`] by layering built-in defaults,
//! manifest values and caller overrides.

pub mod config;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;

pub use config::{GlobalsOverrides, TemplateConfig, TemplateGlobals, TemplatePointer};
pub use defaults::default_templates;
pub use error::{Error, Result};
pub use loader::{LoadOptions, TemplateConfigLoader, load_template_config, resolve_template_config};
pub use schema::ValidationIssue;
