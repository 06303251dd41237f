//! Templating configuration types
//!
//! Field names follow the manifest's camelCase spelling when serialized:
//!
//! ```json
//! {
//!   "backstage": {
//!     "new": {
//!       "templates": [{ "id": "frontend-plugin", "target": "./templates/frontend" }],
//!       "globals": { "license": "MIT", "private": false }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Reference to a template: its identifier and where to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatePointer {
    pub id: String,
    pub target: String,
}

impl TemplatePointer {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }
}

/// Values shared by every template, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateGlobals {
    pub license: String,
    pub base_version: String,
    pub private: bool,
    pub package_prefix: String,
    pub plugin_infix: String,
}

impl Default for TemplateGlobals {
    fn default() -> Self {
        Self {
            license: "Apache-2.0".to_string(),
            base_version: "0.1.0".to_string(),
            private: true,
            package_prefix: "@internal/".to_string(),
            plugin_infix: "plugin-".to_string(),
        }
    }
}

impl TemplateGlobals {
    /// Replace every field that `overrides` sets, leaving the others alone.
    ///
    /// `Some(false)` for `private` counts as set.
    pub fn overlay(self, overrides: &GlobalsOverrides) -> Self {
        Self {
            license: overrides.license.clone().unwrap_or(self.license),
            base_version: overrides.base_version.clone().unwrap_or(self.base_version),
            private: overrides.private.unwrap_or(self.private),
            package_prefix: overrides.package_prefix.clone().unwrap_or(self.package_prefix),
            plugin_infix: overrides.plugin_infix.clone().unwrap_or(self.plugin_infix),
        }
    }
}

/// Partial set of globals, as written in a manifest or passed by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_infix: Option<String>,
}

impl GlobalsOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Contents of the `backstage.new` block once it has passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct NewConfigBlock {
    pub templates: Option<Vec<TemplatePointer>>,
    pub globals: Option<GlobalsOverrides>,
}

/// Fully resolved templating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// True when the manifest did not list any templates of its own.
    #[serde(rename = "isUsingDefaultTemplates")]
    pub uses_default_templates: bool,
    pub template_pointers: Vec<TemplatePointer>,
    pub globals: TemplateGlobals,
}
