//! Loader for templating configuration from a package manifest
//!
//! The configuration lives under `backstage.new` in `package.json`. Every
//! part of it is optional: a manifest without the block resolves to the
//! built-in templates and globals.

use portal_fs::{ConfigStore, NormalizedPath};
use serde_json::Value;

use crate::config::{
    GlobalsOverrides, NewConfigBlock, TemplateConfig, TemplateGlobals, TemplatePointer,
};
use crate::defaults::default_templates;
use crate::schema::{GLOBALS, PACKAGE_MANIFEST};
use crate::{Error, Result};

/// Options for [`load_template_config`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Manifest to read. Defaults to `package.json` at the target root.
    pub package_path: Option<NormalizedPath>,
    /// Globals that take precedence over both the manifest and the defaults.
    pub global_overrides: GlobalsOverrides,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package_path(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.package_path = Some(path.into());
        self
    }

    pub fn with_global_overrides(mut self, overrides: GlobalsOverrides) -> Self {
        self.global_overrides = overrides;
        self
    }
}

/// Resolves templating configuration.
///
/// Holds the template list used when a manifest does not provide one.
#[derive(Debug)]
pub struct TemplateConfigLoader {
    store: ConfigStore,
    default_templates: Vec<TemplatePointer>,
}

impl TemplateConfigLoader {
    /// Create a loader that falls back to the built-in templates.
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
            default_templates: default_templates(),
        }
    }

    /// Replace the fallback template list.
    pub fn with_default_templates(mut self, templates: Vec<TemplatePointer>) -> Self {
        self.default_templates = templates;
        self
    }

    /// Read the manifest named by `options` and resolve its configuration.
    pub fn load(&self, options: &LoadOptions) -> Result<TemplateConfig> {
        let path = match &options.package_path {
            Some(path) => path.clone(),
            None => portal_fs::default_package_path()?,
        };
        tracing::debug!(path = %path, "loading templating configuration");

        let document: Value = self.store.load_json(&path)?;
        self.resolve(&document, &path, &options.global_overrides)
    }

    /// Resolve configuration from an already parsed manifest.
    ///
    /// `path` is only used to identify the manifest in errors.
    pub fn resolve(
        &self,
        document: &Value,
        path: &NormalizedPath,
        overrides: &GlobalsOverrides,
    ) -> Result<TemplateConfig> {
        let block = parse_new_config(document, path)?;

        let uses_default_templates = block.templates.is_none();
        let template_pointers = match block.templates {
            Some(templates) => templates,
            None => {
                tracing::debug!(path = %path, "no templates configured, using defaults");
                self.default_templates.clone()
            }
        };

        let globals = TemplateGlobals::default()
            .overlay(&block.globals.unwrap_or_default())
            .overlay(overrides);

        Ok(TemplateConfig {
            uses_default_templates,
            template_pointers,
            globals,
        })
    }
}

impl Default for TemplateConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load templating configuration with the built-in default templates.
pub fn load_template_config(options: &LoadOptions) -> Result<TemplateConfig> {
    TemplateConfigLoader::new().load(options)
}

/// Resolve templating configuration from an already parsed manifest.
pub fn resolve_template_config(
    document: &Value,
    path: &NormalizedPath,
    overrides: &GlobalsOverrides,
) -> Result<TemplateConfig> {
    TemplateConfigLoader::new().resolve(document, path, overrides)
}

/// Validate the manifest and extract its `backstage.new` block.
fn parse_new_config(document: &Value, path: &NormalizedPath) -> Result<NewConfigBlock> {
    let issues = PACKAGE_MANIFEST.validate(document);
    if !issues.is_empty() {
        return Err(Error::InvalidConfig {
            path: path.clone(),
            issues,
        });
    }

    let Some(block) = document.pointer("/backstage/new") else {
        return Ok(NewConfigBlock::default());
    };

    if let Some(globals) = block.get("globals") {
        let ignored = GLOBALS.unknown_keys(globals);
        if !ignored.is_empty() {
            tracing::debug!(path = %path, keys = ?ignored, "ignoring unknown globals");
        }
    }

    let block = serde_json::from_value(block.clone())
        .expect("backstage.new was validated against PACKAGE_MANIFEST");
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn path() -> NormalizedPath {
        NormalizedPath::new("/workspace/package.json")
    }

    fn resolve(document: &Value) -> Result<TemplateConfig> {
        resolve_template_config(document, &path(), &GlobalsOverrides::default())
    }

    #[test]
    fn test_resolve_without_block() {
        let config = resolve(&json!({ "name": "root" })).unwrap();

        assert!(config.uses_default_templates);
        assert_eq!(config.template_pointers, default_templates());
        assert_eq!(config.globals, TemplateGlobals::default());
    }

    #[test]
    fn test_custom_default_templates() {
        let fallback = vec![TemplatePointer::new("only", "./templates/only")];
        let loader = TemplateConfigLoader::new().with_default_templates(fallback.clone());

        let config = loader
            .resolve(&json!({}), &path(), &GlobalsOverrides::default())
            .unwrap();

        assert!(config.uses_default_templates);
        assert_eq!(config.template_pointers, fallback);
    }

    #[test]
    fn test_empty_template_list_is_not_default() {
        let document = json!({ "backstage": { "new": { "templates": [] } } });

        let config = resolve(&document).unwrap();

        assert!(!config.uses_default_templates);
        assert!(config.template_pointers.is_empty());
    }

    #[test]
    fn test_unknown_globals_are_ignored() {
        let document = json!({
            "backstage": { "new": { "globals": { "author": "me", "license": "MIT" } } }
        });

        let config = resolve(&document).unwrap();

        assert_eq!(config.globals.license, "MIT");
    }

    #[test]
    fn test_validated_block_deserializes() {
        let documents = [
            json!({ "backstage": { "new": {} } }),
            json!({ "backstage": { "new": { "templates": [] } } }),
            json!({ "backstage": { "new": { "globals": {} } } }),
            json!({ "backstage": { "new": {
                "templates": [{ "id": "a", "target": "./a" }],
                "globals": {
                    "license": "MIT",
                    "baseVersion": "1.0.0",
                    "private": false,
                    "packagePrefix": "@acme/",
                    "pluginInfix": "",
                    "author": "ignored"
                }
            } } }),
        ];

        for document in &documents {
            assert!(PACKAGE_MANIFEST.validate(document).is_empty());
            assert!(parse_new_config(document, &path()).is_ok());
        }

        let block = parse_new_config(&documents[3], &path()).unwrap();
        assert_eq!(
            block.templates,
            Some(vec![TemplatePointer::new("a", "./a")])
        );
        assert_eq!(block.globals.unwrap().private, Some(false));
    }

    #[test]
    fn test_invalid_block_is_fatal() {
        let document = json!({ "backstage": { "new": { "templates": "all" } } });

        let err = resolve(&document).unwrap_err();

        match err {
            Error::InvalidConfig { path: p, issues } => {
                assert_eq!(p, path());
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].path, "backstage.new.templates");
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }
}
