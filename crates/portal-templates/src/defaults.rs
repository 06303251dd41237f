//! Built-in templates used when a manifest does not list its own.

use crate::config::TemplatePointer;

const TEMPLATE_PACKAGE: &str = "@backstage/cli/templates";

const DEFAULT_TEMPLATE_IDS: [&str; 10] = [
    "frontend-plugin",
    "backend-plugin",
    "backend-plugin-module",
    "plugin-web-library",
    "plugin-node-library",
    "plugin-common-library",
    "web-library",
    "node-library",
    "catalog-provider-module",
    "scaffolder-backend-module",
];

/// The templates shipped with the CLI, in presentation order.
pub fn default_templates() -> Vec<TemplatePointer> {
    DEFAULT_TEMPLATE_IDS
        .iter()
        .map(|id| TemplatePointer::new(*id, format!("{TEMPLATE_PACKAGE}/{id}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_order() {
        let templates = default_templates();
        assert_eq!(templates.len(), 10);
        assert_eq!(templates[0].id, "frontend-plugin");
        assert_eq!(templates[9].id, "scaffolder-backend-module");
    }

    #[test]
    fn test_default_templates_target_package() {
        for template in default_templates() {
            assert_eq!(
                template.target,
                format!("@backstage/cli/templates/{}", template.id)
            );
        }
    }
}
