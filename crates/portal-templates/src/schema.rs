//! Structural validation of package manifests
//!
//! The expected shape is described declaratively by [`Schema`] values and
//! checked against an untyped JSON document. Checking never stops at the
//! first problem: every violation is reported as a [`ValidationIssue`].

use std::fmt;

use serde_json::Value;

/// Expected shape of a JSON value.
#[derive(Debug)]
pub enum Schema {
    String,
    Boolean,
    Array(&'static Schema),
    /// An object with known fields. A strict object rejects any other key;
    /// a non-strict one ignores them.
    Object {
        fields: &'static [Field],
        strict: bool,
    },
}

/// A named field of an object schema.
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub schema: &'static Schema,
    pub required: bool,
}

impl Field {
    const fn required(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            schema,
            required: true,
        }
    }

    const fn optional(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            schema,
            required: false,
        }
    }
}

const TEMPLATE_POINTER: Schema = Schema::Object {
    fields: &[
        Field::required("id", &Schema::String),
        Field::required("target", &Schema::String),
    ],
    strict: true,
};

const TEMPLATE_LIST: Schema = Schema::Array(&TEMPLATE_POINTER);

/// Schema of the `backstage.new.globals` object.
pub const GLOBALS: Schema = Schema::Object {
    fields: &[
        Field::optional("license", &Schema::String),
        Field::optional("baseVersion", &Schema::String),
        Field::optional("private", &Schema::Boolean),
        Field::optional("packagePrefix", &Schema::String),
        Field::optional("pluginInfix", &Schema::String),
    ],
    strict: false,
};

const NEW_CONFIG: Schema = Schema::Object {
    fields: &[
        Field::optional("templates", &TEMPLATE_LIST),
        Field::optional("globals", &GLOBALS),
    ],
    strict: true,
};

const BACKSTAGE: Schema = Schema::Object {
    fields: &[Field::optional("new", &NEW_CONFIG)],
    strict: false,
};

/// Schema of a package manifest carrying templating configuration.
pub const PACKAGE_MANIFEST: Schema = Schema::Object {
    fields: &[Field::optional("backstage", &BACKSTAGE)],
    strict: false,
};

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location of the offending value, e.g. `backstage.new.templates[0].id`.
    /// Empty for the document root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} at \"{}\"", self.message, self.path)
        }
    }
}

#[derive(Debug, Clone)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn render_path(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Segment::Index(idx) => {
                out.push('[');
                out.push_str(&idx.to_string());
                out.push(']');
            }
        }
    }
    out
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Schema {
    fn expected(&self) -> &'static str {
        match self {
            Schema::String => "string",
            Schema::Boolean => "boolean",
            Schema::Array(_) => "array",
            Schema::Object { .. } => "object",
        }
    }

    /// Check `value` against this schema, returning every violation found.
    pub fn validate(&self, value: &Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut path = Vec::new();
        self.check(value, &mut path, &mut issues);
        issues
    }

    fn check<'v>(
        &self,
        value: &'v Value,
        path: &mut Vec<Segment<'v>>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match (self, value) {
            (Schema::String, Value::String(_)) | (Schema::Boolean, Value::Bool(_)) => {}
            (Schema::Array(item), Value::Array(items)) => {
                for (idx, element) in items.iter().enumerate() {
                    path.push(Segment::Index(idx));
                    item.check(element, path, issues);
                    path.pop();
                }
            }
            (Schema::Object { fields, strict }, Value::Object(map)) => {
                for field in fields.iter() {
                    match map.get_key_value(field.name) {
                        Some((key, child)) => {
                            path.push(Segment::Key(key.as_str()));
                            field.schema.check(child, path, issues);
                            path.pop();
                        }
                        None if field.required => {
                            path.push(Segment::Key(field.name));
                            issues.push(ValidationIssue {
                                path: render_path(path),
                                message: "Required".to_string(),
                            });
                            path.pop();
                        }
                        None => {}
                    }
                }

                if *strict {
                    let mut unknown: Vec<String> = map
                        .keys()
                        .filter(|key| !fields.iter().any(|f| f.name == key.as_str()))
                        .map(|key| format!("'{key}'"))
                        .collect();
                    unknown.sort();
                    if !unknown.is_empty() {
                        issues.push(ValidationIssue {
                            path: render_path(path),
                            message: format!(
                                "Unrecognized key(s) in object: {}",
                                unknown.join(", ")
                            ),
                        });
                    }
                }
            }
            _ => issues.push(ValidationIssue {
                path: render_path(path),
                message: format!(
                    "Expected {}, received {}",
                    self.expected(),
                    kind_of(value)
                ),
            }),
        }
    }

    /// Keys of `value` that an object schema does not declare.
    pub fn unknown_keys<'v>(&self, value: &'v Value) -> Vec<&'v str> {
        match (self, value) {
            (Schema::Object { fields, .. }, Value::Object(map)) => map
                .keys()
                .filter(|key| !fields.iter().any(|f| f.name == key.as_str()))
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn issue(path: &str, message: &str) -> ValidationIssue {
        ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        assert!(PACKAGE_MANIFEST.validate(&json!({})).is_empty());
    }

    #[test]
    fn test_unrelated_keys_are_allowed() {
        let manifest = json!({
            "name": "root",
            "backstage": { "role": "frontend", "new": {} }
        });
        assert!(PACKAGE_MANIFEST.validate(&manifest).is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        assert_eq!(
            PACKAGE_MANIFEST.validate(&json!([1, 2])),
            vec![issue("", "Expected object, received array")]
        );
    }

    #[test]
    fn test_null_is_not_absent() {
        assert_eq!(
            PACKAGE_MANIFEST.validate(&json!({ "backstage": { "new": null } })),
            vec![issue("backstage.new", "Expected object, received null")]
        );
    }

    #[test]
    fn test_reports_every_violation() {
        let manifest = json!({
            "backstage": {
                "new": {
                    "templates": [
                        { "id": 1, "target": "./a" },
                        { "id": "b" },
                        "c"
                    ],
                    "globals": { "private": "yes", "license": false },
                    "extra": true
                }
            }
        });

        assert_eq!(
            PACKAGE_MANIFEST.validate(&manifest),
            vec![
                issue("backstage.new.templates[0].id", "Expected string, received number"),
                issue("backstage.new.templates[1].target", "Required"),
                issue("backstage.new.templates[2]", "Expected object, received string"),
                issue("backstage.new.globals.license", "Expected string, received boolean"),
                issue("backstage.new.globals.private", "Expected boolean, received string"),
                issue("backstage.new", "Unrecognized key(s) in object: 'extra'"),
            ]
        );
    }

    #[test]
    fn test_strict_template_entry() {
        let manifest = json!({
            "backstage": { "new": { "templates": [
                { "id": "a", "target": "./a", "label": "A", "beta": true }
            ] } }
        });

        assert_eq!(
            PACKAGE_MANIFEST.validate(&manifest),
            vec![issue(
                "backstage.new.templates[0]",
                "Unrecognized key(s) in object: 'beta', 'label'"
            )]
        );
    }

    #[test]
    fn test_globals_ignores_unknown_keys() {
        let globals = json!({ "license": "MIT", "author": "someone" });
        assert!(GLOBALS.validate(&globals).is_empty());
        assert_eq!(GLOBALS.unknown_keys(&globals), vec!["author"]);
    }

    #[test]
    fn test_render_path() {
        let segments = [
            Segment::Key("backstage"),
            Segment::Key("new"),
            Segment::Key("templates"),
            Segment::Index(3),
            Segment::Key("id"),
        ];
        assert_eq!(render_path(&segments), "backstage.new.templates[3].id");
        assert_eq!(render_path(&[]), "");
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            issue("backstage.new.templates[0].id", "Required").to_string(),
            "Required at \"backstage.new.templates[0].id\""
        );
        assert_eq!(
            issue("", "Expected object, received null").to_string(),
            "Expected object, received null"
        );
    }
}
