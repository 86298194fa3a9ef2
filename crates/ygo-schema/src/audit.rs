//! # Closed-Object Audit
//!
//! Every record in a published card schema must reject undeclared keys.
//! [`audit_closed_objects`] walks a rendered JSON Schema and reports each
//! object sub-schema whose `additionalProperties` is not `false`.
//!
//! An object sub-schema is anything with `"type": "object"` or a
//! `properties` map. The walk descends through `properties`, `items`,
//! `anyOf`, `oneOf`, `allOf`, and `$defs`. `$ref` targets are audited where
//! they are defined, not where they are referenced.

use std::fmt;

use serde_json::Value;

/// An object sub-schema that admits undeclared keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenObjectFinding {
    /// JSON Pointer to the object sub-schema.
    pub json_path: String,
    /// The schema's `title`, if any.
    pub title: Option<String>,
    /// Rendered `additionalProperties` value, or a note that it is absent.
    pub current_value: String,
}

impl fmt::Display for OpenObjectFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.json_path.is_empty() {
            "(root)"
        } else {
            &self.json_path
        };
        match &self.title {
            Some(title) => write!(f, "  {path} ({title}): additionalProperties is {}", self.current_value),
            None => write!(f, "  {path}: additionalProperties is {}", self.current_value),
        }
    }
}

/// Report every object sub-schema of `schema` that is not closed.
pub fn audit_closed_objects(schema: &Value) -> Vec<OpenObjectFinding> {
    let mut findings = Vec::new();
    walk(schema, String::new(), &mut findings);
    findings
}

fn walk(schema: &Value, path: String, findings: &mut Vec<OpenObjectFinding>) {
    let Some(object) = schema.as_object() else {
        return;
    };

    let is_object_schema =
        object.get("type").and_then(Value::as_str) == Some("object") || object.contains_key("properties");
    if is_object_schema {
        match object.get("additionalProperties") {
            Some(Value::Bool(false)) => {}
            Some(other) => findings.push(finding(object, &path, other.to_string())),
            None => findings.push(finding(object, &path, "absent (defaults to true)".to_string())),
        }
    }

    for keyword in ["properties", "$defs"] {
        if let Some(children) = object.get(keyword).and_then(Value::as_object) {
            for (key, child) in children {
                walk(child, format!("{path}/{keyword}/{}", escape(key)), findings);
            }
        }
    }
    if let Some(items) = object.get("items") {
        walk(items, format!("{path}/items"), findings);
    }
    for keyword in ["anyOf", "oneOf", "allOf"] {
        if let Some(branches) = object.get(keyword).and_then(Value::as_array) {
            for (i, branch) in branches.iter().enumerate() {
                walk(branch, format!("{path}/{keyword}/{i}"), findings);
            }
        }
    }
}

fn finding(object: &serde_json::Map<String, Value>, path: &str, current_value: String) -> OpenObjectFinding {
    OpenObjectFinding {
        json_path: path.to_string(),
        title: object.get("title").and_then(Value::as_str).map(str::to_string),
        current_value,
    }
}

/// JSON Pointer escaping (RFC 6901).
fn escape(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
