//! # Document Loading
//!
//! Card documents arrive as JSON (index, OCG/TCG, Rush exports) or as YAML
//! (Yaml-Yugi sources). Both are converted into the same `serde_json`
//! data model before validation, so every dialect sees identical values
//! regardless of the file format.

use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::validate::CardValidationError;

/// On-disk encoding of a card document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`, and any unrecognized extension.
    Json,
    /// `.yaml` or `.yml`, in any letter case.
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

/// Parse `text` in `format` into a JSON value.
///
/// The error string is the parser's reason, without a path.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, String> {
    match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}")),
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(text).map_err(|e| format!("invalid YAML: {e}"))?;
            yaml_to_json(&yaml).map_err(|e| format!("YAML-to-JSON conversion failed: {e}"))
        }
    }
}

/// Read and parse the card document at `path`.
///
/// # Errors
///
/// [`CardValidationError::DocumentLoadError`] if the file cannot be read or
/// does not parse in the format its extension implies.
pub fn load_document(path: &Path) -> Result<Value, CardValidationError> {
    let load_error = |reason: String| CardValidationError::DocumentLoadError {
        path: path.display().to_string(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;
    parse_document(&text, DocumentFormat::from_path(path)).map_err(load_error)
}

/// Convert a YAML value tree into the JSON data model.
///
/// Tags are dropped. Scalar map keys are stringified. Non-finite floats and
/// composite map keys have no JSON form and are rejected.
pub fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(yaml_number(n)?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::Array(items.iter().map(yaml_to_json).collect::<Result<_, _>>()?),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s.clone(),
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(&tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("cannot represent {n} in JSON"))
}
