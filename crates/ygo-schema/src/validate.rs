//! # Validation Results and Engine Glue
//!
//! Compiles rendered variant schemas with the `jsonschema` crate
//! (Draft 2020-12) and converts engine errors into structured
//! [`Violation`]s.
//!
//! ## Result Contract
//!
//! Validation never panics and never mutates the document. Every call
//! returns either a [`CardMatch`] naming the variant the document satisfies
//! in full, or a [`CardValidationError`]. A failed match reports every
//! attempted variant with its own violations, not only the last one.
//!
//! ## Schema Resolution
//!
//! Shared sub-schemas (such as the index dialect's card text block) are
//! referenced by absolute `$ref` URI. [`LocalSchemaRetriever`] resolves them
//! from the registry's in-memory map so that compilation never reaches the
//! network.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Retrieve, Uri, ValidationError, Validator};
use serde_json::Value;
use thiserror::Error;
use ygo_core::{Dialect, SchemaBuildError, SchemaId};

/// Category of a single violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A value failed its type, bound, literal, or enum constraint, or a
    /// required key is missing.
    Shape,
    /// A key not declared by the closed record is present.
    UnknownField {
        /// The extraneous key.
        key: String,
    },
    /// A rule spanning several fields does not hold.
    CrossField {
        /// Name of the violated rule.
        rule: String,
    },
}

/// A single violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the document.
    pub instance_path: String,
    /// JSON Pointer to the constraint within the variant schema. Empty for
    /// cross-field rules, which live outside the schema.
    pub schema_path: String,
    /// Violation category.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Whether this is an extraneous-key violation.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind, ViolationKind::UnknownField { .. })
    }

    /// Whether this violation comes from a cross-field rule.
    pub fn is_cross_field(&self) -> bool {
        matches!(self.kind, ViolationKind::CrossField { .. })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// How one variant fared against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The variant's discriminant did not hold, so it was never validated.
    Skipped,
    /// The variant was validated and rejected the document.
    Rejected(Vec<Violation>),
}

/// One entry of the ordered attempt log of a failed match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAttempt {
    /// Variant name.
    pub variant: &'static str,
    /// Result of the attempt.
    pub outcome: AttemptOutcome,
}

impl VariantAttempt {
    /// Violations of a rejected attempt; empty for skipped ones.
    pub fn violations(&self) -> &[Violation] {
        match &self.outcome {
            AttemptOutcome::Skipped => &[],
            AttemptOutcome::Rejected(violations) => violations,
        }
    }

    /// Whether the variant was actually validated.
    pub fn was_validated(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Rejected(_))
    }
}

impl fmt::Display for VariantAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            AttemptOutcome::Skipped => write!(f, "{}: skipped (discriminant mismatch)", self.variant),
            AttemptOutcome::Rejected(violations) => {
                write!(f, "{}:", self.variant)?;
                for v in violations {
                    write!(f, "\n  {v}")?;
                }
                Ok(())
            }
        }
    }
}

/// A successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMatch {
    /// Dialect the document was validated against.
    pub dialect: Dialect,
    /// Contract URI of that dialect.
    pub schema_id: SchemaId,
    /// Name of the variant the document satisfies.
    pub variant: &'static str,
}

/// A document together with the variant it was validated against.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDocument {
    /// The unchanged document.
    pub document: Value,
    /// The match result.
    pub matched: CardMatch,
}

/// Errors returned by validation operations.
#[derive(Error, Debug)]
pub enum CardValidationError {
    /// The document satisfies none of the dialect's variants.
    #[error(
        "document matches no variant of {schema_id} ({} attempted){}",
        .attempts.iter().filter(|a| a.was_validated()).count(),
        render_attempts(.attempts)
    )]
    NoMatchingVariant {
        /// Dialect contract URI.
        schema_id: SchemaId,
        /// Discriminant fields present in the document and their values.
        observed: BTreeMap<String, Value>,
        /// Variants in priority order with their outcome.
        attempts: Vec<VariantAttempt>,
    },

    /// No dialect is registered under the requested identifier.
    #[error("schema not found: {0}")]
    SchemaNotFound(String),

    /// The document file could not be read or parsed.
    #[error("failed to load document {path}: {reason}")]
    DocumentLoadError {
        /// Path to the document.
        path: String,
        /// Reason for the failure.
        reason: String,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardValidationError {
    /// The attempt log of a failed match; empty for other errors.
    pub fn attempts(&self) -> &[VariantAttempt] {
        match self {
            Self::NoMatchingVariant { attempts, .. } => attempts,
            _ => &[],
        }
    }

    /// The attempt for a specific variant, if it was logged.
    pub fn attempt(&self, variant: &str) -> Option<&VariantAttempt> {
        self.attempts().iter().find(|a| a.variant == variant)
    }

    /// Every violation across all attempts.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.attempts().iter().flat_map(VariantAttempt::violations)
    }
}

fn render_attempts(attempts: &[VariantAttempt]) -> String {
    attempts
        .iter()
        .filter(|a| a.was_validated())
        .map(|a| format!("\n{a}"))
        .collect()
}

/// Resolves `$ref` URIs against schemas held in memory.
struct LocalSchemaRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        self.schemas_by_uri
            .get(uri_str)
            .cloned()
            .ok_or_else(|| format!("schema not registered for URI: {uri_str}").into())
    }
}

/// Compile a rendered variant schema.
///
/// # Errors
///
/// [`SchemaBuildError::Compile`] if the engine rejects the schema or a
/// `$ref` cannot be resolved from `shared`.
pub(crate) fn compile(
    variant: &str,
    schema: &Value,
    shared: &HashMap<String, Value>,
) -> Result<Validator, SchemaBuildError> {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.with_retriever(LocalSchemaRetriever {
        schemas_by_uri: shared.clone(),
    });
    opts.build(schema).map_err(|e| SchemaBuildError::Compile {
        variant: variant.to_string(),
        reason: e.to_string(),
    })
}

/// Run the engine and collect structured violations.
pub(crate) fn engine_violations(validator: &Validator, document: &Value) -> Vec<Violation> {
    validator
        .iter_errors(document)
        .flat_map(|e| from_engine_error(&e))
        .collect()
}

fn from_engine_error(error: &ValidationError<'_>) -> Vec<Violation> {
    let instance_path = error.instance_path.to_string();
    let schema_path = error.schema_path.to_string();
    match &error.kind {
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
            .iter()
            .map(|key| Violation {
                instance_path: instance_path.clone(),
                schema_path: schema_path.clone(),
                kind: ViolationKind::UnknownField { key: key.clone() },
                message: format!("unknown field '{key}'"),
            })
            .collect(),
        _ => vec![Violation {
            instance_path,
            schema_path,
            kind: ViolationKind::Shape,
            message: error.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn closed_object() -> Value {
        json!({
            "type": "object",
            "properties": { "level": { "type": "integer", "minimum": 0, "maximum": 12 } },
            "required": ["level"],
            "additionalProperties": false,
        })
    }

    #[test]
    fn unknown_keys_become_unknown_field_violations() {
        let validator = compile("Leveled", &closed_object(), &HashMap::new()).unwrap();
        let violations = engine_violations(&validator, &json!({ "level": 4, "rank": 4, "xx": 1 }));
        let mut keys: Vec<_> = violations
            .iter()
            .filter_map(|v| match &v.kind {
                ViolationKind::UnknownField { key } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        keys.sort();
        assert_eq!(keys, ["rank", "xx"]);
    }

    #[test]
    fn bound_violation_is_shape() {
        let validator = compile("Leveled", &closed_object(), &HashMap::new()).unwrap();
        let violations = engine_violations(&validator, &json!({ "level": 13 }));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Shape);
        assert_eq!(violations[0].instance_path, "/level");
    }

    #[test]
    fn refs_resolve_from_shared_map() {
        let uri = "https://api.alphakretin.com/card-text.json";
        let mut shared = HashMap::new();
        shared.insert(
            uri.to_string(),
            json!({ "$id": uri, "type": "object", "required": ["name"] }),
        );
        let schema = json!({ "type": "object", "properties": { "en": { "$ref": uri } } });
        let validator = compile("WithRef", &schema, &shared).unwrap();
        assert!(validator.is_valid(&json!({ "en": { "name": "Kuriboh" } })));
        assert!(!validator.is_valid(&json!({ "en": {} })));
    }

    #[test]
    fn unresolvable_ref_is_a_build_error() {
        let schema = json!({ "$ref": "https://example.invalid/missing.json" });
        let err = compile("Dangling", &schema, &HashMap::new()).unwrap_err();
        assert!(matches!(err, SchemaBuildError::Compile { .. }));
    }

    #[test]
    fn violation_display_root() {
        let v = Violation {
            instance_path: String::new(),
            schema_path: "/required".to_string(),
            kind: ViolationKind::Shape,
            message: r#""card_type" is a required property"#.to_string(),
        };
        assert!(v.to_string().contains("(root)"));
    }

    #[test]
    fn no_match_display_lists_validated_attempts_only() {
        let err = CardValidationError::NoMatchingVariant {
            schema_id: SchemaId::new("/rush/card.json"),
            observed: BTreeMap::new(),
            attempts: vec![
                VariantAttempt {
                    variant: "SpellCard",
                    outcome: AttemptOutcome::Skipped,
                },
                VariantAttempt {
                    variant: "TrapCard",
                    outcome: AttemptOutcome::Rejected(vec![Violation {
                        instance_path: "/property".to_string(),
                        schema_path: "/properties/property/const".to_string(),
                        kind: ViolationKind::Shape,
                        message: r#""Normal" was expected"#.to_string(),
                    }]),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("(1 attempted)"));
        assert!(text.contains("TrapCard"));
        assert!(!text.contains("SpellCard"));
    }
}
