//! # Card Schema Registry
//!
//! Builds every dialect union once, compiles each variant with the
//! `jsonschema` engine, and serves validation requests against the compiled
//! set.
//!
//! ## Matching
//!
//! [`CardSchemaRegistry::validate`] walks a dialect's variants in priority
//! order. A variant whose [`Discriminant`] does not hold is skipped without
//! running the engine. Otherwise the document is validated against the
//! variant's closed schema, then against its cross-field rules. The first
//! variant with no violations is the match. Later variants are never tried
//! once one has matched, so a document is never reported under two
//! variants.
//!
//! ## Thread Safety
//!
//! The registry is immutable after construction and `Send + Sync`.
//! [`CardSchemaRegistry::shared`] builds a process-wide instance on first use
//! with default options; concurrent callers may validate against it freely.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;
use tracing::{debug, info, trace};
use ygo_core::{Dialect, SchemaBuildError, SchemaId};

use crate::dialect;
use crate::document::load_document;
use crate::options::RegistryOptions;
use crate::rules::CrossFieldRule;
use crate::union::{DialectUnion, Discriminant};
use crate::validate::{
    compile, engine_violations, AttemptOutcome, CardMatch, CardValidationError,
    ValidatedDocument, VariantAttempt, Violation,
};

struct CompiledVariant {
    name: &'static str,
    discriminant: Discriminant,
    rules: Vec<CrossFieldRule>,
    validator: Validator,
}

impl CompiledVariant {
    fn violations(&self, document: &Value) -> Vec<Violation> {
        let violations = engine_violations(&self.validator, document);
        if !violations.is_empty() {
            return violations;
        }
        // rules assume the schema already accepted the document
        self.rules.iter().filter_map(|rule| rule.check(document)).collect()
    }
}

struct CompiledDialect {
    union: DialectUnion,
    variants: Vec<CompiledVariant>,
}

/// Compiled card schemas for every dialect.
pub struct CardSchemaRegistry {
    options: RegistryOptions,
    dialects: BTreeMap<Dialect, CompiledDialect>,
    shared: HashMap<String, Value>,
}

static SHARED: OnceLock<Result<CardSchemaRegistry, SchemaBuildError>> = OnceLock::new();

impl CardSchemaRegistry {
    /// Build and compile every dialect.
    ///
    /// # Errors
    ///
    /// Any [`SchemaBuildError`] raised while composing a dialect or compiling
    /// one of its variants. These indicate a defect in a schema definition.
    pub fn new(options: RegistryOptions) -> Result<Self, SchemaBuildError> {
        let unions = Dialect::all()
            .iter()
            .map(|d| dialect::definition(*d, &options))
            .collect::<Result<Vec<_>, _>>()?;

        let shared: HashMap<String, Value> = unions
            .iter()
            .flat_map(DialectUnion::shared_schemas)
            .map(|(id, json)| (id.as_str().to_string(), json))
            .collect();

        let mut dialects = BTreeMap::new();
        let mut variant_count = 0;
        for union in unions {
            let variants = union
                .variants()
                .iter()
                .map(|variant| -> Result<CompiledVariant, SchemaBuildError> {
                    Ok(CompiledVariant {
                        name: variant.name(),
                        discriminant: variant.discriminant().clone(),
                        rules: variant.rules().to_vec(),
                        validator: compile(variant.name(), &variant.to_json(), &shared)?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            variant_count += variants.len();
            dialects.insert(union.dialect(), CompiledDialect { union, variants });
        }

        info!(
            dialects = dialects.len(),
            variants = variant_count,
            strict_pairings = options.strict_pairings,
            "card schema registry built"
        );
        Ok(Self {
            options,
            dialects,
            shared,
        })
    }

    /// The process-wide registry built with default options.
    ///
    /// Built on first call. A build failure is cached and returned to every
    /// caller.
    pub fn shared() -> Result<&'static Self, SchemaBuildError> {
        SHARED
            .get_or_init(|| Self::new(RegistryOptions::default()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Options the registry was built with.
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// The uncompiled union definition of `dialect`.
    pub fn union(&self, dialect: Dialect) -> Option<&DialectUnion> {
        self.dialects.get(&dialect).map(|d| &d.union)
    }

    /// The published JSON Schema for `dialect`.
    pub fn union_schema(&self, dialect: Dialect) -> Option<Value> {
        self.union(dialect).map(DialectUnion::to_json_schema)
    }

    /// Sub-schemas resolvable by `$ref`, sorted by URI.
    pub fn shared_schemas(&self) -> Vec<(&str, &Value)> {
        let mut out: Vec<_> = self.shared.iter().map(|(uri, json)| (uri.as_str(), json)).collect();
        out.sort_by_key(|(uri, _)| *uri);
        out
    }

    /// Validate `document` against the union of `dialect`.
    ///
    /// # Errors
    ///
    /// - [`CardValidationError::NoMatchingVariant`] with the ordered attempt
    ///   log when no variant accepts the document.
    /// - [`CardValidationError::SchemaNotFound`] if the dialect is not built.
    pub fn validate(&self, dialect: Dialect, document: &Value) -> Result<CardMatch, CardValidationError> {
        let compiled = self
            .dialects
            .get(&dialect)
            .ok_or_else(|| CardValidationError::SchemaNotFound(dialect.schema_id().to_string()))?;

        let mut attempts = Vec::new();
        for variant in &compiled.variants {
            if !variant.discriminant.holds(document) {
                trace!(dialect = %dialect, variant = variant.name, "discriminant mismatch");
                if self.options.report_skipped_variants {
                    attempts.push(VariantAttempt {
                        variant: variant.name,
                        outcome: AttemptOutcome::Skipped,
                    });
                }
                continue;
            }

            let mut violations = variant.violations(document);
            if violations.is_empty() {
                debug!(dialect = %dialect, variant = variant.name, outcome = "matched");
                return Ok(CardMatch {
                    dialect,
                    schema_id: compiled.union.schema_id(),
                    variant: variant.name,
                });
            }
            debug!(
                dialect = %dialect,
                variant = variant.name,
                outcome = "rejected",
                violations = violations.len()
            );
            if let Some(max) = self.options.max_violations_per_variant {
                violations.truncate(max);
            }
            attempts.push(VariantAttempt {
                variant: variant.name,
                outcome: AttemptOutcome::Rejected(violations),
            });
        }

        Err(CardValidationError::NoMatchingVariant {
            schema_id: compiled.union.schema_id(),
            observed: compiled.union.observed(document),
            attempts,
        })
    }

    /// Validate against the dialect whose contract URI is `schema_id`.
    ///
    /// # Errors
    ///
    /// [`CardValidationError::SchemaNotFound`] for an unregistered URI,
    /// otherwise as [`validate`](Self::validate).
    pub fn validate_by_id(&self, schema_id: &str, document: &Value) -> Result<CardMatch, CardValidationError> {
        let dialect = Dialect::from_schema_id(schema_id)
            .map_err(|_| CardValidationError::SchemaNotFound(schema_id.to_string()))?;
        self.validate(dialect, document)
    }

    /// Validate an owned document, handing it back with the match.
    pub fn validate_owned(
        &self,
        dialect: Dialect,
        document: Value,
    ) -> Result<ValidatedDocument, CardValidationError> {
        let matched = self.validate(dialect, &document)?;
        Ok(ValidatedDocument { document, matched })
    }

    /// Load a JSON or YAML card document from `path` and validate it.
    ///
    /// `.yaml` and `.yml` files are read as YAML; anything else as JSON.
    ///
    /// # Errors
    ///
    /// [`CardValidationError::DocumentLoadError`] if the file cannot be read
    /// or parsed, otherwise as [`validate`](Self::validate).
    pub fn validate_file(
        &self,
        path: impl AsRef<Path>,
        dialect: Dialect,
    ) -> Result<ValidatedDocument, CardValidationError> {
        let document = load_document(path.as_ref())?;
        self.validate_owned(dialect, document)
    }

    /// Contract URIs of every built dialect.
    pub fn schema_ids(&self) -> Vec<SchemaId> {
        self.dialects.values().map(|d| d.union.schema_id()).collect()
    }
}

impl fmt::Debug for CardSchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variants: BTreeMap<_, Vec<_>> = self
            .dialects
            .iter()
            .map(|(dialect, compiled)| (dialect.as_str(), compiled.variants.iter().map(|v| v.name).collect()))
            .collect();
        f.debug_struct("CardSchemaRegistry")
            .field("options", &self.options)
            .field("variants", &variants)
            .finish()
    }
}
