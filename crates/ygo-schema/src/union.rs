//! # Ordered Discriminated Unions
//!
//! A dialect's public contract is a union of closed variant records. The
//! variants are not mutually exclusive by structure alone, so a union is an
//! explicit ordered list of (discriminant, schema) pairs. Matching walks the
//! list in priority order and the first variant that fully accepts the
//! document wins.
//!
//! A [`Discriminant`] is a cheap structural predicate evaluated before the
//! schema. It holds when the document carries the variant's distinguishing
//! literals (`card_type`, `subtype`, ...) with those exact values, carries
//! every key the variant declares as discriminating, and carries none of the
//! keys it forbids. A literal only distinguishes a variant when some other
//! variant of the same union fixes that key to a different value; a literal
//! no sibling contests (Rush `property: "Normal"` on traps) stays in the
//! schema, so a wrong value is reported against the variant instead of
//! silently skipping it. A discriminant never admits less than the schema
//! does, so it changes diagnostics, not outcomes.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde_json::{json, Value};
use ygo_core::{Dialect, SchemaBuildError, SchemaId};

use crate::rules::CrossFieldRule;
use crate::schema::{RecordShape, Schema};

/// Structural predicate selecting which documents a variant is tried on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Discriminant {
    literals: Vec<(&'static str, Value)>,
    present: Vec<&'static str>,
    absent: Vec<&'static str>,
}

impl Discriminant {
    /// Whether `document` may belong to the variant.
    pub fn holds(&self, document: &Value) -> bool {
        let Some(object) = document.as_object() else {
            return false;
        };
        self.literals
            .iter()
            .all(|(key, value)| object.get(*key) == Some(value))
            && self.present.iter().all(|key| object.contains_key(*key))
            && self.absent.iter().all(|key| !object.contains_key(*key))
    }

    /// Every key this predicate inspects.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.literals
            .iter()
            .map(|(key, _)| *key)
            .chain(self.present.iter().copied())
            .chain(self.absent.iter().copied())
    }
}

/// One concrete record shape of a dialect union.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    name: &'static str,
    shape: RecordShape,
    discriminant: Discriminant,
    rules: Vec<CrossFieldRule>,
}

impl Variant {
    /// A variant discriminated by the literal-valued fields of `shape`.
    pub fn new(name: &'static str, shape: RecordShape) -> Self {
        let discriminant = Discriminant {
            literals: shape.literal_fields(),
            ..Discriminant::default()
        };
        Self {
            name,
            shape,
            discriminant,
            rules: Vec::new(),
        }
    }

    /// Only try this variant on documents carrying `key`.
    pub fn when_present(mut self, key: &'static str) -> Self {
        self.discriminant.present.push(key);
        self
    }

    /// Only try this variant on documents lacking `key`.
    pub fn when_absent(mut self, key: &'static str) -> Self {
        self.discriminant.absent.push(key);
        self
    }

    /// Add a post-validation rule.
    pub fn with_rule(mut self, rule: CrossFieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add a post-validation rule when `enabled`.
    pub fn with_rule_if(self, enabled: bool, rule: CrossFieldRule) -> Self {
        if enabled {
            self.with_rule(rule)
        } else {
            self
        }
    }

    /// Variant name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The closed record shape.
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// The structural predicate.
    pub fn discriminant(&self) -> &Discriminant {
        &self.discriminant
    }

    /// Post-validation rules.
    pub fn rules(&self) -> &[CrossFieldRule] {
        &self.rules
    }

    /// The variant's JSON Schema.
    pub fn to_json(&self) -> Value {
        let mut out = self.shape.to_json();
        out["title"] = json!(self.name);
        out
    }

    fn check_consistency(&self) -> Result<(), SchemaBuildError> {
        let inconsistent = |field: &str| SchemaBuildError::InconsistentDiscriminant {
            variant: self.name.to_string(),
            field: field.to_string(),
        };
        if let Some(key) = self.discriminant.present.iter().find(|k| !self.shape.requires(k)) {
            return Err(inconsistent(*key));
        }
        if let Some(key) = self.discriminant.absent.iter().find(|k| self.shape.declares(k)) {
            return Err(inconsistent(*key));
        }
        Ok(())
    }
}

/// Drop discriminant literals that no sibling variant fixes to another value.
fn keep_contested_literals(variants: &mut [Variant]) {
    let fixed: Vec<Vec<(&'static str, Value)>> =
        variants.iter().map(|v| v.shape.literal_fields()).collect();
    for (i, variant) in variants.iter_mut().enumerate() {
        variant.discriminant.literals.retain(|(key, value)| {
            fixed
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .flat_map(|(_, literals)| literals.iter())
                .any(|(k, v)| k == key && v != value)
        });
    }
}

/// A dialect's ordered union of variants.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectUnion {
    dialect: Dialect,
    variants: Vec<Variant>,
    shared: Vec<(SchemaId, Schema)>,
}

impl DialectUnion {
    /// Assemble a union from variants in priority order.
    ///
    /// # Errors
    ///
    /// - [`SchemaBuildError::EmptyUnion`] when `variants` is empty.
    /// - [`SchemaBuildError::DuplicateVariant`] when two variants share a name.
    /// - [`SchemaBuildError::InconsistentDiscriminant`] when a variant's
    ///   discriminant contradicts its shape.
    pub fn new(dialect: Dialect, mut variants: Vec<Variant>) -> Result<Self, SchemaBuildError> {
        if variants.is_empty() {
            return Err(SchemaBuildError::EmptyUnion {
                dialect: dialect.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for variant in &variants {
            if !seen.insert(variant.name) {
                return Err(SchemaBuildError::DuplicateVariant {
                    dialect: dialect.to_string(),
                    variant: variant.name.to_string(),
                });
            }
            variant.check_consistency()?;
        }
        keep_contested_literals(&mut variants);
        Ok(Self {
            dialect,
            variants,
            shared: Vec::new(),
        })
    }

    /// Register a sub-schema the variants reference by `$ref`.
    pub fn with_shared(mut self, id: SchemaId, schema: Schema) -> Self {
        self.shared.push((id, schema));
        self
    }

    /// The dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The contract URI.
    pub fn schema_id(&self) -> SchemaId {
        self.dialect.schema_id()
    }

    /// Variants in priority order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Look up a variant by name.
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Sub-schemas referenced by `$ref`, rendered with their `$id`.
    pub fn shared_schemas(&self) -> Vec<(SchemaId, Value)> {
        self.shared
            .iter()
            .map(|(id, schema)| {
                let mut json = schema.to_json();
                json["$id"] = json!(id.as_str());
                (*id, json)
            })
            .collect()
    }

    /// Every key inspected by any variant's discriminant.
    pub fn discriminant_keys(&self) -> BTreeSet<&'static str> {
        self.variants
            .iter()
            .flat_map(|v| v.discriminant.keys())
            .collect()
    }

    /// The discriminant keys present in `document`, with their values.
    pub fn observed(&self, document: &Value) -> BTreeMap<String, Value> {
        let Some(object) = document.as_object() else {
            return BTreeMap::new();
        };
        self.discriminant_keys()
            .into_iter()
            .filter_map(|key| object.get(key).map(|v| (key.to_string(), v.clone())))
            .collect()
    }

    /// The published union schema. `anyOf` preserves priority order.
    pub fn to_json_schema(&self) -> Value {
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": self.schema_id().as_str(),
            "title": self.dialect.as_str(),
            "anyOf": self.variants.iter().map(Variant::to_json).collect::<Vec<_>>(),
        })
    }
}
