//! # Schema Combinators and Record Shapes
//!
//! Card schemas are assembled from a small set of structural combinators
//! ([`Schema`]) and closed record shapes ([`RecordShape`]) built by merging
//! named [`FieldGroup`]s. Everything renders to JSON Schema (Draft 2020-12)
//! for the validation engine and for publication.
//!
//! ## Composition Precedence
//!
//! Field groups are merged in layers: base record, then category overlay,
//! then subtype overlay. [`RecordShape::with`] rejects a field that an
//! earlier layer already declared. A later layer may only replace an
//! earlier field through [`RecordShape::overriding`], which in turn rejects
//! fields that no earlier layer declared. There is no implicit
//! last-write-wins merge.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use ygo_core::{ClosedValueSet, SchemaBuildError, SchemaId};

/// A structural schema combinator.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A string, optionally with a minimum length.
    String {
        /// Minimum length in characters.
        min_length: Option<u64>,
    },
    /// An integer, optionally bounded (inclusive).
    Integer {
        /// Inclusive lower bound.
        minimum: Option<i64>,
        /// Inclusive upper bound.
        maximum: Option<i64>,
    },
    /// `true` or `false`.
    Boolean,
    /// Exactly `null`.
    Null,
    /// Exactly one JSON value.
    Literal(Value),
    /// One of a closed set of strings.
    Enum {
        /// Name of the value set.
        name: &'static str,
        /// Permitted members.
        values: Vec<&'static str>,
    },
    /// A homogeneous array, optionally bounded in length.
    Array {
        /// Element schema.
        items: Box<Schema>,
        /// Minimum number of elements.
        min_items: Option<u64>,
        /// Maximum number of elements.
        max_items: Option<u64>,
    },
    /// A closed record.
    Object(RecordShape),
    /// Any of the listed alternatives.
    AnyOf(Vec<Schema>),
    /// A reference to a separately registered schema.
    Ref(SchemaId),
}

impl Schema {
    /// Any string.
    pub fn string() -> Self {
        Self::String { min_length: None }
    }

    /// A string of at least one character.
    pub fn non_empty_string() -> Self {
        Self::String { min_length: Some(1) }
    }

    /// Any integer.
    pub fn integer() -> Self {
        Self::Integer {
            minimum: None,
            maximum: None,
        }
    }

    /// An integer `>= 0`.
    pub fn non_negative_integer() -> Self {
        Self::Integer {
            minimum: Some(0),
            maximum: None,
        }
    }

    /// An integer `>= minimum`.
    pub fn integer_at_least(minimum: i64) -> Self {
        Self::Integer {
            minimum: Some(minimum),
            maximum: None,
        }
    }

    /// An integer in `[minimum, maximum]`.
    pub fn integer_between(minimum: i64, maximum: i64) -> Self {
        Self::Integer {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    /// `true` or `false`.
    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// Exactly `null`.
    pub fn null() -> Self {
        Self::Null
    }

    /// Exactly `value`.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// One member of the closed value set `T`.
    pub fn value_set<T: ClosedValueSet>() -> Self {
        Self::Enum {
            name: T::NAME,
            values: T::values(),
        }
    }

    /// An unbounded array of `items`.
    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: None,
            max_items: None,
        }
    }

    /// An array of `items` holding between `min` and `max` elements.
    pub fn array_between(items: Schema, min: u64, max: u64) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: Some(min),
            max_items: Some(max),
        }
    }

    /// A non-empty array of `items`.
    pub fn non_empty_array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: Some(1),
            max_items: None,
        }
    }

    /// `schema` or an explicit `null`.
    pub fn nullable(schema: Schema) -> Self {
        Self::AnyOf(vec![schema, Self::Null])
    }

    /// A reference to the schema registered under `id`.
    pub fn reference(id: SchemaId) -> Self {
        Self::Ref(id)
    }

    /// The closed record built from a single group.
    pub fn object(name: impl Into<String>, group: FieldGroup) -> Result<Self, SchemaBuildError> {
        Ok(Self::Object(RecordShape::new(name).with(group)?))
    }

    /// The single value this schema admits, if it admits exactly one.
    ///
    /// Discriminant fields are the required fields for which this returns
    /// `Some`.
    pub fn literal_value(&self) -> Option<Value> {
        match self {
            Self::Literal(value) => Some(value.clone()),
            Self::Null => Some(Value::Null),
            _ => None,
        }
    }

    /// Render as JSON Schema.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String { min_length } => {
                let mut out = json!({ "type": "string" });
                if let Some(n) = min_length {
                    out["minLength"] = json!(n);
                }
                out
            }
            Self::Integer { minimum, maximum } => {
                let mut out = json!({ "type": "integer" });
                if let Some(n) = minimum {
                    out["minimum"] = json!(n);
                }
                if let Some(n) = maximum {
                    out["maximum"] = json!(n);
                }
                out
            }
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Null => json!({ "type": "null" }),
            Self::Literal(value) => json!({ "const": value }),
            Self::Enum { name, values } => json!({
                "title": name,
                "type": "string",
                "enum": values,
            }),
            Self::Array {
                items,
                min_items,
                max_items,
            } => {
                let mut out = json!({ "type": "array", "items": items.to_json() });
                if let Some(n) = min_items {
                    out["minItems"] = json!(n);
                }
                if let Some(n) = max_items {
                    out["maxItems"] = json!(n);
                }
                out
            }
            Self::Object(shape) => shape.to_json(),
            Self::AnyOf(alternatives) => json!({
                "anyOf": alternatives.iter().map(Schema::to_json).collect::<Vec<_>>(),
            }),
            Self::Ref(id) => json!({ "$ref": id.as_str() }),
        }
    }
}

/// A field declaration: its schema and whether the key must be present.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Schema of the value.
    pub schema: Schema,
    /// Whether the key must be present. A nullable required field must be
    /// present but may be `null`; an optional field may be absent.
    pub required: bool,
}

/// A named, ordered list of field declarations merged as one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGroup {
    name: &'static str,
    fields: Vec<(&'static str, Field)>,
}

impl FieldGroup {
    /// An empty group.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Declare a key that must be present.
    pub fn required(mut self, key: &'static str, schema: Schema) -> Self {
        self.fields.push((
            key,
            Field {
                schema,
                required: true,
            },
        ));
        self
    }

    /// Declare a key that may be absent.
    pub fn optional(mut self, key: &'static str, schema: Schema) -> Self {
        self.fields.push((
            key,
            Field {
                schema,
                required: false,
            },
        ));
        self
    }

    /// Declare `key` for every item in `keys` with the same schema.
    pub fn each<I>(mut self, keys: I, schema: &Schema, required: bool) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        for key in keys {
            self.fields.push((
                key,
                Field {
                    schema: schema.clone(),
                    required,
                },
            ));
        }
        self
    }

    /// Group name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[(&'static str, Field)] {
        &self.fields
    }
}

/// A closed record schema assembled from field groups.
///
/// Keys not declared by the shape are rejected during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    name: String,
    fields: BTreeMap<&'static str, Field>,
    layers: Vec<&'static str>,
}

impl RecordShape {
    /// An empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
            layers: Vec::new(),
        }
    }

    /// Merge a group whose fields must all be new.
    ///
    /// # Errors
    ///
    /// [`SchemaBuildError::FieldCollision`] if any field is already declared,
    /// including twice within `group`.
    pub fn with(mut self, group: FieldGroup) -> Result<Self, SchemaBuildError> {
        for (key, field) in group.fields {
            if self.fields.contains_key(key) {
                return Err(SchemaBuildError::FieldCollision {
                    shape: self.name,
                    field: key.to_string(),
                });
            }
            self.fields.insert(key, field);
        }
        self.layers.push(group.name);
        Ok(self)
    }

    /// Replace already-declared fields with the declarations in `group`.
    ///
    /// # Errors
    ///
    /// [`SchemaBuildError::OverrideOfMissingField`] if `group` names a field
    /// the record does not declare.
    pub fn overriding(mut self, group: FieldGroup) -> Result<Self, SchemaBuildError> {
        for (key, field) in group.fields {
            match self.fields.get_mut(key) {
                Some(existing) => *existing = field,
                None => {
                    return Err(SchemaBuildError::OverrideOfMissingField {
                        shape: self.name,
                        field: key.to_string(),
                    })
                }
            }
        }
        self.layers.push(group.name);
        Ok(self)
    }

    /// Shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field declaration.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Whether `key` is declared.
    pub fn declares(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Whether `key` is declared and required.
    pub fn requires(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|f| f.required)
    }

    /// Declared keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Names of the merged groups, in merge order.
    pub fn layers(&self) -> &[&'static str] {
        &self.layers
    }

    /// Required fields whose schema admits exactly one value.
    pub fn literal_fields(&self) -> Vec<(&'static str, Value)> {
        self.fields
            .iter()
            .filter(|(_, field)| field.required)
            .filter_map(|(key, field)| field.schema.literal_value().map(|v| (*key, v)))
            .collect()
    }

    /// Render as a closed JSON Schema object.
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (key, field) in &self.fields {
            properties.insert((*key).to_string(), field.schema.to_json());
            if field.required {
                required.push(*key);
            }
        }
        json!({
            "title": self.name,
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}
