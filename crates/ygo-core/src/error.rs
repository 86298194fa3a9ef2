//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! - [`YgoError`] covers lookups that can fail on caller input (locale
//!   codes, dialect names, schema ids).
//! - [`SchemaBuildError`] covers defects in a schema definition itself. These
//!   surface once, when a registry is built, and indicate a programming
//!   error rather than bad input data.

use thiserror::Error;

/// Top-level error type for the card schema registry.
#[derive(Error, Debug)]
pub enum YgoError {
    /// A string is not a member of a closed value set.
    #[error("{value:?} is not a valid {set}")]
    UnknownValue {
        /// Name of the value set (e.g. `Locale`, `Attribute`).
        set: &'static str,
        /// The rejected input.
        value: String,
    },

    /// No dialect is registered under this name.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// No dialect schema is registered under this identifier.
    #[error("unknown schema id: {0}")]
    UnknownSchemaId(String),

    /// A schema definition could not be assembled.
    #[error("schema build error: {0}")]
    SchemaBuild(#[from] SchemaBuildError),
}

/// Defect detected while composing or compiling a schema definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaBuildError {
    /// Two field groups merged into the same record declare the same field
    /// without an explicit override.
    #[error("field '{field}' declared twice in shape '{shape}'")]
    FieldCollision {
        /// Name of the record shape being assembled.
        shape: String,
        /// The colliding field name.
        field: String,
    },

    /// An override layer targets a field the record does not declare.
    #[error("shape '{shape}' overrides undeclared field '{field}'")]
    OverrideOfMissingField {
        /// Name of the record shape being assembled.
        shape: String,
        /// The field the override targeted.
        field: String,
    },

    /// Two variants of one dialect union share a name.
    #[error("dialect '{dialect}' declares variant '{variant}' twice")]
    DuplicateVariant {
        /// Dialect identifier.
        dialect: String,
        /// The duplicated variant name.
        variant: String,
    },

    /// A dialect union was assembled without any variants.
    #[error("dialect '{dialect}' has no variants")]
    EmptyUnion {
        /// Dialect identifier.
        dialect: String,
    },

    /// A variant's discriminant names a field its shape cannot satisfy:
    /// a required key the shape does not require, or a forbidden key the
    /// shape declares.
    #[error("variant '{variant}' discriminates on '{field}' inconsistently with its shape")]
    InconsistentDiscriminant {
        /// Variant name.
        variant: String,
        /// The offending field.
        field: String,
    },

    /// The rendered JSON Schema for a variant was rejected by the
    /// validation engine.
    #[error("variant '{variant}' failed to compile: {reason}")]
    Compile {
        /// Variant name.
        variant: String,
        /// Reason reported by the engine.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_message_names_shape_and_field() {
        let err = SchemaBuildError::FieldCollision {
            shape: "XyzMonsterCard".to_string(),
            field: "def".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field 'def' declared twice in shape 'XyzMonsterCard'"
        );
    }

    #[test]
    fn build_error_converts_into_top_level() {
        let err: YgoError = SchemaBuildError::EmptyUnion {
            dialect: "rush".to_string(),
        }
        .into();
        assert!(matches!(err, YgoError::SchemaBuild(_)));
        assert!(err.to_string().contains("rush"));
    }
}
