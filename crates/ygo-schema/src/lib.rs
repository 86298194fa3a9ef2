//! # ygo-schema — Card Schema Registry
//!
//! Declarative, closed JSON Schemas for the card record dialects served by
//! the card API, and validation of documents against them.
//!
//! ## Dialects
//!
//! Five independently versioned schema families are defined in
//! [`dialect`]: the index API format, Yaml-Yugi sources, the current and
//! legacy OCG/TCG exports, and Rush Duel. Each is an ordered union of
//! closed variant records ([`DialectUnion`]) assembled from shared field
//! groups ([`blocks`]) and per-dialect overlays.
//!
//! ## Validation
//!
//! [`CardSchemaRegistry`] compiles every variant once with the
//! `jsonschema` engine (Draft 2020-12). [`CardSchemaRegistry::validate`]
//! returns the single variant a document satisfies, or a
//! [`CardValidationError`] listing every attempted variant with its
//! violations.
//!
//! ```no_run
//! use serde_json::json;
//! use ygo_core::Dialect;
//! use ygo_schema::CardSchemaRegistry;
//!
//! let registry = CardSchemaRegistry::shared()?;
//! match registry.validate(Dialect::Rush, &json!({ "card_type": "Trap" })) {
//!     Ok(matched) => println!("{}", matched.variant),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok::<(), ygo_core::SchemaBuildError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `ygo-core` internally.
//! - Every record schema is closed (`additionalProperties: false`);
//!   [`audit_closed_objects`] checks this for any rendered schema.
//! - Schema ids are stable. Changing one breaks every consumer that
//!   dispatches on it.

pub mod audit;
pub mod blocks;
pub mod dialect;
pub mod document;
pub mod options;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod union;
pub mod validate;

pub use audit::{audit_closed_objects, OpenObjectFinding};
pub use document::{load_document, DocumentFormat};
pub use options::RegistryOptions;
pub use registry::CardSchemaRegistry;
pub use rules::CrossFieldRule;
pub use schema::{Field, FieldGroup, RecordShape, Schema};
pub use union::{DialectUnion, Discriminant, Variant};
pub use validate::{
    AttemptOutcome, CardMatch, CardValidationError, ValidatedDocument, VariantAttempt, Violation,
    ViolationKind,
};
