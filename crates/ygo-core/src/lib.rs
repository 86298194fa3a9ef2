//! # ygo-core — Foundational Types for the Card Schema Registry
//!
//! Leaf crate of the workspace. It defines the primitives every schema
//! dialect is assembled from and that downstream consumers match on:
//!
//! 1. **The closed locale set.** [`Locale`] enumerates the ten supported
//!    language/region codes. Locale maps in every dialect are keyed by
//!    exactly this set and nothing else.
//!
//! 2. **Closed value sets.** [`ClosedValueSet`] and the
//!    [`closed_value_set!`] macro declare string enumerations (attributes,
//!    races, spell properties, limit regulations). Each dialect declares its
//!    own sets; a set from one dialect is never reused by another even when
//!    the names coincide.
//!
//! 3. **Dialect identity.** [`Dialect`] names each independently versioned
//!    schema family and maps it to its stable [`SchemaId`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ygo-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod locale;
pub mod value_set;

pub use error::{SchemaBuildError, YgoError};
pub use identity::{Dialect, SchemaId, INDEX_CARD_TEXT_SCHEMA_ID};
pub use locale::{Locale, LOCALE_COUNT};
pub use value_set::ClosedValueSet;
