//! # Dialect Identity
//!
//! Each card data source publishes its own schema family. A [`Dialect`] is
//! one such family; its [`SchemaId`] is the stable contract URI that external
//! resolvers use to tell which shape a document claims to have.
//!
//! Schema ids must never be changed once published. Adding a new upstream
//! revision means adding a new dialect with its own id, as was done for the
//! OCG/TCG legacy schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YgoError;

/// A stable, versioned schema contract identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SchemaId(&'static str);

impl SchemaId {
    /// Wrap a static identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The identifier string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Index dialect union schema.
pub const INDEX_CARD_SCHEMA_ID: SchemaId = SchemaId::new("https://api.alphakretin.com/card.json");
/// Shared localized text block referenced by the index dialect.
pub const INDEX_CARD_TEXT_SCHEMA_ID: SchemaId =
    SchemaId::new("https://api.alphakretin.com/card-text.json");
/// Yaml-Yugi dialect union schema.
pub const YAML_YUGI_CARD_SCHEMA_ID: SchemaId =
    SchemaId::new("https://api.alphakretin.com/yaml-yugi/card.json");
/// Current OCG/TCG dialect union schema.
pub const OCG_TCG_CARD_SCHEMA_ID: SchemaId = SchemaId::new("/ocg-tcg/card.json");
/// Legacy OCG/TCG dialect union schema.
pub const OCG_TCG_LEGACY_CARD_SCHEMA_ID: SchemaId = SchemaId::new("/ocg-tcg/legacy/card.json");
/// Rush Duel dialect union schema.
pub const RUSH_CARD_SCHEMA_ID: SchemaId = SchemaId::new("/rush/card.json");

/// An independently versioned card schema family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// The primary index API format (YGOPRODECK-derived).
    Index,
    /// Yaml-Yugi source documents.
    YamlYugi,
    /// OCG/TCG cards, current revision.
    OcgTcg,
    /// OCG/TCG cards, legacy revision.
    OcgTcgLegacy,
    /// Rush Duel cards.
    Rush,
}

impl Dialect {
    /// Every dialect, in registry order.
    pub fn all() -> &'static [Dialect] {
        &[
            Self::Index,
            Self::YamlYugi,
            Self::OcgTcg,
            Self::OcgTcgLegacy,
            Self::Rush,
        ]
    }

    /// Kebab-case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::YamlYugi => "yaml-yugi",
            Self::OcgTcg => "ocg-tcg",
            Self::OcgTcgLegacy => "ocg-tcg-legacy",
            Self::Rush => "rush",
        }
    }

    /// The contract URI of this dialect's union schema.
    pub fn schema_id(&self) -> SchemaId {
        match self {
            Self::Index => INDEX_CARD_SCHEMA_ID,
            Self::YamlYugi => YAML_YUGI_CARD_SCHEMA_ID,
            Self::OcgTcg => OCG_TCG_CARD_SCHEMA_ID,
            Self::OcgTcgLegacy => OCG_TCG_LEGACY_CARD_SCHEMA_ID,
            Self::Rush => RUSH_CARD_SCHEMA_ID,
        }
    }

    /// Resolve a contract URI back to its dialect.
    pub fn from_schema_id(id: &str) -> Result<Self, YgoError> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.schema_id().as_str() == id)
            .ok_or_else(|| YgoError::UnknownSchemaId(id.to_string()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = YgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| YgoError::UnknownDialect(s.to_string()))
    }
}
