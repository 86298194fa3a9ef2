//! # Registry Options
//!
//! Build-time switches for [`CardSchemaRegistry`](crate::CardSchemaRegistry).
//! Options can be constructed in code or read from YAML/JSON configuration.

use serde::Deserialize;

/// Options fixed when a registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryOptions {
    /// Enforce field pairings that upstream data does not yet guarantee:
    /// `pendulum_scale` with `pendulum_effect`, and Rush `maximum_atk` with
    /// `summoning_condition`.
    pub strict_pairings: bool,
    /// Keep at most this many violations per rejected variant.
    pub max_violations_per_variant: Option<usize>,
    /// Include variants whose discriminant did not hold in failure reports.
    pub report_skipped_variants: bool,
}

impl RegistryOptions {
    /// Parse options from YAML (JSON is accepted as a YAML subset).
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
