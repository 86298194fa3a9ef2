//! # Dialect Definitions
//!
//! One module per card schema family. Each builds its closed value sets,
//! its base record, its category and subtype overlays, and finally its
//! ordered [`DialectUnion`].
//!
//! Dialects share only the primitives in [`crate::blocks`]. Enumerations
//! are declared per dialect even when members coincide, since upstream
//! sources evolve independently.

pub mod index;
pub mod ocg_tcg;
pub mod rush;
pub mod yaml_yugi;

use ygo_core::{Dialect, SchemaBuildError};

use crate::options::RegistryOptions;
use crate::schema::{FieldGroup, RecordShape};
use crate::union::DialectUnion;

/// Build the union for `dialect`.
pub fn definition(
    dialect: Dialect,
    options: &RegistryOptions,
) -> Result<DialectUnion, SchemaBuildError> {
    match dialect {
        Dialect::Index => index::definition(),
        Dialect::YamlYugi => yaml_yugi::definition(options),
        Dialect::OcgTcg => ocg_tcg::definition(ocg_tcg::Revision::Current, options),
        Dialect::OcgTcgLegacy => ocg_tcg::definition(ocg_tcg::Revision::Legacy, options),
        Dialect::Rush => rush::definition(options),
    }
}

/// Merge `layers` in order into a closed record named `name`.
pub(crate) fn compose<I>(name: &'static str, layers: I) -> Result<RecordShape, SchemaBuildError>
where
    I: IntoIterator<Item = FieldGroup>,
{
    layers
        .into_iter()
        .try_fold(RecordShape::new(name), RecordShape::with)
}
