//! # Rush Duel Dialect
//!
//! Rush Duel cards split their text into requirement and effect blocks and
//! have no Extra Deck mechanics beyond Fusion. Monster variants overlap in
//! shape, so priority order matters: the Fusion effect variant is tried
//! before non-effect and main-deck effect monsters, and a document carrying
//! `materials`, `requirement`, and `effect` must never be claimed by a
//! later variant.

use ygo_core::{closed_value_set, Dialect, SchemaBuildError};

use super::compose;
use crate::blocks::{localized_strings, name_block, sets_block};
use crate::options::RegistryOptions;
use crate::rules::CrossFieldRule;
use crate::schema::{FieldGroup, Schema};
use crate::union::{DialectUnion, Variant};

closed_value_set! {
    /// Rush Duel monster attributes. There is no DIVINE attribute.
    pub enum Attribute {
        Light => "LIGHT",
        Dark => "DARK",
        Earth => "EARTH",
        Wind => "WIND",
        Water => "WATER",
        Fire => "FIRE",
    }
}

closed_value_set! {
    /// Rush Duel spell card properties.
    pub enum SpellType {
        Normal => "Normal",
        Field => "Field",
        Equip => "Equip",
    }
}

fn base() -> Result<FieldGroup, SchemaBuildError> {
    Ok(FieldGroup::new("base")
        .required("konami_id", Schema::nullable(Schema::non_negative_integer()))
        .required("yugipedia_page_id", Schema::non_negative_integer())
        .required("name", name_block()?)
        .optional("legend", Schema::literal(true))
        .required("sets", sets_block()?))
}

fn base_monster() -> FieldGroup {
    FieldGroup::new("monster")
        .required("card_type", Schema::literal("Monster"))
        .required("monster_type_line", Schema::string())
        .required("attribute", Schema::value_set::<Attribute>())
        .required("level", Schema::integer_between(0, 12))
        .required("atk", Schema::non_negative_integer())
        .required("def", Schema::non_negative_integer())
}

/// `effect_types` may also carry "Continuous" or "Multi-Choice", and
/// "Summoning condition" whenever `summoning_condition` is present.
fn effect_types() -> Schema {
    Schema::non_empty_array(Schema::non_empty_string())
}

/// The Rush Duel dialect union.
pub fn definition(options: &RegistryOptions) -> Result<DialectUnion, SchemaBuildError> {
    let fusion = compose(
        "FusionEffectMonsterCard",
        [
            base()?,
            base_monster(),
            FieldGroup::new("fusionEffect")
                .required("materials", localized_strings()?)
                .required("requirement", localized_strings()?)
                .optional("effect_types", effect_types())
                .required("effect", localized_strings()?),
        ],
    )?;
    let non_effect = compose(
        "NonEffectMonsterCard",
        [
            base()?,
            base_monster(),
            FieldGroup::new("nonEffect").required("text", localized_strings()?),
        ],
    )?;
    let main_deck_effect = compose(
        "MainDeckEffectMonsterCard",
        [
            base()?,
            base_monster(),
            FieldGroup::new("mainDeckEffect")
                .optional("maximum_atk", Schema::non_negative_integer())
                // Maximum Monsters and a few others such as Cyber Dragon
                .optional("summoning_condition", localized_strings()?)
                .required("requirement", localized_strings()?)
                .optional("effect_types", effect_types())
                .required("effect", localized_strings()?),
        ],
    )?;
    let spell = compose(
        "SpellCard",
        [
            base()?,
            FieldGroup::new("spell")
                .required("card_type", Schema::literal("Spell"))
                .required("property", Schema::value_set::<SpellType>())
                .required("requirement", localized_strings()?)
                .required("effect", localized_strings()?),
        ],
    )?;
    let trap = compose(
        "TrapCard",
        [
            base()?,
            FieldGroup::new("trap")
                .required("card_type", Schema::literal("Trap"))
                .required("property", Schema::literal("Normal"))
                .required("requirement", localized_strings()?)
                .required("effect", localized_strings()?),
        ],
    )?;

    let variants = vec![
        Variant::new("FusionEffectMonsterCard", fusion).when_present("materials"),
        Variant::new("NonEffectMonsterCard", non_effect).when_present("text"),
        Variant::new("MainDeckEffectMonsterCard", main_deck_effect)
            .when_present("effect")
            .when_absent("materials")
            .with_rule_if(
                options.strict_pairings,
                CrossFieldRule::Requires {
                    field: "maximum_atk",
                    companion: "summoning_condition",
                },
            ),
        Variant::new("SpellCard", spell),
        Variant::new("TrapCard", trap),
    ];
    DialectUnion::new(Dialect::Rush, variants)
}
