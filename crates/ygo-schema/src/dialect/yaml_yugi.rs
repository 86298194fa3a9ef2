//! # Yaml-Yugi Dialect
//!
//! Source documents of the Yaml-Yugi card database. Every locale is carried
//! in one record through locale maps. There is no explicit monster subtype:
//! the variant follows from which of `level`, `materials`, `rank`, and
//! `link_arrows` are present.

use ygo_core::{closed_value_set, Dialect, SchemaBuildError};

use super::compose;
use crate::blocks::{localized_strings, monster_points, name_block, sets_block};
use crate::options::RegistryOptions;
use crate::rules::CrossFieldRule;
use crate::schema::{FieldGroup, Schema};
use crate::union::{DialectUnion, Variant};

closed_value_set! {
    /// Monster attributes.
    pub enum Attribute {
        Light => "LIGHT",
        Dark => "DARK",
        Earth => "EARTH",
        Wind => "WIND",
        Water => "WATER",
        Fire => "FIRE",
        Divine => "DIVINE",
    }
}

closed_value_set! {
    /// Link arrows as Unicode glyphs.
    pub enum LinkArrow {
        BottomLeft => "↙",
        Bottom => "⬇",
        BottomRight => "↘",
        Left => "⬅",
        Right => "➡",
        TopLeft => "↖",
        Top => "⬆",
        TopRight => "↗",
    }
}

closed_value_set! {
    /// Spell card properties.
    pub enum SpellType {
        Normal => "Normal",
        Continuous => "Continuous",
        Field => "Field",
        Equip => "Equip",
        QuickPlay => "Quick-Play",
        Ritual => "Ritual",
    }
}

closed_value_set! {
    /// Trap card properties.
    pub enum TrapType {
        Normal => "Normal",
        Continuous => "Continuous",
        Counter => "Counter",
    }
}

fn base() -> Result<FieldGroup, SchemaBuildError> {
    Ok(FieldGroup::new("base")
        .required("konami_id", Schema::nullable(Schema::non_negative_integer()))
        .required("password", Schema::nullable(Schema::non_negative_integer()))
        .required("name", name_block()?)
        .required("text", localized_strings()?)
        .required("sets", sets_block()?))
}

fn base_monster() -> Result<FieldGroup, SchemaBuildError> {
    Ok(FieldGroup::new("monster")
        .required("card_type", Schema::literal("Monster"))
        .required("monster_type_line", Schema::string())
        .required("attribute", Schema::value_set::<Attribute>())
        .required("atk", monster_points())
        .optional("pendulum_scale", Schema::integer_between(0, 13))
        .optional("pendulum_effect", localized_strings()?))
}

fn with_level() -> FieldGroup {
    FieldGroup::new("withLevel")
        .required("level", Schema::integer_between(0, 12))
        .required("def", monster_points())
}

fn pendulum_pairing(options: &RegistryOptions) -> (bool, CrossFieldRule) {
    (
        options.strict_pairings,
        CrossFieldRule::BothOrNeither {
            first: "pendulum_scale",
            second: "pendulum_effect",
        },
    )
}

/// The Yaml-Yugi dialect union.
pub fn definition(options: &RegistryOptions) -> Result<DialectUnion, SchemaBuildError> {
    let (strict, pendulum) = pendulum_pairing(options);

    // Normal, orange Effect, and Ritual monsters
    let main_deck = compose(
        "MainDeckMonsterWithLevelCard",
        [
            base()?,
            base_monster()?,
            with_level(),
            FieldGroup::new("mainDeck").optional("ritual_spell", Schema::string()),
        ],
    )?;
    // Fusion and Synchro monsters
    let extra_deck = compose(
        "ExtraDeckMonsterWithLevelCard",
        [
            base()?,
            base_monster()?,
            with_level(),
            FieldGroup::new("extraDeck").required("materials", Schema::string()),
        ],
    )?;
    let xyz = compose(
        "XyzMonsterCard",
        [
            base()?,
            base_monster()?,
            FieldGroup::new("xyz")
                .required("rank", Schema::integer_between(0, 13))
                .required("def", monster_points()),
        ],
    )?;
    let link = compose(
        "LinkMonsterCard",
        [
            base()?,
            base_monster()?,
            FieldGroup::new("link").required(
                "link_arrows",
                Schema::array_between(Schema::value_set::<LinkArrow>(), 1, 8),
            ),
        ],
    )?;
    let spell = compose(
        "SpellCard",
        [
            base()?,
            FieldGroup::new("spell")
                .required("card_type", Schema::literal("Spell"))
                .required("property", Schema::value_set::<SpellType>()),
        ],
    )?;
    let trap = compose(
        "TrapCard",
        [
            base()?,
            FieldGroup::new("trap")
                .required("card_type", Schema::literal("Trap"))
                .required("property", Schema::value_set::<TrapType>()),
        ],
    )?;

    let variants = vec![
        Variant::new("MainDeckMonsterWithLevelCard", main_deck)
            .when_present("level")
            .when_absent("materials")
            .when_absent("rank")
            .with_rule_if(strict, pendulum.clone()),
        Variant::new("ExtraDeckMonsterWithLevelCard", extra_deck)
            .when_present("materials")
            .when_absent("rank")
            .with_rule_if(strict, pendulum.clone()),
        Variant::new("XyzMonsterCard", xyz)
            .when_present("rank")
            .with_rule_if(strict, pendulum.clone()),
        Variant::new("LinkMonsterCard", link)
            .when_present("link_arrows")
            .with_rule(CrossFieldRule::UniqueItems {
                field: "link_arrows",
            })
            .with_rule_if(strict, pendulum),
        Variant::new("SpellCard", spell),
        Variant::new("TrapCard", trap),
    ];
    DialectUnion::new(Dialect::YamlYugi, variants)
}
