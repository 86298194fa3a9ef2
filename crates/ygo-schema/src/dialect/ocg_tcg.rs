//! # OCG/TCG Dialect
//!
//! Published OCG/TCG card records: the Yaml-Yugi field model extended with
//! artwork, fan-translation markers, and per-format limit regulations.
//!
//! Two revisions are kept side by side under distinct schema ids. The
//! legacy revision predates the Forbidden speed regulation and accepted any
//! string as a link arrow. It is expressed as an override layer on top of
//! the current revision so the divergence stays explicit.

use ygo_core::{closed_value_set, Dialect, SchemaBuildError};

use super::compose;
use crate::blocks::{
    images, localized_strings, monster_points, name_block, sets_block, translation_markers,
};
use crate::options::RegistryOptions;
use crate::rules::CrossFieldRule;
use crate::schema::{FieldGroup, RecordShape, Schema};
use crate::union::{DialectUnion, Variant};

/// Schema revision within the OCG/TCG family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// `/ocg-tcg/card.json`.
    Current,
    /// `/ocg-tcg/legacy/card.json`.
    Legacy,
}

impl Revision {
    fn dialect(self) -> Dialect {
        match self {
            Self::Current => Dialect::OcgTcg,
            Self::Legacy => Dialect::OcgTcgLegacy,
        }
    }
}

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

closed_value_set! {
    /// OCG and TCG Forbidden & Limited list status.
    ///
    /// `Unreleased` and `NotYetLegal` are distinct from `Unlimited`: a card
    /// that cannot be played yet is never reported as fully legal.
    pub enum LimitRegulation {
        Forbidden => "Forbidden",
        Limited => "Limited",
        SemiLimited => "Semi-Limited",
        Unlimited => "Unlimited",
        Unreleased => "Unreleased",
        NotYetLegal => "Not yet legal",
    }
}

closed_value_set! {
    /// Speed Duel list status.
    pub enum SpeedLimitRegulation {
        Forbidden => "Forbidden",
        Limited1 => "Limited 1",
        Limited2 => "Limited 2",
        Limited3 => "Limited 3",
        Unlimited => "Unlimited",
        Unreleased => "Unreleased",
        NotYetLegal => "Not yet legal",
    }
}

closed_value_set! {
    /// Speed Duel list status before Forbidden was introduced.
    pub enum LegacySpeedLimitRegulation {
        Limited1 => "Limited 1",
        Limited2 => "Limited 2",
        Limited3 => "Limited 3",
        Unlimited => "Unlimited",
        Unreleased => "Unreleased",
        NotYetLegal => "Not yet legal",
    }
}

fn limit_regulation(speed: Schema) -> Result<Schema, SchemaBuildError> {
    let status = Schema::nullable(Schema::value_set::<LimitRegulation>());
    Schema::object(
        "LimitRegulation",
        FieldGroup::new("LimitRegulation")
            .required("tcg", status.clone())
            .required("ocg", status)
            .required("speed", Schema::nullable(speed)),
    )
}

fn base() -> Result<FieldGroup, SchemaBuildError> {
    Ok(FieldGroup::new("base")
        .required("konami_id", Schema::nullable(Schema::non_negative_integer()))
        .required("password", Schema::nullable(Schema::non_negative_integer()))
        .optional("yugipedia_page_id", Schema::non_negative_integer())
        .required("name", name_block()?)
        .required("text", localized_strings()?)
        .optional("images", images()?)
        .required("sets", sets_block()?)
        .optional("is_translation_unofficial", translation_markers()?)
        .required(
            "limit_regulation",
            limit_regulation(Schema::value_set::<SpeedLimitRegulation>())?,
        ))
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

/// Legacy overrides applied after every other layer.
fn revise(shape: RecordShape, revision: Revision) -> Result<RecordShape, SchemaBuildError> {
    if revision == Revision::Current {
        return Ok(shape);
    }
    let mut legacy = FieldGroup::new("legacy").required(
        "limit_regulation",
        limit_regulation(Schema::value_set::<LegacySpeedLimitRegulation>())?,
    );
    if shape.declares("link_arrows") {
        legacy = legacy.required(
            "link_arrows",
            Schema::array_between(Schema::string(), 1, 8),
        );
    }
    shape.overriding(legacy)
}

/// The OCG/TCG dialect union for `revision`.
pub fn definition(
    revision: Revision,
    options: &RegistryOptions,
) -> Result<DialectUnion, SchemaBuildError> {
    let strict = options.strict_pairings;
    let pendulum = CrossFieldRule::BothOrNeither {
        first: "pendulum_scale",
        second: "pendulum_effect",
    };
    let build = |name: &'static str, layers: Vec<FieldGroup>| -> Result<Variant, SchemaBuildError> {
        let shape = revise(compose(name, layers)?, revision)?;
        Ok(Variant::new(name, shape))
    };

    let variants = vec![
        build(
            "MainDeckMonsterWithLevelCard",
            vec![
                base()?,
                base_monster()?,
                with_level(),
                FieldGroup::new("mainDeck").optional("ritual_spell", Schema::string()),
            ],
        )?
        .when_present("level")
        .when_absent("materials")
        .when_absent("rank")
        .with_rule_if(strict, pendulum.clone()),
        build(
            "ExtraDeckMonsterWithLevelCard",
            vec![
                base()?,
                base_monster()?,
                with_level(),
                FieldGroup::new("extraDeck").required("materials", Schema::string()),
            ],
        )?
        .when_present("materials")
        .when_absent("rank")
        .with_rule_if(strict, pendulum.clone()),
        build(
            "XyzMonsterCard",
            vec![
                base()?,
                base_monster()?,
                FieldGroup::new("xyz")
                    .required("rank", Schema::integer_between(0, 13))
                    .required("def", monster_points()),
            ],
        )?
        .when_present("rank")
        .with_rule_if(strict, pendulum.clone()),
        build(
            "LinkMonsterCard",
            vec![
                base()?,
                base_monster()?,
                FieldGroup::new("link").required(
                    "link_arrows",
                    Schema::array_between(Schema::value_set::<LinkArrow>(), 1, 8),
                ),
            ],
        )?
        .when_present("link_arrows")
        .with_rule(CrossFieldRule::UniqueItems {
            field: "link_arrows",
        })
        .with_rule_if(strict, pendulum),
        build(
            "SpellCard",
            vec![
                base()?,
                FieldGroup::new("spell")
                    .required("card_type", Schema::literal("Spell"))
                    .required("property", Schema::value_set::<SpellType>()),
            ],
        )?,
        build(
            "TrapCard",
            vec![
                base()?,
                FieldGroup::new("trap")
                    .required("card_type", Schema::literal("Trap"))
                    .required("property", Schema::value_set::<TrapType>()),
            ],
        )?,
    ];
    DialectUnion::new(revision.dialect(), variants)
}
