//! # Index Dialect
//!
//! The primary API format, derived from YGOPRODECK data. Localized text is
//! carried per language as a shared [`card_text`] block referenced by
//! `$ref`. Monster subtype is an explicit discriminant, with `subtype: null`
//! for plain (orange) effect monsters.
//!
//! Known upstream quirks accepted as-is: Fusion monsters always report
//! `tuner: false`, and set entries may lack their tag or name because the
//! raw delimited source has mismatches.

use ygo_core::{closed_value_set, Dialect, SchemaBuildError, INDEX_CARD_TEXT_SCHEMA_ID};

use super::compose;
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
    /// Monster types ("races" upstream).
    pub enum Race {
        Aqua => "Aqua",
        Beast => "Beast",
        BeastWarrior => "Beast-Warrior",
        CreatorGod => "Creator-God",
        Cyberse => "Cyberse",
        Dinosaur => "Dinosaur",
        DivineBeast => "Divine-Beast",
        Dragon => "Dragon",
        Fairy => "Fairy",
        Fiend => "Fiend",
        Fish => "Fish",
        Insect => "Insect",
        Machine => "Machine",
        Plant => "Plant",
        Psychic => "Psychic",
        Pyro => "Pyro",
        Reptile => "Reptile",
        Rock => "Rock",
        SeaSerpent => "Sea Serpent",
        Spellcaster => "Spellcaster",
        Thunder => "Thunder",
        Warrior => "Warrior",
        WingedBeast => "Winged Beast",
        Wyrm => "Wyrm",
        Zombie => "Zombie",
    }
}

closed_value_set! {
    /// Link arrows as the Unicode glyphs used by the emoji set.
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

/// Localized name and text, registered under
/// [`INDEX_CARD_TEXT_SCHEMA_ID`].
pub fn card_text() -> Result<Schema, SchemaBuildError> {
    Schema::object(
        "CardText",
        FieldGroup::new("CardText")
            .required("name", Schema::string())
            .required("description", Schema::string())
            .optional("pendulum", Schema::string()),
    )
}

fn base() -> Result<FieldGroup, SchemaBuildError> {
    let text = Schema::reference(INDEX_CARD_TEXT_SCHEMA_ID);
    let set_entry = Schema::object(
        "IndexCardSet",
        FieldGroup::new("IndexCardSet")
            .optional("tag", Schema::string())
            .optional("name", Schema::string()),
    )?;
    let nullable_string = Schema::nullable(Schema::string());
    Ok(FieldGroup::new("base")
        .required("password", Schema::integer())
        // TODO: constrain to a minimum once upstream stops emitting negative kids
        .required("kid", Schema::nullable(Schema::integer()))
        .required("en", text.clone())
        .optional("fr", text.clone())
        .optional("de", text.clone())
        .optional("it", text.clone())
        .optional("pt", text)
        .required("sets", Schema::array(set_entry))
        .each(
            ["format", "archetypes", "releaseTCG", "releaseOCG", "statusTCG", "statusOCG"],
            &nullable_string,
            true,
        ))
}

fn base_monster() -> FieldGroup {
    FieldGroup::new("monster")
        .required("type", Schema::literal("Monster"))
        // YGOPRODECK's slash-joined type line
        .required("typeline", Schema::string())
        .required("attribute", Schema::value_set::<Attribute>())
        .required("race", Schema::value_set::<Race>())
        .required("atk", Schema::non_negative_integer())
        .required("tuner", Schema::boolean())
        // presence marks a Pendulum monster
        .optional("scale", Schema::integer_between(0, 13))
}

fn with_level() -> FieldGroup {
    FieldGroup::new("withLevel")
        // printed stars, regardless of gameplay
        .required("level", Schema::integer_between(0, 12))
        .required("def", Schema::non_negative_integer())
}

fn subtype(name: &'static str, effect: Schema, subtype: Schema) -> FieldGroup {
    FieldGroup::new(name)
        .required("effect", effect)
        .required("subtype", subtype)
}

fn leveled(
    name: &'static str,
    effect: Schema,
    subtype_value: Schema,
) -> Result<Variant, SchemaBuildError> {
    let shape = compose(
        name,
        [base()?, base_monster(), with_level(), subtype(name, effect, subtype_value)],
    )?;
    Ok(Variant::new(name, shape))
}

/// The index dialect union.
pub fn definition() -> Result<DialectUnion, SchemaBuildError> {
    let xyz = FieldGroup::new("xyz")
        .required("effect", Schema::boolean())
        .required("subtype", Schema::literal("Xyz"))
        .required("rank", Schema::integer_between(0, 13))
        .required("def", Schema::non_negative_integer());
    let link = FieldGroup::new("link")
        .required("effect", Schema::boolean())
        .required("subtype", Schema::literal("Link"))
        .required("link", Schema::integer_between(1, 8))
        .required("arrows", Schema::array_between(Schema::value_set::<LinkArrow>(), 1, 8));
    let spell = FieldGroup::new("spell")
        .required("type", Schema::literal("Spell"))
        .required("subtype", Schema::value_set::<SpellType>());
    let trap = FieldGroup::new("trap")
        .required("type", Schema::literal("Trap"))
        .required("subtype", Schema::value_set::<TrapType>());

    let variants = vec![
        leveled("NormalMonsterCard", Schema::literal(false), Schema::literal("Normal"))?,
        leveled("TokenCard", Schema::literal(false), Schema::literal("Token"))?,
        leveled("OrangeMonsterCard", Schema::literal(true), Schema::null())?,
        leveled("RitualMonsterCard", Schema::boolean(), Schema::literal("Ritual"))?,
        leveled("FusionMonsterCard", Schema::boolean(), Schema::literal("Fusion"))?,
        leveled("SynchroMonsterCard", Schema::boolean(), Schema::literal("Synchro"))?,
        Variant::new("XyzMonsterCard", compose("XyzMonsterCard", [base()?, base_monster(), xyz])?),
        Variant::new("LinkMonsterCard", compose("LinkMonsterCard", [base()?, base_monster(), link])?)
            .with_rule(CrossFieldRule::ArrowCountMatchesLink {
                link: "link",
                arrows: "arrows",
            })
            .with_rule(CrossFieldRule::UniqueItems { field: "arrows" }),
        Variant::new("SpellCard", compose("SpellCard", [base()?, spell])?),
        Variant::new("TrapCard", compose("TrapCard", [base()?, trap])?),
    ];

    Ok(DialectUnion::new(Dialect::Index, variants)?.with_shared(INDEX_CARD_TEXT_SCHEMA_ID, card_text()?))
}
