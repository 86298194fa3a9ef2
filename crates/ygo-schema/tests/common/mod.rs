//! Shared fixtures for the integration tests: one fully valid document per
//! dialect variant family, plus a tracing subscriber for debugging runs
//! (`RUST_LOG=ygo_schema=debug`).

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Map, Value};
use ygo_core::Locale;

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `tests/fixtures/<name>`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A required-nullable locale map with only English filled in.
pub fn localized(en: &str) -> Value {
    let mut map = Map::new();
    for code in Locale::codes() {
        map.insert(code.to_string(), Value::Null);
    }
    map.insert("en".to_string(), json!(en));
    Value::Object(map)
}

/// A name block with only English filled in.
pub fn name_block(en: &str) -> Value {
    let mut name = localized(en);
    name["ja_romaji"] = Value::Null;
    name["ko_rr"] = Value::Null;
    name
}

fn sets() -> Value {
    json!({
        "en": [
            {
                "set_number": "LOB-EN001",
                "set_name": "Legend of Blue Eyes White Dragon",
                "rarities": ["Ultra Rare"],
            },
        ],
        "ja": [],
    })
}

/// Index dialect: a Normal monster.
pub fn index_normal_monster() -> Value {
    json!({
        "password": 89631139,
        "kid": 4007,
        "en": {
            "name": "Blue-Eyes White Dragon",
            "description": "This legendary dragon is a powerful engine of destruction.",
        },
        "fr": {
            "name": "Dragon Blanc aux Yeux Bleus",
            "description": "Ce dragon légendaire est une puissante machine de destruction.",
        },
        "sets": [{ "tag": "LOB-001", "name": "Legend of Blue Eyes White Dragon" }, {}],
        "format": null,
        "archetypes": "Blue-Eyes",
        "releaseTCG": "2002-03-08",
        "releaseOCG": "1999-03-06",
        "statusTCG": null,
        "statusOCG": null,
        "type": "Monster",
        "typeline": "Dragon/Normal",
        "attribute": "LIGHT",
        "race": "Dragon",
        "atk": 3000,
        "tuner": false,
        "level": 8,
        "def": 2500,
        "effect": false,
        "subtype": "Normal",
    })
}

fn index_monster(name: &str, race: &str, typeline: &str, atk: u64) -> Value {
    let mut card = index_normal_monster();
    card["en"] = json!({ "name": name, "description": format!("{name} card text.") });
    card.as_object_mut().unwrap().remove("fr");
    card["race"] = json!(race);
    card["typeline"] = json!(typeline);
    card["atk"] = json!(atk);
    card
}

/// Index dialect: a Rank 4 Xyz monster. It has a rank and no level.
pub fn index_xyz_monster() -> Value {
    let mut card = index_monster("Number 39: Utopia", "Warrior", "Warrior/Xyz/Effect", 2500);
    card.as_object_mut().unwrap().remove("level");
    card["rank"] = json!(4);
    card["def"] = json!(2000);
    card["effect"] = json!(true);
    card["subtype"] = json!("Xyz");
    card
}

/// Index dialect: an effect Fusion monster, which still carries `tuner: false`.
pub fn index_fusion_monster() -> Value {
    let mut card = index_monster("Thousand-Eyes Restrict", "Spellcaster", "Spellcaster/Fusion/Effect", 0);
    card["level"] = json!(1);
    card["def"] = json!(0);
    card["effect"] = json!(true);
    card["tuner"] = json!(false);
    card["subtype"] = json!("Fusion");
    card
}

/// Index dialect: a Ritual monster without an effect.
pub fn index_ritual_monster() -> Value {
    let mut card = index_monster("Black Luster Soldier", "Warrior", "Warrior/Ritual", 3000);
    card["subtype"] = json!("Ritual");
    card
}

/// Index dialect: a Link-3 monster with three arrows.
pub fn index_link_monster() -> Value {
    json!({
        "password": 1861629,
        "kid": 13113,
        "en": {
            "name": "Decode Talker",
            "description": "2+ Effect Monsters",
        },
        "sets": [{ "tag": "ST17-EN041", "name": "Starter Deck: Codebreaker" }],
        "format": null,
        "archetypes": "Code Talker",
        "releaseTCG": "2017-03-30",
        "releaseOCG": "2017-03-25",
        "statusTCG": null,
        "statusOCG": null,
        "type": "Monster",
        "typeline": "Cyberse/Link/Effect",
        "attribute": "DARK",
        "race": "Cyberse",
        "atk": 2300,
        "tuner": false,
        "effect": true,
        "subtype": "Link",
        "link": 3,
        "arrows": ["↙", "⬆", "↘"],
    })
}

/// Yaml-Yugi dialect: a leveled Main Deck monster.
pub fn yaml_yugi_main_deck_monster() -> Value {
    json!({
        "konami_id": 4007,
        "password": 89631139,
        "name": name_block("Blue-Eyes White Dragon"),
        "text": localized("This legendary dragon is a powerful engine of destruction."),
        "sets": sets(),
        "card_type": "Monster",
        "monster_type_line": "Dragon / Normal",
        "attribute": "LIGHT",
        "atk": 3000,
        "level": 8,
        "def": 2500,
    })
}

/// Yaml-Yugi dialect: an Xyz monster.
pub fn yaml_yugi_xyz_monster() -> Value {
    json!({
        "konami_id": 9592,
        "password": 84013237,
        "name": name_block("Number 39: Utopia"),
        "text": localized("2 Level 4 monsters"),
        "sets": sets(),
        "card_type": "Monster",
        "monster_type_line": "Warrior / Xyz / Effect",
        "attribute": "LIGHT",
        "atk": 2500,
        "rank": 4,
        "def": 2000,
    })
}

/// Yaml-Yugi dialect: a Link monster.
pub fn yaml_yugi_link_monster() -> Value {
    json!({
        "konami_id": 13113,
        "password": 1861629,
        "name": name_block("Decode Talker"),
        "text": localized("2+ Effect Monsters"),
        "sets": sets(),
        "card_type": "Monster",
        "monster_type_line": "Cyberse / Link / Effect",
        "attribute": "DARK",
        "atk": 2300,
        "link_arrows": ["↙", "⬆", "↘"],
    })
}

/// Yaml-Yugi dialect: a Spell card.
pub fn yaml_yugi_spell() -> Value {
    json!({
        "konami_id": 4837,
        "password": 55144522,
        "name": name_block("Pot of Greed"),
        "text": localized("Draw 2 cards."),
        "sets": {},
        "card_type": "Spell",
        "property": "Normal",
    })
}

/// OCG/TCG: a Link monster. Valid for the current revision only.
pub fn ocg_tcg_link_monster() -> Value {
    let mut card = yaml_yugi_link_monster();
    card["yugipedia_page_id"] = json!(522300);
    card["images"] = json!([{ "index": 1, "image": "DecodeTalker-ST17-EN-UR-1E.png" }]);
    card["is_translation_unofficial"] = json!({ "name": { "ko": true } });
    card["limit_regulation"] = json!({ "tcg": "Unlimited", "ocg": "Unlimited", "speed": "Forbidden" });
    card
}

/// OCG/TCG: a Trap card with no Speed Duel status.
pub fn ocg_tcg_trap() -> Value {
    json!({
        "konami_id": 4861,
        "password": 44095762,
        "name": name_block("Mirror Force"),
        "text": localized("When an opponent's monster declares an attack: Destroy all your opponent's Attack Position monsters."),
        "sets": sets(),
        "card_type": "Trap",
        "property": "Normal",
        "limit_regulation": { "tcg": "Unlimited", "ocg": "Not yet legal", "speed": null },
    })
}

fn rush_monster(name: &str) -> Value {
    json!({
        "konami_id": null,
        "yugipedia_page_id": 801234,
        "name": name_block(name),
        "sets": { "ja": [] },
        "card_type": "Monster",
        "monster_type_line": "Dragon / Effect",
        "attribute": "LIGHT",
        "level": 8,
        "atk": 2500,
        "def": 2000,
    })
}

/// Rush: a Fusion effect monster carrying materials, requirement, and effect.
pub fn rush_fusion_monster() -> Value {
    let mut card = rush_monster("Sevens Road Magician Fusion");
    card["materials"] = localized("Sevens Road Magician + 1 Spellcaster monster");
    card["requirement"] = localized("Send 1 card from your hand to the GY.");
    card["effect"] = localized("This card gains 1000 ATK until the end of this turn.");
    card["effect_types"] = json!(["Multi-Choice"]);
    card
}

/// Rush: a normal (non-effect) monster.
pub fn rush_normal_monster() -> Value {
    let mut card = rush_monster("Blue-Eyes White Dragon");
    card["text"] = localized("This legendary dragon is a powerful engine of destruction.");
    card
}

/// Rush: a plain effect monster with no Maximum fields.
pub fn rush_effect_monster() -> Value {
    let mut card = rush_monster("Sevens Road Magician");
    card["requirement"] = localized("Send the top card of your Deck to the GY.");
    card["effect"] = localized("This card gains 300 ATK for each Spell in your GY until the end of this turn.");
    card
}

/// Rush: a Maximum monster piece with its summoning condition.
pub fn rush_maximum_monster() -> Value {
    let mut card = rush_monster("Sevens Road Magician [L]");
    card["legend"] = json!(true);
    card["maximum_atk"] = json!(3300);
    card["summoning_condition"] = localized("[Maximum Summon] This card can be Maximum Summoned.");
    card["requirement"] = localized("None.");
    card["effect"] = localized("Draw 1 card.");
    card
}

/// Rush: a Normal Trap.
pub fn rush_trap() -> Value {
    json!({
        "konami_id": 16001,
        "yugipedia_page_id": 800001,
        "name": name_block("Ultimate Death Fang"),
        "sets": {},
        "card_type": "Trap",
        "property": "Normal",
        "requirement": localized("When your opponent declares an attack."),
        "effect": localized("Destroy the attacking monster."),
    })
}
