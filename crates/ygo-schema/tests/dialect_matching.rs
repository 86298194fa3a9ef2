//! Integration test: every dialect matches well-formed documents to exactly
//! the variant they describe, in priority order.

mod common;

use serde_json::json;
use ygo_core::Dialect;
use ygo_schema::{CardSchemaRegistry, RegistryOptions};

fn registry() -> &'static CardSchemaRegistry {
    common::init_tracing();
    CardSchemaRegistry::shared().expect("card schemas build")
}

fn matched(dialect: Dialect, document: &serde_json::Value) -> &'static str {
    match registry().validate(dialect, document) {
        Ok(m) => m.variant,
        Err(e) => panic!("expected a match, got: {e}"),
    }
}

#[test]
fn test_index_normal_monster() {
    let m = registry().validate(Dialect::Index, &common::index_normal_monster()).unwrap();
    assert_eq!(m.variant, "NormalMonsterCard");
    assert_eq!(m.schema_id.as_str(), "https://api.alphakretin.com/card.json");
}

#[test]
fn test_index_subtype_selects_variant() {
    let mut token = common::index_normal_monster();
    token["subtype"] = json!("Token");
    assert_eq!(matched(Dialect::Index, &token), "TokenCard");

    let mut orange = common::index_normal_monster();
    orange["effect"] = json!(true);
    orange["subtype"] = json!(null);
    assert_eq!(matched(Dialect::Index, &orange), "OrangeMonsterCard");

    let mut synchro = common::index_normal_monster();
    synchro["effect"] = json!(true);
    synchro["subtype"] = json!("Synchro");
    synchro["tuner"] = json!(true);
    assert_eq!(matched(Dialect::Index, &synchro), "SynchroMonsterCard");
}

#[test]
fn test_index_extra_deck_families() {
    assert_eq!(matched(Dialect::Index, &common::index_xyz_monster()), "XyzMonsterCard");
    assert_eq!(matched(Dialect::Index, &common::index_ritual_monster()), "RitualMonsterCard");
}

#[test]
fn test_index_fusion_reports_no_tuner() {
    let fusion = common::index_fusion_monster();
    assert_eq!(fusion["tuner"], false);
    assert_eq!(matched(Dialect::Index, &fusion), "FusionMonsterCard");
}

#[test]
fn test_index_link_monster() {
    assert_eq!(matched(Dialect::Index, &common::index_link_monster()), "LinkMonsterCard");
}

#[test]
fn test_index_spell_needs_no_monster_fields() {
    let spell = json!({
        "password": 55144522,
        "kid": null,
        "en": { "name": "Pot of Greed", "description": "Draw 2 cards." },
        "sets": [],
        "format": null,
        "archetypes": null,
        "releaseTCG": null,
        "releaseOCG": null,
        "statusTCG": "Forbidden",
        "statusOCG": "Forbidden",
        "type": "Spell",
        "subtype": "Normal",
    });
    assert_eq!(matched(Dialect::Index, &spell), "SpellCard");
}

#[test]
fn test_yaml_yugi_leveled_monster_is_main_deck() {
    assert_eq!(
        matched(Dialect::YamlYugi, &common::yaml_yugi_main_deck_monster()),
        "MainDeckMonsterWithLevelCard"
    );
}

#[test]
fn test_yaml_yugi_materials_select_extra_deck() {
    let mut fusion = common::yaml_yugi_main_deck_monster();
    fusion["materials"] = json!("\"Blue-Eyes White Dragon\" + \"Blue-Eyes White Dragon\" + \"Blue-Eyes White Dragon\"");
    fusion["level"] = json!(12);
    assert_eq!(matched(Dialect::YamlYugi, &fusion), "ExtraDeckMonsterWithLevelCard");
}

#[test]
fn test_yaml_yugi_other_families() {
    assert_eq!(matched(Dialect::YamlYugi, &common::yaml_yugi_xyz_monster()), "XyzMonsterCard");
    assert_eq!(matched(Dialect::YamlYugi, &common::yaml_yugi_link_monster()), "LinkMonsterCard");
    assert_eq!(matched(Dialect::YamlYugi, &common::yaml_yugi_spell()), "SpellCard");
}

#[test]
fn test_yaml_yugi_pendulum_fields_optional_by_default() {
    let mut pendulum = common::yaml_yugi_main_deck_monster();
    pendulum["pendulum_scale"] = json!(8);
    assert_eq!(matched(Dialect::YamlYugi, &pendulum), "MainDeckMonsterWithLevelCard");

    let strict = CardSchemaRegistry::new(RegistryOptions {
        strict_pairings: true,
        ..RegistryOptions::default()
    })
    .unwrap();
    let err = strict.validate(Dialect::YamlYugi, &pendulum).unwrap_err();
    assert!(err.violations().any(|v| v.is_cross_field()));

    pendulum["pendulum_effect"] = common::localized("Once per turn: you can destroy 1 card.");
    assert!(strict.validate(Dialect::YamlYugi, &pendulum).is_ok());
}

#[test]
fn test_ocg_tcg_current_accepts_forbidden_speed_status() {
    let m = registry().validate(Dialect::OcgTcg, &common::ocg_tcg_link_monster()).unwrap();
    assert_eq!(m.variant, "LinkMonsterCard");
    assert_eq!(m.schema_id.as_str(), "/ocg-tcg/card.json");
}

#[test]
fn test_ocg_tcg_legacy_rejects_forbidden_speed_status() {
    let err = registry()
        .validate(Dialect::OcgTcgLegacy, &common::ocg_tcg_link_monster())
        .unwrap_err();
    let attempt = err.attempt("LinkMonsterCard").unwrap();
    assert!(attempt
        .violations()
        .iter()
        .any(|v| v.instance_path == "/limit_regulation/speed"));

    let mut legacy = common::ocg_tcg_link_monster();
    legacy["limit_regulation"]["speed"] = json!("Limited 2");
    assert_eq!(matched(Dialect::OcgTcgLegacy, &legacy), "LinkMonsterCard");
}

#[test]
fn test_ocg_tcg_legacy_accepts_free_form_arrows() {
    let mut card = common::ocg_tcg_link_monster();
    card["limit_regulation"]["speed"] = json!(null);
    card["link_arrows"] = json!(["Bottom-Left", "Top", "Bottom-Right"]);
    assert_eq!(matched(Dialect::OcgTcgLegacy, &card), "LinkMonsterCard");
    assert!(registry().validate(Dialect::OcgTcg, &card).is_err());
}

#[test]
fn test_ocg_tcg_trap_by_id() {
    let registry = registry();
    for id in ["/ocg-tcg/card.json", "/ocg-tcg/legacy/card.json"] {
        let m = registry.validate_by_id(id, &common::ocg_tcg_trap()).unwrap();
        assert_eq!(m.variant, "TrapCard");
        assert_eq!(m.schema_id.as_str(), id);
    }
}

#[test]
fn test_rush_fusion_wins_priority() {
    assert_eq!(matched(Dialect::Rush, &common::rush_fusion_monster()), "FusionEffectMonsterCard");
}

#[test]
fn test_rush_other_families() {
    assert_eq!(matched(Dialect::Rush, &common::rush_normal_monster()), "NonEffectMonsterCard");
    assert_eq!(matched(Dialect::Rush, &common::rush_maximum_monster()), "MainDeckEffectMonsterCard");
    assert_eq!(matched(Dialect::Rush, &common::rush_trap()), "TrapCard");

    let mut spell = common::rush_trap();
    spell["card_type"] = json!("Spell");
    spell["property"] = json!("Equip");
    assert_eq!(matched(Dialect::Rush, &spell), "SpellCard");
}

#[test]
fn test_rush_plain_effect_monster() {
    let mut card = common::rush_effect_monster();
    assert_eq!(matched(Dialect::Rush, &card), "MainDeckEffectMonsterCard");

    card["effect_types"] = json!(["Continuous"]);
    assert_eq!(matched(Dialect::Rush, &card), "MainDeckEffectMonsterCard");

    card["effect_types"] = json!([]);
    let err = registry().validate(Dialect::Rush, &card).unwrap_err();
    let attempt = err.attempt("MainDeckEffectMonsterCard").unwrap();
    assert!(attempt.violations().iter().any(|v| v.instance_path == "/effect_types"));
}

#[test]
fn test_rush_trap_property_is_fixed() {
    let mut trap = common::rush_trap();
    trap["property"] = json!("Counter");
    let err = registry().validate(Dialect::Rush, &trap).unwrap_err();
    let attempt = err.attempt("TrapCard").unwrap();
    assert!(attempt.violations().iter().any(|v| v.instance_path == "/property"));
}

#[test]
fn test_rush_maximum_pairing_only_when_strict() {
    let mut card = common::rush_maximum_monster();
    card.as_object_mut().unwrap().remove("summoning_condition");
    assert_eq!(matched(Dialect::Rush, &card), "MainDeckEffectMonsterCard");

    let strict = CardSchemaRegistry::new(RegistryOptions {
        strict_pairings: true,
        ..RegistryOptions::default()
    })
    .unwrap();
    let err = strict.validate(Dialect::Rush, &card).unwrap_err();
    let violation = err.violations().next().unwrap();
    assert_eq!(violation.instance_path, "/maximum_atk");
}
