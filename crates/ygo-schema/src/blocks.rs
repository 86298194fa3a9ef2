//! # Shared Field Groups
//!
//! Locale maps and the blocks built on them, reused by every dialect.
//!
//! A locale map is keyed by exactly the ten codes of [`Locale`]. Two
//! conventions coexist and must not be conflated:
//!
//! - **Required-nullable** (name, text): every locale key is present. A
//!   `null` value means the card is known not to exist in that locale.
//! - **Optional** (sets, translation markers): a locale key may be absent,
//!   meaning the data has not been investigated or the card was not
//!   released there.
//!
//! In both cases keys outside the locale set are rejected.

use ygo_core::{Locale, SchemaBuildError};

use crate::schema::{FieldGroup, Schema};

/// A locale map whose values all follow `value`.
pub fn locale_map(
    name: &'static str,
    value: &Schema,
    required: bool,
) -> Result<Schema, SchemaBuildError> {
    Schema::object(name, locale_fields(name, value, required))
}

/// The locale keys as a field group, for blocks that extend a locale map.
pub fn locale_fields(name: &'static str, value: &Schema, required: bool) -> FieldGroup {
    FieldGroup::new(name).each(Locale::codes(), value, required)
}

/// Per-locale nullable strings with every locale present.
pub fn localized_strings() -> Result<Schema, SchemaBuildError> {
    locale_map("LocalizedStrings", &Schema::nullable(Schema::string()), true)
}

/// Card name in every locale plus romanized Japanese and Korean readings.
pub fn name_block() -> Result<Schema, SchemaBuildError> {
    let group = locale_fields("Name", &Schema::nullable(Schema::string()), true)
        .required("ja_romaji", Schema::nullable(Schema::string()))
        .required("ko_rr", Schema::nullable(Schema::string()));
    Schema::object("Name", group)
}

/// One printing of a card in a set.
pub fn card_set() -> Result<Schema, SchemaBuildError> {
    Schema::object(
        "CardSet",
        FieldGroup::new("CardSet")
            .required("set_number", Schema::string())
            .required("set_name", Schema::string())
            // could be an enum but rarity names are not stable upstream
            .required("rarities", Schema::nullable(Schema::array(Schema::string()))),
    )
}

/// Set listings per locale. An absent locale means no known release there.
pub fn sets_block() -> Result<Schema, SchemaBuildError> {
    locale_map("CardSets", &Schema::array(card_set()?), false)
}

/// Ordered card artwork. Order follows print/variant order.
pub fn images() -> Result<Schema, SchemaBuildError> {
    let entry = Schema::object(
        "Image",
        FieldGroup::new("Image")
            .required(
                "index",
                Schema::AnyOf(vec![Schema::integer_at_least(1), Schema::string()]),
            )
            .required("image", Schema::string())
            .optional("illustration", Schema::string()),
    )?;
    Ok(Schema::array(entry))
}

/// Marks locales whose name or text is a fan translation.
pub fn translation_markers() -> Result<Schema, SchemaBuildError> {
    let marker = Schema::literal(true);
    Schema::object(
        "TranslationMarkers",
        FieldGroup::new("TranslationMarkers")
            .optional("name", locale_map("NameMarkers", &marker, false)?)
            .optional("text", locale_map("TextMarkers", &marker, false)?),
    )
}

/// ATK/DEF as printed: a non-negative integer or `"?"`.
pub fn monster_points() -> Schema {
    Schema::AnyOf(vec![Schema::non_negative_integer(), Schema::literal("?")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn localized_strings_require_every_locale() {
        let json = localized_strings().unwrap().to_json();
        let required = json["required"].as_array().unwrap();
        assert_eq!(required.len(), ygo_core::LOCALE_COUNT);
        assert!(required.contains(&json!("zh-TW")));
        assert_eq!(json["additionalProperties"], false);
    }

    #[test]
    fn name_block_adds_readings() {
        let json = name_block().unwrap().to_json();
        assert_eq!(json["required"].as_array().unwrap().len(), 12);
        assert!(json["properties"]["ja_romaji"]["anyOf"].is_array());
    }

    #[test]
    fn sets_block_keys_are_optional() {
        let json = sets_block().unwrap().to_json();
        assert_eq!(json["required"], json!([]));
        assert_eq!(json["properties"]["ja"]["type"], "array");
        assert_eq!(
            json["properties"]["ja"]["items"]["additionalProperties"],
            false
        );
    }

    #[test]
    fn translation_markers_only_admit_true() {
        let json = translation_markers().unwrap().to_json();
        assert_eq!(json["properties"]["text"]["properties"]["fr"], json!({ "const": true }));
    }

    #[test]
    fn image_index_starts_at_one() {
        let json = images().unwrap().to_json();
        assert_eq!(json["items"]["properties"]["index"]["anyOf"][0]["minimum"], 1);
    }
}
