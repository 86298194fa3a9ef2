//! # Locales — The Fixed Key Set of Every Locale Map
//!
//! Card names, texts, set lists, and translation markers are all keyed by
//! the same ten locale codes. The set is closed: a locale map with any other
//! key is malformed.

use crate::value_set::ClosedValueSet;

crate::closed_value_set! {
    /// Supported language/region codes, in canonical order.
    pub enum Locale {
        /// English.
        En => "en",
        /// German.
        De => "de",
        /// Spanish.
        Es => "es",
        /// French.
        Fr => "fr",
        /// Italian.
        It => "it",
        /// Portuguese.
        Pt => "pt",
        /// Japanese.
        Ja => "ja",
        /// Korean.
        Ko => "ko",
        /// Simplified Chinese.
        ZhCn => "zh-CN",
        /// Traditional Chinese.
        ZhTw => "zh-TW",
    }
}

/// Number of supported locales.
pub const LOCALE_COUNT: usize = 10;

impl Locale {
    /// Every locale code as it appears as a JSON key.
    pub fn codes() -> Vec<&'static str> {
        Self::values()
    }

    /// Whether `key` is one of the supported locale codes.
    pub fn is_locale_code(key: &str) -> bool {
        Self::parse(key).is_some()
    }
}
