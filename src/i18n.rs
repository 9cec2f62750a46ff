//! Internationalization (i18n) support for AutoCare
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations

mod en;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
        }
    }

    /// Resolve a settings language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .unwrap_or_default()
    }

    pub fn all() -> &'static [Language] {
        &[Language::English]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Top bar
    TopBarChatVia,
    TopBarClose,

    // Header
    SearchPlaceholder,
    SearchButton,
    CallWhatsApp,
    DarkMode,
    LightMode,

    // Navigation
    AllCategories,

    // Hero carousel
    HeroPaused,
    HeroPrevious,
    HeroNext,

    // Featured categories
    CategoriesTitle,
    CategoriesSubtitle,
    CategoryShopNow,
    CategoryProducts,

    // Vehicle selector
    VehicleTitle,
    VehicleClearAll,
    VehicleMake,
    VehicleModel,
    VehicleSelectMakeFirst,
    VehicleYear,
    VehicleEngine,
    VehicleTransmission,
    VehicleTrim,
    VehicleOr,
    VehicleVinPlaceholder,
    VehicleVinSearch,
    VehicleSearchParts,
    VehicleSearching,

    // Toasts
    ToastOpening,
    ToastProductSearch,
    ToastSearchFailed,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code("xx"), Language::English);
    }

    #[test]
    fn test_every_key_is_translated() {
        let locale = Locale::default();
        for key in [
            Key::AppName,
            Key::AllCategories,
            Key::HeroPaused,
            Key::CategoryShopNow,
            Key::VehicleSearchParts,
            Key::ToastSearchFailed,
        ] {
            assert_ne!(locale.get(key), "???", "{:?} is missing", key);
        }
    }
}
