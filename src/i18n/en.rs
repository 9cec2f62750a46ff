//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "AutoCare");

    // Top bar
    m.insert(Key::TopBarChatVia, "Chat via");
    m.insert(Key::TopBarClose, "Close top bar");

    // Header
    m.insert(Key::SearchPlaceholder, "Enter Product Name");
    m.insert(Key::SearchButton, "Search");
    m.insert(Key::CallWhatsApp, "Call/WhatsApp");
    m.insert(Key::DarkMode, "Dark mode");
    m.insert(Key::LightMode, "Light mode");

    // Navigation
    m.insert(Key::AllCategories, "ALL CATEGORIES");

    // Hero carousel
    m.insert(Key::HeroPaused, "Paused");
    m.insert(Key::HeroPrevious, "Previous slide");
    m.insert(Key::HeroNext, "Next slide");

    // Featured categories
    m.insert(Key::CategoriesTitle, "Featured Categories");
    m.insert(
        Key::CategoriesSubtitle,
        "Browse our wide range of auto care products",
    );
    m.insert(Key::CategoryShopNow, "Shop now");
    m.insert(Key::CategoryProducts, "products");

    // Vehicle selector
    m.insert(Key::VehicleTitle, "Select your car");
    m.insert(Key::VehicleClearAll, "Clear All");
    m.insert(Key::VehicleMake, "Make *");
    m.insert(Key::VehicleModel, "Model *");
    m.insert(Key::VehicleSelectMakeFirst, "Select make first");
    m.insert(Key::VehicleYear, "Year *");
    m.insert(Key::VehicleEngine, "Engine");
    m.insert(Key::VehicleTransmission, "Transmission");
    m.insert(Key::VehicleTrim, "Trim");
    m.insert(Key::VehicleOr, "OR");
    m.insert(
        Key::VehicleVinPlaceholder,
        "Search by VIN (17 characters max)",
    );
    m.insert(Key::VehicleVinSearch, "VIN Search");
    m.insert(Key::VehicleSearchParts, "Search Parts");
    m.insert(Key::VehicleSearching, "Searching...");

    // Toasts
    m.insert(Key::ToastOpening, "Opening");
    m.insert(Key::ToastProductSearch, "Searching products for");
    m.insert(Key::ToastSearchFailed, "Search failed. Please try again.");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
