//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::KeyBindings;

/// Shortest auto-advance interval the carousel accepts
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 1000;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Hero carousel behavior
    pub carousel: CarouselSettings,
    /// Which home page sections are shown
    pub sections: SectionSettings,
    /// Custom keybindings
    pub keybindings: KeyBindings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Interface language code
    pub language: String,
    /// Disable transitions, hover animations and carousel auto-advance
    pub reduce_motion: bool,
}

/// Hero carousel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Auto-advance interval in milliseconds
    pub interval_ms: u64,
    /// Pause auto-advance while the pointer is over the carousel
    pub pause_on_hover: bool,
}

impl CarouselSettings {
    /// Auto-advance interval, never shorter than one second
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_CAROUSEL_INTERVAL_MS))
    }
}

/// Home page section toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSettings {
    pub hero_carousel: bool,
    pub category_strip: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
            reduce_motion: false,
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            pause_on_hover: true,
        }
    }
}

impl Default for SectionSettings {
    fn default() -> Self {
        Self {
            hero_carousel: true,
            category_strip: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "autocare", "AutoCare")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let mut settings: Self =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.keybindings.fill_missing();
        Ok(settings)
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("autocare-settings-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");
        assert_eq!(settings.carousel.interval(), Duration::from_millis(5000));
        assert!(settings.carousel.pause_on_hover);
        assert!(settings.sections.hero_carousel);
        assert!(settings.sections.category_strip);
    }

    #[test]
    fn test_interval_is_clamped() {
        let carousel = CarouselSettings {
            interval_ms: 10,
            pause_on_hover: true,
        };
        assert_eq!(carousel.interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "dark_mode": true } }"#).unwrap();
        assert!(settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");
        assert_eq!(settings.carousel.interval_ms, 5000);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_file("roundtrip.json");
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        settings.carousel.interval_ms = 8000;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.display.reduce_motion);
        assert_eq!(loaded.carousel.interval_ms, 8000);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_is_a_parse_error() {
        let path = scratch_file("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Settings::load_from_file(&scratch_file("does-not-exist.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
