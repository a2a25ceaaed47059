//! Player preferences
//!
//! Persisted in LocalStorage so the last chosen character and level are
//! preselected on the next visit.

use serde::{Deserialize, Serialize};

use crate::sim::{CharacterKind, GameConfig, Level};

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Character sprite
    #[serde(default)]
    pub character: CharacterKind,
    /// Difficulty (enemy count)
    #[serde(default)]
    pub level: Level,
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bug_crossing_settings";

    /// Simulation configuration for these preferences
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            character: self.character,
            level: self.level,
        }
    }

    pub fn cycle_character(&mut self) {
        self.character = self.character.next();
    }

    pub fn cycle_level(&mut self) {
        self.level = self.level.next();
    }

    /// Parse settings JSON, falling back to defaults on garbage
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Some(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.character, CharacterKind::Boy);
        assert_eq!(settings.level, Level::Hard);
        assert_eq!(settings.game_config(), GameConfig::default());
    }

    #[test]
    fn test_json_fallbacks() {
        let partial = Settings::from_json(r#"{"level":"Easy"}"#);
        assert_eq!(partial.level, Level::Easy);
        assert_eq!(partial.character, CharacterKind::Boy);

        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_saved_json_loads_back() {
        let mut settings = Settings::default();
        settings.cycle_character();
        settings.cycle_level();
        let json = settings.to_json().unwrap_or_default();
        assert_eq!(Settings::from_json(&json), settings);
        assert_eq!(settings.character, CharacterKind::CatGirl);
        assert_eq!(settings.level, Level::Easy);
    }
}
