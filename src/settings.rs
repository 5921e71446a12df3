//! Player preferences
//!
//! Persisted in LocalStorage on the web. Game rules are constants, not
//! settings.

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_ID, SCORE_ENDPOINT};
use crate::scores::ScoreSubmission;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Neon glow around paddles and ball
    pub glow: bool,
    /// Send the final score to `score_endpoint` when a match ends
    pub submit_scores: bool,
    pub score_endpoint: String,
    pub game_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glow: true,
            submit_scores: true,
            score_endpoint: SCORE_ENDPOINT.to_string(),
            game_id: GAME_ID.to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neon_pong_settings";

    /// Parse stored settings; anything unreadable falls back to `None`
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Submission body for a final player score
    pub fn submission(&self, score: u32) -> ScoreSubmission {
        ScoreSubmission::new(self.game_id.clone(), score)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
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
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native runs always use defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
