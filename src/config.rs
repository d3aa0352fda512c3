//! Game configuration, stored as JSON in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutConfig;
use crate::model::GameStateOverrides;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub layout: LayoutConfig,
    /// Initial state for a new session.
    pub initial: GameStateOverrides,
}

impl GameConfig {
    const STORAGE_KEY: &'static str = "cc_config";

    /// Parse a stored config; anything unreadable falls back to defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Ignoring invalid {}: {}", Self::STORAGE_KEY, e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        match stored {
            Some(raw) => {
                log::info!("Loaded config from LocalStorage");
                Self::from_json(&raw)
            }
            None => Self::default(),
        }
    }
}
