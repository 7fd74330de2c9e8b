//! Game constants and remembered display preferences.

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INITIAL_ZOOM: f64 = 16.0;
pub const ZOOM_DECREASE: f64 = 1.0;
pub const MIN_ZOOM: f64 = 13.0;
pub const MAX_ATTEMPTS: u32 = 3;
pub const CELEBRATION_MS: u32 = 5_000;

/// Bounds for free map interaction (pan/zoom by the player).
pub const MIN_MAP_ZOOM: f64 = 2.0;
pub const MAX_MAP_ZOOM: f64 = 19.0;

const PREFERENCES_KEY: &str = "metro_guesser_preferences";
/// Optional `<script type="application/json">` element overriding [`GameConfig`].
const CONFIG_ELEMENT_ID: &str = "metro-guesser-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_attempts must be at least 1")]
    NoAttempts,
    #[error("zoom_step must be positive, got {0}")]
    ZoomStep(f64),
    #[error("min_zoom {min} is above initial_zoom {initial}")]
    ZoomRange { min: f64, initial: f64 },
    #[error("{field} {value} is outside the map zoom range {MIN_MAP_ZOOM}..={MAX_MAP_ZOOM}")]
    ZoomOutOfRange { field: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub initial_zoom: f64,
    /// Zoom removed after each wrong guess.
    pub zoom_step: f64,
    /// Floor for the zoom-out hint.
    pub min_zoom: f64,
    pub celebration_ms: u32,
    /// Raster tile source, `{z}`, `{x}` and `{y}` are substituted.
    pub tile_url: String,
    /// Where the map looks before the first round starts.
    pub default_center: [f64; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            initial_zoom: INITIAL_ZOOM,
            zoom_step: ZOOM_DECREASE,
            min_zoom: MIN_ZOOM,
            celebration_ms: CELEBRATION_MS,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            default_center: [4.9, 52.37],
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if !(self.zoom_step > 0.0) {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }
        for (field, value) in [("initial_zoom", self.initial_zoom), ("min_zoom", self.min_zoom)] {
            if !(MIN_MAP_ZOOM..=MAX_MAP_ZOOM).contains(&value) {
                return Err(ConfigError::ZoomOutOfRange { field, value });
            }
        }
        if self.min_zoom > self.initial_zoom {
            return Err(ConfigError::ZoomRange {
                min: self.min_zoom,
                initial: self.initial_zoom,
            });
        }
        Ok(())
    }

    /// Reads the page-embedded override if present, falling back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!("loaded game config from #{CONFIG_ELEMENT_ID}");
                cfg
            }
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    pub fn tile_src(&self, z: u32, x: u32, y: u32) -> String {
        self.tile_url
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessMode {
    /// One button per catalog station.
    #[default]
    Buttons,
    /// Free-text input.
    Text,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub guess_mode: GuessMode,
    /// Allow pan/zoom by the player. Off matches the classic fixed map.
    pub interactive_map: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            guess_mode: GuessMode::Buttons,
            interactive_map: false,
        }
    }
}

impl Preferences {
    pub fn load() -> Self {
        match LocalStorage::get::<Preferences>(PREFERENCES_KEY) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("using default preferences: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Err(e) = LocalStorage::set(PREFERENCES_KEY, self) {
            log::warn!("could not store preferences: {e}");
        }
    }
}
