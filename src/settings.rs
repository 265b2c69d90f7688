//! Game settings and preferences
//!
//! Stored as JSON next to the binary (or wherever the caller points). Every
//! field has a default, so partial files are fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FPS;
use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Leaderboard name; falls back to the character's name
    pub player_name: Option<String>,
    /// Roster id of the character to play
    pub character: String,
    /// Fixed seed for reproducible runs (random when unset)
    pub seed: Option<u64>,
    /// Let the simulation jump by itself
    pub autopilot: bool,
    /// Frames (and ticks) per second
    pub target_fps: u32,
    /// Stop after this many frames even if the run is still going
    pub max_frames: Option<u64>,
    /// Balance values
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: None,
            character: "1".to_string(),
            seed: None,
            autopilot: true,
            target_fps: DEFAULT_FPS,
            max_frames: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Seed to use for the next game
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
