//! Presentation settings and capabilities
//!
//! What the frontend may use (sound, music, background art) and how loud.
//! The simulation never reads these.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Frontend settings/capabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Capabilities ===
    /// Play sound effects (jump, bounce, break, game over)
    pub sound_effects: bool,
    /// Loop background music while playing
    pub music: bool,
    /// Draw the background image instead of a flat fill
    pub background_image: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_effects: true,
            music: true,
            background_image: true,

            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.3,
        }
    }
}

impl Settings {
    /// Everything off - for headless runs and machines without audio
    pub fn silent() -> Self {
        Self {
            sound_effects: false,
            music: false,
            background_image: false,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.clamp_volumes();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|json| Self::from_json(&json));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    /// Effective sound effect gain (0 when effects are off)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.sound_effects {
            self.master_volume * self.sfx_volume
        } else {
            0.0
        }
    }

    /// Effective music gain (0 when music is off)
    pub fn effective_music_volume(&self) -> f32 {
        if self.music {
            self.master_volume * self.music_volume
        } else {
            0.0
        }
    }

    fn clamp_volumes(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }
}
