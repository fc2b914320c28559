//! Picker settings
//!
//! The four keys keep the names of the original GSettings schema
//! (`emojisize`, `skin-tone`, `gender`, `paste-on-select`) so an existing
//! exported config keeps working.
//!
//! Settings sources (in priority order):
//! 1. Environment variables (`EMOJI_COPY_*`)
//! 2. User config (`~/.config/emoji-copy/settings.toml`)
//! 3. Built-in defaults

use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Get the settings directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "emoji-copy", "EmojiCopy")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/emoji-copy"))
}

/// Default settings file location
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// Per-user picker settings shared by every emoji button.
///
/// Tone and gender are stored as the raw indices the original schema used
/// (0–5 and 0–2); resolution to typed values happens at composition time so
/// an out-of-range index degrades instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Display font size of the emoji glyphs, in pixels
    #[serde(rename = "emojisize")]
    pub emoji_size: u32,
    /// Selected skin tone, 0 (unmodified) to 5 (dark)
    #[serde(rename = "skin-tone")]
    pub skin_tone: u8,
    /// Selected gender modifier, 0 (none), 1 (woman), 2 (man)
    pub gender: u8,
    /// Simulate a Shift+Insert paste after each copy
    #[serde(rename = "paste-on-select")]
    pub paste_on_select: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            emoji_size: 24,
            skin_tone: 0,
            gender: 0,
            paste_on_select: false,
        }
    }
}

impl PickerSettings {
    /// Load settings from the default location, layered under env overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_path())
    }

    /// Load settings from a specific TOML file. A missing file yields the
    /// defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("EMOJI_COPY_").map(|key| key.as_str().replace('_', "-").into()))
            .extract()?;
        Ok(settings)
    }

    /// Persist settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path())
    }

    /// Persist settings to a specific TOML file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
