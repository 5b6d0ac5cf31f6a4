//! User preferences loaded from TOML, following the same OnceLock pattern as
//! the grammar.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The engine never touches storage: the host reads and writes the TOML
//! produced by [`Settings::to_toml`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call. Fails with
/// `AlreadyInitialized` once the settings have been read.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("TOML serialize error: {0}")]
    Serialize(String),
    #[error("unknown direction: {0}")]
    UnknownDirection(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// Which way typed text is converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    LatinToCyrillic,
    CyrillicToLatin,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LatinToCyrillic => "latin-to-cyrillic",
            Self::CyrillicToLatin => "cyrillic-to-latin",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::LatinToCyrillic => Self::CyrillicToLatin,
            Self::CyrillicToLatin => Self::LatinToCyrillic,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latin-to-cyrillic" => Ok(Self::LatinToCyrillic),
            "cyrillic-to-latin" => Ok(Self::CyrillicToLatin),
            other => Err(SettingsError::UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub enabled: bool,
    pub direction: Direction,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: Direction::LatinToCyrillic,
        }
    }
}

impl Settings {
    /// Serialize for the host's preference store.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}
