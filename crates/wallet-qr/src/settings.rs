//! Render settings file
//!
//! Stores non-sensitive configuration in a plain JSON file. Credentials are
//! never read from or written to this file.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::render::RenderOptions;

/// Current settings file version
pub const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Settings file version
    #[serde(default = "default_version")]
    pub version: u32,
    /// QR rendering options
    #[serde(default)]
    pub render: RenderOptions,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            render: RenderOptions::default(),
        }
    }
}

impl Settings {
    /// Location of the per-user settings file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "symbia-labs", "wallet-qr")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from an explicit file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExportError::Settings(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_json(&contents)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and check a settings document
    pub fn from_json(contents: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(contents)?;

        if settings.version > SETTINGS_VERSION {
            return Err(ExportError::Settings(format!(
                "unsupported settings version {} (newest known is {})",
                settings.version, SETTINGS_VERSION
            )));
        }
        settings.render.validate()?;
        Ok(settings)
    }
}
