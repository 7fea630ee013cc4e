//! Studio configuration persistence
//!
//! Stores user preferences in `~/.config/specimen-studio/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fonts::FontEntry;
use crate::model::{Orientation, SpecimenFormat};

/// Studio configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Directory holding `<specimen-id>.json` documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
    /// Directory uploaded background images are copied into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    /// Paper format for new specimens
    pub default_format: SpecimenFormat,
    /// Orientation for new specimens
    pub default_orientation: Orientation,
    /// Template applied to the first page of new specimens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,
    /// Fonts offered to the cell font control
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<FontEntry>,
}

impl StudioConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Specimen store directory: configured, else the platform default
    pub fn store_dir(&self) -> Option<PathBuf> {
        self.store_dir
            .clone()
            .or_else(crate::config_paths::default_store_dir)
    }

    /// Asset directory: configured, else the platform default
    pub fn assets_dir(&self) -> Option<PathBuf> {
        self.assets_dir
            .clone()
            .or_else(crate::config_paths::default_assets_dir)
    }
}
