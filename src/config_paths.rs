//! Where specimen-studio keeps its files
//!
//! Preferences, user templates and logs sit in the per-user config
//! directory (`$XDG_CONFIG_HOME` or `~/.config` on Unix/macOS, `%APPDATA%` on
//! Windows). Specimen documents and uploaded images default to the platform
//! data directory unless the config or CLI points elsewhere.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "specimen-studio";

/// Platform directory config lives under, before the app subdirectory
fn config_home() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

/// Root of the studio's data files: `<data dir>/specimen-studio`
fn data_root() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

pub fn config_dir() -> Option<PathBuf> {
    config_home().map(|home| home.join(APP_DIR))
}

/// Studio preferences, see [`crate::config::StudioConfig`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// User page templates (`*.yaml`), overriding builtins with the same id
pub fn templates_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("templates"))
}

/// Daily rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Fallback for the specimen store when none is configured
pub fn default_store_dir() -> Option<PathBuf> {
    data_root().map(|root| root.join("specimens"))
}

/// Fallback for uploaded background images when none is configured
pub fn default_assets_dir() -> Option<PathBuf> {
    data_root().map(|root| root.join("assets"))
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_files_share_app_dir() {
        let Some(dir) = config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(config_file(), Some(dir.join("config.yaml")));
        assert_eq!(templates_dir(), Some(dir.join("templates")));
        assert_eq!(logs_dir(), Some(dir.join("logs")));
    }

    #[test]
    fn test_data_defaults_are_siblings() {
        let (Some(store), Some(assets)) = (default_store_dir(), default_assets_dir()) else {
            return;
        };
        assert_eq!(store.parent(), assets.parent());
        assert!(store.ends_with("specimen-studio/specimens"));
    }
}
