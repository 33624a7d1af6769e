//! Settings management.

use directories::ProjectDirs;
use lens_core::{LensError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Plugin settings.
///
/// A blank API key means "unauthenticated": key-gated commands are
/// suppressed before any network call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Shodan API key.
    #[serde(default)]
    pub api_key: String,
}

impl Settings {
    /// Returns true if an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Get the settings file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("sh", "lens", "shodan-lens")
            .ok_or_else(|| LensError::Config("could not determine config directory".into()))?;

        Ok(dirs.config_dir().join("settings.toml"))
    }

    /// Load settings from the default location. Missing file yields
    /// defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| LensError::Config(format!("read {}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| LensError::Config(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LensError::Config(format!("create {}: {e}", parent.display())))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| LensError::Config(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| LensError::Config(format!("write {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_unauthenticated() {
        assert!(!Settings::default().has_api_key());
        assert!(!Settings { api_key: "   ".into() }.has_api_key());
        assert!(Settings { api_key: "k".into() }.has_api_key());
    }

    #[test]
    fn roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = Settings { api_key: "secret".into() };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.api_key, "secret");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.api_key.is_empty());
    }
}
