//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where finished downloads go; defaults to the public downloads folder
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// How many downloads may run at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
    /// Explicit extractor binary; defaults to `yt-dlp` on PATH
    #[serde(default)]
    pub ytdlp_path: Option<PathBuf>,
}

fn default_max_concurrent() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_dir: None,
            max_concurrent: default_max_concurrent(),
            ytdlp_path: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tunegrab", "Tunegrab")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Directory downloads land in
    pub fn effective_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(crate::platform::download_dir)
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_bound_concurrency() {
        let settings = Settings::default();
        assert_eq!(settings.max_concurrent, 3);
        assert!(settings.download_dir.is_none());
    }

    #[test]
    fn roundtrips_through_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            download_dir: Some(PathBuf::from("/music")),
            max_concurrent: 1,
            ytdlp_path: Some(PathBuf::from("/usr/local/bin/yt-dlp")),
        };

        settings.save_to_file(&path).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn override_beats_platform_download_dir() {
        let settings = Settings {
            download_dir: Some(PathBuf::from("/music")),
            ..Settings::default()
        };
        assert_eq!(settings.effective_download_dir(), PathBuf::from("/music"));
    }
}
