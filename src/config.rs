//! Persisted UI settings.
//!
//! Only conveniences live here (where the picker opened last). The staged
//! selection itself is deliberately never written to disk.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Directory the file picker starts in, remembered across sessions
    pub last_pick_dir: Option<PathBuf>,
}

impl Settings {
    /// Location of the settings file:
    /// - Linux: ~/.config/astro-vision/settings.json
    /// - macOS: ~/Library/Application Support/astro-vision/settings.json
    /// - Windows: %APPDATA%\astro-vision\settings.json
    fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("astro-vision");
        path.push("settings.json");
        Some(path)
    }

    /// Load settings, falling back to defaults on any failure. A missing or
    /// corrupt file is not worth interrupting startup for.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "ignoring corrupt settings: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::settings_path() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no user config directory",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_json()?)
    }

    /// Remember the directory a picked file came from.
    pub fn remember_pick_dir(&mut self, picked_file: &Path) {
        if let Some(parent) = picked_file.parent() {
            self.last_pick_dir = Some(parent.to_path_buf());
        }
    }

    fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_round_trip() {
        let mut settings = Settings::default();
        settings.last_pick_dir = Some(PathBuf::from("/observations/2024"));

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(settings, restored);
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_remember_pick_dir_takes_parent() {
        let mut settings = Settings::default();

        settings.remember_pick_dir(Path::new("/observations/2024/m31.png"));

        assert_eq!(
            settings.last_pick_dir,
            Some(PathBuf::from("/observations/2024"))
        );
    }
}
