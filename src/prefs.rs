//! The one piece of durable state: the visitor's theme preference.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// Where the theme preference lives between visits.
pub trait PreferenceStore {
    /// Load stored preferences, falling back to defaults when nothing is
    /// stored or the stored value is unreadable.
    fn load(&self) -> Preferences;
    fn save(&mut self, prefs: &Preferences) -> Result<()>;
}

/// JSON file under the platform config directory.
pub struct DiskStore {
    path: PathBuf,
}

impl DiskStore {
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Preference file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferrisfolio");
        path.push("preferences.json");
        path
    }
}

impl Default for DiskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for DiskStore {
    fn load(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!("failed to parse preferences: {e}, using defaults");
                    Preferences::default()
                }
            },
            Err(_) => Preferences::default(),
        }
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: Option<Preferences>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(prefs: Preferences) -> Self {
        Self {
            stored: Some(prefs),
        }
    }

    pub fn stored(&self) -> Option<Preferences> {
        self.stored
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Preferences {
        self.stored.unwrap_or_default()
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        self.stored = Some(*prefs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Preferences::default().theme, Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Preferences { theme: Theme::Dark }).unwrap();
        assert_eq!(json, r#"{"theme":"dark"}"#);
    }

    #[test]
    fn test_unrecognized_theme_falls_back_to_light() {
        let store = DiskStore::at(PathBuf::from("/nonexistent/preferences.json"));
        assert_eq!(store.load().theme, Theme::Light);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"theme":"sepia"}"#).unwrap();
        let store = DiskStore::at(path);
        assert_eq!(store.load().theme, Theme::Light);
    }

    #[test]
    fn test_disk_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut store = DiskStore::at(path.clone());

        store.save(&Preferences { theme: Theme::Dark }).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().theme, Theme::Dark);

        store.save(&Preferences { theme: Theme::Light }).unwrap();
        assert_eq!(store.load().theme, Theme::Light);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().theme, Theme::Light);
        store.save(&Preferences { theme: Theme::Dark }).unwrap();
        assert_eq!(store.load().theme, Theme::Dark);
        assert_eq!(store.stored().unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
