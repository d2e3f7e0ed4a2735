//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Asset list
    pub items_per_page: usize,

    // Display
    pub currency_symbol: String,

    // Paths
    pub database_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            currency_symbol: "R".to_string(),
            database_path: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        let settings: Self = match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        };
        settings.validated()
    }

    /// Replaces values the list engine would reject.
    fn validated(mut self) -> Self {
        if self.items_per_page == 0 {
            warn!(
                default = DEFAULT_ITEMS_PER_PAGE,
                "items_per_page must be at least 1, using default"
            );
            self.items_per_page = DEFAULT_ITEMS_PER_PAGE;
        }
        self
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn database_path_or_default(&self, data_dir: &Path) -> PathBuf {
        self.database_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("assets.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.items_per_page, 5);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            items_per_page: 10,
            currency_symbol: "$".to_string(),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"currency_symbol":"€"}"#).unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.items_per_page, 5);
    }

    #[test]
    fn zero_items_per_page_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"items_per_page":0}"#).unwrap();
        assert_eq!(Settings::load(dir.path()).items_per_page, 5);
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn database_path_override() {
        let data_dir = Path::new("/data");
        let mut settings = Settings::default();
        assert_eq!(settings.database_path_or_default(data_dir), data_dir.join("assets.db"));

        settings.database_path = Some("/elsewhere/inventory.db".to_string());
        assert_eq!(
            settings.database_path_or_default(data_dir),
            PathBuf::from("/elsewhere/inventory.db")
        );
    }
}
