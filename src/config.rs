use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment override for the catalog file.
pub const CATALOG_ENV: &str = "GALLERY_CATALOG";

#[derive(Debug, Default, Serialize, Deserialize)]
/// Persisted UI/application settings for the gallery.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub catalog_path: Option<PathBuf>,
    pub drawer_open: Option<bool>,
    pub list_width: Option<f32>,
}

impl AppConfig {
    /// Returns the user config file path, if a config directory is available.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gallery").join("config.toml"))
    }

    /// Loads config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Writes config to disk, ignoring filesystem/serialization errors.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(s) = toml::to_string_pretty(self) {
            let _ = std::fs::write(&path, s);
        }
    }

    /// Catalog file to load, preferring the environment override.
    pub fn catalog_source(&self) -> Option<PathBuf> {
        catalog_source_from(std::env::var(CATALOG_ENV).ok(), self)
    }
}

fn catalog_source_from(env_value: Option<String>, config: &AppConfig) -> Option<PathBuf> {
    match env_value.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(PathBuf::from(raw)),
        _ => config.catalog_path.clone(),
    }
}
