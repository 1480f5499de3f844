use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use log::{
    info,
    warn,
};
use serde::Deserialize;

use crate::core::GuideError;

const APP_NAME: &str = "optional-guide";
pub const CONFIG_FILE: &str = "config.json";

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 3.0;

/// Startup preferences. Read once, never written back: nothing from a session is saved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dark_mode: bool,
    pub zoom_factor: f32,
    pub particles: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            zoom_factor: 1.2,
            particles: true,
            window_width: 1200.0,
            window_height: 900.0,
        }
    }
}

impl AppConfig {
    fn sanitized(mut self) -> Self {
        if !self.zoom_factor.is_finite() {
            self.zoom_factor = Self::default().zoom_factor;
        }
        self.zoom_factor = self.zoom_factor.clamp(MIN_ZOOM, MAX_ZOOM);
        self.window_width = self.window_width.max(480.0);
        self.window_height = self.window_height.max(360.0);
        self
    }
}

pub fn get_app_config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(config_dir) => config_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn get_config_file_path(filename: &str) -> PathBuf {
    get_app_config_dir().join(filename)
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T, GuideError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    info!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn load_config(path: &Path) -> Result<AppConfig, GuideError> {
    load_json::<AppConfig>(path).map(AppConfig::sanitized)
}

/// Loads the config, falling back to defaults. The error is handed back so the UI can report it.
pub fn load_config_or_default(path: &Path) -> (AppConfig, Option<GuideError>) {
    match load_config(path) {
        Ok(config) => (config, None),
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            (AppConfig::default(), Some(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("optional-guide-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("missing.json");
        let config = load_config(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults_and_clamps() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{ "dark_mode": true, "zoom_factor": 9.0 }"#).unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(config.dark_mode);
        assert_eq!(config.zoom_factor, MAX_ZOOM);
        assert!(config.particles);
        assert_eq!(config.window_width, 1200.0);
    }

    #[test]
    fn test_malformed_file_reports_error() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{ dark_mode: yes").unwrap();

        let (config, error) = load_config_or_default(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(matches!(error, Some(GuideError::Json(_))));
    }
}
