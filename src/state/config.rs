/// Application configuration
///
/// Layered, later layers win:
/// 1. Built-in defaults
/// 2. `config.json` in the user config directory:
///    - Linux: ~/.config/folio/config.json
///    - macOS: ~/Library/Application Support/folio/config.json
///    - Windows: %APPDATA%\folio\config.json
/// 3. Environment: `FOLIO_ASSETS_DIR`, `FOLIO_CONTENT`

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};

pub const ENV_ASSETS_DIR: &str = "FOLIO_ASSETS_DIR";
pub const ENV_CONTENT: &str = "FOLIO_CONTENT";

/// Smallest window the layout still fits in
pub const MIN_WINDOW: (f32, f32) = (640.0, 480.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root directory that image references are resolved against
    pub assets_dir: PathBuf,
    /// Replacement for the embedded portfolio document
    pub content_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("public"),
            content_path: None,
            window_width: 1100.0,
            window_height: 820.0,
            theme: ThemeChoice::Dark,
        }
    }
}

impl AppConfig {
    /// Load the full stack of layers. A broken config file is logged
    /// and skipped rather than aborting startup.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config file: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Where the user config file lives, if a config directory exists
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("folio");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
        Self::from_json(&raw, &path.display().to_string())
    }

    pub fn from_json(raw: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FolioError::json(origin, e))
    }

    /// Window size to open with. Values that aren't finite and positive
    /// fall back to the default; the rest are raised to `MIN_WINDOW`.
    pub fn window_size(&self) -> (f32, f32) {
        let defaults = Self::default();
        let pick = |value: f32, default: f32, min: f32| {
            if value.is_finite() && value > 0.0 {
                value.max(min)
            } else {
                default
            }
        };
        (
            pick(self.window_width, defaults.window_width, MIN_WINDOW.0),
            pick(self.window_height, defaults.window_height, MIN_WINDOW.1),
        )
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_ASSETS_DIR).filter(|v| !v.is_empty()) {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup(ENV_CONTENT).filter(|v| !v.is_empty()) {
            self.content_path = Some(PathBuf::from(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "theme": "light" }"#, "test").unwrap();

        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.assets_dir, PathBuf::from("public"));
        assert_eq!(config.window_width, 1100.0);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "assets_dir": "/srv/img" }}"#).unwrap();

        let mut config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/img"));

        config.apply_env(|key| match key {
            ENV_ASSETS_DIR => Some("/opt/folio".to_string()),
            ENV_CONTENT => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.assets_dir, PathBuf::from("/opt/folio"));
        assert_eq!(config.content_path, None);
    }

    #[test]
    fn test_window_size_rejects_nonsense() {
        let config = AppConfig::from_json(
            r#"{ "window_width": 0, "window_height": -300 }"#,
            "test",
        )
        .unwrap();
        assert_eq!(config.window_size(), (1100.0, 820.0));

        let config = AppConfig {
            window_width: f32::NAN,
            window_height: f32::INFINITY,
            ..AppConfig::default()
        };
        assert_eq!(config.window_size(), (1100.0, 820.0));
    }

    #[test]
    fn test_window_size_is_raised_to_minimum() {
        let config = AppConfig::from_json(
            r#"{ "window_width": 200, "window_height": 1000 }"#,
            "test",
        )
        .unwrap();
        assert_eq!(config.window_size(), (MIN_WINDOW.0, 1000.0));
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = AppConfig::from_json("{ theme: }", "config.json").unwrap_err();
        assert!(matches!(err, FolioError::Json { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_file(Path::new("/nonexistent/folio.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io { .. }));
    }
}
