use crate::interaction::{DEFAULT_MIN_EXTENT, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "FocusOverlay";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Application configuration stored in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Presets file restored at startup (last imported, saved or exported)
    #[serde(default)]
    pub presets_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub show_focus_block: bool,
    /// Pointer distance (px) at which block corners and edges grab
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: i32,
    /// Smallest width/height (px) a drag may shrink the block to
    #[serde(default = "default_min_block_extent")]
    pub min_block_extent: i32,
    #[serde(default = "default_true")]
    pub hotkeys_enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_hit_tolerance() -> i32 {
    DEFAULT_TOLERANCE
}

fn default_min_block_extent() -> i32 {
    DEFAULT_MIN_EXTENT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            presets_path: None,
            show_focus_block: true,
            hit_tolerance: DEFAULT_TOLERANCE,
            min_block_extent: DEFAULT_MIN_EXTENT,
            hotkeys_enabled: true,
        }
    }
}

pub fn app_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
}

pub fn config_path() -> PathBuf {
    app_dir().join("config.json")
}

/// Read a config file. A missing file is not an error and yields defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, data).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    match load_from(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("{e}; using default settings");
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) {
    match save_to(&config_path(), config) {
        Ok(()) => tracing::debug!("Config saved"),
        Err(e) => tracing::warn!("Failed to save config: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "show_focus_block": false }"#).unwrap();
        let cfg = load_from(&path).unwrap();
        assert!(!cfg.show_focus_block);
        assert_eq!(cfg.hit_tolerance, 20);
        assert_eq!(cfg.min_block_extent, 50);
        assert!(cfg.hotkeys_enabled);
        assert_eq!(cfg.presets_path, None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("config.json");
        let cfg = AppConfig {
            presets_path: Some(PathBuf::from("C:/presets/desk.json")),
            hit_tolerance: 12,
            ..AppConfig::default()
        };
        save_to(&path, &cfg).unwrap();
        assert_eq!(load_from(&path).unwrap(), cfg);
    }
}
