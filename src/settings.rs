use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{MlsError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    /// Lines below this compensation with no club or position are noise.
    #[serde(default = "default_compensation_floor")]
    pub compensation_floor: f64,
    /// Compensation at or above this counts as a designated player.
    #[serde(default = "default_designated_threshold")]
    pub designated_threshold: f64,
    /// Extra `alias -> abbreviation` club spellings.
    #[serde(default)]
    pub extra_clubs: BTreeMap<String, String>,
}

fn default_compensation_floor() -> f64 {
    30_000.0
}

fn default_designated_threshold() -> f64 {
    1_612_500.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            compensation_floor: default_compensation_floor(),
            designated_threshold: default_designated_threshold(),
            extra_clubs: BTreeMap::new(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mls")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("mls")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable {}: {e}", path.display());
            Settings::default()
        })
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| MlsError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings {
            data_dir: "/tmp/test".to_string(),
            ..Settings::default()
        };
        settings.designated_threshold = 1_683_750.0;
        settings
            .extra_clubs
            .insert("San Diego".to_string(), "SDFC".to_string());
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Settings = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.data_dir, "/tmp/test");
        assert_eq!(loaded.designated_threshold, 1_683_750.0);
        assert_eq!(loaded.extra_clubs.get("San Diego").map(String::as_str), Some("SDFC"));
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.compensation_floor, 30_000.0);
        assert_eq!(s.designated_threshold, 1_612_500.0);
        assert!(s.extra_clubs.is_empty());
        assert!(!s.data_dir.is_empty());
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"data_dir": "/tmp/test"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.compensation_floor, 30_000.0);
        assert_eq!(s.designated_threshold, 1_612_500.0);
        assert_eq!(s.data_dir, "/tmp/test");
    }
}
