//! Game configuration loaded from JSON, with defaults for every field.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::deck::validate_symbols;

const APP_DIR: &str = "memory-match";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GameConfig {
    /// Every symbol must appear exactly twice.
    #[serde(default = "GameConfig::default_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "GameConfig::default_mismatch_delay_ms")]
    pub mismatch_delay_ms: u64,
    #[serde(default = "GameConfig::default_win_banner_delay_ms")]
    pub win_banner_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: Self::default_symbols(),
            mismatch_delay_ms: Self::default_mismatch_delay_ms(),
            win_banner_delay_ms: Self::default_win_banner_delay_ms(),
        }
    }
}

impl GameConfig {
    fn default_symbols() -> Vec<String> {
        ["red", "blue", "green", "orange", "purple"]
            .iter()
            .cycle()
            .take(10)
            .map(|s| s.to_string())
            .collect()
    }

    fn default_mismatch_delay_ms() -> u64 {
        1000
    }

    fn default_win_banner_delay_ms() -> u64 {
        1500
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn win_banner_delay(&self) -> Duration {
        Duration::from_millis(self.win_banner_delay_ms)
    }

    /// Load from `path`, or from the user config file if it exists, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject a malformed symbol list before any session is built.
    pub fn validate(&self) -> Result<()> {
        validate_symbols(&self.symbols).context("Invalid symbol list in config")?;
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Platform data directory for the database and log files, created on demand.
pub fn data_dir() -> Result<PathBuf> {
    let mut path =
        dirs::data_dir().context("Unable to determine data directory for your platform")?;

    path.push(APP_DIR);

    std::fs::create_dir_all(&path).context("Failed to create memory-match data directory")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_game() {
        let config = GameConfig::default();
        assert_eq!(config.symbols.len(), 10);
        assert_eq!(config.symbols[0], "red");
        assert_eq!(config.symbols[5], "red");
        assert_eq!(config.mismatch_delay(), Duration::from_millis(1000));
        assert_eq!(config.win_banner_delay(), Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mismatch_delay_ms": 250 }}"#).unwrap();

        let config = GameConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.mismatch_delay_ms, 250);
        assert_eq!(config.win_banner_delay_ms, 1500);
        assert_eq!(config.symbols, GameConfig::default().symbols);
    }

    #[test]
    fn test_load_rejects_unpaired_symbols() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "symbols": ["cat", "dog", "cat"] }}"#).unwrap();

        let err = GameConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("odd number"));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(GameConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(GameConfig::load(Some(&missing)).is_err());
    }
}
