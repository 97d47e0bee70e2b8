//! Configuration
//!
//! A small JSON record holding the storage directory. The config path comes
//! from the `MEMO_CONF_PATH` environment variable with a platform config-dir
//! fallback; a missing file is auto-created with defaults on first run. The
//! loaded value is constructed in `main` and passed into every operation,
//! never read from ambient global state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable overriding the config file location
pub const CONF_PATH_ENV: &str = "MEMO_CONF_PATH";

/// On-disk configuration record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one JSON file per memo
    pub saves_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            saves_dir: base_config_dir().join("memo").join("saves"),
        }
    }
}

impl Config {
    /// Where the config file lives: `MEMO_CONF_PATH` or the platform default
    pub fn default_path() -> PathBuf {
        match std::env::var(CONF_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => base_config_dir().join("memo.conf"),
        }
    }

    /// Load the config file, writing a default one first if it is missing
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(&config)?)?;
            log::info!("Wrote default config to {}", path.display());
        }

        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Create the saves directory if it does not exist yet
    pub fn ensure_saves_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.saves_dir)?;
        Ok(())
    }
}

fn base_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_init_creates_default_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memo.conf");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.saves_dir, Config::default().saves_dir);

        // Second load reads the file it just wrote.
        let again = Config::load_or_init(&path).unwrap();
        assert_eq!(again.saves_dir, config.saves_dir);
    }

    #[test]
    fn test_load_existing_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("memo.conf");
        let saves = tmp.path().join("saves");
        fs::write(
            &path,
            format!(r#"{{ "saves_dir": {:?} }}"#, saves.to_string_lossy()),
        )
        .unwrap();

        let config = Config::load_or_init(&path).unwrap();
        assert_eq!(config.saves_dir, saves);
    }

    #[test]
    fn test_ensure_saves_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            saves_dir: tmp.path().join("memo").join("saves"),
        };
        config.ensure_saves_dir().unwrap();
        config.ensure_saves_dir().unwrap();
        assert!(config.saves_dir.is_dir());
    }
}
