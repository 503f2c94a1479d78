use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::BaconError;

pub const CONFIG_ENV: &str = "BACON_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "bacon.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Runtime settings, optionally read from a TOML file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reference actor every score is measured from
    #[serde(default = "default_anchor")]
    pub anchor: String,
    /// Print the connecting chain after each score
    #[serde(default)]
    pub list_path: bool,
    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_anchor() -> String {
    "Kevin Bacon".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            list_path: false,
            log_level: default_log_level(),
        }
    }
}

/// Picks the config file to read. An explicit path or the environment
/// variable must exist; the default file is only used when present.
fn config_path(explicit: Option<&Path>, from_env: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.is_file().then_some(default)
}

impl Config {
    /// Load configuration
    ///
    /// Looks for the file in this order:
    /// 1. `explicit` (the `--config` flag)
    /// 2. Path in the BACON_CONFIG environment variable
    /// 3. ./bacon.toml if it exists
    ///
    /// Falls back to defaults when none of these apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match config_path(explicit, std::env::var(CONFIG_ENV).ok()) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), BaconError> {
        if self.anchor.trim().is_empty() {
            return Err(BaconError::Config("anchor must name an actor".to_string()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(BaconError::Config(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join("|"),
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.anchor, "Kevin Bacon");
        assert!(!config.list_path);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            "anchor = \"Ed Harris\"\nlist_path = true\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.anchor, "Ed Harris");
        assert!(config.list_path);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_blank_anchor() {
        let err = Config::from_toml_str("anchor = \"   \"").unwrap_err();
        assert!(format!("{:#}", err).contains("anchor"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Config::from_toml_str("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(Config::from_toml_str("anker = \"Kevin Bacon\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "anchor = \"Russell Crowe\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.anchor, "Russell Crowe");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_config_path_precedence() {
        let explicit = PathBuf::from("flag.toml");
        let picked = config_path(Some(&explicit), Some("env.toml".to_string()));
        assert_eq!(picked, Some(explicit));

        let picked = config_path(None, Some("env.toml".to_string()));
        assert_eq!(picked, Some(PathBuf::from("env.toml")));
    }
}
