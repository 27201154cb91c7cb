//! User configuration: ~/.binbucks/config.json plus command-line overrides.

use super::persistence::{app_path, load_json_or_default, save_json};
use crate::core::{DEFAULT_PLAYER_NAME, STARTING_BALANCE};
use crate::error::{ArcadeError, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Binbucks in the wallet when the arcade opens.
    pub starting_balance: i64,
    /// Name written to the Snake leaderboard.
    pub player_name: String,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line. `None` keeps the file's value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub starting_balance: Option<i64>,
    pub player_name: Option<String>,
    pub log_level: Option<String>,
}

impl ArcadeConfig {
    /// Read the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(path, self)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(balance) = overrides.starting_balance {
            self.starting_balance = balance;
        }
        if let Some(name) = overrides.player_name {
            self.player_name = name;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| ArcadeError::LogLevel(self.log_level.clone()))
    }
}

/// Default location of the config file.
pub fn config_path() -> Result<PathBuf> {
    app_path(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("binbucks-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let config = ArcadeConfig::default();
        assert_eq!(config.starting_balance, 85);
        assert_eq!(config.player_name, "You");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = ArcadeConfig::load(&scratch("absent.json")).unwrap();
        assert_eq!(config, ArcadeConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch("partial.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "starting_balance": 200 }"#).unwrap();

        let config = ArcadeConfig::load(&path).unwrap();
        assert_eq!(config.starting_balance, 200);
        assert_eq!(config.player_name, "You");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("saved.json");
        let config = ArcadeConfig {
            starting_balance: 12,
            player_name: "Robin".to_string(),
            log_level: "debug".to_string(),
        };
        config.save(&path).unwrap();
        assert_eq!(ArcadeConfig::load(&path).unwrap(), config);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let mut config = ArcadeConfig::default();
        config.apply(ConfigOverrides {
            starting_balance: Some(10),
            player_name: None,
            log_level: Some("trace".to_string()),
        });
        assert_eq!(config.starting_balance, 10);
        assert_eq!(config.player_name, "You");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn test_bad_log_level() {
        let config = ArcadeConfig {
            log_level: "loud".to_string(),
            ..ArcadeConfig::default()
        };
        assert!(matches!(config.level_filter(), Err(ArcadeError::LogLevel(_))));
    }
}
