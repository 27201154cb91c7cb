//! JSON file helpers for the ~/.binbucks/ directory.
//!
//! Nothing about a game session is saved; this directory only holds the
//! config file and the log.

use crate::error::{ArcadeError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".binbucks";

/// Get the ~/.binbucks/ directory path, creating it if needed.
pub fn app_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ArcadeError::NoHomeDir)?;
    let dir = home_dir.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.binbucks/.
pub fn app_path(filename: &str) -> Result<PathBuf> {
    Ok(app_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it does not exist.
///
/// A file that exists but does not parse is an error, so a typo in the
/// config is reported instead of silently ignored.
pub fn load_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> Result<T> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&json).map_err(|source| ArcadeError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).map_err(|source| ArcadeError::Serialize {
        what: "json file",
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("binbucks-persistence-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(&scratch("missing.json")).unwrap();
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch("values.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&path).unwrap();
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Vec<String>> = load_json_or_default(&path);
        assert!(matches!(result, Err(ArcadeError::Config { .. })));

        fs::remove_file(path).ok();
    }
}
