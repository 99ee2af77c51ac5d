//! Save-file path resolution.
//!
//! Rather than requiring `--file` on every invocation, the path is
//! resolved through a chain:
//!
//! 1. `--file <path>` — explicit per-command override
//! 2. `QUESTLOG_FILE` env var — process/session level
//! 3. `save-file` in `~/.questlog/config.toml` — global default
//! 4. `~/.questlog/quest.txt` — built-in fallback
//!
//! A missing config file is not an error; the chain just moves on.

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::storage::Storage;

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Config {
    save_file: Option<PathBuf>,
}

/// Resolve the save-file path from the tiered resolution chain.
pub fn resolve_save_path(explicit: Option<PathBuf>) -> Result<PathBuf, String> {
    // 1. Explicit --file flag.
    if let Some(path) = explicit {
        return Ok(path);
    }

    // 2. QUESTLOG_FILE environment variable.
    if let Ok(path) = env::var("QUESTLOG_FILE")
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    // 3. ~/.questlog/config.toml.
    if let Some(path) = read_config_save_file()? {
        return Ok(path);
    }

    // 4. Built-in default.
    Storage::default_path().ok_or_else(|| "could not determine home directory".to_string())
}

/// Read the `save-file` field from `~/.questlog/config.toml`, if it exists.
fn read_config_save_file() -> Result<Option<PathBuf>, String> {
    let Some(home) = dirs::home_dir() else {
        return Ok(None);
    };

    let path = home.join(".questlog").join("config.toml");

    let contents = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
    };

    let config: Config = toml::from_str(&contents)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;

    Ok(config.save_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_wins() {
        // An explicit path short-circuits the chain without touching the
        // env or filesystem.
        let result = resolve_save_path(Some(PathBuf::from("/tmp/custom.txt")));
        assert_eq!(result.unwrap(), PathBuf::from("/tmp/custom.txt"));
    }

    #[test]
    fn config_parses_kebab_case_key() {
        let config: Config = toml::from_str("save-file = \"/tmp/quest.txt\"").unwrap();
        assert_eq!(config.save_file, Some(PathBuf::from("/tmp/quest.txt")));
    }

    #[test]
    fn config_tolerates_missing_key() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.save_file.is_none());
    }
}
