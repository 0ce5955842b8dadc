//! Loads optional settings from `<home>/config.toml`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON key-value file; relative paths are resolved against the home dir.
    pub storage_file: Option<PathBuf>,
    /// Key holding the whole prompt store inside the storage file.
    pub storage_key: String,
    pub max_import_bytes: u64,
    /// How long `Copied!` replaces the prompt title.
    pub copy_feedback_ms: u64,
    /// Default tracing filter, overridden by `PROMPT_SHELF_LOG`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_file: None,
            storage_key: "prompts".to_string(),
            max_import_bytes: 1024 * 1024,
            copy_feedback_ms: 1500,
            log_filter: "prompt_shelf=info".to_string(),
        }
    }
}

impl Config {
    /// Reads the config file in `home`. A missing file yields the defaults.
    pub fn load(home: &Path) -> Result<Self, String> {
        let config_path = home.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read {}: {}", CONFIG_FILE, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content)
            .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE, e))?;
        if config.storage_key.trim().is_empty() {
            return Err(format!("{}: storage_key cannot be empty", CONFIG_FILE));
        }
        Ok(config)
    }

    pub fn storage_path(&self, home: &Path) -> PathBuf {
        match &self.storage_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => home.join(path),
            None => home.join("storage.json"),
        }
    }
}
