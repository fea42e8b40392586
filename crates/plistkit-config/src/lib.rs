//! Configuration for plistkit
//!
//! Settings are read from `plistkit.toml`:
//! - `$PLISTKIT_CONFIG` when set and non-empty
//! - otherwise `~/.config/plistkit/plistkit.toml` (the platform config dir on Windows)
//!
//! A missing file yields the defaults.

use plistkit::{write_to_path, BuilderOptions, Document, InfoPlist, PlistError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "PLISTKIT_CONFIG";

const CONFIG_FILE_NAME: &str = "plistkit.toml";

/// Errors that can occur while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write document: {0}")]
    Document(#[from] PlistError),

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Point at typed accessors when a known key is written raw
    #[serde(default = "default_advisories")]
    pub advisories: bool,

    /// Where generated documents are written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Host defaults an extending Info.plist is resolved against
    #[serde(default, skip_serializing_if = "Document::is_empty")]
    pub info_plist_defaults: Document,
}

fn default_advisories() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            advisories: default_advisories(),
            output_dir: None,
            info_plist_defaults: Document::new(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        #[cfg(not(target_os = "windows"))]
        let dir = dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join(".config")
            .join("plistkit");

        #[cfg(target_os = "windows")]
        let dir = dirs::config_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join("plistkit");

        Ok(dir.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(&Self::path()?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!("Config saved to {:?}", path);
        Ok(())
    }

    /// Read a scalar setting by its CLI-style key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "advisories" => Some(self.advisories.to_string()),
            "output-dir" => self.output_dir.clone(),
            _ => None,
        }
    }

    /// Update a scalar setting by its CLI-style key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "advisories" => {
                self.advisories = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            "output-dir" => self.output_dir = Some(value.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn builder_options(&self) -> BuilderOptions {
        BuilderOptions {
            advisories: self.advisories,
        }
    }

    pub fn info_plist_defaults(&self) -> &Document {
        &self.info_plist_defaults
    }

    /// Output directory, defaulting to the current directory
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
    }

    /// Final Info.plist: the configured defaults with `plist`'s overrides on top
    pub fn resolve_info_plist(&self, plist: &InfoPlist) -> Document {
        plist.resolve(&self.info_plist_defaults)
    }

    /// Write `document` as `file_name` inside the output directory
    pub fn write_document(
        &self,
        file_name: &str,
        document: &Document,
    ) -> Result<PathBuf, ConfigError> {
        let path = self.output_path().join(file_name);
        write_to_path(document, &path)?;
        Ok(path)
    }
}
