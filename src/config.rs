use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const LOCALITY_ENV: &str = "GLOSSALALIA_LOCALITY";
pub const ASSET_ROOT_ENV: &str = "GLOSSALALIA_ASSET_ROOT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown locality: {0}")]
    UnknownLocality(String),
}

/// Which language plays the local role when a deck is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalityPolicy {
    #[default]
    English,
    Spanish,
    /// English on the first entry, Spanish on the second, and so on.
    Alternate,
}

impl LocalityPolicy {
    /// Flag for the entry at `index` in load order.
    pub fn english_local(&self, index: usize) -> bool {
        match self {
            LocalityPolicy::English => true,
            LocalityPolicy::Spanish => false,
            LocalityPolicy::Alternate => index % 2 == 0,
        }
    }
}

impl FromStr for LocalityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(LocalityPolicy::English),
            "spanish" => Ok(LocalityPolicy::Spanish),
            "alternate" => Ok(LocalityPolicy::Alternate),
            other => Err(ConfigError::UnknownLocality(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IdPolicy {
    Sequential { start: u32 },
    /// Ids come from the deck's `id` column.
    FromSource,
}

impl Default for IdPolicy {
    fn default() -> Self {
        IdPolicy::Sequential { start: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub locality: LocalityPolicy,
    pub ids: IdPolicy,
    pub asset_root: PathBuf,
    /// Drop malformed rows with a warning instead of failing the load.
    pub skip_invalid: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            locality: LocalityPolicy::default(),
            ids: IdPolicy::default(),
            asset_root: PathBuf::from("assets"),
            skip_invalid: false,
        }
    }
}

impl DeckConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Defaults overlaid with `GLOSSALALIA_LOCALITY` and `GLOSSALALIA_ASSET_ROOT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, keyed by the env var names.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locality) = lookup(LOCALITY_ENV) {
            self.locality = locality.parse()?;
        }
        if let Some(root) = lookup(ASSET_ROOT_ENV) {
            self.asset_root = PathBuf::from(root);
        }
        Ok(self)
    }
}
