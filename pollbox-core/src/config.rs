// SPDX-License-Identifier: Apache-2.0

//! YAML configuration parser with strict validation.
//!
//! Configuration covers where the data directory lives and how often the
//! live results view refreshes. Any invalid field is a hard error; a missing
//! file falls back to built-in defaults via
//! [`ConfigLoader::load_or_default`], so a config file is never required.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PollError, PollResult};

/// Lower bound on the results refresh interval, in milliseconds.
const MIN_REFRESH_INTERVAL_MS: u64 = 500;
/// Upper bound on the results refresh interval, in milliseconds.
const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    storage: RawStorageConfig,
    #[serde(default)]
    results: RawResultsConfig,
}

#[derive(Debug, Deserialize)]
struct RawStorageConfig {
    #[serde(default = "default_data_dir")]
    data_dir: String,
}

fn default_data_dir() -> String {
    "./pollbox-data".to_string()
}

impl Default for RawStorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawResultsConfig {
    #[serde(default = "default_refresh_interval_ms")]
    refresh_interval_ms: u64,
}

fn default_refresh_interval_ms() -> u64 {
    5000 // matches the 5-second results refresh of the web view
}

impl Default for RawResultsConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the poll blob and voted markers.
    pub data_dir: PathBuf,
    /// Fixed interval between live-results refreshes, in milliseconds.
    pub refresh_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(default_data_dir()),
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> PollResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PollError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PollError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load from a YAML file, or fall back to defaults when the file does
    /// not exist. Parse and validation errors still fail hard.
    pub fn load_or_default(path: impl AsRef<Path>) -> PollResult<Config> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_file(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> PollResult<Config> {
        let raw: RawConfig = serde_yaml::from_str(content).map_err(|e| PollError::ConfigParse {
            message: format!("YAML parse error: {}", e),
        })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> PollResult<Config> {
        if raw.storage.data_dir.is_empty() {
            return Err(PollError::InvalidFieldValue {
                field: "storage.data_dir",
                value: String::new(),
                reason: "Data directory cannot be empty".to_string(),
            });
        }

        let interval = raw.results.refresh_interval_ms;
        if !(MIN_REFRESH_INTERVAL_MS..=MAX_REFRESH_INTERVAL_MS).contains(&interval) {
            return Err(PollError::InvalidFieldValue {
                field: "results.refresh_interval_ms",
                value: interval.to_string(),
                reason: format!(
                    "Must be between {} and {} ms",
                    MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS
                ),
            });
        }

        Ok(Config {
            data_dir: PathBuf::from(raw.storage.data_dir),
            refresh_interval_ms: interval,
        })
    }
}
