// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workstation configuration.
//!
//! Configuration is stored in `config.toml` under the user config directory
//! (or wherever `--config` / `OFFREG_CONFIG` point) and includes:
//! - `data_dir`: where the queue and the cached server files live
//! - `[defaults]`: address values prefilled on every registration

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "offreg";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Workstation configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Data directory (absolute, or relative to the config file).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub defaults: FormDefaults,
}

/// Values prefilled on the registration form when not given explicitly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormDefaults {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if let Some(base) = path.parent() {
            config.data_dir = config
                .data_dir
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir });
        }
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            _ => Config::load(path),
        }
    }
}

/// Loads the effective configuration.
///
/// An explicit `--config` or `OFFREG_CONFIG` file must exist; the default
/// location is optional.
pub fn load_config(flag: Option<&Path>) -> Result<Config> {
    match flag.map(Path::to_path_buf).or_else(env::config_path) {
        Some(path) => Config::load(&path),
        None => match default_config_path() {
            Some(path) => Config::load_or_default(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Resolves the data directory: flag, then `OFFREG_DATA_DIR`, then config,
/// then the platform data directory.
pub fn resolve_data_dir(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    first_dir(
        flag.map(Path::to_path_buf),
        env::data_dir(),
        config,
        default_data_dir(),
    )
    .ok_or(Error::NoDataDir)
}

fn first_dir(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &Config,
    fallback: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or(env).or_else(|| config.data_dir.clone()).or(fallback)
}

/// `<config dir>/offreg/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// `<data dir>/offreg`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
