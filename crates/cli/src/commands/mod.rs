// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::Result;

pub mod cache;
pub mod lists;
pub mod pending;
pub mod register;
pub mod schema;
pub mod status;
pub mod surveys;

/// Resolved configuration and data directory shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub data_dir: PathBuf,
}

impl Context {
    pub fn resolve(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let config = config::load_config(config_path)?;
        let data_dir = config::resolve_data_dir(data_dir, &config)?;
        Ok(Context { config, data_dir })
    }

    /// Context over an explicit directory with default configuration.
    #[cfg(test)]
    pub fn in_dir(dir: &Path) -> Self {
        Context {
            config: Config::default(),
            data_dir: dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing;
