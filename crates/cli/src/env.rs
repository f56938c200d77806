// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are named in
//! [`vars`] and read through the typed accessors below.

use std::path::PathBuf;

/// Environment variable name constants.
pub mod vars {
    /// Overrides the data directory.
    pub const OFFREG_DATA_DIR: &str = "OFFREG_DATA_DIR";
    /// Overrides the config file location.
    pub const OFFREG_CONFIG: &str = "OFFREG_CONFIG";
    /// `tracing` filter directives, e.g. `offreg_core=info`.
    pub const OFFREG_LOG: &str = "OFFREG_LOG";
}

/// Returns the value of `OFFREG_DATA_DIR` if set and non-empty.
pub fn data_dir() -> Option<PathBuf> {
    non_empty_path(vars::OFFREG_DATA_DIR)
}

/// Returns the value of `OFFREG_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    non_empty_path(vars::OFFREG_CONFIG)
}

fn non_empty_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
