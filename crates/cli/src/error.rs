// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the offreg CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] offreg_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("no data directory\n  hint: pass --data-dir or set OFFREG_DATA_DIR")]
    NoDataDir,

    #[error("invalid answer '{0}'\n  hint: use <question>=<answer> with the numbers shown by 'offreg surveys'")]
    InvalidAnswer(String),

    #[error("{0}\n  hint: registration refused because --reject-flagged is set")]
    FlaggedBarcode(String),

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for offreg CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
