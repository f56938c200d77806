// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for offreg-core operations.

use thiserror::Error;

use crate::reference::Prerequisite;
use crate::validate::FieldError;

/// All possible errors that can occur in offreg-core operations.
///
/// Validation and storage failures are kept apart because the operator's
/// recovery differs: fix the form versus retry once the disk is healthy.
#[derive(Debug, Error)]
pub enum Error {
    #[error("offline patron registration requires some server-generated files\n{}\n  hint: log in periodically to retrieve these files", format_prerequisites(.0))]
    MissingPrerequisites(Vec<Prerequisite>),

    #[error("please fix the following:\n{}", format_field_errors(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("{reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid survey selection '{value}': {reason}")]
    InvalidSurveySelection { value: String, reason: String },

    #[error("unknown slot '{0}'\n  hint: valid slots are: offline_delta, offline_ou_list, offline_pgt_list, offline_cit_list, offline_asv_list, offline_bad_patrons")]
    UnknownSlot(String),

    #[error("corrupted slot {slot}: {reason}")]
    CorruptedSlot { slot: String, reason: String },

    #[error("corrupted record in {path} at line {line}: {reason}")]
    CorruptedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for failures the operator fixes by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::ValidationFailed(_)
                | Error::InvalidDate { .. }
                | Error::InvalidSurveySelection { .. }
        )
    }

    /// True for failures of the backing store itself.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::Json(_)
                | Error::CorruptedSlot { .. }
                | Error::CorruptedRecord { .. }
        )
    }
}

fn format_prerequisites(missing: &[Prerequisite]) -> String {
    missing
        .iter()
        .map(|p| format!("  Missing {p}."))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A specialized Result type for offreg-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
