// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Barcodes flagged by the server as of the last refresh.
//!
//! Registering a flagged barcode is allowed, but the operator gets warned
//! first.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slot::{Slot, SlotStore};

/// Why a barcode was flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatronFlag {
    Lost,
    Expired,
    Barred,
    Blocked,
    Unknown(String),
}

impl PatronFlag {
    pub fn from_code(code: &str) -> Self {
        match code {
            "L" => PatronFlag::Lost,
            "E" => PatronFlag::Expired,
            "B" => PatronFlag::Barred,
            "D" => PatronFlag::Blocked,
            other => PatronFlag::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for PatronFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatronFlag::Lost => f.write_str("Lost"),
            PatronFlag::Expired => f.write_str("Expired"),
            PatronFlag::Barred => f.write_str("Barred"),
            PatronFlag::Blocked => f.write_str("Blocked"),
            PatronFlag::Unknown(code) => write!(f, "with an unknown code: {code}"),
        }
    }
}

/// Contents of the `offline_bad_patrons` slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadPatronList {
    /// When the server produced the list, as the server formatted it.
    #[serde(default)]
    pub as_of: String,
    /// Barcode to single-letter flag code.
    #[serde(default)]
    pub flags: HashMap<String, String>,
}

impl BadPatronList {
    /// Loads the list, or an empty one if it was never cached.
    pub fn load(store: &SlotStore) -> Result<Self> {
        Ok(store.load(Slot::BadPatrons)?.unwrap_or_default())
    }

    pub fn check(&self, barcode: &str) -> Option<BarcodeWarning> {
        let code = self.flags.get(barcode.trim())?;
        Some(BarcodeWarning {
            barcode: barcode.trim().to_string(),
            as_of: self.as_of.chars().take(15).collect(),
            flag: PatronFlag::from_code(code),
        })
    }
}

/// Warning shown when a flagged barcode is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeWarning {
    pub barcode: String,
    pub as_of: String,
    pub flag: PatronFlag,
}

impl fmt::Display for BarcodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: As of {}, this barcode ({}) was flagged {}",
            self.as_of, self.barcode, self.flag
        )
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
