// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-value slots stored next to the pending queue.
//!
//! Each slot is one JSON document in its own file, named the way the
//! staff client has always named them (`offline_delta`, `offline_ou_list`,
//! ...). Slots are written by the online refresh step and only read during
//! offline capture.

use std::fmt;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// A named single-value slot in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Clock-skew correction in seconds.
    Delta,
    /// Library sites a patron can call home.
    LibraryList,
    /// Patron permission profiles.
    ProfileList,
    /// Identification document types.
    IdentTypeList,
    /// Surveys presented at registration.
    Surveys,
    /// Barcodes flagged lost, expired, barred or blocked.
    BadPatrons,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Delta,
        Slot::LibraryList,
        Slot::ProfileList,
        Slot::IdentTypeList,
        Slot::Surveys,
        Slot::BadPatrons,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Slot::Delta => "offline_delta",
            Slot::LibraryList => "offline_ou_list",
            Slot::ProfileList => "offline_pgt_list",
            Slot::IdentTypeList => "offline_cit_list",
            Slot::Surveys => "offline_asv_list",
            Slot::BadPatrons => "offline_bad_patrons",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for Slot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.file_name() == s)
            .ok_or_else(|| Error::UnknownSlot(s.to_string()))
    }
}

/// Directory-backed slot storage.
#[derive(Debug, Clone)]
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SlotStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }

    /// Returns true if the slot has been written.
    pub fn exists(&self, slot: Slot) -> bool {
        self.path(slot).is_file()
    }

    /// Reads a slot value.
    ///
    /// Returns `Ok(None)` if the slot was never written: on a workstation
    /// that has not synced yet that is the normal state, not a failure.
    pub fn load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>> {
        let content = match fs::read_to_string(self.path(slot)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::CorruptedSlot {
                slot: slot.to_string(),
                reason: e.to_string(),
            })
    }

    /// Replaces a slot value.
    ///
    /// Writes a sibling temp file and renames it over the slot, so readers
    /// see either the old value or the new one.
    pub fn store<T: Serialize>(&self, slot: Slot, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path(slot);
        let tmp = self.dir.join(format!(".{}.tmp", slot.file_name()));
        let json = serde_json::to_vec(value)?;

        let mut file = File::create(&tmp)?;
        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &path)?;

        tracing::info!(slot = %slot, bytes = json.len(), "slot updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
