// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cache command implementation.
//!
//! Installs server-generated files into slots. Content is checked against
//! the slot's format before the atomic write, so a bad file never replaces
//! a good one.

use std::fs;
use std::path::Path;

use offreg_core::{BadPatronList, ClockSkew, ReferenceList, Slot, SlotStore, SurveyCatalog};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Context;
use crate::error::{Error, Result};

pub fn set(ctx: &Context, slot: &str, file: &Path) -> Result<()> {
    let slot: Slot = slot.parse()?;
    let content = fs::read_to_string(file).map_err(|source| Error::ReadInput {
        path: file.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|e| corrupted(slot, e))?;
    check_slot_value(slot, &value)?;

    SlotStore::new(&ctx.data_dir).store(slot, &value)?;
    println!("Installed {}", slot);
    Ok(())
}

pub fn show(ctx: &Context) -> Result<()> {
    for line in slot_lines(&SlotStore::new(&ctx.data_dir)) {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) fn slot_lines(slots: &SlotStore) -> Vec<String> {
    Slot::ALL
        .into_iter()
        .map(|slot| {
            let state = if slots.exists(slot) { "cached" } else { "missing" };
            format!(
                "{:<20} {:<8} {}",
                slot.file_name(),
                state,
                slots.path(slot).display()
            )
        })
        .collect()
}

/// Checks that `value` is well-formed content for `slot`.
pub(crate) fn check_slot_value(slot: Slot, value: &Value) -> Result<()> {
    match slot {
        Slot::Delta => {
            ClockSkew::from_slot_value(value)?;
        }
        Slot::LibraryList | Slot::ProfileList | Slot::IdentTypeList => {
            parse::<ReferenceList>(slot, value)?;
        }
        Slot::Surveys => parse::<SurveyCatalog>(slot, value)?.verify()?,
        Slot::BadPatrons => {
            parse::<BadPatronList>(slot, value)?;
        }
    }
    Ok(())
}

fn parse<T: DeserializeOwned>(slot: Slot, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| corrupted(slot, e))
}

fn corrupted(slot: Slot, reason: impl ToString) -> Error {
    offreg_core::Error::CorruptedSlot {
        slot: slot.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
