// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clock-skew corrected timestamps for queued records.
//!
//! The workstation clock may disagree with the server. An external time-sync
//! step records the difference as `delta` seconds in the `offline_delta`
//! slot; every record stamps itself with `floor(local_now) + delta`.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::slot::{Slot, SlotStore};

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource {
    /// Returns the current time in whole seconds since Unix epoch.
    fn now_secs(&self) -> i64;
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_secs(&self) -> i64 {
        (*self).now_secs()
    }
}

/// Seconds to add to the local clock to approximate server time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockSkew(i64);

impl ClockSkew {
    pub fn new(secs: i64) -> Self {
        ClockSkew(secs)
    }

    pub fn secs(&self) -> i64 {
        self.0
    }

    /// Loads the skew from the `offline_delta` slot, defaulting to zero
    /// when the workstation has never synced its clock.
    pub fn load(store: &SlotStore) -> Result<Self> {
        match store.load::<Value>(Slot::Delta)? {
            Some(value) => Self::from_slot_value(&value),
            None => Ok(ClockSkew::default()),
        }
    }

    /// Parses the slot content: `[seconds]`, or a bare number.
    pub fn from_slot_value(value: &Value) -> Result<Self> {
        let number = match value {
            Value::Array(items) => items.first(),
            other => Some(other),
        };
        let secs = number
            .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)))
            .ok_or_else(|| Error::CorruptedSlot {
                slot: Slot::Delta.to_string(),
                reason: format!("expected [seconds], got {value}"),
            })?;

        Ok(ClockSkew(secs))
    }

    /// Returns the corrected timestamp for "now" on the given clock.
    pub fn stamp<C: ClockSource>(&self, clock: &C) -> i64 {
        clock.now_secs().saturating_add(self.0)
    }
}

impl fmt::Display for ClockSkew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}s", self.0)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
