// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference lists cached from the server for offline use.
//!
//! A list slot holds `[[[label, value], ...], default_value]`. Values may be
//! strings or numbers on disk; they are compared as strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::slot::{Slot, SlotStore};
use crate::survey::SurveyCatalog;

/// One selectable entry of a reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    pub value: String,
}

/// A cached lookup list with an optional preselected value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ReferenceList {
    entries: Vec<ListEntry>,
    default: Option<String>,
}

impl ReferenceList {
    pub fn new(entries: Vec<ListEntry>, default: Option<String>) -> Self {
        ReferenceList { entries, default }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value preselected when the operator makes no choice.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|v| !v.is_empty())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.label.as_str())
    }
}

fn scalar_text(value: &Value) -> std::result::Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(format!("expected a string or number, got {other}")),
    }
}

impl TryFrom<Value> for ReferenceList {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, String> {
        let Value::Array(parts) = value else {
            return Err("expected [entries, default]".to_string());
        };
        let (items, default) = match parts.as_slice() {
            [items] => (items, None),
            [items, default] => (items, scalar_text(default)?),
            _ => return Err(format!("expected 1 or 2 elements, got {}", parts.len())),
        };
        let Value::Array(items) = items else {
            return Err("entries must be a list".to_string());
        };

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            match item.as_array().map(Vec::as_slice) {
                Some([Value::String(label), value]) => {
                    let value = scalar_text(value)?.unwrap_or_default();
                    entries.push(ListEntry {
                        label: label.clone(),
                        value,
                    });
                }
                _ => return Err(format!("expected [label, value], got {item}")),
            }
        }

        Ok(ReferenceList { entries, default })
    }
}

impl From<ReferenceList> for Value {
    fn from(list: ReferenceList) -> Self {
        let entries: Vec<Value> = list
            .entries
            .into_iter()
            .map(|e| json!([e.label, e.value]))
            .collect();
        json!([entries, list.default])
    }
}

/// A server-generated file that must be cached before offline capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prerequisite {
    LibraryList,
    ProfileList,
    IdentTypeList,
    Surveys,
}

impl Prerequisite {
    /// All prerequisites, in the order they are reported.
    pub const ALL: [Prerequisite; 4] = [
        Prerequisite::LibraryList,
        Prerequisite::ProfileList,
        Prerequisite::IdentTypeList,
        Prerequisite::Surveys,
    ];

    pub fn slot(self) -> Slot {
        match self {
            Prerequisite::LibraryList => Slot::LibraryList,
            Prerequisite::ProfileList => Slot::ProfileList,
            Prerequisite::IdentTypeList => Slot::IdentTypeList,
            Prerequisite::Surveys => Slot::Surveys,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Prerequisite::LibraryList => "library list",
            Prerequisite::ProfileList => "profile list",
            Prerequisite::IdentTypeList => "identification type list",
            Prerequisite::Surveys => "required surveys",
        }
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the prerequisites whose slots have never been written.
pub fn missing_prerequisites(store: &SlotStore) -> Vec<Prerequisite> {
    Prerequisite::ALL
        .into_iter()
        .filter(|p| !store.exists(p.slot()))
        .collect()
}

/// Every lookup list offline registration depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub libraries: ReferenceList,
    pub profiles: ReferenceList,
    pub ident_types: ReferenceList,
    pub surveys: SurveyCatalog,
}

impl ReferenceData {
    /// Loads all reference slots.
    ///
    /// Refuses with [`Error::MissingPrerequisites`] naming every absent
    /// slot: a registration without, say, a valid home library could never
    /// be replayed against the server.
    ///
    /// Absent slots are checked before any slot is parsed, so a corrupt
    /// list never hides the ones that still have to be fetched.
    pub fn load(store: &SlotStore) -> Result<Self> {
        let missing = missing_prerequisites(store);
        if !missing.is_empty() {
            return Err(Error::MissingPrerequisites(missing));
        }

        let libraries = store.load::<ReferenceList>(Slot::LibraryList)?;
        let profiles = store.load::<ReferenceList>(Slot::ProfileList)?;
        let ident_types = store.load::<ReferenceList>(Slot::IdentTypeList)?;
        let surveys = store.load::<SurveyCatalog>(Slot::Surveys)?;

        match (libraries, profiles, ident_types, surveys) {
            (Some(libraries), Some(profiles), Some(ident_types), Some(surveys)) => {
                Ok(ReferenceData {
                    libraries,
                    profiles,
                    ident_types,
                    surveys,
                })
            }
            // A slot removed between the existence check and the read.
            _ => Err(Error::MissingPrerequisites(missing_prerequisites(store))),
        }
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
