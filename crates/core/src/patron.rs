// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Patron registration records as they are written to the pending queue.
//!
//! Field names follow the JSON the sync consumer already reads, so a
//! record serialized here replays the same way as one captured by the
//! staff client.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockSkew, ClockSource};
use crate::survey::SurveyResponse;

/// The library card issued at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Card {
    pub barcode: String,
}

/// The patron's mailing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BillingAddress {
    pub street1: String,
    /// Optional; written as `""` when blank.
    #[serde(default)]
    pub street2: String,
    pub city: String,
    pub state: String,
    /// Optional; written as `""` when blank.
    #[serde(default)]
    pub country: String,
    pub post_code: String,
}

/// Patron data captured at the registration desk.
///
/// Reference fields (`profile`, `ident_type`, `home_ou`) hold the values
/// of the cached lookup lists, not their labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PatronDraft {
    pub card: Card,
    pub profile: String,
    pub passwd: String,
    pub ident_type: String,
    pub ident_value: String,
    pub first_given_name: String,
    pub family_name: String,
    pub home_ou: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    pub billing_address: BillingAddress,
    #[serde(default)]
    pub survey_responses: Vec<SurveyResponse>,
}

/// Kind of queued transaction. Registration is the only kind captured here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Register,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Register => "register",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One queued unit of work awaiting upload.
///
/// `delta` is stored with the record so a later clock correction never
/// rewrites the history of what was captured under the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PendingRegistration {
    /// Seconds since epoch, already corrected by `delta`.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub delta: i64,
    pub user: PatronDraft,
}

impl PendingRegistration {
    /// Wraps a draft as a registration stamped at the clock's current time.
    pub fn register<C: ClockSource>(user: PatronDraft, skew: ClockSkew, clock: &C) -> Self {
        PendingRegistration {
            timestamp: skew.stamp(clock),
            kind: RecordKind::Register,
            delta: skew.secs(),
            user,
        }
    }
}

#[cfg(test)]
#[path = "patron_tests.rs"]
mod tests;
