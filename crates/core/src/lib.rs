// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! offreg-core: Offline patron registration queue.
//!
//! This crate captures patron registrations while the workstation cannot
//! reach the library server: it loads the reference lists cached during the
//! last online session, validates each registration, and appends it to a
//! durable pending-transaction queue for a later sync to replay.

pub mod clock;
pub mod collect;
pub mod dob;
pub mod error;
pub mod flags;
pub mod jsonl;
pub mod patron;
pub mod queue;
pub mod reference;
pub mod session;
pub mod slot;
pub mod survey;
pub mod validate;

#[cfg(test)]
mod testing;

pub use clock::{ClockSkew, ClockSource, SystemClock};
pub use collect::{collect, generate_password, Collected, RegistrationForm};
pub use error::{Error, Result};
pub use flags::{BadPatronList, BarcodeWarning, PatronFlag};
pub use patron::{BillingAddress, Card, PatronDraft, PendingRegistration, RecordKind};
pub use queue::{MemoryQueue, OfflineQueue, PendingStore};
pub use reference::{missing_prerequisites, Prerequisite, ReferenceData, ReferenceList};
pub use session::Session;
pub use slot::{Slot, SlotStore};
pub use survey::{SurveyCatalog, SurveyResponse};
pub use validate::{
    missing_fields, unlisted_choices, validate, validate_against, FieldError, FieldProblem,
    FormField, RequiredField,
};
