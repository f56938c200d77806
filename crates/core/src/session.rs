// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! An offline registration session.
//!
//! Everything the capture flow needs from disk (clock skew, reference
//! lists, flagged barcodes) is loaded once when the session opens and then
//! borrowed for every registration.

use std::path::Path;

use chrono::NaiveDate;

use crate::clock::{ClockSkew, ClockSource, SystemClock};
use crate::collect::{collect, generate_password, RegistrationForm};
use crate::error::Result;
use crate::flags::{BadPatronList, BarcodeWarning};
use crate::patron::{PatronDraft, PendingRegistration};
use crate::queue::{OfflineQueue, PendingStore};
use crate::reference::{ReferenceData, ReferenceList};
use crate::slot::SlotStore;
use crate::validate::{validate_against, FieldError};

/// Session state for capturing registrations while offline.
pub struct Session<S: PendingStore = OfflineQueue, C: ClockSource = SystemClock> {
    slots: SlotStore,
    queue: S,
    clock: C,
    skew: ClockSkew,
    reference: ReferenceData,
    bad_patrons: BadPatronList,
}

impl Session {
    /// Opens a session over the data directory, queueing to its
    /// `pending_xacts` file and stamping with the system clock.
    pub fn open(dir: &Path) -> Result<Self> {
        Session::with_parts(SlotStore::new(dir), OfflineQueue::in_dir(dir), SystemClock)
    }
}

impl<S: PendingStore, C: ClockSource> Session<S, C> {
    /// Opens a session from explicit parts.
    ///
    /// Fails with [`Error::MissingPrerequisites`] if any reference list has
    /// not been cached yet.
    pub fn with_parts(slots: SlotStore, queue: S, clock: C) -> Result<Self> {
        let reference = ReferenceData::load(&slots)?;
        let skew = ClockSkew::load(&slots)?;
        let bad_patrons = BadPatronList::load(&slots)?;

        tracing::info!(
            dir = %slots.dir().display(),
            delta = skew.secs(),
            surveys = reference.surveys.len(),
            flagged = bad_patrons.flags.len(),
            "offline registration session opened"
        );

        Ok(Session {
            slots,
            queue,
            clock,
            skew,
            reference,
            bad_patrons,
        })
    }

    pub fn skew(&self) -> ClockSkew {
        self.skew
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn queue(&self) -> &S {
        &self.queue
    }

    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    /// A fresh form: list defaults preselected, a generated password, and
    /// every survey question unanswered.
    pub fn blank_form(&self) -> RegistrationForm {
        let default = |list: &ReferenceList| list.default_value().unwrap_or_default().to_string();
        RegistrationForm {
            profile: default(&self.reference.profiles),
            ident_type: default(&self.reference.ident_types),
            home_ou: default(&self.reference.libraries),
            passwd: generate_password(),
            survey_selections: vec![String::new(); self.reference.surveys.question_count()],
            ..RegistrationForm::default()
        }
    }

    /// Returns the warning for a barcode the server has flagged, if any.
    pub fn barcode_warning(&self, barcode: &str) -> Option<BarcodeWarning> {
        self.bad_patrons.check(barcode)
    }

    /// Collects, validates and queues a form.
    pub fn submit(&self, form: &RegistrationForm, today: NaiveDate) -> Result<PendingRegistration> {
        let collected = collect(form, today);
        self.queue_checked(collected.draft, collected.problems)
    }

    /// Validates a draft and appends it to the queue.
    ///
    /// Nothing is written unless validation passes. The returned record is
    /// exactly what was queued.
    pub fn register(&self, draft: PatronDraft) -> Result<PendingRegistration> {
        self.queue_checked(draft, Vec::new())
    }

    fn queue_checked(
        &self,
        draft: PatronDraft,
        problems: Vec<FieldError>,
    ) -> Result<PendingRegistration> {
        validate_against(&draft, &self.reference, problems)?;

        let record = PendingRegistration::register(draft, self.skew, &self.clock);
        self.queue.append(&record)?;

        tracing::info!(
            barcode = %record.user.card.barcode,
            timestamp = record.timestamp,
            delta = record.delta,
            surveys = record.user.survey_responses.len(),
            "patron registration queued"
        );
        Ok(record)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
