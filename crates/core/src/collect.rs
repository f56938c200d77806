// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns raw form input into a typed patron draft.

use chrono::NaiveDate;
use rand::Rng;

use crate::dob::check_date;
use crate::error::Error;
use crate::patron::{BillingAddress, Card, PatronDraft};
use crate::survey::SurveyResponse;
use crate::validate::{FieldError, FormField, RequiredField};

/// Values exactly as entered on the registration form.
///
/// `survey_selections` holds one entry per survey question in display
/// order; an empty entry means the question was not answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub barcode: String,
    pub profile: String,
    pub passwd: String,
    pub ident_type: String,
    pub ident_value: String,
    pub first_given_name: String,
    pub family_name: String,
    pub home_ou: String,
    pub dob: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub post_code: String,
    pub survey_selections: Vec<String>,
}

/// Returns a random four-digit password for a new patron.
pub fn generate_password() -> String {
    rand::thread_rng().gen_range(1000..=9999).to_string()
}

/// A draft built from form input, with the problems found along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    pub draft: PatronDraft,
    /// Unusable birth date or survey selections. Missing fields are left
    /// to the validator.
    pub problems: Vec<FieldError>,
}

/// Builds a draft from form input.
///
/// Values are trimmed and unanswered survey questions are skipped. A
/// non-empty birth date that fails [`check_date`] and any selection that
/// does not decode are recorded as problems rather than stopping
/// collection, so they can be reported alongside every other field.
pub fn collect(form: &RegistrationForm, today: NaiveDate) -> Collected {
    let mut problems = Vec::new();

    let dob = form.dob.trim();
    if !dob.is_empty() {
        if let Err(e) = check_date(dob, today) {
            let reason = match e {
                Error::InvalidDate { reason, .. } => reason,
                other => other.to_string(),
            };
            problems.push(FieldError::invalid(RequiredField::Dob, reason));
        }
    }

    let mut survey_responses = Vec::new();
    for (idx, raw) in form.survey_selections.iter().enumerate() {
        match SurveyResponse::from_selection(raw) {
            Ok(Some(response)) => survey_responses.push(response),
            Ok(None) => {}
            Err(e) => problems.push(FieldError::invalid(
                FormField::SurveyQuestion(idx + 1),
                e.to_string(),
            )),
        }
    }

    let draft = PatronDraft {
        card: Card {
            barcode: text(&form.barcode),
        },
        profile: text(&form.profile),
        passwd: text(&form.passwd),
        ident_type: text(&form.ident_type),
        ident_value: text(&form.ident_value),
        first_given_name: text(&form.first_given_name),
        family_name: text(&form.family_name),
        home_ou: text(&form.home_ou),
        dob: dob.to_string(),
        billing_address: BillingAddress {
            street1: text(&form.street1),
            street2: text(&form.street2),
            city: text(&form.city),
            state: text(&form.state),
            country: text(&form.country),
            post_code: text(&form.post_code),
        },
        survey_responses,
    };

    Collected { draft, problems }
}

fn text(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
