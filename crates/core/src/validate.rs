// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completeness check run on a draft before it may be queued.
//!
//! Every problem on the form is reported at once so the operator can fix
//! the whole form in one pass.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};
use crate::patron::PatronDraft;
use crate::reference::ReferenceData;

/// A field that must be filled in before a registration can be queued.
/// Declaration order is the order fields are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequiredField {
    PostCode,
    State,
    City,
    Street1,
    IdentValue,
    IdentType,
    Dob,
    FirstGivenName,
    FamilyName,
    Passwd,
    Barcode,
    Profile,
    HomeOu,
}

impl RequiredField {
    /// All required fields, in the order they are reported.
    pub const ALL: [RequiredField; 13] = [
        RequiredField::PostCode,
        RequiredField::State,
        RequiredField::City,
        RequiredField::Street1,
        RequiredField::IdentValue,
        RequiredField::IdentType,
        RequiredField::Dob,
        RequiredField::FirstGivenName,
        RequiredField::FamilyName,
        RequiredField::Passwd,
        RequiredField::Barcode,
        RequiredField::Profile,
        RequiredField::HomeOu,
    ];

    /// Path of the field within the serialized draft.
    pub fn name(self) -> &'static str {
        match self {
            RequiredField::PostCode => "billing_address.post_code",
            RequiredField::State => "billing_address.state",
            RequiredField::City => "billing_address.city",
            RequiredField::Street1 => "billing_address.street1",
            RequiredField::IdentValue => "ident_value",
            RequiredField::IdentType => "ident_type",
            RequiredField::Dob => "dob",
            RequiredField::FirstGivenName => "first_given_name",
            RequiredField::FamilyName => "family_name",
            RequiredField::Passwd => "passwd",
            RequiredField::Barcode => "card.barcode",
            RequiredField::Profile => "profile",
            RequiredField::HomeOu => "home_ou",
        }
    }

    /// Label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::PostCode => "Address : Postal Code",
            RequiredField::State => "Address : State",
            RequiredField::City => "Address : City",
            RequiredField::Street1 => "Address : Line 1",
            RequiredField::IdentValue => "Identification Value",
            RequiredField::IdentType => "Identification Type",
            RequiredField::Dob => "Date of Birth",
            RequiredField::FirstGivenName => "First Name",
            RequiredField::FamilyName => "Last Name",
            RequiredField::Passwd => "Password",
            RequiredField::Barcode => "Barcode",
            RequiredField::Profile => "Profile",
            RequiredField::HomeOu => "Home Library",
        }
    }

    fn value(self, draft: &PatronDraft) -> &str {
        let address = &draft.billing_address;
        match self {
            RequiredField::PostCode => &address.post_code,
            RequiredField::State => &address.state,
            RequiredField::City => &address.city,
            RequiredField::Street1 => &address.street1,
            RequiredField::IdentValue => &draft.ident_value,
            RequiredField::IdentType => &draft.ident_type,
            RequiredField::Dob => &draft.dob,
            RequiredField::FirstGivenName => &draft.first_given_name,
            RequiredField::FamilyName => &draft.family_name,
            RequiredField::Passwd => &draft.passwd,
            RequiredField::Barcode => &draft.card.barcode,
            RequiredField::Profile => &draft.profile,
            RequiredField::HomeOu => &draft.home_ou,
        }
    }
}

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Required(RequiredField),
    /// A survey question, numbered from 1 in display order.
    SurveyQuestion(usize),
}

impl FormField {
    pub fn label(self) -> Cow<'static, str> {
        match self {
            FormField::Required(field) => Cow::Borrowed(field.label()),
            FormField::SurveyQuestion(number) => Cow::Owned(format!("Survey question {number}")),
        }
    }
}

impl From<RequiredField> for FormField {
    fn from(field: RequiredField) -> Self {
        FormField::Required(field)
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    /// Entered but unusable; holds the reason shown to the operator.
    Invalid(String),
    /// Not one of the values cached from the server.
    Unlisted(String),
}

/// One problem found on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn missing(field: RequiredField) -> Self {
        FieldError {
            field: field.into(),
            problem: FieldProblem::Missing,
        }
    }

    pub fn invalid(field: impl Into<FormField>, reason: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            problem: FieldProblem::Invalid(reason.into()),
        }
    }

    pub fn unlisted(field: RequiredField, value: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            problem: FieldProblem::Unlisted(value.into()),
        }
    }

    pub fn label(&self) -> Cow<'static, str> {
        self.field.label()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "Missing {}", self.label()),
            FieldProblem::Invalid(reason) => write!(f, "{}: {}", self.label(), reason),
            FieldProblem::Unlisted(value) => {
                write!(f, "'{}' is not a listed {}", value, self.label())
            }
        }
    }
}

/// Returns every required field the draft leaves empty or blank.
pub fn missing_fields(draft: &PatronDraft) -> Vec<FieldError> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| field.value(draft).trim().is_empty())
        .map(FieldError::missing)
        .collect()
}

/// Returns the list-backed fields whose non-empty value is not in the
/// corresponding cached list.
pub fn unlisted_choices(draft: &PatronDraft, reference: &ReferenceData) -> Vec<FieldError> {
    let choices = [
        (RequiredField::IdentType, &reference.ident_types),
        (RequiredField::Profile, &reference.profiles),
        (RequiredField::HomeOu, &reference.libraries),
    ];
    choices
        .into_iter()
        .filter_map(|(field, list)| {
            let value = field.value(draft).trim();
            (!value.is_empty() && !list.contains(value)).then(|| FieldError::unlisted(field, value))
        })
        .collect()
}

/// Validate that a draft is complete enough to queue.
pub fn validate(draft: &PatronDraft) -> Result<()> {
    fail_on(missing_fields(draft))
}

/// The full check run before queueing.
///
/// `errors` holds problems already found while collecting the form. Missing
/// fields and unlisted choices are added, at most one entry per field, and
/// everything is reported together in field order.
pub fn validate_against(
    draft: &PatronDraft,
    reference: &ReferenceData,
    mut errors: Vec<FieldError>,
) -> Result<()> {
    let found = missing_fields(draft)
        .into_iter()
        .chain(unlisted_choices(draft, reference));
    for error in found {
        if !errors.iter().any(|e| e.field == error.field) {
            errors.push(error);
        }
    }
    errors.sort_by_key(|e| e.field);
    fail_on(errors)
}

fn fail_on(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationFailed(errors))
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
