// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Register command implementation.

use chrono::{Local, NaiveDate};
use offreg_core::{ClockSource, PendingRegistration, PendingStore, RegistrationForm, Session};

use super::Context;
use crate::cli::{OutputFormat, PatronArgs};
use crate::config::Config;
use crate::error::{Error, Result};

pub fn run(
    ctx: &Context,
    patron: &PatronArgs,
    answers: &[String],
    reject_flagged: bool,
    output: OutputFormat,
) -> Result<()> {
    let session = Session::open(&ctx.data_dir)?;
    let today = Local::now().date_naive();
    let record = run_impl(&session, &ctx.config, patron, answers, reject_flagged, today)?;

    match output {
        OutputFormat::Text => {
            println!("Patron Registration Saved");
            if patron.password.is_none() {
                println!("Password: {}", record.user.passwd);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

/// Builds the form, checks the barcode against the flagged list, and queues.
pub(crate) fn run_impl<S: PendingStore, C: ClockSource>(
    session: &Session<S, C>,
    config: &Config,
    patron: &PatronArgs,
    answers: &[String],
    reject_flagged: bool,
    today: NaiveDate,
) -> Result<PendingRegistration> {
    let form = build_form(session, config, patron, answers)?;

    if let Some(warning) = session.barcode_warning(&form.barcode) {
        if reject_flagged {
            return Err(Error::FlaggedBarcode(warning.to_string()));
        }
        eprintln!("{}", warning);
    }

    Ok(session.submit(&form, today)?)
}

/// Overlays command-line values and configured defaults onto a blank form.
pub(crate) fn build_form<S: PendingStore, C: ClockSource>(
    session: &Session<S, C>,
    config: &Config,
    patron: &PatronArgs,
    answers: &[String],
) -> Result<RegistrationForm> {
    let mut form = session.blank_form();

    let state = patron.state.as_ref().or(config.defaults.state.as_ref());
    let country = patron.country.as_ref().or(config.defaults.country.as_ref());
    let fields = [
        (&mut form.barcode, patron.barcode.as_ref()),
        (&mut form.profile, patron.profile.as_ref()),
        (&mut form.passwd, patron.password.as_ref()),
        (&mut form.ident_type, patron.ident_type.as_ref()),
        (&mut form.ident_value, patron.ident_value.as_ref()),
        (&mut form.first_given_name, patron.first_name.as_ref()),
        (&mut form.family_name, patron.last_name.as_ref()),
        (&mut form.home_ou, patron.home_ou.as_ref()),
        (&mut form.dob, patron.dob.as_ref()),
        (&mut form.street1, patron.street1.as_ref()),
        (&mut form.street2, patron.street2.as_ref()),
        (&mut form.city, patron.city.as_ref()),
        (&mut form.state, state),
        (&mut form.country, country),
        (&mut form.post_code, patron.post_code.as_ref()),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }

    let surveys = &session.reference().surveys;
    for raw in answers {
        let (question, answer) = parse_answer(raw)?;
        let selection = surveys.selection(question, answer)?;
        if let Some(slot) = form.survey_selections.get_mut(question - 1) {
            *slot = selection.to_string();
        }
    }

    Ok(form)
}

/// Parses `<question>=<answer>`, both 1-based.
pub(crate) fn parse_answer(raw: &str) -> Result<(usize, usize)> {
    let invalid = || Error::InvalidAnswer(raw.to_string());
    let (question, answer) = raw.split_once('=').ok_or_else(invalid)?;
    let question: usize = question.trim().parse().map_err(|_| invalid())?;
    let answer: usize = answer.trim().parse().map_err(|_| invalid())?;
    if question == 0 || answer == 0 {
        return Err(invalid());
    }
    Ok((question, answer))
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
