// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date-of-birth checks applied when a birth date is entered.

use chrono::NaiveDate;

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks a `YYYY-MM-DD` birth date against `today`.
///
/// The date must be real and strictly in the past.
pub fn check_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let value = value.trim();
    let invalid = |reason: &str| Error::InvalidDate {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let shaped = value.len() == 10
        && value
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return Err(invalid("Invalid Date"));
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid("Invalid Date"))?;
    if date > today {
        return Err(invalid("Patron needs to be born yesterday."));
    }
    if date == today {
        return Err(invalid(
            "Happy birthday!  You need to be more than 0 days old.",
        ));
    }

    Ok(date)
}

#[cfg(test)]
#[path = "dob_tests.rs"]
mod tests;
