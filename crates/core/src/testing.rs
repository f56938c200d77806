// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::json;

use crate::clock::ClockSource;
use crate::collect::RegistrationForm;
use crate::patron::{BillingAddress, Card, PatronDraft};

/// Mock clock for testing with controllable time.
pub struct FixedClock {
    secs: AtomicI64,
}

impl FixedClock {
    pub fn new(secs: i64) -> Self {
        FixedClock {
            secs: AtomicI64::new(secs),
        }
    }

    pub fn advance(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl ClockSource for FixedClock {
    fn now_secs(&self) -> i64 {
        self.secs.load(Ordering::SeqCst)
    }
}

/// A draft with every required field filled in.
pub fn complete_draft() -> PatronDraft {
    PatronDraft {
        card: Card {
            barcode: "29000000123456".into(),
        },
        profile: "2".into(),
        passwd: "4821".into(),
        ident_type: "1".into(),
        ident_value: "D1234567".into(),
        first_given_name: "Ada".into(),
        family_name: "Lovelace".into(),
        home_ou: "4".into(),
        dob: "1990-01-31".into(),
        billing_address: BillingAddress {
            street1: "12 Main St".into(),
            street2: String::new(),
            city: "Athens".into(),
            state: "GA".into(),
            country: "USA".into(),
            post_code: "30601".into(),
        },
        survey_responses: Vec::new(),
    }
}

/// Form input that collects into [`complete_draft`].
pub fn filled_form() -> RegistrationForm {
    RegistrationForm {
        barcode: "29000000123456".into(),
        profile: "2".into(),
        passwd: "4821".into(),
        ident_type: "1".into(),
        ident_value: "D1234567".into(),
        first_given_name: "Ada".into(),
        family_name: "Lovelace".into(),
        home_ou: "4".into(),
        dob: "1990-01-31".into(),
        street1: "12 Main St".into(),
        street2: String::new(),
        city: "Athens".into(),
        state: "GA".into(),
        country: "USA".into(),
        post_code: "30601".into(),
        survey_selections: Vec::new(),
    }
}

/// Writes every reference slot a registration session needs.
pub fn write_reference_slots(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    let write = |name: &str, value: serde_json::Value| {
        std::fs::write(dir.join(name), value.to_string()).unwrap();
    };
    write(
        "offline_ou_list",
        json!([[["Main Library", "4"], ["Branch", "5"]], "4"]),
    );
    write(
        "offline_pgt_list",
        json!([[["Patron", "2"], ["Staff", "3"]], "2"]),
    );
    write(
        "offline_cit_list",
        json!([[["Drivers License", "1"], ["Passport", "2"]], "1"]),
    );
    write("offline_asv_list", survey_catalog_json());
}

pub fn survey_catalog_json() -> serde_json::Value {
    json!({
        "Reading Habits": {
            "description": "Tell us how you read",
            "questions": [
                {
                    "question": "How often do you visit?",
                    "answers": [["Weekly", "[42,7,3]"], ["Monthly", "[43,7,3]"]]
                },
                {
                    "question": "Favorite format?",
                    "answers": [["Print", "[44,8,3]"], ["Audio", "[45,8,3]"]]
                },
                {
                    "question": "Preferred branch?",
                    "answers": [["Main", "[46,9,3]"]]
                }
            ]
        }
    })
}
