// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by command tests.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use serde_json::json;

use crate::cli::PatronArgs;

/// Caches every reference list a registration session needs.
pub fn write_reference_slots(dir: &Path) {
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
    write(
        "offline_asv_list",
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
                    }
                ]
            }
        }),
    );
}

/// Arguments for a patron with every required field except those the
/// session preselects.
pub fn patron_args() -> PatronArgs {
    PatronArgs {
        barcode: Some("29000000123456".into()),
        ident_value: Some("D1234567".into()),
        first_name: Some("Ada".into()),
        last_name: Some("Lovelace".into()),
        dob: Some("1990-01-31".into()),
        street1: Some("12 Main St".into()),
        city: Some("Athens".into()),
        state: Some("GA".into()),
        post_code: Some("30601".into()),
        ..PatronArgs::default()
    }
}
