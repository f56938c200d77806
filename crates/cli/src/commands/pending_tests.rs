// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;

fn record(timestamp: i64) -> PendingRegistration {
    serde_json::from_value(json!({
        "timestamp": timestamp,
        "type": "register",
        "delta": 0,
        "user": {
            "card": {"barcode": "29000000123456"},
            "profile": "2",
            "passwd": "4821",
            "ident_type": "1",
            "ident_value": "D1234567",
            "first_given_name": "Ada",
            "family_name": "Lovelace",
            "home_ou": "4",
            "dob": "1990-01-31",
            "billing_address": {
                "street1": "12 Main St",
                "city": "Athens",
                "state": "GA",
                "post_code": "30601"
            }
        }
    }))
    .unwrap()
}

#[test]
fn test_format_record_line() {
    assert_eq!(
        format_record_line(&record(1_700_000_000)),
        "2023-11-14 22:13:20 UTC  register  29000000123456  Lovelace, Ada  home_ou=4"
    );
}

#[test]
fn test_out_of_range_timestamp_prints_raw_seconds() {
    let line = format_record_line(&record(i64::MAX));
    assert!(line.starts_with(&i64::MAX.to_string()));
}
