// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_schema_names_record_fields() {
    let schema = serde_json::to_value(schema_for!(PendingRegistration)).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    for field in ["timestamp", "type", "delta", "user"] {
        assert!(properties.contains_key(field), "missing {field}");
    }
}

#[test]
fn test_schema_run_succeeds() {
    run().unwrap();
}
