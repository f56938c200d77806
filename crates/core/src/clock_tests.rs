// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testing::FixedClock;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn stamp_adds_delta_to_local_time() {
    let clock = FixedClock::new(1_700_000_000);
    assert_eq!(ClockSkew::new(5).stamp(&clock), 1_700_000_005);
}

#[test]
fn default_skew_leaves_local_time() {
    let clock = FixedClock::new(1_700_000_000);
    assert_eq!(ClockSkew::default().stamp(&clock), 1_700_000_000);
}

#[test]
fn negative_skew_moves_time_back() {
    let clock = FixedClock::new(1_700_000_000);
    assert_eq!(ClockSkew::new(-90).stamp(&clock), 1_699_999_910);
}

#[test]
fn stamp_follows_clock() {
    let clock = FixedClock::new(100);
    let skew = ClockSkew::new(5);
    let first = skew.stamp(&clock);
    clock.advance(3);
    let second = skew.stamp(&clock);
    assert_eq!(second - first, 3);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now_secs() > 1_577_836_800);
}

#[test]
fn load_missing_slot_defaults_to_zero() {
    let dir = TempDir::new().unwrap();
    let store = SlotStore::new(dir.path());
    assert_eq!(ClockSkew::load(&store).unwrap(), ClockSkew::default());
    assert!(!store.exists(Slot::Delta));
}

#[parameterized(
    array = { "[5]", 5 },
    array_negative = { "[-42]", -42 },
    bare = { "17", 17 },
    float = { "[3.9]", 3 },
)]
fn load_reads_slot(content: &str, expected: i64) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("offline_delta"), content).unwrap();
    let store = SlotStore::new(dir.path());
    assert_eq!(ClockSkew::load(&store).unwrap().secs(), expected);
}

#[parameterized(
    empty_array = { "[]" },
    string = { "[\"soon\"]" },
    object = { "{\"delta\":5}" },
)]
fn load_rejects_malformed_slot(content: &str) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("offline_delta"), content).unwrap();
    let store = SlotStore::new(dir.path());
    assert!(ClockSkew::load(&store).unwrap_err().is_storage());
}

#[test]
fn display_is_signed() {
    assert_eq!(ClockSkew::new(5).to_string(), "+5s");
    assert_eq!(ClockSkew::new(-5).to_string(), "-5s");
}

#[test]
fn slot_value_without_a_number_is_corrupt() {
    let err = ClockSkew::from_slot_value(&serde_json::json!({"delta": 5})).unwrap_err();
    assert!(matches!(err, Error::CorruptedSlot { .. }));
    assert_eq!(
        ClockSkew::from_slot_value(&serde_json::json!([2.9])).unwrap(),
        ClockSkew::new(2)
    );
}
