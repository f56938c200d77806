// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of one `pending_xacts` line, for the tooling
//! that replays the queue against the server.

use offreg_core::PendingRegistration;
use schemars::schema_for;

use crate::error::Result;

/// Run the schema command.
pub fn run() -> Result<()> {
    let schema = schema_for!(PendingRegistration);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
