// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending command implementation.
//!
//! Reads the queue without a session, so it works even when reference
//! lists are missing.

use chrono::DateTime;
use offreg_core::{OfflineQueue, PendingRegistration, PendingStore};

use super::Context;
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn list(ctx: &Context, output: OutputFormat) -> Result<()> {
    let records = OfflineQueue::in_dir(&ctx.data_dir).read_all()?;
    match output {
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No pending registrations");
            }
            for record in &records {
                println!("{}", format_record_line(record));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

pub fn count(ctx: &Context) -> Result<()> {
    println!("{}", OfflineQueue::in_dir(&ctx.data_dir).len()?);
    Ok(())
}

/// `<server time>  <type>  <barcode>  <family>, <given>  home_ou=<ou>`
pub(crate) fn format_record_line(record: &PendingRegistration) -> String {
    let when = DateTime::from_timestamp(record.timestamp, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| record.timestamp.to_string());
    let user = &record.user;
    format!(
        "{}  {}  {}  {}, {}  home_ou={}",
        when,
        record.kind,
        user.card.barcode,
        user.family_name,
        user.first_given_name,
        user.home_ou
    )
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod tests;
