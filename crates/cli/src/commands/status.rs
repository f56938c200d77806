// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status command implementation.
//!
//! Reports each prerequisite slot, the clock delta and the queue length,
//! then fails if registration is blocked.

use offreg_core::{
    missing_prerequisites, ClockSkew, OfflineQueue, PendingStore, Prerequisite, SlotStore,
};

use super::Context;
use crate::error::Result;

pub fn run(ctx: &Context) -> Result<()> {
    let slots = SlotStore::new(&ctx.data_dir);
    let missing = missing_prerequisites(&slots);
    let skew = ClockSkew::load(&slots)?;
    let pending = OfflineQueue::in_dir(&ctx.data_dir).len()?;

    println!("Data directory: {}", ctx.data_dir.display());
    for line in prerequisite_lines(&missing) {
        println!("{}", line);
    }
    println!("Clock delta: {}", skew);
    println!("Pending registrations: {}", pending);

    if missing.is_empty() {
        println!("Ready for offline registration");
        Ok(())
    } else {
        Err(offreg_core::Error::MissingPrerequisites(missing).into())
    }
}

pub(crate) fn prerequisite_lines(missing: &[Prerequisite]) -> Vec<String> {
    Prerequisite::ALL
        .into_iter()
        .map(|p| {
            let state = if missing.contains(&p) { "missing" } else { "ok" };
            format!("  {:<20} {}", p.slot().file_name(), state)
        })
        .collect()
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
