// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lists command implementation.

use offreg_core::{ReferenceData, ReferenceList, SlotStore};

use super::Context;
use crate::error::Result;

pub fn run(ctx: &Context) -> Result<()> {
    let reference = ReferenceData::load(&SlotStore::new(&ctx.data_dir))?;
    print!("{}", render(&reference));
    Ok(())
}

pub(crate) fn render(reference: &ReferenceData) -> String {
    let sections = [
        ("Libraries (--home-ou)", &reference.libraries),
        ("Profiles (--profile)", &reference.profiles),
        ("Identification types (--ident-type)", &reference.ident_types),
    ];
    sections
        .iter()
        .map(|(title, list)| render_list(title, list))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The preselected entry is marked with `*`.
fn render_list(title: &str, list: &ReferenceList) -> String {
    let mut out = format!("{}:\n", title);
    if list.is_empty() {
        out.push_str("  (none)\n");
    }
    let default = list.default_value();
    for entry in list.entries() {
        let marker = if default == Some(entry.value.as_str()) { '*' } else { ' ' };
        out.push_str(&format!("{} {:<6} {}\n", marker, entry.value, entry.label));
    }
    out
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
