// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Surveys command implementation.
//!
//! Question and answer numbers printed here are the ones
//! `offreg register --answer Q=A` accepts.

use offreg_core::{Prerequisite, Slot, SlotStore, SurveyCatalog};

use super::Context;
use crate::error::Result;

pub fn run(ctx: &Context) -> Result<()> {
    let slots = SlotStore::new(&ctx.data_dir);
    let catalog = slots
        .load::<SurveyCatalog>(Slot::Surveys)?
        .ok_or_else(|| offreg_core::Error::MissingPrerequisites(vec![Prerequisite::Surveys]))?;

    print!("{}", render(&catalog));
    Ok(())
}

pub(crate) fn render(catalog: &SurveyCatalog) -> String {
    if catalog.is_empty() {
        return "No required surveys\n".to_string();
    }

    let mut out = String::new();
    let mut current = None;
    for numbered in catalog.questions() {
        if current != Some(numbered.survey) {
            current = Some(numbered.survey);
            out.push_str(numbered.survey);
            if let Some((_, survey)) = catalog.surveys().find(|(name, _)| *name == numbered.survey) {
                if !survey.description.is_empty() {
                    out.push_str(&format!(": {}", survey.description));
                }
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "  {}) {}\n",
            numbered.number, numbered.question.question
        ));
        for (idx, option) in numbered.question.answers.iter().enumerate() {
            out.push_str(&format!("       {}. {}\n", idx + 1, option.label));
        }
    }
    out
}

#[cfg(test)]
#[path = "surveys_tests.rs"]
mod tests;
