// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Patron field arguments for `offreg register`.
//!
//! Every field is optional on the command line so that validation can
//! report all missing fields at once.

use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub struct PatronArgs {
    /// Library card barcode
    #[arg(long)]
    pub barcode: Option<String>,

    /// Patron profile (defaults to the server's preselection)
    #[arg(long)]
    pub profile: Option<String>,

    /// Password (a 4-digit one is generated when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Identification type (defaults to the server's preselection)
    #[arg(long)]
    pub ident_type: Option<String>,

    /// Identification value, e.g. a license number
    #[arg(long)]
    pub ident_value: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Home library (defaults to the server's preselection)
    #[arg(long, visible_alias = "library")]
    pub home_ou: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<String>,

    #[arg(long)]
    pub street1: Option<String>,

    #[arg(long)]
    pub street2: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// State (defaults to [defaults] state in config.toml)
    #[arg(long)]
    pub state: Option<String>,

    /// Country (defaults to [defaults] country in config.toml)
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub post_code: Option<String>,
}
