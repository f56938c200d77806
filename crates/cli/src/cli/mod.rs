// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod args;

pub use args::PatronArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  offreg status                      Check the cached server files
  offreg surveys                     Show numbered survey questions
  offreg register --barcode ... \\
      --answer 1=2                   Queue a registration
  offreg pending                     Review the queue";

#[derive(Parser)]
#[command(name = "offreg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Capture patron registrations while the library server is unreachable")]
#[command(
    long_about = "Capture patron registrations while the library server is unreachable.\n\n\
    Registrations are validated against lists cached from the server and appended to a \
    local queue for later upload."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Directory holding the queue and the cached server files
    #[arg(short = 'd', long = "data-dir", global = true, value_name = "path")]
    pub data_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long = "config", global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report whether offline registration can proceed
    Status,

    /// Validate and queue a new patron registration
    #[command(after_help = "Examples:\n  \
        offreg register --barcode 2900012 --first-name Ada --last-name Lovelace \\\n      \
        --dob 1990-01-31 --ident-value D123 --street1 \"12 Main St\" --city Athens \\\n      \
        --state GA --post-code 30601 --answer 1=2\n\n\
        Library, profile and identification type default to the server's preselection.\n\
        A 4-digit password is generated when --password is omitted.")]
    Register {
        #[command(flatten)]
        patron: PatronArgs,

        /// Answer a survey question: <question>=<answer>, numbered as in 'offreg surveys'
        #[arg(long = "answer", value_name = "Q=A")]
        answers: Vec<String>,

        /// Refuse barcodes the server has flagged instead of warning
        #[arg(long)]
        reject_flagged: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show queued registrations
    Pending {
        #[command(subcommand)]
        command: Option<PendingCommand>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List cached surveys with numbered questions and answers
    Surveys,

    /// List cached libraries, profiles and identification types
    Lists,

    /// Manage the cached server files
    #[command(subcommand)]
    Cache(CacheCommand),

    /// Print the JSON Schema of a queued registration record
    Schema,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingCommand {
    /// Print the number of queued registrations
    Count,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Install a server-generated file into a slot
    #[command(after_help = "Slots:\n  \
        offline_delta        Clock delta in seconds, e.g. [5]\n  \
        offline_ou_list      Libraries\n  \
        offline_pgt_list     Patron profiles\n  \
        offline_cit_list     Identification types\n  \
        offline_asv_list     Required surveys\n  \
        offline_bad_patrons  Flagged barcodes")]
    Set {
        /// Slot name
        slot: String,
        /// JSON file to install
        file: PathBuf,
    },

    /// Show each slot's file and whether it is cached
    Show,
}
