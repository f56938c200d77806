// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! offreg - capture patron registrations while the library server is down.
//!
//! This crate provides the `offreg` command-line front end over
//! [`offreg_core`]: it resolves the data directory and configuration, then
//! dispatches to one module per subcommand.

mod cli;
mod commands;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{CacheCommand, Cli, Command, OutputFormat, PatronArgs, PendingCommand};
pub use config::Config;
pub use error::{Error, Result};

use commands::Context;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Command::Schema = cli.command {
        return commands::schema::run();
    }

    let ctx = Context::resolve(cli.data_dir.as_deref(), cli.config.as_deref())?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "resolved data directory");

    match cli.command {
        Command::Status => commands::status::run(&ctx),
        Command::Register {
            patron,
            answers,
            reject_flagged,
            output,
        } => commands::register::run(&ctx, &patron, &answers, reject_flagged, output),
        Command::Pending { command, output } => match command {
            Some(PendingCommand::Count) => commands::pending::count(&ctx),
            None => commands::pending::list(&ctx, output),
        },
        Command::Surveys => commands::surveys::run(&ctx),
        Command::Lists => commands::lists::run(&ctx),
        Command::Cache(CacheCommand::Set { slot, file }) => {
            commands::cache::set(&ctx, &slot, &file)
        }
        Command::Cache(CacheCommand::Show) => commands::cache::show(&ctx),
        Command::Schema => commands::schema::run(),
    }
}
