// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Franklin CLI Entry Point
//!
//! Bootstraps the process and manages its global lifecycle:
//!
//! 1.  **Color Resolution**: The `--no-color` flag and the `NO_COLOR` /
//!     `FRANKLIN_NO_COLOR` environment variables are resolved once, before
//!     any output, and applied to both the UI chrome and the MOTD renderer.
//! 2.  **Logging Setup**: Installs the `tracing` subscriber with the
//!     Campfire formatter; all UI output goes to stderr, leaving stdout for
//!     machine-readable data.
//! 3.  **Command Dispatch**: Routes execution to the matching module in
//!     `commands/`.
//! 4.  **Error Boundary**: Errors propagated from subcommands are logged
//!     here and converted into a non-zero `ExitCode`; commands that fail by
//!     contract (doctor checks, aggregated update failures) return their
//!     exit code directly without an extra message.

mod commands;
mod terminal;

use std::process::ExitCode;

use clap::CommandFactory;
use franklin_common::error;
use franklin_common::version::franklin_version;

use crate::commands::{CommandLine, Commands, config, doctor, motd, update, update_all};

fn main() -> ExitCode {
    let cli = CommandLine::parse_args();

    let no_color = commands::resolve_no_color(cli.no_color);
    if no_color {
        colored::control::set_override(false);
    }

    terminal::logging::init();

    if cli.version {
        println!("Franklin v{}", franklin_version());
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        let _ = CommandLine::command().print_help();
        return ExitCode::SUCCESS;
    };

    let result = match command {
        Commands::Doctor { json } => doctor::doctor(json),
        Commands::Update { yes, dry_run } => update::update(yes, dry_run),
        Commands::UpdateAll {
            yes,
            system,
            dry_run,
        } => update_all::update_all(yes, system, dry_run),
        Commands::Config { color } => config::config(color.as_deref()),
        Commands::Motd => motd::motd(no_color),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
