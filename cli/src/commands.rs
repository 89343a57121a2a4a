// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The single source of truth for Franklin's CLI schema. Execution logic for
//! each command lives in its own submodule; the argument and flag definitions
//! are centralized here, along with the plumbing every mutating command
//! shares: the no-color resolution and the logged subprocess runner.

pub mod config;
pub mod doctor;
pub mod motd;
pub mod update;
pub mod update_all;

use clap::{Parser, Subcommand};
use franklin_common::{branch, error};
use franklin_core::exec::{self, ExecError};

use crate::terminal::print;

#[derive(Parser)]
#[command(name = "franklin")]
#[command(about = "A modern Zsh environment manager with cross-platform support.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show Franklin version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Disable color output (also honored via NO_COLOR or FRANKLIN_NO_COLOR)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run diagnostic checks on the Franklin environment
    Doctor {
        /// Output in JSON format
        #[arg(long = "json")]
        json: bool,
    },

    /// Update Franklin core files from the repository
    Update {
        /// Skip confirmation prompts
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Show what would run without making changes
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,
    },

    /// Update Franklin core, plugins, and optionally system packages
    UpdateAll {
        /// Skip confirmation prompts
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        /// Also update system packages (requires sudo)
        #[arg(long = "system")]
        system: bool,

        /// Show what would run without making changes
        #[arg(short = 'n', long = "dry-run")]
        dry_run: bool,
    },

    /// Configure Franklin settings interactively or via flags
    Config {
        /// Set MOTD color (hex code or color name)
        #[arg(long = "color")]
        color: Option<String>,
    },

    /// Display the Message of the Day (MOTD) banner
    Motd,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// The color kill-switch: the CLI flag or either environment variable wins.
pub fn resolve_no_color(cli_no_color: bool) -> bool {
    cli_no_color
        || std::env::var_os("NO_COLOR").is_some()
        || std::env::var_os("FRANKLIN_NO_COLOR").is_some()
}

/// Runs a command, streaming its stdout under the current branch.
///
/// Returns success without raising so callers can collect failures across
/// multi-step commands. In dry-run mode the command line is shown verbatim
/// and nothing is executed.
pub fn run_logged(tool: &str, args: &[&str], dry_run: bool) -> bool {
    if dry_run {
        branch!("DRY RUN: {} {}", tool, args.join(" "));
        return true;
    }

    match exec::run_lines(tool, args) {
        Ok(lines) => {
            print::stream(&lines);
            true
        }
        Err(err @ ExecError::Missing(_)) => {
            error!("{err}");
            false
        }
        Err(ExecError::Failed { stderr, .. }) if !stderr.is_empty() => {
            error!("{stderr}");
            false
        }
        Err(err) => {
            error!("{err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_always_disables_color() {
        assert!(resolve_no_color(true));
    }

    #[test]
    fn cli_schema_is_consistent() {
        use clap::CommandFactory;
        CommandLine::command().debug_assert();
    }
}
