// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Pulls the latest Franklin core files from the repository checkout at the
//! install root.

use std::process::ExitCode;

use franklin_common::{branch, error, header, info, paths, success};

use crate::commands::run_logged;
use crate::terminal::{print, prompt};

pub fn update(yes: bool, dry_run: bool) -> anyhow::Result<ExitCode> {
    header!("Updating Franklin Core");

    let root = paths::franklin_root();
    branch!("Franklin root: {}", root.display());

    if !root.join(".git").exists() {
        error!("Franklin root is not a git repository");
        return Ok(ExitCode::FAILURE);
    }

    if dry_run {
        branch!("DRY RUN: git -C {} pull", root.display());
        success!("Dry run complete (no changes made).");
        print::section_end();
        return Ok(ExitCode::SUCCESS);
    }

    if !yes
        && console::user_attended_stderr()
        && !prompt::confirm("This will pull the latest changes from the repository. Continue?")
    {
        info!("Update cancelled");
        return Ok(ExitCode::SUCCESS);
    }

    branch!("Pulling latest changes...");
    let root_arg = root.to_string_lossy();
    if !run_logged("git", &["-C", &root_arg, "pull"], false) {
        return Ok(ExitCode::FAILURE);
    }

    print::section_end();
    Ok(ExitCode::SUCCESS)
}
