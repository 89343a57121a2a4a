// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Update-All Command
//!
//! Updates Franklin core, Sheldon plugins and (with `--system`) OS packages
//! via the detected package-manager family. Steps never abort each other:
//! each failure sets a single aggregated flag that drives the final exit
//! code, so a broken plugin update still lets the system-package step run.

use std::process::ExitCode;

use franklin_common::{branch, error, final_success, header, info, paths, success, warning};
use franklin_core::probe::PkgFamily;

use crate::commands::{doctor, run_logged};
use crate::terminal::{print, prompt};

pub fn update_all(yes: bool, system: bool, dry_run: bool) -> anyhow::Result<ExitCode> {
    header!("Franklin Update");

    let mut failed = false;

    // Step 1: Franklin core
    header!("Updating Franklin core");
    let root = paths::franklin_root();
    branch!("Franklin root: {}", root.display());

    if !root.join(".git").exists() {
        warning!("Franklin root is not a git repository, skipping core update");
    } else {
        let root_arg = root.to_string_lossy();
        if run_logged("git", &["-C", &root_arg, "pull"], dry_run) {
            success!("Franklin core updated");
        } else {
            failed = true;
        }
    }
    print::section_end();

    // Step 2: Sheldon plugins
    header!("Updating Sheldon plugins");
    if run_logged("sheldon", &["lock", "--update"], dry_run) {
        success!("Sheldon plugins updated");
    } else {
        error!("Failed to update Sheldon plugins (Sheldon is required)");
        failed = true;
    }
    print::section_end();

    // Step 2b: core tools
    header!("Validating core tools");
    if doctor::has_bat() {
        success!("bat present");
    } else {
        error!("bat/batcat not found (bat is required)");
        failed = true;
    }
    print::section_end();

    // Step 3: system packages
    if system {
        if !yes
            && console::user_attended_stderr()
            && !prompt::confirm("System package updates may require sudo. Continue?")
        {
            info!("Update cancelled");
            return Ok(ExitCode::SUCCESS);
        }

        header!("Updating system packages");
        match PkgFamily::detect() {
            PkgFamily::Unknown => {
                error!("Could not detect supported OS for system updates");
                failed = true;
            }
            family => {
                if !update_system_packages(family, dry_run) {
                    failed = true;
                }
            }
        }
        print::section_end();
    }

    if failed {
        return Ok(ExitCode::FAILURE);
    }

    final_success!("Update complete!");
    Ok(ExitCode::SUCCESS)
}

fn update_system_packages(family: PkgFamily, dry_run: bool) -> bool {
    match family {
        PkgFamily::Homebrew => {
            branch!("Using Homebrew");
            let ok_update = run_logged("brew", &["update"], dry_run);
            let upgrade: &[&str] = if dry_run {
                &["upgrade", "--dry-run"]
            } else {
                &["upgrade"]
            };
            let ok_upgrade = run_logged("brew", upgrade, dry_run);
            ok_update && ok_upgrade
        }
        PkgFamily::Apt => {
            branch!("Using apt-get");
            let ok_update = run_logged("sudo", &["apt-get", "update"], dry_run);
            let ok_upgrade = if dry_run {
                // The simulated upgrade needs no sudo.
                run_logged("apt-get", &["upgrade", "-s"], true)
            } else {
                run_logged("sudo", &["apt-get", "upgrade", "-y"], false)
            };
            ok_update && ok_upgrade
        }
        PkgFamily::Dnf => {
            branch!("Using dnf");
            let ok_update = run_logged("sudo", &["dnf", "makecache"], dry_run);
            let ok_upgrade = if dry_run {
                run_logged("dnf", &["upgrade", "--assumeno"], true)
            } else {
                run_logged("sudo", &["dnf", "upgrade", "-y"], false)
            };
            ok_update && ok_upgrade
        }
        // Checked by the caller before dispatch.
        PkgFamily::Unknown => false,
    }
}
