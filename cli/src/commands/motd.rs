// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # MOTD Command
//!
//! Renders the Campfire banner to stdout: header, system stats and the
//! container/service grids, painted with the user's palette. This command
//! always exits 0 — every probe degrades to a placeholder rather than
//! failing, and an absent config simply means defaults.

use std::process::ExitCode;

use franklin_common::config::Config;
use franklin_common::version::franklin_version;
use franklin_core::layout::compute_layout;
use franklin_core::probe::{OsFamily, Snapshot};
use franklin_core::render::Renderer;

pub fn motd(no_color: bool) -> anyhow::Result<ExitCode> {
    let config = Config::load();
    let palette = config.palette();

    let family = OsFamily::detect();
    let snapshot = Snapshot::collect(&family, &config.monitored_services);

    // (rows, cols); console falls back to 80 columns off-terminal.
    let (_, cols) = console::Term::stdout().size();

    let layout = compute_layout(cols as usize, &snapshot, &franklin_version());
    let renderer = Renderer::new(palette, !no_color);

    for line in renderer.render(&layout) {
        println!("{line}");
    }

    Ok(ExitCode::SUCCESS)
}
