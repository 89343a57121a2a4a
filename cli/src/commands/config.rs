// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Config Command
//!
//! Sets the MOTD color, either directly via `--color` or through the
//! interactive picker. An invalid token is rejected with guidance and leaves
//! any existing config file untouched.

use std::process::ExitCode;

use franklin_common::config::{self, Config};
use franklin_common::{branch, error, fprint, header, info, palette, success};

use crate::terminal::{print, prompt};

pub fn config(color: Option<&str>) -> anyhow::Result<ExitCode> {
    if let Some(token) = color {
        return apply_color(token);
    }

    header!("Franklin Configuration");

    let current = Config::load().palette();
    branch!("Current MOTD color: {} ({})", current.name, current.base);

    branch!("Available Campfire colors:");
    fprint!();
    for (name, base, _, _) in palette::CAMPFIRE_COLORS {
        print::swatch(name, base);
    }
    fprint!();

    let choice = prompt::ask(
        "Select a color name or enter a hex code",
        palette::DEFAULT_COLOR_NAME,
    );
    apply_color(&choice)
}

/// Resolves and persists a color token. No partial write on rejection.
fn apply_color(token: &str) -> anyhow::Result<ExitCode> {
    match palette::resolve(token) {
        Ok(palette) => {
            config::save_color(&palette.name, &palette.base)?;
            success!("MOTD color set to {} ({})", token, palette.base);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("{err}");
            info!("Valid colors: {}", palette::names().join(", "));
            info!("Or use hex format: #rrggbb");
            Ok(ExitCode::FAILURE)
        }
    }
}
