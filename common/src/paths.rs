// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Well-known filesystem locations.
//!
//! The install root can be relocated with `FRANKLIN_ROOT`; everything else is
//! fixed relative to the user's home directory.

use std::env;
use std::path::PathBuf;

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// The Franklin install root: `$FRANKLIN_ROOT` or `~/.local/share/franklin`.
pub fn franklin_root() -> PathBuf {
    match env::var_os("FRANKLIN_ROOT") {
        Some(root) => PathBuf::from(root),
        None => home().join(".local").join("share").join("franklin"),
    }
}

/// `~/.config/franklin`
pub fn config_dir() -> PathBuf {
    home().join(".config").join("franklin")
}

/// `~/.config/franklin/config.env`
pub fn config_file() -> PathBuf {
    config_dir().join("config.env")
}

/// The single-line semantic version file at the install root.
pub fn version_file() -> PathBuf {
    franklin_root().join("VERSION")
}
