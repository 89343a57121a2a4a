// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::Path;

use crate::paths;

/// Reads the Franklin version from the VERSION file at the install root.
/// An absent or unreadable file yields the literal `"unknown"`.
pub fn franklin_version() -> String {
    version_from(&paths::version_file())
}

pub fn version_from(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let trimmed = contents.trim();
            if trimmed.is_empty() {
                "unknown".to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(_) => "unknown".to_string(),
    }
}
