// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors surfaced to the user by name.
///
/// Config read problems are deliberately *not* represented here: an unreadable
/// or malformed config file falls back to defaults and is never reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FranklinError {
    /// The given token is neither a known palette name nor a `#rrggbb` hex code.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
