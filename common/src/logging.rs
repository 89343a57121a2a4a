// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Campfire logging façade over the `tracing` crate.
//!
//! Each macro tags its event with a `status` field; the CLI's formatter maps
//! that status to a glyph prefix and chrome color. Keeping callers on these
//! macros (rather than on `tracing` directly) pins the Campfire grammar in
//! one place.

/// Level 0 action header: `⏺ text`
#[macro_export]
macro_rules! header {
    ($($arg:tt)+) => {
        tracing::info!(status = "header", $($arg)+)
    };
}

/// Level 1 branch line: `⎿  text`
#[macro_export]
macro_rules! branch {
    ($($arg:tt)+) => {
        tracing::info!(status = "branch", $($arg)+)
    };
}

/// Logic/thought indicator: `∴ text`
#[macro_export]
macro_rules! logic {
    ($($arg:tt)+) => {
        tracing::info!(status = "logic", $($arg)+)
    };
}

/// Branch success: `⎿  ✔ text` (green)
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        tracing::info!(status = "success", $($arg)+)
    };
}

/// Branch info: `⎿  text` (blue)
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        tracing::info!(status = "info", $($arg)+)
    };
}

/// Branch warning: `⎿  ⚠ text` (yellow)
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        tracing::warn!(status = "warning", $($arg)+)
    };
}

/// Branch error: `⎿  ✗ text` (red)
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        tracing::error!(status = "error", $($arg)+)
    };
}

/// Standalone closing success: `✔ text` (green)
#[macro_export]
macro_rules! final_success {
    ($($arg:tt)+) => {
        tracing::info!(status = "final", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        tracing::debug!(status = "debug", $($arg)+)
    };
}

/// Raw passthrough: the formatter emits the message verbatim, no prefix.
/// Used for swatches, aligned columns and blank spacer lines.
#[macro_export]
macro_rules! fprint {
    () => {
        $crate::fprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "franklin::print",
            raw_msg = %format_args!($($arg)*)
        )
    };
}
