// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The Campfire glyph dictionary. Hierarchy is carried by glyph choice and
//! strict indentation, not by nesting markers.

/// Level 0 action header.
pub const ACTION: &str = "⏺";
/// Level 1 branch line.
pub const BRANCH: &str = "⎿";
/// Logic/thought indicator.
pub const LOGIC: &str = "∴";
pub const SUCCESS: &str = "✔";
pub const WARNING: &str = "⚠";
pub const ERROR: &str = "✗";
