// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! UI chrome colors for CLI output. The MOTD banner does not use these; it
//! is painted from the user-selected Campfire palette instead.

use colored::Color;

pub const ERROR: Color = Color::TrueColor {
    r: 0xbf,
    g: 0x61,
    b: 0x6a,
}; // Red

pub const SUCCESS: Color = Color::TrueColor {
    r: 0xa3,
    g: 0xbe,
    b: 0x8c,
}; // Green

pub const INFO: Color = Color::TrueColor {
    r: 0x88,
    g: 0xc0,
    b: 0xd0,
}; // Blue

pub const WARNING: Color = Color::TrueColor {
    r: 0xeb,
    g: 0xcb,
    b: 0x8b,
}; // Yellow
