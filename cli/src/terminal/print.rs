// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Pre-formatted Campfire output that does not fit the one-message-per-line
//! macros: aligned key/value columns, color swatches, streamed subprocess
//! output and blank section spacers. Everything goes through `fprint!` so it
//! shares the stderr writer with the rest of the UI.

use colored::Colorize;
use franklin_common::fprint;
use franklin_common::palette;

use crate::terminal::glyphs;

/// Blank line for breathing room between sections.
pub fn section_end() {
    fprint!();
}

/// Key/value pairs in aligned columns; the first line carries the branch
/// glyph, the rest indent under it.
///
/// ```text
/// ⎿  Key1      :: Value1
///    LongerKey :: Value3
/// ```
pub fn columnar(pairs: &[(&str, String)]) {
    let Some(width) = pairs.iter().map(|(key, _)| key.len()).max() else {
        return;
    };

    for (i, (key, value)) in pairs.iter().enumerate() {
        let prefix = if i == 0 {
            format!("{}  ", glyphs::BRANCH)
        } else {
            "   ".to_string()
        };
        fprint!("{prefix}{key:<width$} :: {value}");
    }
}

/// Subprocess stdout, indented under the invoking branch line.
pub fn stream(lines: &[String]) {
    for line in lines {
        fprint!("      {line}");
    }
}

/// One palette preview row: a colored block, the name, the base hex.
pub fn swatch(name: &str, hex: &str) {
    let block = match palette::hex_rgb(hex) {
        Some((r, g, b)) => "████".truecolor(r, g, b).to_string(),
        None => "████".to_string(),
    };
    fprint!("  {block}  {name:<15} ({hex})");
}
