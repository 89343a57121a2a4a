// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Campfire Color Palettes
//!
//! The fixed table of signature colors users can select for their MOTD banner.
//! Each palette carries three tones: `dark` for borders, `base` for primary
//! text and `light` for accents.
//!
//! Custom hex colors are accepted as-is: all three tones are set to the single
//! hex value, with no automatic shade derivation.

use crate::error::FranklinError;

/// A resolved three-tone color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub base: String,
    pub dark: String,
    pub light: String,
}

/// (name, base, dark, light) — every entry a strict 7-char `#rrggbb`.
pub const CAMPFIRE_COLORS: &[(&str, &str, &str, &str)] = &[
    ("Cello", "#607a97", "#4a5f77", "#8fa9c3"),
    ("Terracotta", "#b87b6a", "#8f5d4d", "#d9a393"),
    ("Black Rock", "#747b8a", "#5a606d", "#9ca3b0"),
    ("Sage", "#8fb14b", "#6d8a38", "#b3d375"),
    ("Golden Amber", "#f9c574", "#d9a555", "#ffd99d"),
    ("Flamingo", "#e75351", "#c73e3c", "#ff7b79"),
    ("Blue Calx", "#b8c5d9", "#95a5bd", "#d4dfe8"),
];

pub const DEFAULT_COLOR_NAME: &str = "Cello";

/// Looks up a palette by its exact name.
pub fn lookup(name: &str) -> Option<Palette> {
    CAMPFIRE_COLORS
        .iter()
        .find(|(n, _, _, _)| *n == name)
        .map(|(n, base, dark, light)| Palette {
            name: (*n).to_string(),
            base: (*base).to_string(),
            dark: (*dark).to_string(),
            light: (*light).to_string(),
        })
}

pub fn default_palette() -> Palette {
    lookup(DEFAULT_COLOR_NAME).expect("default palette must exist in the static table")
}

pub fn names() -> Vec<&'static str> {
    CAMPFIRE_COLORS.iter().map(|(n, _, _, _)| *n).collect()
}

/// Strict `#rrggbb` check: exactly 7 chars, `#` followed by 6 hex digits.
pub fn is_hex(token: &str) -> bool {
    token.len() == 7
        && token.starts_with('#')
        && token[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses a `#rrggbb` string into its RGB components.
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_hex(hex) {
        return None;
    }
    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some((r, g, b))
}

/// Resolves a user-supplied token into a palette.
///
/// Known names return their static triple. A `#rrggbb` token returns a
/// synthetic palette named `custom` whose three tones are all that hex.
/// Anything else is an [`FranklinError::InvalidColor`]; the caller is expected
/// to list the valid names and the hex format hint.
pub fn resolve(token: &str) -> Result<Palette, FranklinError> {
    if let Some(palette) = lookup(token) {
        return Ok(palette);
    }
    if is_hex(token) {
        return Ok(Palette {
            name: "custom".to_string(),
            base: token.to_string(),
            dark: token.to_string(),
            light: token.to_string(),
        });
    }
    Err(FranklinError::InvalidColor(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_three_wellformed_tones() {
        for (name, base, dark, light) in CAMPFIRE_COLORS {
            for hex in [base, dark, light] {
                assert!(is_hex(hex), "{name} carries malformed hex {hex}");
            }
        }
    }

    #[test]
    fn resolve_known_name_matches_table() {
        let palette = resolve("Cello").unwrap();
        assert_eq!(palette.name, "Cello");
        assert_eq!(palette.base, "#607a97");
        assert_eq!(palette.dark, "#4a5f77");
        assert_eq!(palette.light, "#8fa9c3");
        // Idempotent: resolving the resolved name yields the same palette.
        assert_eq!(resolve(&palette.name).unwrap(), palette);
    }

    #[test]
    fn resolve_hex_yields_custom_with_uniform_tones() {
        let palette = resolve("#abcdef").unwrap();
        assert_eq!(palette.name, "custom");
        assert_eq!(palette.base, "#abcdef");
        assert_eq!(palette.dark, "#abcdef");
        assert_eq!(palette.light, "#abcdef");
    }

    #[test]
    fn resolve_rejects_unknown_tokens() {
        assert_eq!(
            resolve("notacolor"),
            Err(FranklinError::InvalidColor("notacolor".to_string()))
        );
        // Hex must be strict: wrong length or non-hex digits are rejected.
        assert!(resolve("#abc").is_err());
        assert!(resolve("#abcdefg").is_err());
        assert!(resolve("#zzzzzz").is_err());
    }

    #[test]
    fn hex_rgb_parses_components() {
        assert_eq!(hex_rgb("#607a97"), Some((0x60, 0x7a, 0x97)));
        assert_eq!(hex_rgb("604a97"), None);
    }

    #[test]
    fn default_is_in_table() {
        assert!(names().contains(&DEFAULT_COLOR_NAME));
    }
}
