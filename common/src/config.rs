// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Config Accessor
//!
//! Franklin keeps its settings in a flat `KEY="value"` file at
//! `~/.config/franklin/config.env`. Recognized keys:
//!
//! * `MOTD_COLOR_NAME` — the selected Campfire palette name (or `custom`).
//! * `MOTD_COLOR` — the hex backing a `custom` selection.
//! * `MONITORED_SERVICES` — comma-separated service names shown on the MOTD.
//!
//! Unknown keys are ignored. Loading never fails: an absent or unreadable
//! file, or an unrecognized color name, silently falls back to defaults. The
//! file is written only by the `config` command; there is no locking (single
//! interactive user, last write wins).

use std::fs;
use std::path::Path;

use crate::palette::{self, Palette, DEFAULT_COLOR_NAME};
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color_name: String,
    pub color_hex: String,
    pub monitored_services: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let palette = palette::default_palette();
        Self {
            color_name: DEFAULT_COLOR_NAME.to_string(),
            color_hex: palette.base,
            monitored_services: Vec::new(),
        }
    }
}

impl Config {
    /// Loads from the standard config file, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&paths::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    /// Parses config file contents. Malformed lines are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut config = Self::default();
        for line in contents.lines() {
            let Some((key, raw_value)) = line.split_once('=') else {
                continue;
            };
            let value = strip_quotes(raw_value.trim());
            match key.trim() {
                "MOTD_COLOR_NAME" => {
                    // Unrecognized names fall back to the default, never error.
                    if value == "custom" || palette::lookup(value).is_some() {
                        config.color_name = value.to_string();
                    }
                }
                "MOTD_COLOR" => {
                    if palette::is_hex(value) {
                        config.color_hex = value.to_string();
                    }
                }
                "MONITORED_SERVICES" => {
                    config.monitored_services = split_services(value);
                }
                _ => {}
            }
        }
        config
    }

    /// The active palette: `custom` resolves through the stored hex, known
    /// names through the static table, anything else to the default.
    pub fn palette(&self) -> Palette {
        if self.color_name == "custom" {
            return Palette {
                name: "custom".to_string(),
                base: self.color_hex.clone(),
                dark: self.color_hex.clone(),
                light: self.color_hex.clone(),
            };
        }
        palette::lookup(&self.color_name).unwrap_or_else(palette::default_palette)
    }
}

/// Overwrites the config file with exactly the two color assignment lines.
pub fn save_color(name: &str, hex: &str) -> anyhow::Result<()> {
    fs::create_dir_all(paths::config_dir())?;
    save_color_to(&paths::config_file(), name, hex)
}

pub fn save_color_to(path: &Path, name: &str, hex: &str) -> anyhow::Result<()> {
    let contents = format!("MOTD_COLOR_NAME=\"{name}\"\nMOTD_COLOR=\"{hex}\"\n");
    fs::write(path, contents)?;
    Ok(())
}

fn split_services(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    let value = value.strip_prefix('\'').unwrap_or(value);
    value.strip_suffix('\'').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_absent() {
        let config = Config::load_from(Path::new("/nonexistent/config.env"));
        assert_eq!(config.color_name, DEFAULT_COLOR_NAME);
        assert!(config.monitored_services.is_empty());
    }

    #[test]
    fn parses_color_selection() {
        let config = Config::parse("MOTD_COLOR_NAME=\"Sage\"\nMOTD_COLOR=\"#8fb14b\"\n");
        assert_eq!(config.color_name, "Sage");
        assert_eq!(config.palette().base, "#8fb14b");
    }

    #[test]
    fn unrecognized_color_name_falls_back_to_default() {
        let config = Config::parse("MOTD_COLOR_NAME=\"Vantablack\"\n");
        assert_eq!(config.color_name, DEFAULT_COLOR_NAME);
        assert_eq!(config.palette().name, DEFAULT_COLOR_NAME);
    }

    #[test]
    fn custom_color_resolves_through_hex() {
        let config = Config::parse("MOTD_COLOR_NAME=\"custom\"\nMOTD_COLOR=\"#abcdef\"\n");
        let palette = config.palette();
        assert_eq!(palette.name, "custom");
        assert_eq!(palette.base, "#abcdef");
        assert_eq!(palette.dark, "#abcdef");
        assert_eq!(palette.light, "#abcdef");
    }

    #[test]
    fn monitored_services_are_trimmed_and_filtered() {
        let config = Config::parse("MONITORED_SERVICES=\"a, b ,c\"\n");
        assert_eq!(config.monitored_services, vec!["a", "b", "c"]);

        let config = Config::parse("MONITORED_SERVICES=\" , ,\"\n");
        assert!(config.monitored_services.is_empty());
    }

    #[test]
    fn single_quoted_values_are_accepted() {
        let config = Config::parse("MOTD_COLOR_NAME='Flamingo'\n");
        assert_eq!(config.color_name, "Flamingo");
    }

    #[test]
    fn unknown_keys_and_garbage_lines_are_ignored() {
        let config = Config::parse("SOME_KEY=\"x\"\nnot a key value line\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_writes_exactly_two_lines_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.env");
        save_color_to(&path, "Terracotta", "#b87b6a").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);

        let config = Config::load_from(&path);
        assert_eq!(config.color_name, "Terracotta");
        assert_eq!(config.color_hex, "#b87b6a");
    }
}
