// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Doctor Command
//!
//! Diagnostic checks for the Franklin environment: the shell, the plugin
//! manager, the prompt, git, bat and the install root. A failed check never
//! aborts the remaining ones; the exit code reports whether everything
//! passed. `--json` emits the full report on stdout even when checks failed,
//! keeping the machine-readable path valid under partial failure.

use std::process::ExitCode;

use franklin_common::{logic, paths};
use franklin_core::exec;
use serde::Serialize;

use crate::terminal::print;

#[derive(Debug, Serialize)]
pub struct DoctorReport {
    #[serde(rename = "Shell")]
    pub shell: String,
    #[serde(rename = "Plugin Manager")]
    pub plugin_manager: String,
    #[serde(rename = "Prompt")]
    pub prompt: String,
    #[serde(rename = "Git")]
    pub git: String,
    #[serde(rename = "bat")]
    pub bat: String,
    #[serde(rename = "Franklin Root")]
    pub franklin_root: String,
}

impl DoctorReport {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Shell", self.shell.clone()),
            ("Plugin Manager", self.plugin_manager.clone()),
            ("Prompt", self.prompt.clone()),
            ("Git", self.git.clone()),
            ("bat", self.bat.clone()),
            ("Franklin Root", self.franklin_root.clone()),
        ]
    }
}

pub fn doctor(json_output: bool) -> anyhow::Result<ExitCode> {
    logic!("Checking Environment...");

    let mut failures: Vec<&str> = Vec::new();

    let shell = match tool_version("zsh", 1) {
        Some(version) => format!("Zsh {version}"),
        None => {
            failures.push("zsh");
            "Zsh not found".to_string()
        }
    };

    let plugin_manager = match tool_version("sheldon", 1) {
        Some(version) => format!("Sheldon {version}"),
        None => {
            failures.push("sheldon");
            "Sheldon not found".to_string()
        }
    };

    let prompt = match tool_version("starship", 1) {
        Some(version) => format!("Starship {version}"),
        None => {
            failures.push("starship");
            "Starship not found".to_string()
        }
    };

    // `git version 2.x.y` puts the number in the third token.
    let git = match tool_version("git", 2) {
        Some(version) => format!("Git {version}"),
        None => {
            failures.push("git");
            "Git not found".to_string()
        }
    };

    let bat = if has_bat() {
        "present".to_string()
    } else {
        failures.push("bat");
        "not found".to_string()
    };

    let root = paths::franklin_root();
    let franklin_root = if root.exists() {
        root.display().to_string()
    } else {
        failures.push("franklin_root");
        "Not found".to_string()
    };

    let report = DoctorReport {
        shell,
        plugin_manager,
        prompt,
        git,
        bat,
        franklin_root,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print::columnar(&report.pairs());
    }

    Ok(if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Checks for bat, accepting batcat on Debian.
pub fn has_bat() -> bool {
    exec::is_available("bat") || exec::is_available("batcat")
}

fn tool_version(tool: &str, token: usize) -> Option<String> {
    exec::run(tool, &["--version"])
        .ok()
        .and_then(|stdout| version_token(&stdout, token))
}

fn version_token(stdout: &str, token: usize) -> Option<String> {
    stdout.split_whitespace().nth(token).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_token_extracts_by_position() {
        assert_eq!(version_token("zsh 5.9 (x86_64)", 1), Some("5.9".to_string()));
        assert_eq!(
            version_token("git version 2.39.2", 2),
            Some("2.39.2".to_string())
        );
        assert_eq!(version_token("zsh", 1), None);
    }

    #[test]
    fn report_serializes_with_expected_keys() {
        let report = DoctorReport {
            shell: "Zsh 5.9".to_string(),
            plugin_manager: "Sheldon not found".to_string(),
            prompt: "Starship 1.19.0".to_string(),
            git: "Git 2.39.2".to_string(),
            bat: "present".to_string(),
            franklin_root: "Not found".to_string(),
        };
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        for key in ["Shell", "Plugin Manager", "Prompt", "Git", "bat", "Franklin Root"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["bat"], "present");
    }
}
