// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Subprocess Runner
//!
//! Every external tool Franklin talks to (git, package managers, sheldon,
//! docker, systemctl) goes through this module. The error type keeps the two
//! failure families apart: a binary missing from the search path versus a
//! binary that ran and exited nonzero. Callers decide whether either is fatal.
//!
//! Probes that must never freeze the banner use [`run_with_timeout`], which
//! polls the child against a hard deadline and kills it on expiry.

use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{0} not found on this system")]
    Missing(String),

    #[error("{tool} failed: {stderr}")]
    Failed { tool: String, stderr: String },

    #[error("{tool} timed out after {timeout:?}")]
    TimedOut { tool: String, timeout: Duration },
}

/// How often a timed child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs a tool to completion and returns its captured stdout.
pub fn run(tool: &str, args: &[&str]) -> Result<String, ExecError> {
    let output = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|err| spawn_error(tool, err))?;

    if !output.status.success() {
        return Err(ExecError::Failed {
            tool: tool.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Like [`run`], but returns trimmed non-empty stdout lines.
pub fn run_lines(tool: &str, args: &[&str]) -> Result<Vec<String>, ExecError> {
    Ok(split_lines(&run(tool, args)?))
}

/// Runs a tool under a hard deadline. The child is killed if it outlives
/// the timeout, so a hung external tool cannot stall the caller.
pub fn run_with_timeout(
    tool: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, ExecError> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| spawn_error(tool, err))?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecError::TimedOut {
                    tool: tool.to_string(),
                    timeout,
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(err) => {
                let _ = child.kill();
                return Err(ExecError::Failed {
                    tool: tool.to_string(),
                    stderr: err.to_string(),
                });
            }
        }
    }

    let output = child.wait_with_output().map_err(|err| ExecError::Failed {
        tool: tool.to_string(),
        stderr: err.to_string(),
    })?;

    if !output.status.success() {
        return Err(ExecError::Failed {
            tool: tool.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

pub fn run_lines_with_timeout(
    tool: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<Vec<String>, ExecError> {
    Ok(split_lines(&run_with_timeout(tool, args, timeout)?))
}

/// Checks whether a binary is reachable, by the cheapest possible spawn.
pub fn is_available(tool: &str) -> bool {
    !matches!(run(tool, &["--version"]), Err(ExecError::Missing(_)))
}

fn spawn_error(tool: &str, err: std::io::Error) -> ExecError {
    if err.kind() == ErrorKind::NotFound {
        ExecError::Missing(tool.to_string())
    } else {
        ExecError::Failed {
            tool: tool.to_string(),
            stderr: err.to_string(),
        }
    }
}

fn split_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_reported_as_missing() {
        match run("franklin-test-no-such-binary", &[]) {
            Err(ExecError::Missing(tool)) => {
                assert_eq!(tool, "franklin-test-no-such-binary")
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn nonzero_exit_captures_stderr() {
        // `sh -c` is available on every platform this crate targets.
        match run("sh", &["-c", "echo boom >&2; exit 3"]) {
            Err(ExecError::Failed { tool, stderr }) => {
                assert_eq!(tool, "sh");
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn stdout_lines_are_trimmed_and_filtered() {
        let lines = run_lines("sh", &["-c", "printf 'a\\n\\n b \\n'"]).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn hung_child_is_killed_on_deadline() {
        let start = Instant::now();
        let result = run_with_timeout("sh", &["-c", "sleep 10"], Duration::from_millis(200));
        assert!(matches!(result, Err(ExecError::TimedOut { .. })));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn fast_child_beats_deadline() {
        let out = run_with_timeout("sh", &["-c", "echo ok"], Duration::from_secs(2)).unwrap();
        assert_eq!(out.trim(), "ok");
    }
}
