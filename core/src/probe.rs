// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # System Probe
//!
//! Queries the host for the facts the MOTD banner shows: hostname, outbound
//! IP, OS label, disk and memory usage, running containers and monitored
//! services.
//!
//! Every query is fault-isolated. A failure in one (no network route, missing
//! `docker` binary, absent `systemctl`) degrades that field to a documented
//! placeholder and never aborts sibling queries: the banner must always
//! render. Placeholders are explicit at the type level via [`Probed`], so a
//! caller cannot mistake `"??"` for real data without going through it.

use std::fs;
use std::net::UdpSocket;
use std::path::Path;
use std::time::Duration;

use crate::exec;

/// Bound on the container/service probes so a hung tool cannot freeze
/// the banner.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// OS family, selected once per invocation. All platform dispatch in the
/// probe goes through this tag rather than scattered conditionals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    Other(String),
}

impl OsFamily {
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Package-manager family for `update-all --system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PkgFamily {
    Homebrew,
    Apt,
    Dnf,
    Unknown,
}

impl PkgFamily {
    pub fn detect() -> Self {
        Self::from_markers(
            matches!(OsFamily::detect(), OsFamily::MacOs),
            Path::new("/etc/debian_version").exists(),
            Path::new("/etc/redhat-release").exists(),
        )
    }

    fn from_markers(is_macos: bool, debian_marker: bool, redhat_marker: bool) -> Self {
        if is_macos {
            Self::Homebrew
        } else if debian_marker {
            Self::Apt
        } else if redhat_marker {
            Self::Dnf
        } else {
            Self::Unknown
        }
    }
}

/// A probe result that is either live data or its documented placeholder.
///
/// Both variants carry a usable value; `Fallback` marks it as degraded so the
/// caller has to opt in (via [`Probed::get`]) to treat it like real data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probed<T> {
    Live(T),
    Fallback(T),
}

impl<T> Probed<T> {
    pub fn from_result<E>(result: Result<T, E>, fallback: T) -> Self {
        match result {
            Ok(value) => Self::Live(value),
            Err(_) => Self::Fallback(fallback),
        }
    }

    pub fn get(&self) -> &T {
        match self {
            Self::Live(value) | Self::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskStats {
    pub percent: f64,
    pub used: String,
    pub total: String,
}

impl DiskStats {
    fn placeholder() -> Self {
        Self {
            percent: 0.0,
            used: "??".to_string(),
            total: "??".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemStats {
    pub used: String,
    pub total: String,
}

impl MemStats {
    fn placeholder() -> Self {
        Self {
            used: "??".to_string(),
            total: "??".to_string(),
        }
    }
}

/// A transient view of the host, rebuilt on every render.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub hostname: Probed<String>,
    pub ip: Probed<String>,
    pub os_label: Probed<String>,
    pub disk: Probed<DiskStats>,
    pub memory: Probed<MemStats>,
    pub containers: Vec<String>,
    pub services: Vec<String>,
}

impl Snapshot {
    /// Collects all host facts. Never fails; see module docs.
    pub fn collect(family: &OsFamily, monitored: &[String]) -> Self {
        Self {
            hostname: hostname(),
            ip: outbound_ip(),
            os_label: os_label(family),
            disk: disk_stats(),
            memory: mem_stats(),
            containers: running_containers(),
            services: running_services(family, monitored),
        }
    }
}

fn hostname() -> Probed<String> {
    Probed::from_result(sys_info::hostname(), "unknown".to_string())
}

/// The primary outbound IP, found by the UDP connect trick. No packet is
/// sent; the OS picks the route and source address.
fn outbound_ip() -> Probed<String> {
    let probe = || -> std::io::Result<String> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        Ok(socket.local_addr()?.ip().to_string())
    };
    Probed::from_result(probe(), "0.0.0.0".to_string())
}

fn os_label(family: &OsFamily) -> Probed<String> {
    match family {
        OsFamily::MacOs => {
            let result = exec::run("sw_vers", &["-productVersion"])
                .map(|out| format!("macOS {}", out.trim()));
            Probed::from_result(result, "macOS".to_string())
        }
        OsFamily::Linux => {
            let result = fs::read_to_string("/etc/os-release")
                .map(|contents| os_release_label(&contents));
            Probed::from_result(result, "Linux".to_string())
        }
        OsFamily::Other(name) => Probed::Live(name.clone()),
    }
}

/// Builds `"NAME VERSION_ID"` from os-release contents, stripping single and
/// double quotes around values.
fn os_release_label(contents: &str) -> String {
    let mut name = None;
    let mut version = None;
    for line in contents.lines() {
        let Some((key, raw_value)) = line.split_once('=') else {
            continue;
        };
        let value = raw_value
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .to_string();
        match key.trim() {
            "NAME" => name = Some(value),
            "VERSION_ID" => version = Some(value),
            _ => {}
        }
    }

    let distro = name.unwrap_or_else(|| "Linux".to_string());
    match version.filter(|v| !v.is_empty()) {
        Some(version) => format!("{distro} {version}"),
        None => distro,
    }
}

fn disk_stats() -> Probed<DiskStats> {
    let result = sys_info::disk_info().map(|disk| {
        let used_kb = disk.total.saturating_sub(disk.free);
        let percent = if disk.total > 0 {
            (used_kb as f64 / disk.total as f64) * 100.0
        } else {
            0.0
        };
        DiskStats {
            percent,
            used: gib_label(used_kb),
            total: gib_label(disk.total),
        }
    });
    Probed::from_result(result, DiskStats::placeholder())
}

fn mem_stats() -> Probed<MemStats> {
    let result = sys_info::mem_info().map(|mem| MemStats {
        used: gib_label(mem.total.saturating_sub(mem.avail)),
        total: gib_label(mem.total),
    });
    Probed::from_result(result, MemStats::placeholder())
}

/// Whole-gigabyte label from a kilobyte count, e.g. `"118G"`.
fn gib_label(kb: u64) -> String {
    format!("{:.0}G", kb as f64 / (1024.0 * 1024.0))
}

/// Names of running containers; empty when docker is missing, errors
/// or exceeds the probe timeout.
fn running_containers() -> Vec<String> {
    match exec::run_lines_with_timeout("docker", &["ps", "--format", "{{.Names}}"], PROBE_TIMEOUT)
    {
        Ok(names) => names,
        Err(err) => {
            tracing::debug!("container probe degraded: {err}");
            Vec::new()
        }
    }
}

/// Checks only the explicitly monitored candidates; unmonitored services are
/// never reported, even when running.
fn running_services(family: &OsFamily, monitored: &[String]) -> Vec<String> {
    if monitored.is_empty() {
        return Vec::new();
    }

    match family {
        OsFamily::Linux => monitored
            .iter()
            .filter(|svc| {
                exec::run_with_timeout("systemctl", &["is-active", "--quiet", svc], PROBE_TIMEOUT)
                    .is_ok()
            })
            .cloned()
            .collect(),
        OsFamily::MacOs => {
            let processes =
                exec::run_lines_with_timeout("ps", &["-axc", "-o", "comm="], PROBE_TIMEOUT)
                    .unwrap_or_else(|err| {
                        tracing::debug!("process-list probe degraded: {err}");
                        Vec::new()
                    });
            monitored
                .iter()
                .filter(|svc| process_match(&processes, svc))
                .cloned()
                .collect()
        }
        OsFamily::Other(_) => Vec::new(),
    }
}

/// Case-insensitive substring match against the process list.
fn process_match(processes: &[String], candidate: &str) -> bool {
    let needle = candidate.to_lowercase();
    processes
        .iter()
        .any(|line| line.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_release_strips_double_quotes() {
        let contents = "NAME=\"Fedora Linux\"\nVERSION_ID=41\nID=fedora\n";
        assert_eq!(os_release_label(contents), "Fedora Linux 41");
    }

    #[test]
    fn os_release_strips_single_quotes() {
        let contents = "NAME='Debian GNU/Linux'\nVERSION_ID='12'\n";
        assert_eq!(os_release_label(contents), "Debian GNU/Linux 12");
    }

    #[test]
    fn os_release_without_version_is_name_only() {
        assert_eq!(os_release_label("NAME=Arch\n"), "Arch");
        assert_eq!(os_release_label("ID=mystery\n"), "Linux");
    }

    #[test]
    fn gib_label_rounds_to_whole_gigabytes() {
        assert_eq!(gib_label(0), "0G");
        assert_eq!(gib_label(1024 * 1024), "1G");
        assert_eq!(gib_label(120 * 1024 * 1024 + 300_000), "120G");
    }

    #[test]
    fn probed_fallback_is_marked() {
        let live: Probed<String> = Probed::from_result(Ok::<_, ()>("x".to_string()), "??".into());
        assert!(!live.is_fallback());
        assert_eq!(live.get(), "x");

        let degraded: Probed<String> = Probed::from_result(Err(()), "??".to_string());
        assert!(degraded.is_fallback());
        assert_eq!(degraded.get(), "??");
    }

    #[test]
    fn pkg_family_marker_precedence() {
        assert_eq!(PkgFamily::from_markers(true, false, false), PkgFamily::Homebrew);
        assert_eq!(PkgFamily::from_markers(false, true, false), PkgFamily::Apt);
        assert_eq!(PkgFamily::from_markers(false, false, true), PkgFamily::Dnf);
        assert_eq!(PkgFamily::from_markers(false, false, false), PkgFamily::Unknown);
    }

    #[test]
    fn process_match_is_case_insensitive_substring() {
        let processes = vec!["Meshtasticd".to_string(), "loginwindow".to_string()];
        assert!(process_match(&processes, "meshtasticd"));
        assert!(!process_match(&processes, "spyserver"));
    }

    #[test]
    fn empty_monitored_list_checks_nothing() {
        let services = running_services(&OsFamily::Linux, &[]);
        assert!(services.is_empty());
    }

    #[test]
    fn snapshot_collects_without_panicking() {
        // Smoke test: whatever the host looks like, every field degrades
        // rather than failing.
        let family = OsFamily::detect();
        let snapshot = Snapshot::collect(&family, &[]);
        assert!(!snapshot.hostname.get().is_empty());
        assert!(!snapshot.ip.get().is_empty());
    }
}
