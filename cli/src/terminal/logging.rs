// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Terminal Logging
//!
//! Wires up the global `tracing` subscriber with the Campfire formatter.
//!
//! Every UI line Franklin prints goes through here to stderr, keeping stdout
//! reserved for machine-readable output (the MOTD banner, `doctor --json`).
//! The formatter reads the `status` field set by the macros in
//! `franklin-common` and turns it into the matching glyph prefix and chrome
//! color. Events on the `franklin::print` target pass through verbatim, for
//! pre-formatted content such as swatches and aligned columns.

use colored::Colorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::terminal::{colors, glyphs};

/// Installs the global subscriber. Call once, before any output.
pub fn init() {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(FranklinFormatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(formatting_layer)
        .init();
}

pub struct FranklinFormatter;

impl<S, N> FormatEvent<S, N> for FranklinFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == "franklin::print" {
            let mut visitor = RawVisitor::new(writer.by_ref());
            event.record(&mut visitor);
            return writeln!(writer);
        }

        let mut fields = FieldVisitor::default();
        event.record(&mut fields);

        let status = fields
            .status
            .unwrap_or_else(|| default_status(meta.level()).to_string());

        writeln!(writer, "{}", decorate(&status, &fields.message))
    }
}

fn default_status(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "error",
        Level::WARN => "warning",
        Level::DEBUG | Level::TRACE => "debug",
        _ => "branch",
    }
}

/// Maps a status to its Campfire line shape.
fn decorate(status: &str, text: &str) -> String {
    match status {
        "header" => format!("{} {text}", glyphs::ACTION),
        "logic" => format!("{} {text}", glyphs::LOGIC),
        "info" => format!("{}  {text}", glyphs::BRANCH)
            .color(colors::INFO)
            .to_string(),
        "success" => format!("{}  {} {text}", glyphs::BRANCH, glyphs::SUCCESS)
            .color(colors::SUCCESS)
            .to_string(),
        "warning" => format!("{}  {} {text}", glyphs::BRANCH, glyphs::WARNING)
            .color(colors::WARNING)
            .to_string(),
        "error" => format!("{}  {} {text}", glyphs::BRANCH, glyphs::ERROR)
            .color(colors::ERROR)
            .to_string(),
        "final" => format!("{} {text}", glyphs::SUCCESS)
            .color(colors::SUCCESS)
            .to_string(),
        "debug" => text.dimmed().to_string(),
        _ => format!("{}  {text}", glyphs::BRANCH),
    }
}

#[derive(Default)]
struct FieldVisitor {
    status: Option<String>,
    message: String,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "status" {
            self.status = Some(value.to_string());
        } else if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

struct RawVisitor<'a> {
    writer: Writer<'a>,
}

impl<'a> RawVisitor<'a> {
    fn new(writer: Writer<'a>) -> Self {
        Self { writer }
    }
}

impl Visit for RawVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            let _ = write!(self.writer, "{value}");
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            let _ = write!(self.writer, "{value:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_statuses_get_glyph_prefixes() {
        colored::control::set_override(false);
        assert_eq!(decorate("header", "Updating"), "⏺ Updating");
        assert_eq!(decorate("logic", "Checking"), "∴ Checking");
        assert_eq!(decorate("branch", "root: /x"), "⎿  root: /x");
    }

    #[test]
    fn status_glyphs_carry_their_marks() {
        colored::control::set_override(false);
        assert_eq!(decorate("success", "done"), "⎿  ✔ done");
        assert_eq!(decorate("warning", "careful"), "⎿  ⚠ careful");
        assert_eq!(decorate("error", "broke"), "⎿  ✗ broke");
        assert_eq!(decorate("final", "Update complete!"), "✔ Update complete!");
    }

    #[test]
    fn unknown_status_falls_back_to_branch_shape() {
        colored::control::set_override(false);
        assert_eq!(decorate("mystery", "x"), "⎿  x");
    }
}
