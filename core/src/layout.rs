// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # MOTD Layout Engine
//!
//! Pure, state-free computation of the banner's fixed-width lines from a
//! [`Snapshot`]: header, dividers, the stats line and grid-packed container /
//! service lists. Styling is deferred: each line is a sequence of [`Span`]s
//! tagged with a [`Tone`] that the renderer maps onto the active palette.
//!
//! Width arithmetic counts `char`s, which assumes ASCII-width glyph
//! rendering. The version tag's emoji and the box-drawing rule can miscount
//! in terminals with variable-width glyphs; this is a known limitation kept
//! on purpose, as is the header's overflow behavior when the two segments
//! would overlap (content spills past the nominal width, never truncated).

use crate::probe::Snapshot;

pub const MIN_WIDTH: usize = 40;
pub const MAX_WIDTH: usize = 80;
pub const BAR_WIDTH: usize = 10;
pub const GRID_ITEM_WIDTH: usize = 22;

const BORDER_GLYPH: char = '─';
const ACTION_GLYPH: char = '⏺';
const VERSION_GLYPH: &str = "🐢";
/// Fixed gap between the disk block and the RAM block on the stats line.
const STATS_GAP: usize = 15;

/// How a span should be toned by the renderer: `Border` takes the palette's
/// dark variant, `Base` the base, `Accent` the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Border,
    Base,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn border(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Border }
    }

    pub fn base(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Base }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Accent }
    }
}

/// One banner line: an ordered run of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    fn of(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// The unstyled text of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Width in chars (ASCII assumption, see module docs).
    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| char_width(&span.text)).sum()
    }
}

/// Clamps a requested terminal width into the banner's working range.
pub fn effective_width(requested: usize) -> usize {
    requested.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Computes the full banner layout for the given terminal width.
pub fn compute_layout(requested_width: usize, snapshot: &Snapshot, version: &str) -> Vec<Line> {
    let width = effective_width(requested_width);

    let mut lines = vec![
        rule(width),
        header_line(width, snapshot, version),
        rule(width),
        stats_line(width, snapshot),
        indented_rule(width),
    ];

    if !snapshot.containers.is_empty() {
        lines.push(Line::of(vec![Span::base(" Docker Containers:")]));
        lines.extend(grid_lines(&snapshot.containers, width, GRID_ITEM_WIDTH));
        lines.push(Line::blank());
    }

    if !snapshot.services.is_empty() {
        lines.push(Line::of(vec![Span::base(" Services:")]));
        lines.extend(grid_lines(&snapshot.services, width, GRID_ITEM_WIDTH));
        lines.push(Line::blank());
    }

    lines
}

fn rule(width: usize) -> Line {
    Line::of(vec![Span::border(BORDER_GLYPH.to_string().repeat(width))])
}

/// The rule below the stats line carries a leading space, so it runs one char
/// past the nominal width. Kept as-is from the original banner.
fn indented_rule(width: usize) -> Line {
    Line::of(vec![Span::border(format!(
        " {}",
        BORDER_GLYPH.to_string().repeat(width)
    ))])
}

/// `" > host (ip)"` left, `"🐢 version"` right, padded apart by subtraction.
fn header_line(width: usize, snapshot: &Snapshot, version: &str) -> Line {
    let hostname = snapshot.hostname.get();
    let ip = snapshot.ip.get();
    let left_width = char_width(" > ") + char_width(hostname) + char_width(" (") + char_width(ip) + 1;
    let version_tag = format!("{VERSION_GLYPH} {version}");
    let padding = width.saturating_sub(left_width + char_width(&version_tag));

    Line::of(vec![
        Span::border(" > "),
        Span::accent(hostname.clone()),
        Span::base(format!(" ({ip})")),
        Span::base(" ".repeat(padding)),
        Span::base(version_tag),
    ])
}

/// Disk bar and figures left, RAM figures after a fixed gap, OS label
/// right-aligned by the same padding-by-subtraction technique.
fn stats_line(width: usize, snapshot: &Snapshot) -> Line {
    let disk = snapshot.disk.get();
    let memory = snapshot.memory.get();
    let os_label = snapshot.os_label.get();

    let bar = progress_bar(disk.percent, BAR_WIDTH);
    let disk_figures = format!(" {:.0}% {}/{}", disk.percent, disk.used, disk.total);
    let ram = format!("RAM {}/{}", memory.used, memory.total);

    let used = 2 + char_width(&bar) + char_width(&disk_figures) + STATS_GAP + char_width(&ram);
    let padding = width.saturating_sub(used + char_width(os_label));

    Line::of(vec![
        Span::base("  "),
        Span::accent(bar),
        Span::base(disk_figures),
        Span::base(" ".repeat(STATS_GAP)),
        Span::base(ram),
        Span::base(" ".repeat(padding)),
        Span::accent(os_label.clone()),
    ])
}

/// `|█████░░░░░|` — `filled = floor(percent / 100 * width)` solid blocks,
/// the rest light blocks, piped ends.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64) as usize;
    let filled = filled.min(width);
    format!("|{}{}|", "█".repeat(filled), "░".repeat(width - filled))
}

/// Packs items into rows of `max(1, (width - 1) / max_item_width)` cells,
/// in original order. Each cell is an action glyph plus the label
/// left-justified (or truncated) to the cell's label width.
pub fn grid_lines(items: &[String], width: usize, max_item_width: usize) -> Vec<Line> {
    if items.is_empty() {
        return Vec::new();
    }

    let per_line = ((width.saturating_sub(1)) / max_item_width).max(1);
    let label_width = max_item_width - 4;

    items
        .chunks(per_line)
        .map(|chunk| {
            let mut spans = Vec::with_capacity(chunk.len() * 2);
            for item in chunk {
                spans.push(Span::border(format!(" {ACTION_GLYPH} ")));
                spans.push(Span::base(fit_label(item, label_width)));
            }
            Line::of(spans)
        })
        .collect()
}

fn fit_label(label: &str, width: usize) -> String {
    let count = char_width(label);
    if count > width {
        label.chars().take(width).collect()
    } else {
        format!("{label}{}", " ".repeat(width - count))
    }
}

fn char_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{DiskStats, MemStats, Probed};
    use proptest::prelude::*;

    fn snapshot(containers: Vec<String>, services: Vec<String>) -> Snapshot {
        Snapshot {
            hostname: Probed::Live("host".to_string()),
            ip: Probed::Live("10.0.0.1".to_string()),
            os_label: Probed::Live("Fedora Linux 41".to_string()),
            disk: Probed::Live(DiskStats {
                percent: 62.0,
                used: "120G".to_string(),
                total: "200G".to_string(),
            }),
            memory: Probed::Live(MemStats {
                used: "12G".to_string(),
                total: "32G".to_string(),
            }),
            containers,
            services,
        }
    }

    #[test]
    fn effective_width_clamps_into_range() {
        assert_eq!(effective_width(10), MIN_WIDTH);
        assert_eq!(effective_width(40), 40);
        assert_eq!(effective_width(60), 60);
        assert_eq!(effective_width(80), 80);
        assert_eq!(effective_width(300), MAX_WIDTH);
    }

    #[test]
    fn progress_bar_reference_points() {
        assert_eq!(progress_bar(0.0, 10), "|░░░░░░░░░░|");
        assert_eq!(progress_bar(50.0, 10), "|█████░░░░░|");
        assert_eq!(progress_bar(100.0, 10), "|██████████|");
    }

    #[test]
    fn progress_bar_floors_partial_fills() {
        assert_eq!(progress_bar(19.9, 10), "|█░░░░░░░░░|");
        assert_eq!(progress_bar(99.9, 10), "|█████████░|");
    }

    #[test]
    fn grid_packs_three_per_row_at_width_80() {
        let items: Vec<String> = (0..7).map(|i| format!("svc{i}")).collect();
        let lines = grid_lines(&items, 80, GRID_ITEM_WIDTH);
        // floor((80 - 1) / 22) = 3 per row, ceil(7 / 3) = 3 rows.
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans.len(), 6);
        assert_eq!(lines[1].spans.len(), 6);
        assert_eq!(lines[2].spans.len(), 2);
        // Original order is preserved.
        assert!(lines[0].text().contains("svc0"));
        assert!(lines[2].text().contains("svc6"));
    }

    #[test]
    fn grid_truncates_oversized_labels() {
        let items = vec!["a-container-with-a-very-long-name".to_string()];
        let lines = grid_lines(&items, 80, GRID_ITEM_WIDTH);
        assert_eq!(lines[0].spans[1].text.chars().count(), GRID_ITEM_WIDTH - 4);
    }

    #[test]
    fn narrow_grid_still_fits_one_item_per_row() {
        let items: Vec<String> = (0..2).map(|i| format!("svc{i}")).collect();
        let lines = grid_lines(&items, 20, GRID_ITEM_WIDTH);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn sections_emitted_only_when_populated() {
        let layout = compute_layout(80, &snapshot(vec![], vec![]), "2.0.0");
        let text: Vec<String> = layout.iter().map(Line::text).collect();
        assert!(!text.iter().any(|l| l.contains("Docker Containers:")));
        assert!(!text.iter().any(|l| l.contains("Services:")));
        assert_eq!(layout.len(), 5);

        let layout = compute_layout(
            80,
            &snapshot(vec!["web".to_string()], vec!["sshd".to_string()]),
            "2.0.0",
        );
        let text: Vec<String> = layout.iter().map(Line::text).collect();
        assert!(text.iter().any(|l| l.contains("Docker Containers:")));
        assert!(text.iter().any(|l| l.contains("Services:")));
        // Each populated section is followed by a blank spacer line.
        assert_eq!(text.iter().filter(|l| l.is_empty()).count(), 2);
    }

    #[test]
    fn stats_line_is_exactly_effective_width() {
        let layout = compute_layout(80, &snapshot(vec![], vec![]), "2.0.0");
        assert_eq!(layout[3].width(), 80);
    }

    #[test]
    fn indented_rule_runs_one_past_width() {
        let layout = compute_layout(80, &snapshot(vec![], vec![]), "2.0.0");
        assert_eq!(layout[4].width(), 81);
    }

    #[test]
    fn overlapping_header_overflows_instead_of_truncating() {
        let mut snap = snapshot(vec![], vec![]);
        snap.hostname = Probed::Live("a".repeat(60));
        let layout = compute_layout(40, &snap, "2.0.0");
        assert!(layout[1].width() > 40);
        assert!(layout[1].text().contains(&"a".repeat(60)));
    }

    proptest! {
        #[test]
        fn header_and_dividers_match_effective_width(width in MIN_WIDTH..=MAX_WIDTH) {
            let layout = compute_layout(width, &snapshot(vec![], vec![]), "2.0.0");
            prop_assert_eq!(layout[0].width(), width);
            prop_assert_eq!(layout[1].width(), width);
            prop_assert_eq!(layout[2].width(), width);
        }

        #[test]
        fn grid_row_count_is_ceiling_division(n in 1usize..40) {
            let items: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
            let lines = grid_lines(&items, 80, GRID_ITEM_WIDTH);
            prop_assert_eq!(lines.len(), n.div_ceil(3));
        }

        #[test]
        fn progress_bar_glyph_counts_are_consistent(p in 0.0f64..=100.0) {
            let bar = progress_bar(p, BAR_WIDTH);
            let solid = bar.chars().filter(|&c| c == '█').count();
            let light = bar.chars().filter(|&c| c == '░').count();
            prop_assert_eq!(solid + light, BAR_WIDTH);
            prop_assert_eq!(solid, ((p / 100.0) * BAR_WIDTH as f64) as usize);
        }
    }
}
