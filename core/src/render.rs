// Copyright (c) 2026 Franklin Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # MOTD Renderer
//!
//! Paints computed layout lines with the active palette's three-tone scheme:
//! borders take the `dark` variant, primary text the `base`, accents the
//! `light`. Color enablement is an explicit constructor flag rather than
//! process-global state, so independent renderer configurations can coexist
//! in tests.

use colored::{Color, Colorize};
use franklin_common::palette::{self, Palette};

use crate::layout::{Line, Tone};

pub struct Renderer {
    palette: Palette,
    color: bool,
}

impl Renderer {
    pub fn new(palette: Palette, color: bool) -> Self {
        Self { palette, color }
    }

    /// Paints one line into a printable string. Append-only: callers emit
    /// lines top to bottom, no in-place updates.
    pub fn paint(&self, line: &Line) -> String {
        if !self.color {
            return line.text();
        }

        line.spans
            .iter()
            .map(|span| match self.tone_color(span.tone) {
                Some(color) => span.text.as_str().color(color).to_string(),
                None => span.text.clone(),
            })
            .collect()
    }

    /// Paints the whole layout.
    pub fn render(&self, layout: &[Line]) -> Vec<String> {
        layout.iter().map(|line| self.paint(line)).collect()
    }

    fn tone_color(&self, tone: Tone) -> Option<Color> {
        let hex = match tone {
            Tone::Border => &self.palette.dark,
            Tone::Base => &self.palette.base,
            Tone::Accent => &self.palette.light,
        };
        palette::hex_rgb(hex).map(|(r, g, b)| Color::TrueColor { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Span;
    use franklin_common::palette::default_palette;

    fn line() -> Line {
        Line {
            spans: vec![
                Span::border("──"),
                Span::base("text"),
                Span::accent("host"),
            ],
        }
    }

    #[test]
    fn no_color_paint_is_plain_text() {
        let renderer = Renderer::new(default_palette(), false);
        assert_eq!(renderer.paint(&line()), "──texthost");
    }

    #[test]
    fn tones_map_onto_palette_variants() {
        let renderer = Renderer::new(default_palette(), true);
        assert_eq!(
            renderer.tone_color(Tone::Border),
            Some(Color::TrueColor { r: 0x4a, g: 0x5f, b: 0x77 })
        );
        assert_eq!(
            renderer.tone_color(Tone::Base),
            Some(Color::TrueColor { r: 0x60, g: 0x7a, b: 0x97 })
        );
        assert_eq!(
            renderer.tone_color(Tone::Accent),
            Some(Color::TrueColor { r: 0x8f, g: 0xa9, b: 0xc3 })
        );
    }

    #[test]
    fn blank_lines_paint_to_empty_strings() {
        let renderer = Renderer::new(default_palette(), true);
        assert_eq!(renderer.paint(&Line::blank()), "");
    }

    #[test]
    fn render_preserves_line_count_and_order() {
        let renderer = Renderer::new(default_palette(), false);
        let layout = vec![line(), Line::blank(), line()];
        let painted = renderer.render(&layout);
        assert_eq!(painted.len(), 3);
        assert_eq!(painted[1], "");
    }
}
