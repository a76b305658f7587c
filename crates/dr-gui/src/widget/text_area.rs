//! Word-wrapped multi-line text.

use macroquad::prelude::Color;

use super::Rect2;
use crate::theme::text::{draw_ui_text, text_width};

/// Draw `lines`, wrapping each to the area width. Lines past the bottom are
/// dropped. Returns the y just below the last drawn line.
pub fn draw_wrapped(lines: &[String], area: &Rect2, size: u16, color: Color) -> f32 {
    let line_h = f32::from(size) + 4.0;
    let mut y = area.y;
    for line in lines {
        for wrapped in wrap_text(line, area.w, |s| text_width(s, size)) {
            if y + line_h > area.bottom() + 1.0 {
                return y;
            }
            draw_ui_text(&wrapped, area.x, y, size, color);
            y += line_h;
        }
    }
    y
}

/// Word-wrap `text` so no line is wider than `max_width` by `measure`.
///
/// A single word wider than the limit gets a line of its own.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
