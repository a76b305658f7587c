//! Text drawing with the built-in font.

use macroquad::prelude::*;

/// Body text size.
pub const BODY: u16 = 16;
/// Panel title size.
pub const TITLE: u16 = 20;
/// Window heading size.
pub const HEADING: u16 = 28;

/// Replace glyphs the built-in font cannot draw with ASCII equivalents.
pub fn ascii_safe(text: &str) -> String {
    text.replace('≈', "~")
        .replace('→', "->")
        .replace(['—', '–'], "-")
        .replace('×', "x")
}

/// Draw text with its top edge at `y`.
pub fn draw_ui_text(text: &str, x: f32, y: f32, size: u16, color: Color) {
    let shown = ascii_safe(text);
    let dims = measure_text(&shown, None, size, 1.0);
    draw_text(&shown, x, y + dims.offset_y, f32::from(size), color);
}

/// Width of `text` when drawn at `size`.
pub fn text_width(text: &str, size: u16) -> f32 {
    measure_text(&ascii_safe(text), None, size, 1.0).width
}
