//! Clickable button with hover state.

use super::{Rect2, bordered_rect};
use crate::theme::Theme;
use crate::theme::text::{BODY, draw_ui_text, text_width};

/// Draw a button, highlighted while the mouse hovers it.
pub fn draw_button(label: &str, area: &Rect2, theme: &Theme, mouse_x: f32, mouse_y: f32) {
    let hovered = area.contains(mouse_x, mouse_y);
    let (border, text_color) = if hovered {
        (theme.accent, theme.accent)
    } else {
        (theme.border, theme.text)
    };

    bordered_rect(area, theme.field, border);

    let tx = area.x + (area.w - text_width(label, BODY)) / 2.0;
    let ty = area.y + (area.h - f32::from(BODY)) / 2.0;
    draw_ui_text(label, tx, ty, BODY, text_color);
}
