//! Labelled on/off checkbox.

use macroquad::prelude::*;

use super::{Rect2, bordered_rect};
use crate::theme::Theme;
use crate::theme::text::{BODY, draw_ui_text};

/// Side length of the tick box.
const BOX: f32 = 16.0;

/// Draw a checkbox with its label to the right. The whole area is clickable.
pub fn draw_checkbox(
    label: &str,
    area: &Rect2,
    checked: bool,
    theme: &Theme,
    mouse_x: f32,
    mouse_y: f32,
) {
    let hovered = area.contains(mouse_x, mouse_y);
    let border = if hovered { theme.accent } else { theme.border };
    let by = area.y + (area.h - BOX) / 2.0;
    let tick = Rect2::new(area.x, by, BOX, BOX);
    bordered_rect(&tick, theme.field, border);
    if checked {
        draw_rectangle(tick.x + 4.0, tick.y + 4.0, BOX - 8.0, BOX - 8.0, theme.accent);
    }
    draw_ui_text(
        label,
        area.x + BOX + 6.0,
        area.y + (area.h - f32::from(BODY)) / 2.0,
        BODY,
        theme.text,
    );
}
