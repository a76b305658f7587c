//! Bordered panels, optionally titled.

use super::{Rect2, bordered_rect};
use crate::theme::Theme;
use crate::theme::text::{TITLE, draw_ui_text};

/// Height taken by a panel title, including padding.
pub const TITLE_H: f32 = 28.0;

/// Draw a plain panel.
pub fn draw_panel(area: &Rect2, theme: &Theme) {
    bordered_rect(area, theme.panel, theme.border);
}

/// Draw a panel with a bold title and return the content area below it.
pub fn draw_panel_titled(area: &Rect2, title: &str, theme: &Theme) -> Rect2 {
    draw_panel(area, theme);
    draw_ui_text(title, area.x + 8.0, area.y + 6.0, TITLE, theme.text);
    content_area(area)
}

/// Content area of a titled panel.
pub fn content_area(area: &Rect2) -> Rect2 {
    let (_, rest) = area.take_top(TITLE_H);
    rest.inset(8.0)
}
