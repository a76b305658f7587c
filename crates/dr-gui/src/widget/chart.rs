//! Vertical bar chart of probability by number.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::Theme;
use crate::theme::text::{draw_ui_text, text_width};

/// Size of axis label text.
const LABEL: u16 = 14;
/// Space left of the plot for Y labels.
const Y_AXIS_W: f32 = 52.0;
/// Space below the plot for X labels.
const X_AXIS_H: f32 = 18.0;
/// Every n-th number gets an X label.
const X_LABEL_STEP: usize = 5;

/// The plot region inside `area`, excluding axis label space.
pub fn plot_area(area: &Rect2) -> Rect2 {
    Rect2::new(
        area.x + Y_AXIS_W,
        area.y,
        (area.w - Y_AXIS_W).max(0.0),
        (area.h - X_AXIS_H).max(0.0),
    )
}

/// Index of the bar column under the point, if any.
pub fn bar_index_at(area: &Rect2, count: usize, px: f32, py: f32) -> Option<usize> {
    let plot = plot_area(area);
    if count == 0 || !plot.contains(px, py) {
        return None;
    }
    let slot = plot.w / count as f32;
    let index = ((px - plot.x) / slot) as usize;
    (index < count).then_some(index)
}

/// Draw one bar per value, scaled so `max` reaches ~92% of the plot height.
///
/// Bar `i` is labelled `i + 1`. The `selected` bar uses the highlight color;
/// the hovered bar gets a value tooltip.
pub fn draw_bar_chart(
    area: &Rect2,
    values: &[f64],
    max: f64,
    selected: usize,
    theme: &Theme,
    mouse_x: f32,
    mouse_y: f32,
) {
    let plot = plot_area(area);
    if values.is_empty() || plot.w <= 0.0 || plot.h <= 0.0 {
        return;
    }
    let y_max = if max > 0.0 { max * 1.08 } else { 1.0 };
    let slot = plot.w / values.len() as f32;
    let bar_w = (slot - 2.0).max(1.0);

    // Axes
    draw_line(plot.x, plot.y, plot.x, plot.bottom(), 1.0, theme.muted);
    draw_line(plot.x, plot.bottom(), plot.x + plot.w, plot.bottom(), 1.0, theme.muted);

    // Y labels: zero, half, and the maximum value
    for fraction in [0.0, 0.5, 1.0] {
        let value = max * fraction;
        let y = plot.bottom() - (value / y_max) as f32 * plot.h;
        let label = format!("{value:.3}");
        let lx = plot.x - 6.0 - text_width(&label, LABEL);
        draw_ui_text(&label, lx, y - f32::from(LABEL) / 2.0, LABEL, theme.muted);
        draw_line(plot.x - 3.0, y, plot.x, y, 1.0, theme.muted);
    }

    for (i, &value) in values.iter().enumerate() {
        let h = (value / y_max) as f32 * plot.h;
        let x = plot.x + i as f32 * slot + 1.0;
        let color = if i == selected {
            theme.bar_selected
        } else {
            theme.bar
        };
        draw_rectangle(x, plot.bottom() - h, bar_w, h, color);

        let number = i + 1;
        if number == 1 || number % X_LABEL_STEP == 0 {
            let label = number.to_string();
            let lx = x + (bar_w - text_width(&label, LABEL)) / 2.0;
            draw_ui_text(&label, lx, plot.bottom() + 3.0, LABEL, theme.muted);
        }
    }

    if let Some(i) = bar_index_at(area, values.len(), mouse_x, mouse_y) {
        let tip = format!("{}: {:.2}%", i + 1, values[i] * 100.0);
        let tw = text_width(&tip, LABEL) + 8.0;
        let tx = (mouse_x + 10.0).min(area.x + area.w - tw);
        let ty = (mouse_y - 22.0).max(area.y);
        super::bordered_rect(
            &Rect2::new(tx, ty, tw, f32::from(LABEL) + 6.0),
            theme.panel,
            theme.accent,
        );
        draw_ui_text(&tip, tx + 4.0, ty + 3.0, LABEL, theme.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect2 {
        Rect2::new(0.0, 0.0, 52.0 + 650.0, 118.0)
    }

    #[test]
    fn plot_area_leaves_label_room() {
        let plot = plot_area(&area());
        assert_eq!(plot.x, 52.0);
        assert_eq!(plot.w, 650.0);
        assert_eq!(plot.h, 100.0);
    }

    #[test]
    fn bar_under_cursor() {
        // 65 bars over 650px: 10px per slot
        assert_eq!(bar_index_at(&area(), 65, 53.0, 50.0), Some(0));
        assert_eq!(bar_index_at(&area(), 65, 52.0 + 595.0, 50.0), Some(59));
        assert_eq!(bar_index_at(&area(), 65, 52.0 + 649.0, 50.0), Some(64));
    }

    #[test]
    fn outside_plot_is_none() {
        assert_eq!(bar_index_at(&area(), 65, 10.0, 50.0), None);
        assert_eq!(bar_index_at(&area(), 65, 60.0, 110.0), None);
        assert_eq!(bar_index_at(&area(), 0, 60.0, 50.0), None);
    }
}
