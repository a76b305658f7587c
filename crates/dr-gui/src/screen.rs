//! The main window: layout, input handling, and drawing.

use macroquad::prelude::*;

use crate::app::{AppState, StatusKind};
use crate::input::{self, KeyRepeat};
use crate::theme::text::{BODY, HEADING, TITLE, draw_ui_text};
use crate::theme::{MARGIN, WINDOW_H, WINDOW_W};
use crate::widget::Rect2;
use crate::widget::button::draw_button;
use crate::widget::chart::{bar_index_at, draw_bar_chart};
use crate::widget::checkbox::draw_checkbox;
use crate::widget::dropdown::{Dropdown, DropdownClick};
use crate::widget::panel::{content_area, draw_panel, draw_panel_titled};
use crate::widget::text_area::draw_wrapped;

/// Fixed positions of every control in the window.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Left panel holding the inputs.
    pub controls: Rect2,
    /// The number dropdown.
    pub dropdown: Rect2,
    /// Dark mode checkbox.
    pub dark_toggle: Rect2,
    /// "Check Probability" button.
    pub check_button: Rect2,
    /// "Export All to CSV" button.
    pub export_button: Rect2,
    /// Right panel showing the last result.
    pub result: Rect2,
    /// Insights panel.
    pub insights: Rect2,
    /// Chart panel.
    pub chart: Rect2,
    /// Chart drawing area inside the chart panel.
    pub chart_body: Rect2,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// Compute the layout for the fixed window size.
    pub fn new() -> Self {
        let full_w = WINDOW_W - MARGIN * 2.0;
        let controls = Rect2::new(MARGIN, 84.0, 380.0, 150.0);
        let inner = controls.inset(10.0);
        let result_x = controls.x + controls.w + MARGIN + 6.0;
        let result = Rect2::new(result_x, 84.0, WINDOW_W - MARGIN - result_x, 150.0);
        let insights = Rect2::new(MARGIN, controls.bottom() + MARGIN, full_w, 148.0);
        let chart = Rect2::new(
            MARGIN,
            insights.bottom() + MARGIN,
            full_w,
            WINDOW_H - insights.bottom() - MARGIN * 2.0 - 26.0,
        );
        Self {
            controls,
            dropdown: Rect2::new(inner.x + 130.0, inner.y, 90.0, 26.0),
            dark_toggle: Rect2::new(inner.x + 240.0, inner.y, 120.0, 26.0),
            check_button: Rect2::new(inner.x, inner.y + 44.0, inner.w, 32.0),
            export_button: Rect2::new(inner.x, inner.y + 88.0, inner.w, 32.0),
            result,
            insights,
            chart,
            chart_body: content_area(&chart),
        }
    }
}

/// The single screen of the application.
pub struct MainScreen {
    layout: Layout,
    labels: Vec<String>,
    dropdown: Dropdown,
    up: KeyRepeat,
    down: KeyRepeat,
}

impl Default for MainScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self {
            layout: Layout::new(),
            labels: AppState::labels(),
            dropdown: Dropdown::new(),
            up: KeyRepeat::new(),
            down: KeyRepeat::new(),
        }
    }

    /// Handle this frame's input.
    pub fn update(&mut self, app: &mut AppState) {
        let len = self.labels.len();

        if input::escape_pressed() {
            if self.dropdown.open {
                self.dropdown.open = false;
            } else {
                app.should_quit = true;
            }
        }

        // Arrow keys move the selection, Enter checks it
        if self.up.check(KeyCode::Up) {
            app.step_selection(-1);
            self.dropdown.reveal(app.selected_index(), len);
        }
        if self.down.check(KeyCode::Down) {
            app.step_selection(1);
            self.dropdown.reveal(app.selected_index(), len);
        }
        if input::enter_pressed() {
            self.dropdown.open = false;
            app.check();
        }

        if self.dropdown.open {
            let wheel = input::scroll_y();
            if wheel > 0.0 {
                self.dropdown.scroll(len, -1);
            } else if wheel < 0.0 {
                self.dropdown.scroll(len, 1);
            }
        }

        if !input::left_clicked() {
            return;
        }
        let (mx, my) = mouse_position();
        let layout = &self.layout;

        match self
            .dropdown
            .click(&layout.dropdown, len, app.selected_index(), mx, my)
        {
            DropdownClick::Selected(index) => {
                app.select_index(index);
                return;
            }
            DropdownClick::Toggled | DropdownClick::Dismissed => return,
            DropdownClick::Ignored => {}
        }

        if layout.check_button.contains(mx, my) {
            app.check();
        } else if layout.export_button.contains(mx, my) {
            app.export();
        } else if layout.dark_toggle.contains(mx, my) {
            app.toggle_dark();
        } else if let Some(index) = bar_index_at(&layout.chart_body, len, mx, my) {
            app.select_index(index);
            app.check();
        }
    }

    /// Draw the whole window.
    pub fn draw(&self, app: &AppState) {
        let theme = app.theme();
        let layout = &self.layout;
        let (mx, my) = mouse_position();

        clear_background(theme.background);

        draw_ui_text(&app.heading, MARGIN, MARGIN + 4.0, HEADING, theme.text);
        draw_ui_text(
            "Select a number (1-65) to see its probability based on days 1-31.",
            MARGIN,
            MARGIN + 42.0,
            BODY,
            theme.muted,
        );

        // Controls
        draw_panel(&layout.controls, theme);
        draw_ui_text(
            "Choose number:",
            layout.controls.x + 10.0,
            layout.dropdown.y + 5.0,
            BODY,
            theme.text,
        );
        draw_checkbox(
            "Dark mode",
            &layout.dark_toggle,
            app.dark_mode,
            theme,
            mx,
            my,
        );
        draw_button("Check Probability", &layout.check_button, theme, mx, my);
        let export_label = if app.awaiting_overwrite() {
            "Confirm Overwrite"
        } else {
            "Export All to CSV"
        };
        draw_button(export_label, &layout.export_button, theme, mx, my);

        // Result
        let body = draw_panel_titled(&layout.result, "Result:", theme);
        draw_wrapped(&app.result_lines(), &body, BODY, theme.text);

        // Insights
        let body = draw_panel_titled(&layout.insights, "Insights:", theme);
        draw_wrapped(&app.insight_lines, &body, BODY, theme.text);

        // Chart
        draw_panel(&layout.chart, theme);
        draw_ui_text(
            "Probability Distribution (1-65):",
            layout.chart.x + 8.0,
            layout.chart.y + 6.0,
            TITLE,
            theme.text,
        );
        let values: Vec<f64> = app.table.rows().iter().map(|r| r.probability()).collect();
        draw_bar_chart(
            &layout.chart_body,
            &values,
            app.table.max_probability(),
            app.selected_index(),
            theme,
            mx,
            my,
        );

        // Status line
        if let Some(status) = &app.status {
            let color = match status.kind {
                StatusKind::Info => theme.success,
                StatusKind::Warning => theme.warning,
                StatusKind::Error => theme.error,
            };
            draw_ui_text(
                &status.message,
                MARGIN,
                WINDOW_H - MARGIN - f32::from(BODY),
                BODY,
                color,
            );
        }

        // The open list overlaps the panels below, so it goes last
        self.dropdown.draw(
            &layout.dropdown,
            &self.labels,
            app.selected_index(),
            theme,
            mx,
            my,
        );
    }
}
