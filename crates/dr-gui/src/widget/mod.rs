//! Widgets for the main window.
//!
//! Provides panels, buttons, a checkbox, a number dropdown, wrapped text,
//! and the probability bar chart.

pub mod button;
pub mod chart;
pub mod checkbox;
pub mod dropdown;
pub mod panel;
pub mod text_area;

use macroquad::prelude::*;

/// Draw a 1-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 1.0, border);
}

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Inset the rect by a margin on all sides.
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - margin * 2.0).max(0.0),
            h: (self.h - margin * 2.0).max(0.0),
        }
    }

    /// Take a fixed height from the top, return (top_strip, remainder).
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let h = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}
