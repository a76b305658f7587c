//! Visual theme: light and dark palettes, window size, and text drawing.

pub mod text;

use macroquad::prelude::Color;

/// Window width in pixels. The window is not resizable.
pub const WINDOW_W: f32 = 820.0;
/// Window height in pixels.
pub const WINDOW_H: f32 = 640.0;

/// Outer margin around every panel.
pub const MARGIN: f32 = 12.0;

/// Colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Window background.
    pub background: Color,
    /// Panel fill.
    pub panel: Color,
    /// Panel and widget borders.
    pub border: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text and axis labels.
    pub muted: Color,
    /// Hover and focus highlight.
    pub accent: Color,
    /// Input field fill (dropdown, checkbox).
    pub field: Color,
    /// Chart bars.
    pub bar: Color,
    /// The bar of the selected number.
    pub bar_selected: Color,
    /// Status line for failures.
    pub error: Color,
    /// Status line for confirmations.
    pub warning: Color,
    /// Status line for success.
    pub success: Color,
}

/// Light palette.
pub const LIGHT: Theme = Theme {
    background: Color::new(0.961, 0.969, 0.980, 1.0),
    panel: Color::new(1.0, 1.0, 1.0, 1.0),
    border: Color::new(0.780, 0.800, 0.830, 1.0),
    text: Color::new(0.106, 0.106, 0.106, 1.0),
    muted: Color::new(0.420, 0.440, 0.470, 1.0),
    accent: Color::new(0.161, 0.451, 0.851, 1.0),
    field: Color::new(1.0, 1.0, 1.0, 1.0),
    bar: Color::new(0.231, 0.522, 0.820, 1.0),
    bar_selected: Color::new(0.910, 0.490, 0.094, 1.0),
    error: Color::new(0.780, 0.110, 0.160, 1.0),
    warning: Color::new(0.690, 0.450, 0.0, 1.0),
    success: Color::new(0.110, 0.560, 0.250, 1.0),
};

/// Dark palette.
pub const DARK: Theme = Theme {
    background: Color::new(0.118, 0.118, 0.118, 1.0),
    panel: Color::new(0.165, 0.165, 0.165, 1.0),
    border: Color::new(0.300, 0.300, 0.310, 1.0),
    text: Color::new(0.902, 0.902, 0.902, 1.0),
    muted: Color::new(0.620, 0.620, 0.640, 1.0),
    accent: Color::new(0.400, 0.680, 1.0, 1.0),
    field: Color::new(0.165, 0.165, 0.165, 1.0),
    bar: Color::new(0.361, 0.620, 0.902, 1.0),
    bar_selected: Color::new(1.0, 0.639, 0.0, 1.0),
    error: Color::new(1.0, 0.380, 0.400, 1.0),
    warning: Color::new(1.0, 0.800, 0.300, 1.0),
    success: Color::new(0.400, 0.850, 0.500, 1.0),
};

impl Theme {
    /// The palette for the given mode.
    pub fn for_mode(dark: bool) -> &'static Theme {
        if dark { &DARK } else { &LIGHT }
    }
}
