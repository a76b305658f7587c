//! Keyboard and mouse helpers.

use macroquad::prelude::*;

/// Check if the Enter key was pressed this frame.
pub fn enter_pressed() -> bool {
    is_key_pressed(KeyCode::Enter)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Check if the left mouse button went down this frame.
pub fn left_clicked() -> bool {
    is_mouse_button_pressed(MouseButton::Left)
}

/// Get the mouse scroll wheel Y delta this frame.
///
/// Positive = scroll up, negative = scroll down.
pub fn scroll_y() -> f32 {
    mouse_wheel().1
}

/// Tracks a held key to fire repeating events after an initial delay.
///
/// Use one instance per repeatable key.
pub struct KeyRepeat {
    /// Time remaining before the next repeat fires.
    timer: f32,
}

/// Initial delay before key repeat begins (seconds).
const REPEAT_DELAY: f32 = 0.35;
/// Interval between repeats once started (seconds).
const REPEAT_RATE: f32 = 0.06;

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyRepeat {
    /// Create a new key repeat tracker.
    pub fn new() -> Self {
        Self { timer: 0.0 }
    }

    /// Returns true on initial press and on repeat while the key is held.
    pub fn check(&mut self, key: KeyCode) -> bool {
        if is_key_pressed(key) {
            self.timer = REPEAT_DELAY;
            return true;
        }
        if is_key_down(key) {
            self.timer -= get_frame_time();
            if self.timer <= 0.0 {
                self.timer = REPEAT_RATE;
                return true;
            }
        } else {
            self.timer = 0.0;
        }
        false
    }
}
