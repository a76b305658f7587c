//! Read-only dropdown for picking one value from a fixed list.
//!
//! Closed, it shows the selected label. Clicking it opens a scrollable
//! list directly below; clicking an entry selects it and closes the list.
//! Click handling is separate from drawing so it can be tested.

use macroquad::prelude::*;

use super::{Rect2, bordered_rect};
use crate::theme::Theme;
use crate::theme::text::{BODY, draw_ui_text};

/// Height of one list row.
pub const ROW_H: f32 = 20.0;
/// Rows visible at once when open.
pub const VISIBLE_ROWS: usize = 10;

/// Outcome of a mouse click as seen by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownClick {
    /// The click did not concern the dropdown.
    Ignored,
    /// The closed box was clicked and the list opened, or the reverse.
    Toggled,
    /// An entry was picked; the list is now closed.
    Selected(usize),
    /// The list was open and the click landed elsewhere; the list closed.
    Dismissed,
}

/// Open/closed state and scroll position.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    /// Whether the list is showing.
    pub open: bool,
    first_visible: usize,
}

impl Dropdown {
    /// Create a closed dropdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible entry of the open list.
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// The area the open list occupies below `area`.
    pub fn list_area(area: &Rect2, len: usize) -> Rect2 {
        Rect2::new(
            area.x,
            area.bottom(),
            area.w,
            ROW_H * len.min(VISIBLE_ROWS) as f32,
        )
    }

    /// Index of the entry under the point, if the list is open.
    pub fn item_at(&self, area: &Rect2, len: usize, px: f32, py: f32) -> Option<usize> {
        if !self.open {
            return None;
        }
        self.row_under(area, len, px, py)
    }

    /// Handle a left click at `(px, py)`.
    pub fn click(
        &mut self,
        area: &Rect2,
        len: usize,
        selected: usize,
        px: f32,
        py: f32,
    ) -> DropdownClick {
        if area.contains(px, py) {
            self.open = !self.open;
            if self.open {
                self.reveal(selected, len);
            }
            return DropdownClick::Toggled;
        }
        if !self.open {
            return DropdownClick::Ignored;
        }
        self.open = false;
        match self.row_under(area, len, px, py) {
            Some(index) => DropdownClick::Selected(index),
            None => DropdownClick::Dismissed,
        }
    }

    /// Scroll the open list by `rows` (negative scrolls up).
    pub fn scroll(&mut self, len: usize, rows: i32) {
        let max_first = len.saturating_sub(VISIBLE_ROWS);
        let moved = if rows < 0 {
            self.first_visible.saturating_sub(rows.unsigned_abs() as usize)
        } else {
            self.first_visible.saturating_add(rows as usize)
        };
        self.first_visible = moved.min(max_first);
    }

    /// Scroll just enough to make `index` visible.
    pub fn reveal(&mut self, index: usize, len: usize) {
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + VISIBLE_ROWS {
            self.first_visible = index + 1 - VISIBLE_ROWS;
        }
        self.first_visible = self.first_visible.min(len.saturating_sub(VISIBLE_ROWS));
    }

    fn row_under(&self, area: &Rect2, len: usize, px: f32, py: f32) -> Option<usize> {
        let list = Self::list_area(area, len);
        if !list.contains(px, py) {
            return None;
        }
        let index = self.first_visible + ((py - list.y) / ROW_H) as usize;
        (index < len).then_some(index)
    }

    /// Draw the closed box and, when open, the list over whatever lies below.
    pub fn draw(
        &self,
        area: &Rect2,
        labels: &[String],
        selected: usize,
        theme: &Theme,
        mouse_x: f32,
        mouse_y: f32,
    ) {
        let border = if self.open || area.contains(mouse_x, mouse_y) {
            theme.accent
        } else {
            theme.border
        };
        bordered_rect(area, theme.field, border);
        let text_y = area.y + (area.h - f32::from(BODY)) / 2.0;
        if let Some(label) = labels.get(selected) {
            draw_ui_text(label, area.x + 6.0, text_y, BODY, theme.text);
        }
        let arrow = if self.open { "^" } else { "v" };
        draw_ui_text(arrow, area.x + area.w - 16.0, text_y, BODY, theme.muted);

        if !self.open {
            return;
        }

        let list = Self::list_area(area, labels.len());
        bordered_rect(&list, theme.field, theme.accent);
        let hovered = self.item_at(area, labels.len(), mouse_x, mouse_y);
        let end = labels.len().min(self.first_visible + VISIBLE_ROWS);
        for (row, index) in (self.first_visible..end).enumerate() {
            let y = list.y + row as f32 * ROW_H;
            if index == selected {
                draw_rectangle(list.x + 1.0, y, list.w - 2.0, ROW_H, theme.bar_selected);
            } else if hovered == Some(index) {
                draw_rectangle(list.x + 1.0, y, list.w - 2.0, ROW_H, theme.border);
            }
            draw_ui_text(
                &labels[index],
                list.x + 6.0,
                y + (ROW_H - f32::from(BODY)) / 2.0,
                BODY,
                theme.text,
            );
        }

        // Scroll bar
        if labels.len() > VISIBLE_ROWS {
            let bar_h = (VISIBLE_ROWS as f32 / labels.len() as f32) * list.h;
            let bar_y = list.y + (self.first_visible as f32 / labels.len() as f32) * list.h;
            draw_rectangle(list.x + list.w - 4.0, bar_y, 3.0, bar_h, theme.muted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: usize = 65;

    fn area() -> Rect2 {
        Rect2::new(100.0, 50.0, 80.0, 24.0)
    }

    #[test]
    fn click_box_opens_and_reveals_selection() {
        let mut dd = Dropdown::new();
        assert_eq!(dd.click(&area(), LEN, 59, 110.0, 60.0), DropdownClick::Toggled);
        assert!(dd.open);
        assert!(dd.first_visible() <= 59 && 59 < dd.first_visible() + VISIBLE_ROWS);
    }

    #[test]
    fn click_outside_when_closed_is_ignored() {
        let mut dd = Dropdown::new();
        assert_eq!(dd.click(&area(), LEN, 0, 10.0, 10.0), DropdownClick::Ignored);
        assert!(!dd.open);
    }

    #[test]
    fn click_entry_selects_and_closes() {
        let mut dd = Dropdown::new();
        dd.click(&area(), LEN, 0, 110.0, 60.0);
        // third row of the list: list starts at y = 74
        let y = 74.0 + ROW_H * 2.0 + 1.0;
        assert_eq!(dd.click(&area(), LEN, 0, 110.0, y), DropdownClick::Selected(2));
        assert!(!dd.open);
    }

    #[test]
    fn click_elsewhere_dismisses() {
        let mut dd = Dropdown::new();
        dd.click(&area(), LEN, 0, 110.0, 60.0);
        assert_eq!(dd.click(&area(), LEN, 0, 500.0, 500.0), DropdownClick::Dismissed);
        assert!(!dd.open);
    }

    #[test]
    fn item_at_requires_open_list() {
        let dd = Dropdown::new();
        assert_eq!(dd.item_at(&area(), LEN, 110.0, 80.0), None);
    }

    #[test]
    fn scroll_is_bounded() {
        let mut dd = Dropdown::new();
        dd.scroll(LEN, -3);
        assert_eq!(dd.first_visible(), 0);
        dd.scroll(LEN, 100);
        assert_eq!(dd.first_visible(), LEN - VISIBLE_ROWS);
        dd.scroll(LEN, -5);
        assert_eq!(dd.first_visible(), LEN - VISIBLE_ROWS - 5);
    }

    #[test]
    fn scrolled_click_offsets_index() {
        let mut dd = Dropdown::new();
        dd.click(&area(), LEN, 0, 110.0, 60.0);
        dd.scroll(LEN, 20);
        assert_eq!(dd.click(&area(), LEN, 0, 110.0, 75.0), DropdownClick::Selected(20));
    }

    #[test]
    fn reveal_keeps_index_visible() {
        let mut dd = Dropdown::new();
        dd.reveal(64, LEN);
        assert_eq!(dd.first_visible(), LEN - VISIBLE_ROWS);
        dd.reveal(3, LEN);
        assert_eq!(dd.first_visible(), 3);
        dd.reveal(5, LEN);
        assert_eq!(dd.first_visible(), 3);
    }

    #[test]
    fn short_list_never_scrolls() {
        let mut dd = Dropdown::new();
        dd.scroll(4, 3);
        assert_eq!(dd.first_visible(), 0);
        assert_eq!(Dropdown::list_area(&area(), 4).h, ROW_H * 4.0);
    }
}
