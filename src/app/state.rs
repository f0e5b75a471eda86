//! Application state definitions

use ratatui::layout::Rect;

use crate::app::input::SwipeTracker;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    Help,
}

/// State for the character grid
///
/// Geometry is recorded during render so mouse clicks can be mapped back
/// to card indices.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// First visible card row
    pub scroll_offset: usize,
    /// Visible height in card rows (updated on render)
    pub visible_rows: usize,
    /// Cards per row (updated on render)
    pub columns: usize,
    /// Inner grid area (updated on render)
    pub area: Rect,
    /// Card cell width (updated on render)
    pub card_width: u16,
    /// Card cell height (updated on render)
    pub card_height: u16,
    /// Number of cards at last render
    pub total: usize,
}

impl GridState {
    /// Ensure the selected card's row is visible by adjusting scroll offset
    pub fn ensure_selection_visible(&mut self, selected: usize) {
        if self.columns == 0 {
            return;
        }
        let row = selected / self.columns;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        }
        if self.visible_rows > 0 && row >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = row + 1 - self.visible_rows;
        }
    }

    /// Map a screen position to a card index
    ///
    /// Cards flow right-to-left: index 0 sits in the top-right corner.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        if self.columns == 0 || self.card_width == 0 || self.card_height == 0 {
            return None;
        }
        let area = self.area;
        if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height {
            return None;
        }

        let right = area.x + area.width;
        let column = ((right - 1 - x) / self.card_width) as usize;
        if column >= self.columns {
            return None;
        }
        let row = self.scroll_offset + ((y - area.y) / self.card_height) as usize;

        let index = row * self.columns + column;
        (index < self.total).then_some(index)
    }
}

/// Status line content
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Message to display instead of the key hints
    pub message: Option<String>,
    /// Whether the message is an error
    pub is_error: bool,
}

impl StatusLine {
    /// Set an informational message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Narration currently audible (shows the playing indicator)
    pub speaking: bool,

    /// A play-all run is active (conflicting controls disabled)
    pub auto_playing: bool,

    /// Status line state
    pub status: StatusLine,

    /// Character grid state
    pub grid: GridState,

    /// In-progress swipe gesture
    pub swipe: SwipeTracker,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// 30-wide, 6-tall grid of 10x3 cards: 3 columns, 2 visible rows
    fn grid(total: usize) -> GridState {
        GridState {
            scroll_offset: 0,
            visible_rows: 2,
            columns: 3,
            area: Rect::new(2, 1, 30, 6),
            card_width: 10,
            card_height: 3,
            total,
        }
    }

    #[test]
    fn hit_test_maps_right_to_left() {
        let grid = grid(9);
        // Top-right card is index 0
        assert_eq!(grid.hit_test(31, 1), Some(0));
        // Next card to its left is index 1
        assert_eq!(grid.hit_test(21, 2), Some(1));
        // Top-left card is index 2
        assert_eq!(grid.hit_test(2, 1), Some(2));
        // Second row starts back at the right edge
        assert_eq!(grid.hit_test(31, 4), Some(3));
    }

    #[test]
    fn hit_test_rejects_positions_outside_the_grid() {
        let grid = grid(9);
        assert_eq!(grid.hit_test(1, 1), None);
        assert_eq!(grid.hit_test(32, 1), None);
        assert_eq!(grid.hit_test(10, 0), None);
        assert_eq!(grid.hit_test(10, 7), None);
    }

    #[test]
    fn hit_test_rejects_past_the_last_card() {
        // 4 cards in a 3-column grid: second row has one card (index 3)
        let grid = grid(4);
        assert_eq!(grid.hit_test(31, 4), Some(3));
        assert_eq!(grid.hit_test(21, 4), None);
    }

    #[test]
    fn hit_test_accounts_for_scrolling() {
        let mut grid = grid(30);
        grid.scroll_offset = 2;
        // Top-right position now shows row 2, index 6
        assert_eq!(grid.hit_test(31, 1), Some(6));
    }

    #[test]
    fn scrolling_follows_the_selection() {
        let mut grid = grid(30);

        // Selecting below the window scrolls down
        grid.ensure_selection_visible(9); // row 3
        assert_eq!(grid.scroll_offset, 2);

        // Selecting above the window scrolls back up
        grid.ensure_selection_visible(0);
        assert_eq!(grid.scroll_offset, 0);
    }

    #[test]
    fn status_line_error_flag_tracks_last_setter() {
        let mut status = StatusLine::default();
        status.set_error("boom");
        assert!(status.is_error);
        status.set_message("fine");
        assert!(!status.is_error);
        status.clear();
        assert_eq!(status.message, None);
    }
}
