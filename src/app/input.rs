//! Event handling utilities
//!
//! The deck reads right-to-left, so Right/Up step back and Left/Down
//! step forward.

use crossterm::event::KeyCode;

use crate::session::Direction;

/// Minimum press-to-release distance for a swipe, in terminal cells
pub const MIN_SWIPE_DISTANCE: i32 = 6;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step to the previous card
    Previous,
    /// Step to the next card
    Next,
    /// Speak the selected card
    Speak,
    /// Jump to a random card and speak it
    Random,
    /// Switch to the letters deck
    LettersMode,
    /// Switch to the numbers deck
    NumbersMode,
    /// Start narrating the whole deck
    PlayAll,
    /// Stop auto-play / close an overlay
    Cancel,
    /// Toggle the help overlay
    Help,
    /// Exit the application
    Quit,
}

/// Map a key press to an action
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Right | KeyCode::Up => Some(Action::Previous),
        KeyCode::Left | KeyCode::Down => Some(Action::Next),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Speak),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Random),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::LettersMode),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NumbersMode),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::PlayAll),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// A completed press-drag-release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Horizontal swipe mapped to deck navigation
    Swipe(Direction),
    /// Press and release without meaningful movement
    Tap { x: u16, y: u16 },
}

/// Tracks a mouse press until release and classifies the gesture
///
/// A swipe requires the horizontal delta to dominate the vertical one and
/// to reach the minimum distance; dragging leftward moves forward through
/// the deck, mirroring the right-to-left card order.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    /// Record a press position
    pub fn press(&mut self, x: u16, y: u16) {
        self.start = Some((x, y));
    }

    /// Record the release position and classify the gesture
    pub fn release(&mut self, x: u16, y: u16) -> Option<Gesture> {
        let (start_x, start_y) = self.start.take()?;
        let dx = i32::from(start_x) - i32::from(x);
        let dy = i32::from(start_y) - i32::from(y);

        if dx.abs() > dy.abs() && dx.abs() >= MIN_SWIPE_DISTANCE {
            // Dragged leftward: next card; rightward: previous
            let direction = if dx > 0 { Direction::Next } else { Direction::Previous };
            return Some(Gesture::Swipe(direction));
        }
        if dx.abs() <= 1 && dy.abs() <= 1 {
            return Some(Gesture::Tap { x, y });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn right_arrow_steps_back_through_the_deck() {
        assert_eq!(key_to_action(KeyCode::Right), Some(Action::Previous));
        assert_eq!(key_to_action(KeyCode::Up), Some(Action::Previous));
    }

    #[test]
    fn left_arrow_steps_forward() {
        assert_eq!(key_to_action(KeyCode::Left), Some(Action::Next));
        assert_eq!(key_to_action(KeyCode::Down), Some(Action::Next));
    }

    #[test]
    fn space_and_enter_speak() {
        assert_eq!(key_to_action(KeyCode::Char(' ')), Some(Action::Speak));
        assert_eq!(key_to_action(KeyCode::Enter), Some(Action::Speak));
    }

    #[test]
    fn mode_keys_are_case_insensitive() {
        assert_eq!(key_to_action(KeyCode::Char('l')), Some(Action::LettersMode));
        assert_eq!(key_to_action(KeyCode::Char('L')), Some(Action::LettersMode));
        assert_eq!(key_to_action(KeyCode::Char('n')), Some(Action::NumbersMode));
        assert_eq!(key_to_action(KeyCode::Char('N')), Some(Action::NumbersMode));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x')), None);
        assert_eq!(key_to_action(KeyCode::Tab), None);
    }

    #[test]
    fn leftward_drag_is_a_forward_swipe() {
        let mut swipe = SwipeTracker::default();
        swipe.press(30, 5);
        assert_eq!(swipe.release(20, 6), Some(Gesture::Swipe(Direction::Next)));
    }

    #[test]
    fn rightward_drag_is_a_backward_swipe() {
        let mut swipe = SwipeTracker::default();
        swipe.press(10, 5);
        assert_eq!(swipe.release(24, 5), Some(Gesture::Swipe(Direction::Previous)));
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut swipe = SwipeTracker::default();
        swipe.press(10, 5);
        assert_eq!(swipe.release(13, 5), None);
    }

    #[test]
    fn vertical_drag_is_ignored_even_when_long() {
        let mut swipe = SwipeTracker::default();
        swipe.press(10, 2);
        // Horizontal delta meets the distance but the vertical dominates
        assert_eq!(swipe.release(18, 20), None);
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut swipe = SwipeTracker::default();
        swipe.press(12, 4);
        assert_eq!(swipe.release(12, 4), Some(Gesture::Tap { x: 12, y: 4 }));
    }

    #[test]
    fn release_without_press_is_nothing() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.release(5, 5), None);
    }
}
