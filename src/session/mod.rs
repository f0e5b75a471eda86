//! The learning session state machine
//!
//! Tracks which deck is active, which card is selected, and which cards
//! have been visited since the last mode switch. All mutation happens
//! through the operations here; the UI only reads.

pub mod playback;

use std::collections::HashSet;

use rand::Rng;

use crate::catalog::{Catalog, CharacterRecord};

/// Which deck is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Letters,
    Numbers,
}

impl Mode {
    /// Arabic counter word for progress display ("12 / 28 حرف")
    pub fn counter_word(self) -> &'static str {
        match self {
            Mode::Letters => "حرف",
            Mode::Numbers => "رقم",
        }
    }

    /// Arabic deck title for the grid panel
    pub fn deck_title(self) -> &'static str {
        match self {
            Mode::Letters => "الحروف",
            Mode::Numbers => "الأرقام",
        }
    }
}

/// Navigation direction through the active deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A point-in-time view of learning progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Distinct cards visited since the last mode switch
    pub visited: usize,
    /// Cards in the active deck
    pub total: usize,
    /// Active mode
    pub mode: Mode,
}

impl ProgressSnapshot {
    /// Visited fraction in [0, 1]; 0 for an empty deck
    pub fn ratio(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.visited as f64 / self.total as f64 }
    }

    /// Visited percentage in [0, 100]
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Progress label for the gauge, e.g. "3 / 28 حرف"
    pub fn label(&self) -> String {
        format!("{} / {} {}", self.visited, self.total, self.mode.counter_word())
    }
}

/// The flashcard session: active deck, selection, and visited set
#[derive(Debug)]
pub struct LearningSession {
    catalog: Catalog,
    mode: Mode,
    current_index: usize,
    visited: HashSet<usize>,
}

impl LearningSession {
    /// Start a session on the letters deck at the first card
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, mode: Mode::Letters, current_index: 0, visited: HashSet::new() }
    }

    /// Active mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the selected card within the active deck
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Records of the active deck, in order
    pub fn records(&self) -> &[CharacterRecord] {
        self.catalog.records(self.mode)
    }

    /// Number of cards in the active deck
    pub fn len(&self) -> usize {
        self.catalog.len(self.mode)
    }

    /// Whether the active deck is empty
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty(self.mode)
    }

    /// The selected card, if the active deck is non-empty
    pub fn current(&self) -> Option<&CharacterRecord> {
        self.records().get(self.current_index)
    }

    /// Whether a card has been visited since the last mode switch
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Switch decks, clearing the visited set and selecting the first card.
    /// Unconditional: switching to the current mode also resets.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.visited.clear();
        self.current_index = 0;
    }

    /// Select a card, marking it visited
    ///
    /// Out-of-range indices are a caller bug (navigation wraps, random
    /// draws are bounded); they are refused without touching state.
    pub fn select_item(&mut self, index: usize) -> bool {
        if index >= self.len() {
            tracing::warn!("Ignoring out-of-range selection {index} (deck len {})", self.len());
            return false;
        }
        self.current_index = index;
        self.visited.insert(index);
        true
    }

    /// Move to the adjacent card with wraparound
    ///
    /// `Next` from the last card selects the first; `Previous` from the
    /// first selects the last. Returns the new index, or None for an
    /// empty deck.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let target = match direction {
            Direction::Next => {
                if self.current_index < len - 1 { self.current_index + 1 } else { 0 }
            }
            Direction::Previous => {
                if self.current_index > 0 { self.current_index - 1 } else { len - 1 }
            }
        };
        self.select_item(target).then_some(target)
    }

    /// Select a uniformly random card, optionally switching decks first
    pub fn select_random(&mut self, mode: Option<Mode>) -> Option<usize> {
        self.select_random_with(mode, &mut rand::thread_rng())
    }

    /// [`select_random`](Self::select_random) with an injectable generator
    pub fn select_random_with<R: Rng>(&mut self, mode: Option<Mode>, rng: &mut R) -> Option<usize> {
        if let Some(mode) = mode {
            if mode != self.mode {
                self.switch_mode(mode);
            }
        }
        let len = self.len();
        if len == 0 {
            return None;
        }
        let index = rng.gen_range(0..len);
        self.select_item(index).then_some(index)
    }

    /// Current progress for the active deck
    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot { visited: self.visited.len(), total: self.len(), mode: self.mode }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn card(glyph: &str, position: u32) -> CharacterRecord {
        CharacterRecord {
            character: glyph.to_string(),
            name: format!("name-{position}"),
            examples: String::new(),
            position,
        }
    }

    /// Three letters, two numbers
    fn session() -> LearningSession {
        let letters = vec![card("ا", 1), card("ب", 2), card("ت", 3)];
        let numbers = vec![card("١", 1), card("٢", 2)];
        LearningSession::new(Catalog::new(letters, numbers))
    }

    fn empty_session() -> LearningSession {
        LearningSession::new(Catalog::new(Vec::new(), Vec::new()))
    }

    #[test]
    fn new_session_starts_on_first_letter() {
        let session = session();
        assert_eq!(session.mode(), Mode::Letters);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.progress().visited, 0);
        assert_eq!(session.current().unwrap().character, "ا");
    }

    #[test]
    fn select_item_marks_visited_and_moves_selection() {
        let mut session = session();
        assert!(session.select_item(2));
        assert_eq!(session.current_index(), 2);
        assert!(session.is_visited(2));
        assert_eq!(session.progress().label(), "1 / 3 حرف");
    }

    #[test]
    fn select_item_refuses_out_of_range() {
        let mut session = session();
        session.select_item(1);
        assert!(!session.select_item(3));
        // State untouched by the refused call
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.progress().visited, 1);
    }

    #[test]
    fn switch_mode_resets_selection_and_visited() {
        let mut session = session();
        session.select_item(2);
        session.select_item(1);

        session.switch_mode(Mode::Numbers);
        assert_eq!(session.mode(), Mode::Numbers);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.progress(), ProgressSnapshot {
            visited: 0,
            total: 2,
            mode: Mode::Numbers
        });
    }

    #[test]
    fn switch_to_same_mode_still_resets() {
        let mut session = session();
        session.select_item(2);
        session.switch_mode(Mode::Letters);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.progress().visited, 0);
    }

    #[test]
    fn advance_wraps_at_both_ends() {
        let mut session = session();
        assert_eq!(session.advance(Direction::Previous), Some(2));
        assert_eq!(session.advance(Direction::Next), Some(0));

        session.select_item(2);
        assert_eq!(session.advance(Direction::Next), Some(0));
    }

    #[test]
    fn advance_on_empty_deck_is_a_no_op() {
        let mut session = empty_session();
        assert_eq!(session.advance(Direction::Next), None);
        assert_eq!(session.advance(Direction::Previous), None);
        assert!(session.current().is_none());
    }

    #[test]
    fn random_on_empty_deck_is_a_no_op() {
        let mut session = empty_session();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(session.select_random_with(None, &mut rng), None);
    }

    #[test]
    fn random_draw_is_in_range_and_visited() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(7);
        let index = session.select_random_with(None, &mut rng).unwrap();
        assert!(index < 3);
        assert_eq!(session.current_index(), index);
        assert!(session.is_visited(index));
    }

    #[test]
    fn random_with_other_mode_switches_and_clears_first() {
        let mut session = session();
        session.select_item(1);
        session.select_item(2);

        let mut rng = StdRng::seed_from_u64(7);
        let index = session.select_random_with(Some(Mode::Numbers), &mut rng).unwrap();

        // Visited is exactly the drawn index, not a union with the old set
        assert_eq!(session.mode(), Mode::Numbers);
        assert_eq!(session.progress().visited, 1);
        assert!(session.is_visited(index));
    }

    #[test]
    fn random_with_current_mode_keeps_visited() {
        let mut session = session();
        session.select_item(1);

        let mut rng = StdRng::seed_from_u64(7);
        session.select_random_with(Some(Mode::Letters), &mut rng).unwrap();
        assert!(session.is_visited(1));
    }

    #[test]
    fn progress_percent_guards_empty_deck() {
        let session = empty_session();
        let progress = session.progress();
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.ratio(), 0.0);
    }

    #[test]
    fn progress_reaches_one_hundred_percent() {
        let mut session = session();
        for i in 0..3 {
            session.select_item(i);
        }
        assert_eq!(session.progress().percent(), 100.0);
    }

    /// The concrete walkthrough: 3 letters, select 2, wrap forward, switch
    #[test]
    fn three_letter_walkthrough() {
        let mut session = session();

        session.select_item(2);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.progress().label(), "1 / 3 حرف");

        session.advance(Direction::Next);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.progress().label(), "2 / 3 حرف");

        session.switch_mode(Mode::Numbers);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.progress().label(), "0 / 2 رقم");
    }

    proptest! {
        #[test]
        fn advance_round_trip_is_identity(len in 1usize..50, start in 0usize..50) {
            let deck: Vec<_> = (0..len).map(|i| card("x", i as u32)).collect();
            let mut session = LearningSession::new(Catalog::new(deck, Vec::new()));
            session.select_item(start % len);
            let before = session.current_index();

            session.advance(Direction::Next);
            session.advance(Direction::Previous);
            prop_assert_eq!(session.current_index(), before);
        }

        #[test]
        fn visited_never_exceeds_total(len in 1usize..30, picks in proptest::collection::vec(0usize..100, 0..60)) {
            let deck: Vec<_> = (0..len).map(|i| card("x", i as u32)).collect();
            let mut session = LearningSession::new(Catalog::new(deck, Vec::new()));

            let mut last = 0;
            for pick in picks {
                session.select_item(pick % len);
                let progress = session.progress();
                prop_assert!(progress.visited <= progress.total);
                // Monotone outside of switch_mode
                prop_assert!(progress.visited >= last);
                last = progress.visited;
            }
        }
    }
}
