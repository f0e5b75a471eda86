//! UI rendering components

pub mod detail;
pub mod grid;
pub mod help;
pub mod main_screen;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::session::LearningSession;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, session: &LearningSession, config: &Config) {
    let theme = config.active_theme();

    main_screen::draw(frame, state, session, &theme);

    if state.screen == Screen::Help {
        help::draw(frame, &theme);
    }
}
