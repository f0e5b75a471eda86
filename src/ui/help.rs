//! Help overlay with the key bindings

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;

/// Key bindings shown in the overlay
const BINDINGS: &[(&str, &str)] = &[
    ("→ / ↑", "previous card"),
    ("← / ↓", "next card"),
    ("space / enter", "speak the card"),
    ("r", "random card"),
    ("p", "play the whole deck"),
    ("esc", "stop auto-play / close help"),
    ("l", "letters deck"),
    ("n", "numbers deck"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Draw the help overlay centered on the screen
pub fn draw(frame: &mut Frame, theme: &Theme) {
    let area = centered(46, (BINDINGS.len() + 4) as u16, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" المساعدة ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::default()];
    for (keys, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{keys:>14}  "),
                Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*description, Style::default().fg(theme.fg_primary)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

/// A centered rect of the given size, clamped to the frame
fn centered(width: u16, height: u16, frame: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(frame.height)),
            Constraint::Fill(1),
        ])
        .split(frame);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(frame.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn centered_rect_is_within_the_frame() {
        let frame = Rect::new(0, 0, 100, 40);
        let rect = centered(46, 14, frame);
        assert_eq!(rect.width, 46);
        assert_eq!(rect.height, 14);
        assert!(rect.x + rect.width <= 100);
        assert!(rect.y + rect.height <= 40);
    }

    #[test]
    fn centered_rect_clamps_to_small_frames() {
        let frame = Rect::new(0, 0, 30, 8);
        let rect = centered(46, 14, frame);
        assert!(rect.width <= 30);
        assert!(rect.height <= 8);
    }
}
