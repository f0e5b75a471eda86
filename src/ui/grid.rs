//! The character card grid
//!
//! Cards flow right-to-left (index 0 in the top-right corner), matching
//! the deck's reading order. Render geometry is written back into
//! [`GridState`] so mouse clicks can be resolved to card indices.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::session::LearningSession;
use crate::theme::Theme;

/// Card cell width in terminal columns
pub const CARD_WIDTH: u16 = 12;

/// Card cell height in terminal rows
pub const CARD_HEIGHT: u16 = 3;

/// Draw the card grid for the active deck
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    session: &LearningSession,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" {} ", session.mode().deck_title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = &mut state.grid;
    grid.area = inner;
    grid.card_width = CARD_WIDTH;
    grid.card_height = CARD_HEIGHT;
    grid.total = session.len();
    grid.columns = (inner.width / CARD_WIDTH).max(1) as usize;
    grid.visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;

    if inner.width < CARD_WIDTH || inner.height < CARD_HEIGHT || session.is_empty() {
        return;
    }

    grid.ensure_selection_visible(session.current_index());

    for (index, record) in session.records().iter().enumerate() {
        let row = index / grid.columns;
        if row < grid.scroll_offset {
            continue;
        }
        if row >= grid.scroll_offset + grid.visible_rows {
            break;
        }

        let column = (index % grid.columns) as u16;
        let x = inner.x + inner.width - (column + 1) * CARD_WIDTH;
        let y = inner.y + ((row - grid.scroll_offset) as u16) * CARD_HEIGHT;
        let card_area = Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT);

        let selected = index == session.current_index();
        let visited = session.is_visited(index);

        let glyph_style = if selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        let name_style = if visited {
            Style::default().fg(theme.visited)
        } else {
            Style::default().fg(theme.fg_muted)
        };

        let mut glyph_spans = vec![Span::styled(record.character.clone(), glyph_style)];
        if visited && !selected {
            glyph_spans.push(Span::styled(" •", Style::default().fg(theme.visited)));
        }

        let lines = vec![
            Line::from(glyph_spans).alignment(Alignment::Center),
            Line::from(Span::styled(clip(&record.name), name_style)).alignment(Alignment::Center),
        ];

        let card_style = if selected {
            Style::default().bg(theme.selection)
        } else {
            Style::default().bg(theme.bg_primary)
        };
        frame.render_widget(Paragraph::new(lines).style(card_style), card_area);
    }
}

/// Clip a name to the card width
fn clip(name: &str) -> String {
    let max = (CARD_WIDTH - 2) as usize;
    if name.chars().count() <= max { name.to_string() } else { name.chars().take(max).collect() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clip_keeps_short_names() {
        assert_eq!(clip("بَاء"), "بَاء");
    }

    #[test]
    fn clip_counts_characters_not_bytes() {
        // 12 Arabic characters are well over 12 bytes
        let long = "بببببببببببب";
        assert_eq!(clip(long).chars().count(), 10);
    }
}
