//! Main screen: mode tabs, detail panel, card grid, progress, status

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
};

use super::{detail, grid};
use crate::app::state::AppState;
use crate::session::{LearningSession, Mode};
use crate::theme::Theme;

/// Width of the detail (card face) panel
const DETAIL_WIDTH: u16 = 34;

/// Draw the main screen
pub fn draw(frame: &mut Frame, state: &mut AppState, session: &LearningSession, theme: &Theme) {
    let area = frame.area();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(frame, vertical_chunks[0], session.mode(), theme);

    // Detail on the left, grid on the right: the deck reads right-to-left
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(DETAIL_WIDTH), Constraint::Min(26)])
        .split(vertical_chunks[1]);

    detail::draw(frame, body[0], state, session, theme);
    grid::draw(frame, body[1], state, session, theme);

    draw_progress(frame, vertical_chunks[2], session, theme);
    draw_status(frame, vertical_chunks[3], state, theme);
}

/// Draw the mode tabs
fn draw_tabs(frame: &mut Frame, area: Rect, mode: Mode, theme: &Theme) {
    let selected = match mode {
        Mode::Letters => 0,
        Mode::Numbers => 1,
    };

    let tabs = Tabs::new(vec![" الحروف [l] ", " الأرقام [n] "])
        .select(selected)
        .style(Style::default().fg(theme.fg_muted).bg(theme.bg_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(theme.border)));

    frame.render_widget(tabs, area);
}

/// Draw the visited-progress gauge
fn draw_progress(frame: &mut Frame, area: Rect, session: &LearningSession, theme: &Theme) {
    let progress = session.progress();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" التقدم ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .style(Style::default().bg(theme.bg_primary)),
        )
        .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_tertiary))
        .ratio(progress.ratio())
        .label(Span::styled(
            progress.label(),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}

/// Draw the status line: a message if one is set, key hints otherwise
fn draw_status(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = if let Some(message) = &state.status.message {
        let color = if state.status.is_error { theme.error } else { theme.fg_secondary };
        Line::from(Span::styled(message.clone(), Style::default().fg(color)))
    } else {
        hint_line(theme)
    };

    let paragraph =
        Paragraph::new(line).alignment(Alignment::Left).style(Style::default().bg(theme.bg_primary));
    frame.render_widget(paragraph, area);
}

/// Key hints shown when no status message is active
fn hint_line(theme: &Theme) -> Line<'static> {
    let key = Style::default().fg(theme.accent_secondary);
    let text = Style::default().fg(theme.fg_muted);

    Line::from(vec![
        Span::styled("[←/→]", key),
        Span::styled(" navigate  ", text),
        Span::styled("[space]", key),
        Span::styled(" speak  ", text),
        Span::styled("[r]", key),
        Span::styled(" random  ", text),
        Span::styled("[p]", key),
        Span::styled(" play all  ", text),
        Span::styled("[?]", key),
        Span::styled(" help  ", text),
        Span::styled("[q]", key),
        Span::styled(" quit", text),
    ])
}
