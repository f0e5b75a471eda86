//! The card face panel: glyph, name, example words, playback state

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::session::{LearningSession, Mode};
use crate::theme::Theme;

/// Draw the detail panel for the selected card
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    session: &LearningSession,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" البطاقة ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(record) = session.current() else {
        let empty = Paragraph::new("لا توجد بطاقات")
            .style(Style::default().fg(theme.fg_muted))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    };

    let ordinal_label = match session.mode() {
        Mode::Letters => format!("الترتيب: {}", record.position),
        Mode::Numbers => format!("القيمة: {}", record.position),
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            record.character.clone(),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(record.examples.clone(), Style::default().fg(theme.fg_primary))),
        Line::default(),
        Line::from(Span::styled(ordinal_label, Style::default().fg(theme.fg_muted))),
    ];

    if state.auto_playing {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "▶ تشغيل تلقائي",
            Style::default().fg(theme.accent_secondary),
        )));
    } else if state.speaking {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "♪ يتم النطق",
            Style::default().fg(theme.warning),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
