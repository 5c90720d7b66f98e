//! Status bar component - selection notice and hotkey hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the current notice, if any.
pub fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.host.notice else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", notice.title),
            Style::new().fg(BRAND_MINT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notice.body.clone(), Style::new().fg(TEXT_WHITE)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the hotkey hints.
pub fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hints = [("tab", "focus"), ("enter", "snap"), ("⌫", "back"), ("?", "help"), ("q", "quit")];

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!("[{}]", key), Style::new().fg(BRAND_CORAL)));
        spans.push(Span::styled(format!(" {}  ", label), Style::new().fg(TEXT_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
