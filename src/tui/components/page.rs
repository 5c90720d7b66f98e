//! Page component - header with the selected city and year, and the body of
//! the current route.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::router::Route;
use crate::tui::theme::*;

/// Render the city/year header, centered.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let city = app.selected_city().unwrap_or("—");
    let year = app
        .selected_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "—".to_string());

    let lines = vec![
        Line::styled(
            city.to_string(),
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ),
        Line::styled(year, Style::new().fg(TEXT_DIM)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the body of the current route.
pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    let route = app.current_route();
    let city = app.selected_city().unwrap_or("your city");

    let mut lines = vec![
        Line::styled(route.tagline(), Style::new().fg(TEXT_DIM)),
        Line::raw(""),
    ];

    match route {
        Route::NotFound => {
            lines.push(Line::styled(
                "Page not found. Press Backspace to go back.",
                Style::new().fg(BRAND_CORAL),
            ));
        }
        _ => {
            let mut spans = vec![
                Span::styled("Showing ", Style::new().fg(TEXT_DIM)),
                Span::styled(route.name(), Style::new().fg(BRAND_MINT)),
                Span::styled(" in ", Style::new().fg(TEXT_DIM)),
                Span::styled(city.to_string(), Style::new().fg(TEXT_WHITE)),
            ];
            if let Some(year) = app.selected_year() {
                spans.push(Span::styled(", ", Style::new().fg(TEXT_DIM)));
                spans.push(Span::styled(year.to_string(), Style::new().fg(TEXT_WHITE)));
            }
            lines.push(Line::from(spans));
        }
    }

    let depth = app.host.router.depth();
    if depth > 1 {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("{} pages deep", depth),
            Style::new().fg(TEXT_DIM),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TRACK_GRAY))
        .title(Span::styled(
            format!(" {} ", route.name()),
            Style::new().fg(BRAND_GOLD).add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
