use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::slider::Orientation;
use super::components::*;
use super::theme::*;

/// Rows one horizontal slider needs: title, track, labels, gap
const SLIDER_ROWS: u16 = 4;
/// Columns one vertical slider needs
const SLIDER_COLS: u16 = 18;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Regions are rebuilt every frame
    app.interactions.clear();

    let slider_count = app.sliders.len() as u16;
    let slider_band = match app.layout.orientation {
        Orientation::Horizontal => SLIDER_ROWS * slider_count,
        Orientation::Vertical => 9,
    };

    // Main vertical layout: logo, header, page, sliders, notice, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1),           // Logo
        Constraint::Length(2),           // City + year
        Constraint::Min(4),              // Page body
        Constraint::Length(slider_band), // Sliders
        Constraint::Length(1),           // Notice
        Constraint::Length(1),           // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_header(frame, main_layout[1], app);
    render_page(frame, main_layout[2], app);
    render_sliders(frame, main_layout[3], app);
    render_notice(frame, main_layout[4], app);
    render_hotkeys(frame, main_layout[5]);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app.layout.orientation);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let word = "pageslider";
    let padding = (area.width.saturating_sub(word.len() as u16)) / 2;
    let colors = [BRAND_CORAL, BRAND_GOLD, BRAND_BLUE, BRAND_MINT];

    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(word.chars().enumerate().map(|(i, c)| {
        Span::styled(
            c.to_string(),
            Style::new()
                .fg(colors[i % colors.len()])
                .add_modifier(Modifier::BOLD),
        )
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_sliders(frame: &mut Frame, area: Rect, app: &mut App) {
    let count = app.sliders.len();
    let areas = match app.layout.orientation {
        Orientation::Horizontal => {
            Layout::vertical(vec![Constraint::Length(SLIDER_ROWS); count]).split(area)
        }
        Orientation::Vertical => {
            Layout::horizontal(vec![Constraint::Length(SLIDER_COLS); count]).split(area)
        }
    };

    for (index, slider_area) in areas.iter().enumerate() {
        render_slider(frame, *slider_area, app, index);
    }
}
