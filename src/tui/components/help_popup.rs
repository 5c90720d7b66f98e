//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::slider::Orientation;
use crate::tui::theme::*;

const GESTURES: &[(&str, &str)] = &[
    ("drag", "Move a thumb; release to snap"),
    ("click", "Jump to a label"),
    ("wheel", "Step the slider under the pointer"),
];

fn binding(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::new().fg(TEXT_WHITE)),
        Span::styled(description.to_string(), Style::new().fg(TEXT_DIM)),
    ])
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(text, Style::new().fg(BRAND_BLUE).add_modifier(Modifier::BOLD))
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, orientation: Orientation) {
    // Calculate centered popup area
    let popup_width = 50u16;
    let popup_height = 21u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let (along, across) = match orientation {
        Orientation::Horizontal => ("←/→ h/l", "↑/↓ j/k"),
        Orientation::Vertical => ("↑/↓ j/k", "←/→ h/l"),
    };

    let mut lines: Vec<Line> = vec![
        Line::styled(
            "Keyboard Shortcuts",
            Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        heading("Sliders"),
        binding(along, "Drag the focused thumb"),
        binding("Enter", "Release (snap to nearest)"),
        binding("1-9", "Select item by number"),
        binding(across, "Focus another slider"),
        binding("Tab", "Focus next slider"),
        binding("F1-F3", "Focus slider by number"),
        Line::raw(""),
        heading("Mouse"),
    ];
    lines.extend(GESTURES.iter().map(|(key, description)| binding(key, description)));
    lines.extend([
        Line::raw(""),
        heading("App"),
        binding("Backspace", "Previous page"),
        binding("?", "Toggle help"),
        binding("q / Esc", "Quit"),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BRAND_CORAL))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
