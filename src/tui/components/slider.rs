//! Slider component - title, track with thumb, and item labels.
//!
//! Registers a track region and one tap region per label so the mouse
//! handler can turn pointer positions back into axis values.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::slider::{AxisLayout, BindingController, Orientation, SliderMode};
use crate::tui::interaction::{ClickRegion, TrackRegion};
use crate::tui::theme::*;

const THUMB: &str = "●";
const TICK: &str = "┼";
const TRACK_H: &str = "─";
const TRACK_V: &str = "│";

/// Heading shown above each slider
fn title(mode: SliderMode) -> &'static str {
    match mode {
        SliderMode::Navigation => "Page",
        SliderMode::Cities => "City",
        SliderMode::Years => "Year",
    }
}

fn label_style(slider: &BindingController, index: usize) -> Style {
    let item = &slider.catalog().items()[index];
    if slider.active_item().is_some_and(|active| active.name == item.name) {
        Style::new().fg(TEXT_WHITE).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(TEXT_DIM)
    }
}

fn title_line(slider: &BindingController, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::new().fg(BRAND_CORAL)),
        Span::styled(
            title(slider.mode()),
            Style::new().fg(BRAND_GOLD).add_modifier(Modifier::BOLD),
        ),
    ];
    if slider.is_dragging() {
        spans.push(Span::styled(
            format!("  {:.0} from {:.0}", slider.raw_position(), slider.committed_position()),
            Style::new().fg(TEXT_DIM),
        ));
    }
    Line::from(spans)
}

/// Render slider `index` of the app into `area`.
pub fn render_slider(frame: &mut Frame, area: Rect, app: &mut App, index: usize) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    match app.layout.orientation {
        Orientation::Horizontal => render_horizontal(frame, area, app, index),
        Orientation::Vertical => render_vertical(frame, area, app, index),
    }
}

fn render_horizontal(frame: &mut Frame, area: Rect, app: &mut App, index: usize) {
    let layout = app.layout;
    let slider = &app.sliders[index];
    let focused = app.focused == index;

    frame.render_widget(
        Paragraph::new(title_line(slider, focused)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    // Track row, one cell of margin on each side
    let track = Rect::new(area.x + 1, area.y + 1, area.width - 2, 1);
    let length = track.width;
    let thumb = layout.offset_for(slider.raw_position(), length);
    let ticks: Vec<u16> = slider
        .catalog()
        .items()
        .iter()
        .map(|item| layout.offset_for(item.position, length))
        .collect();

    let cells: Vec<Span> = (0..length)
        .map(|offset| {
            if offset == thumb {
                Span::styled(THUMB, Style::new().fg(BRAND_BLUE))
            } else if ticks.contains(&offset) {
                Span::styled(TICK, Style::new().fg(TRACK_GRAY))
            } else {
                Span::styled(TRACK_H, Style::new().fg(TRACK_GRAY))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(cells)), track);

    // Labels centered under their ticks, kept inside the slider area
    let label_y = area.y + 2;
    let mut labels = Vec::new();
    for (i, item) in slider.catalog().items().iter().enumerate() {
        let text = Span::styled(item.name.clone(), label_style(slider, i));
        let width = (text.width() as u16).min(area.width);
        let center = track.x + ticks[i];
        let max_x = area.x + area.width - width;
        let x = center.saturating_sub(width / 2).clamp(area.x, max_x);
        let bounds = Rect::new(x, label_y, width, 1);
        frame.render_widget(Paragraph::new(Line::from(text)), bounds);
        labels.push((i, bounds));
    }

    register(app, index, track, area, layout, labels);
}

fn render_vertical(frame: &mut Frame, area: Rect, app: &mut App, index: usize) {
    let layout = app.layout;
    let slider = &app.sliders[index];
    let focused = app.focused == index;

    frame.render_widget(
        Paragraph::new(title_line(slider, focused)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    // Track column below the title, labels to its right
    let track = Rect::new(area.x + 1, area.y + 1, 1, area.height - 1);
    let length = track.height;
    let thumb = layout.offset_for(slider.raw_position(), length);
    let ticks: Vec<u16> = slider
        .catalog()
        .items()
        .iter()
        .map(|item| layout.offset_for(item.position, length))
        .collect();

    let rows: Vec<Line> = (0..length)
        .map(|offset| {
            if offset == thumb {
                Line::styled(THUMB, Style::new().fg(BRAND_BLUE))
            } else if ticks.contains(&offset) {
                Line::styled(TICK, Style::new().fg(TRACK_GRAY))
            } else {
                Line::styled(TRACK_V, Style::new().fg(TRACK_GRAY))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(rows), track);

    let label_x = track.x + 2;
    let label_room = (area.x + area.width).saturating_sub(label_x);
    let mut labels = Vec::new();
    for (i, item) in slider.catalog().items().iter().enumerate() {
        let text = Span::styled(item.name.clone(), label_style(slider, i));
        let width = (text.width() as u16).min(label_room);
        let bounds = Rect::new(label_x, track.y + ticks[i], width, 1);
        frame.render_widget(Paragraph::new(Line::from(text)), bounds);
        labels.push((i, bounds));
    }

    // Widen the grab area so the one-cell track is easier to hit
    let grab = Rect::new(area.x, track.y, 3, track.height);
    register(app, index, grab, area, layout, labels);
}

fn register(
    app: &mut App,
    slider: usize,
    track: Rect,
    area: Rect,
    layout: AxisLayout,
    labels: Vec<(usize, Rect)>,
) {
    app.interactions.register_track(TrackRegion {
        slider,
        track: ClickRegion::from(track),
        hit_area: ClickRegion::from(area),
        layout,
    });
    for (index, bounds) in labels {
        app.interactions.register_label(slider, index, ClickRegion::from(bounds));
    }
}
