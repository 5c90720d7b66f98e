//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching region on the next input. Two kinds of
//! region exist: clickable regions (slider labels) that map a press to an
//! `Action`, and slider tracks that turn pointer coordinates into axis
//! values for dragging.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a label and its slider's track:
//! registry.register(InteractiveRegion::clickable(
//!     ClickRegion::new(x, y, width, 1),
//!     Action::SelectItem { slider: 0, index: 2 },
//! ).with_priority(1));
//! registry.register_track(TrackRegion { slider: 0, track, hit_area, layout });
//!
//! // Mouse events are dispatched to matching regions
//! ```

use crate::events::Action;
use crate::slider::{AxisLayout, Orientation};

/// Rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
///
/// Components create these during render to define clickable/scrollable areas.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(bounds: ClickRegion, action: Action) -> Self {
        Self {
            bounds,
            on_click: Some(action),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// A drawn slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRegion {
    /// Index of the slider in `App::sliders`
    pub slider: usize,
    /// Cells the axis is laid across
    pub track: ClickRegion,
    /// Whole slider, labels included. Dragging outside it interrupts the gesture.
    pub hit_area: ClickRegion,
    pub layout: AxisLayout,
}

impl TrackRegion {
    /// Axis value under the pointer. Points off the track clamp to its ends.
    pub fn value_at(&self, x: u16, y: u16) -> f64 {
        let (pointer, start, length) = match self.layout.orientation {
            Orientation::Horizontal => (x, self.track.x, self.track.width),
            Orientation::Vertical => (y, self.track.y, self.track.height),
        };
        self.layout.value_at(pointer.saturating_sub(start), length)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
///
/// Components register their interactive regions here during render,
/// and the mouse handler queries this registry to dispatch events.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
    tracks: Vec<TrackRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            tracks: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
        self.tracks.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a slider label as a tap target
    pub fn register_label(&mut self, slider: usize, index: usize, bounds: ClickRegion) {
        self.register(
            InteractiveRegion::clickable(bounds, Action::SelectItem { slider, index })
                .with_priority(1),
        );
    }

    /// Register a slider track
    pub fn register_track(&mut self, track: TrackRegion) {
        self.tracks.push(track);
    }

    /// Track registered for `slider`
    pub fn track(&self, slider: usize) -> Option<&TrackRegion> {
        self.tracks.iter().find(|t| t.slider == slider)
    }

    /// Slider whose area contains (x, y)
    pub fn slider_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tracks
            .iter()
            .find(|t| t.hit_area.contains(x, y))
            .map(|t| t.slider)
    }

    /// Find the action to dispatch for a press at (x, y)
    ///
    /// Labels win over tracks. A press on a track starts a drag at the
    /// pressed value.
    pub fn handle_press(&self, x: u16, y: u16) -> Action {
        // Sort by priority (highest first) and find first match
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && r.on_click.is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        if let Some(action) = candidates.first().and_then(|r| r.on_click.clone()) {
            return action;
        }

        self.tracks
            .iter()
            .find(|t| t.track.contains(x, y))
            .map(|t| Action::DragStart {
                slider: t.slider,
                value: t.value_at(x, y),
            })
            .unwrap_or(Action::None)
    }

    /// Find the action for pointer movement while `slider` is held
    pub fn handle_drag(&self, slider: usize, x: u16, y: u16) -> Action {
        match self.track(slider) {
            Some(track) if track.hit_area.contains(x, y) => Action::DragMove(track.value_at(x, y)),
            Some(_) => Action::DragInterrupt,
            None => Action::DragInterrupt,
        }
    }

    /// Find the action for releasing `slider` at (x, y)
    pub fn handle_release(&self, slider: usize, x: u16, y: u16) -> Action {
        match self.track(slider) {
            Some(track) if track.hit_area.contains(x, y) => Action::DragEnd(track.value_at(x, y)),
            _ => Action::DragInterrupt,
        }
    }

    /// Find the action for a wheel tick at (x, y)
    pub fn handle_wheel(&self, x: u16, y: u16, steps: i32) -> Action {
        match self.slider_at(x, y) {
            Some(slider) => Action::Wheel { slider, steps },
            None => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_track(slider: usize, y: u16) -> TrackRegion {
        TrackRegion {
            slider,
            track: ClickRegion::new(10, y, 41, 1),
            hit_area: ClickRegion::new(9, y - 1, 43, 3),
            layout: AxisLayout::default(),
        }
    }

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion::clickable(ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_press_on_track_starts_drag() {
        let mut registry = InteractionRegistry::new();
        registry.register_track(horizontal_track(0, 5));

        assert_eq!(
            registry.handle_press(20, 5),
            Action::DragStart { slider: 0, value: 25.0 }
        );
        assert_eq!(registry.handle_press(20, 9), Action::None);
    }

    #[test]
    fn test_label_beats_track() {
        let mut registry = InteractionRegistry::new();
        registry.register_track(horizontal_track(1, 5));
        registry.register_label(1, 0, ClickRegion::new(10, 5, 5, 1));

        assert_eq!(
            registry.handle_press(11, 5),
            Action::SelectItem { slider: 1, index: 0 }
        );
    }

    #[test]
    fn test_drag_outside_interrupts() {
        let mut registry = InteractionRegistry::new();
        registry.register_track(horizontal_track(0, 5));

        assert_eq!(registry.handle_drag(0, 50, 6), Action::DragMove(100.0));
        assert_eq!(registry.handle_drag(0, 50, 12), Action::DragInterrupt);
        assert_eq!(registry.handle_release(0, 30, 5), Action::DragEnd(50.0));
    }

    #[test]
    fn test_vertical_track_uses_rows() {
        let track = TrackRegion {
            slider: 2,
            track: ClickRegion::new(4, 2, 3, 11),
            hit_area: ClickRegion::new(4, 1, 20, 12),
            layout: AxisLayout::new(Orientation::Vertical, false),
        };
        assert_eq!(track.value_at(5, 2), 0.0);
        assert_eq!(track.value_at(5, 12), 100.0);
        assert_eq!(track.value_at(5, 7), 50.0);
    }

    #[test]
    fn test_wheel_targets_slider_under_pointer() {
        let mut registry = InteractionRegistry::new();
        registry.register_track(horizontal_track(0, 5));
        registry.register_track(horizontal_track(1, 10));

        assert_eq!(registry.handle_wheel(20, 10, 1), Action::Wheel { slider: 1, steps: 1 });
        assert_eq!(registry.handle_wheel(0, 0, 1), Action::None);
    }
}
