//! Binding controller: one slider's drag lifecycle.
//!
//! The controller owns the raw (thumb) position and the committed position
//! of a single slider and keeps them consistent with whoever consumes the
//! selection. Outbound calls (`navigate`, city and year callbacks) happen
//! only in response to user-originated events. Inbound synchronisation from
//! the current route or an initial city never calls out, which keeps the
//! slider and the router from driving each other in a loop.

use crate::error::NavigationResult;
use crate::log;

use super::catalog::{clamp_axis, Catalog, SelectableItem, SliderMode};
use super::resolver::{item_within, resolve_index};

/// Consumer of a slider's selection.
pub trait SelectionSink {
    /// Navigate to a named route
    fn navigate(&mut self, target: &str) -> NavigationResult<()>;

    /// The selected city changed
    fn city_changed(&mut self, city: &str);

    /// The selected year changed
    fn year_changed(&mut self, year: i32);
}

/// Tunables shared by every controller instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    /// Propagate city/year selection on every move, not only on release
    pub live_update: bool,
    /// Navigation mode navigates mid-drag once the thumb is this close to a page
    pub snap_threshold: f64,
    /// Distance under which an item counts as active for highlighting
    pub active_threshold: f64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            live_update: true,
            snap_threshold: 5.0,
            active_threshold: 5.0,
        }
    }
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress; raw and committed positions agree
    Idle,
    /// A gesture is in progress; the raw position follows the pointer
    Dragging,
}

/// Where a position change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Pointer, keyboard or tap
    User,
    /// Current route or initial city supplied from outside
    External,
}

#[derive(Debug, Clone)]
pub struct BindingController {
    catalog: Catalog,
    options: ControllerOptions,
    state: DragState,
    raw_position: f64,
    committed_position: f64,
    selected_city: Option<String>,
    selected_year: Option<i32>,
    /// Item propagated during the current drag, to avoid repeating it on every move
    live_emitted: Option<usize>,
}

impl BindingController {
    /// Mount a controller at the start of the axis.
    pub fn new(catalog: Catalog, options: ControllerOptions) -> Self {
        Self {
            catalog,
            options,
            state: DragState::Idle,
            raw_position: 0.0,
            committed_position: 0.0,
            selected_city: None,
            selected_year: None,
            live_emitted: None,
        }
    }

    /// Mount a controller seeded from external state.
    ///
    /// The seed is a route name for navigation sliders and an item name for
    /// city and year sliders. A seed with no matching item leaves the slider
    /// at position 0. Nothing is propagated.
    pub fn mount(catalog: Catalog, options: ControllerOptions, seed: Option<&str>) -> Self {
        let mut controller = Self::new(catalog, options);
        if let Some(seed) = seed {
            match controller.mode() {
                SliderMode::Navigation => controller.sync_route(seed),
                SliderMode::Cities => controller.sync_initial_city(seed),
                SliderMode::Years => controller.sync_item(seed),
            };
        }
        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> SliderMode {
        self.catalog.mode()
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Where the thumb is drawn
    pub fn raw_position(&self) -> f64 {
        self.raw_position
    }

    /// Last snapped position
    pub fn committed_position(&self) -> f64 {
        self.committed_position
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    /// Item currently under the committed position
    pub fn selected_item(&self) -> &SelectableItem {
        super::resolver::resolve(&self.catalog, self.committed_position)
    }

    /// Item close enough to the thumb to be highlighted
    pub fn active_item(&self) -> Option<&SelectableItem> {
        item_within(&self.catalog, self.raw_position, self.options.active_threshold)
    }

    /// Pointer moved during a gesture. Starts the gesture if idle.
    pub fn drag_move(&mut self, value: f64, sink: &mut dyn SelectionSink) {
        if self.state == DragState::Idle {
            self.live_emitted = None;
        }
        self.state = DragState::Dragging;
        self.raw_position = clamp_axis(value);

        let index = resolve_index(&self.catalog, self.raw_position);
        let live = match self.mode() {
            SliderMode::Navigation => {
                self.catalog.items()[index].distance_to(self.raw_position) < self.options.snap_threshold
            }
            SliderMode::Cities | SliderMode::Years => self.options.live_update,
        };

        if live && self.live_emitted != Some(index) {
            self.live_emitted = Some(index);
            self.record(index, Origin::User, sink);
        }
    }

    /// Move the thumb by `delta` as part of a gesture.
    pub fn nudge(&mut self, delta: f64, sink: &mut dyn SelectionSink) {
        self.drag_move(self.raw_position + delta, sink);
    }

    /// Pointer released: snap to the nearest item and propagate it.
    ///
    /// Propagation runs even if the same item was already sent mid-drag so
    /// the final selection is always authoritative.
    pub fn release(&mut self, value: f64, sink: &mut dyn SelectionSink) {
        let index = resolve_index(&self.catalog, clamp_axis(value));
        self.commit(index, sink);
    }

    /// Commit at the last raw position if a gesture is in progress.
    ///
    /// Used when a gesture is cut short (pointer left the slider, terminal
    /// lost focus, focus moved to another slider). Returns whether a commit
    /// happened.
    pub fn interrupt(&mut self, sink: &mut dyn SelectionSink) -> bool {
        if self.state != DragState::Dragging {
            return false;
        }
        self.release(self.raw_position, sink);
        true
    }

    /// Tap on an item: an atomic move and commit at the item's position.
    ///
    /// Returns false if `index` is out of range.
    pub fn select_index(&mut self, index: usize, sink: &mut dyn SelectionSink) -> bool {
        if index >= self.catalog.len() {
            return false;
        }
        self.commit(index, sink);
        true
    }

    /// Wheel notch: commit the item `steps` places away from the one under
    /// the thumb, stopping at either end of the catalog.
    pub fn step_items(&mut self, steps: i32, sink: &mut dyn SelectionSink) {
        let current = resolve_index(&self.catalog, self.raw_position) as i64;
        let last = self.catalog.len() as i64 - 1;
        let index = (current + i64::from(steps)).clamp(0, last) as usize;
        self.commit(index, sink);
    }

    /// Inbound sync from the current route. Never navigates.
    ///
    /// While a gesture is in progress only the committed position moves, so
    /// a route change caused by live snapping does not yank the thumb away
    /// from the pointer. Returns whether the route matched an item.
    pub fn sync_route(&mut self, route: &str) -> bool {
        if self.mode() != SliderMode::Navigation {
            return false;
        }
        let index = self.catalog.index_of_target(route);
        self.sync(index)
    }

    /// Inbound sync from an initial city. Never calls the city callback.
    pub fn sync_initial_city(&mut self, city: &str) -> bool {
        if self.mode() != SliderMode::Cities {
            return false;
        }
        self.sync_item(city)
    }

    fn sync_item(&mut self, name: &str) -> bool {
        let index = self.catalog.index_of(name);
        self.sync(index)
    }

    fn sync(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(index) => {
                self.record(index, Origin::External, &mut NoSink);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, index: usize, sink: &mut dyn SelectionSink) {
        let position = self.catalog.items()[index].position;
        self.state = DragState::Idle;
        self.raw_position = position;
        self.committed_position = position;
        self.live_emitted = None;
        self.record(index, Origin::User, sink);
    }

    /// Update cached selection for `index` and, for user-originated changes,
    /// push it to the sink.
    fn record(&mut self, index: usize, origin: Origin, sink: &mut dyn SelectionSink) {
        let item = &self.catalog.items()[index];

        if origin == Origin::External {
            self.committed_position = item.position;
            if self.state == DragState::Idle {
                self.raw_position = item.position;
            }
        }

        match self.mode() {
            SliderMode::Cities => self.selected_city = Some(item.name.clone()),
            SliderMode::Years => self.selected_year = item.year(),
            SliderMode::Navigation => {}
        }

        if origin == Origin::External {
            return;
        }

        match self.mode() {
            SliderMode::Navigation => {
                let Some(target) = item.target.as_deref() else {
                    return;
                };
                if let Err(e) = sink.navigate(target) {
                    log::log(&format!("Navigation to '{}' failed: {}", target, e));
                }
            }
            SliderMode::Cities => sink.city_changed(&item.name),
            SliderMode::Years => {
                if let Some(year) = item.year() {
                    sink.year_changed(year);
                }
            }
        }
    }
}

/// Sink for inbound updates, which must never reach the outside.
struct NoSink;

impl SelectionSink for NoSink {
    fn navigate(&mut self, _target: &str) -> NavigationResult<()> {
        Ok(())
    }

    fn city_changed(&mut self, _city: &str) {}

    fn year_changed(&mut self, _year: i32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigationError;
    use crate::slider::catalogs;
    use crate::slider::testing::{Call, RecordingSink};

    fn navigation() -> BindingController {
        BindingController::new(catalogs::navigation_pages(), ControllerOptions::default())
    }

    fn cities() -> BindingController {
        BindingController::new(catalogs::cities(), ControllerOptions::default())
    }

    fn years() -> BindingController {
        BindingController::new(catalogs::years(), ControllerOptions::default())
    }

    #[test]
    fn test_initial_state_is_idle_at_zero() {
        let slider = navigation();
        assert!(!slider.is_dragging());
        assert_eq!(slider.raw_position(), 0.0);
        assert_eq!(slider.committed_position(), 0.0);
    }

    #[test]
    fn test_navigation_snaps_during_drag() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(23.0, &mut sink);

        assert!(slider.is_dragging());
        assert_eq!(slider.raw_position(), 23.0);
        assert_eq!(sink.calls, vec![Call::Navigate("Flights".into())]);
    }

    #[test]
    fn test_navigation_waits_for_release_when_far_from_page() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(10.0, &mut sink);
        assert!(sink.calls.is_empty());

        slider.release(10.0, &mut sink);
        assert_eq!(sink.calls, vec![Call::Navigate("Home".into())]);
        assert!(!slider.is_dragging());
        assert_eq!(slider.raw_position(), 0.0);
        assert_eq!(slider.committed_position(), 0.0);
    }

    #[test]
    fn test_live_navigation_not_repeated_for_same_page() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(23.0, &mut sink);
        slider.drag_move(24.0, &mut sink);
        slider.drag_move(26.0, &mut sink);
        slider.drag_move(48.0, &mut sink);

        assert_eq!(
            sink.calls,
            vec![
                Call::Navigate("Flights".into()),
                Call::Navigate("Hotels".into())
            ]
        );
    }

    #[test]
    fn test_release_repeats_live_propagation() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(23.0, &mut sink);
        slider.release(23.0, &mut sink);

        assert_eq!(
            sink.calls,
            vec![
                Call::Navigate("Flights".into()),
                Call::Navigate("Flights".into())
            ]
        );
        assert_eq!(slider.raw_position(), 25.0);
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.release(61.0, &mut sink);
        let first = (slider.raw_position(), slider.committed_position(), slider.is_dragging());
        slider.release(61.0, &mut sink);
        let second = (slider.raw_position(), slider.committed_position(), slider.is_dragging());

        assert_eq!(first, (50.0, 50.0, false));
        assert_eq!(first, second);
    }

    #[test]
    fn test_release_clamps_out_of_range_values() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(180.0, &mut sink);
        assert_eq!(slider.raw_position(), 100.0);
        slider.release(-20.0, &mut sink);
        assert_eq!(slider.committed_position(), 0.0);
    }

    #[test]
    fn test_city_mount_does_not_propagate() {
        let slider = BindingController::mount(
            catalogs::cities(),
            ControllerOptions::default(),
            Some("New York"),
        );

        assert_eq!(slider.raw_position(), 100.0);
        assert_eq!(slider.committed_position(), 100.0);
        assert_eq!(slider.selected_city(), Some("New York"));
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_unknown_seed_falls_back_to_zero() {
        let slider = BindingController::mount(
            catalogs::cities(),
            ControllerOptions::default(),
            Some("Atlantis"),
        );
        assert_eq!(slider.raw_position(), 0.0);
        assert_eq!(slider.selected_city(), None);
    }

    #[test]
    fn test_year_tracks_drag() {
        let mut slider = years();
        let mut sink = RecordingSink::default();

        slider.drag_move(45.0, &mut sink);

        assert_eq!(sink.calls, vec![Call::Year(2022)]);
        assert_eq!(slider.selected_year(), Some(2022));
        assert_eq!(slider.committed_position(), 0.0);
    }

    #[test]
    fn test_city_tracks_drag_and_commit() {
        let mut slider = cities();
        let mut sink = RecordingSink::default();

        slider.drag_move(70.0, &mut sink);
        slider.release(70.0, &mut sink);

        assert_eq!(
            sink.calls,
            vec![Call::City("New York".into()), Call::City("New York".into())]
        );
        assert_eq!(slider.committed_position(), 100.0);
    }

    #[test]
    fn test_live_update_disabled_waits_for_release() {
        let options = ControllerOptions {
            live_update: false,
            ..ControllerOptions::default()
        };
        let mut slider = BindingController::new(catalogs::years(), options);
        let mut sink = RecordingSink::default();

        slider.drag_move(45.0, &mut sink);
        assert!(sink.calls.is_empty());
        assert_eq!(slider.selected_year(), None);

        slider.release(45.0, &mut sink);
        assert_eq!(sink.calls, vec![Call::Year(2022)]);
    }

    #[test]
    fn test_tap_commits_once() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        assert!(slider.select_index(3, &mut sink));

        assert_eq!(sink.calls, vec![Call::Navigate("Beauty".into())]);
        assert_eq!(slider.raw_position(), 75.0);
        assert_eq!(slider.committed_position(), 75.0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_tap_out_of_range_is_ignored() {
        let mut slider = cities();
        let mut sink = RecordingSink::default();
        assert!(!slider.select_index(9, &mut sink));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_interrupt_commits_last_raw_position() {
        let mut slider = cities();
        let mut sink = RecordingSink::default();

        assert!(!slider.interrupt(&mut sink));

        slider.drag_move(80.0, &mut sink);
        assert!(slider.interrupt(&mut sink));
        assert!(!slider.is_dragging());
        assert_eq!(slider.raw_position(), 100.0);
    }

    #[test]
    fn test_route_sync_does_not_navigate() {
        let mut slider = navigation();
        assert!(slider.sync_route("Hotels"));
        assert_eq!(slider.raw_position(), 50.0);
        assert_eq!(slider.committed_position(), 50.0);
        assert_eq!(slider.selected_item().target.as_deref(), Some("Hotels"));
    }

    #[test]
    fn test_route_round_trip() {
        let slider = BindingController::mount(
            catalogs::navigation_pages(),
            ControllerOptions::default(),
            Some("Beauty"),
        );
        let active = slider.active_item().and_then(|item| item.target.clone());
        assert_eq!(active.as_deref(), Some("Beauty"));
    }

    #[test]
    fn test_route_miss_keeps_last_position() {
        let mut slider = navigation();
        slider.sync_route("Events");
        assert!(!slider.sync_route("Rentals"));
        assert_eq!(slider.raw_position(), 100.0);
    }

    #[test]
    fn test_route_sync_during_drag_leaves_thumb() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(23.0, &mut sink);
        slider.sync_route("Flights");

        assert_eq!(slider.raw_position(), 23.0);
        assert_eq!(slider.committed_position(), 25.0);
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_sync_ignores_other_modes() {
        let mut slider = cities();
        assert!(!slider.sync_route("Home"));
        let mut nav = navigation();
        assert!(!nav.sync_initial_city("Miami"));
    }

    #[test]
    fn test_navigation_failure_keeps_state() {
        let mut slider = navigation();
        let mut sink = RecordingSink {
            fail_with: Some(NavigationError::UnknownRoute("Events".into())),
            ..RecordingSink::default()
        };

        slider.release(97.0, &mut sink);

        assert_eq!(sink.calls, vec![Call::Navigate("Events".into())]);
        assert_eq!(slider.raw_position(), 100.0);
        assert_eq!(slider.committed_position(), 100.0);
    }

    #[test]
    fn test_active_item_uses_threshold() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.drag_move(52.0, &mut sink);
        assert_eq!(slider.active_item().map(|i| i.name.as_str()), Some("Hotels"));

        slider.drag_move(62.5, &mut sink);
        assert!(slider.active_item().is_none());
    }

    #[test]
    fn test_nudge_moves_from_raw_position() {
        let mut slider = years();
        let mut sink = RecordingSink::default();

        slider.nudge(5.0, &mut sink);
        slider.nudge(5.0, &mut sink);
        slider.nudge(5.0, &mut sink);

        assert_eq!(slider.raw_position(), 15.0);
        assert_eq!(sink.calls, vec![Call::Year(2020), Call::Year(2021)]);
    }

    #[test]
    fn test_single_step_moves_to_adjacent_item() {
        let mut slider = navigation();
        let mut sink = RecordingSink::default();

        slider.step_items(1, &mut sink);
        assert_eq!(slider.committed_position(), 25.0);
        assert_eq!(slider.raw_position(), 25.0);

        slider.step_items(-1, &mut sink);
        assert_eq!(slider.committed_position(), 0.0);
        assert_eq!(
            sink.calls,
            vec![Call::Navigate("Flights".into()), Call::Navigate("Home".into())]
        );
    }

    #[test]
    fn test_step_stops_at_catalog_ends() {
        let mut slider = years();
        let mut sink = RecordingSink::default();

        slider.step_items(-1, &mut sink);
        assert_eq!(slider.committed_position(), 0.0);

        slider.step_items(40, &mut sink);
        assert_eq!(slider.committed_position(), 100.0);
        assert_eq!(slider.selected_year(), Some(2025));
        // Commits always propagate, even when clamped onto the same item
        assert_eq!(sink.calls, vec![Call::Year(2020), Call::Year(2025)]);
    }

    #[test]
    fn test_step_during_drag_starts_from_thumb() {
        let mut slider = cities();
        let mut sink = RecordingSink::default();

        slider.drag_move(80.0, &mut sink);
        slider.step_items(-1, &mut sink);

        assert!(!slider.is_dragging());
        assert_eq!(slider.selected_city(), Some("Miami"));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = cities();
        let b = cities();
        let mut sink = RecordingSink::default();

        a.release(100.0, &mut sink);

        assert_eq!(a.committed_position(), 100.0);
        assert_eq!(b.committed_position(), 0.0);
    }
}
