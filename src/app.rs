use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{NavigationResult, Result};
use crate::events::Action;
use crate::log;
use crate::router::{Route, Router};
use crate::slider::{
    AxisLayout, BindingController, SelectionSink, SliderMode,
};
use crate::tui::interaction::InteractionRegistry;

/// How long a selection notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Sliders have focus
    Help,   // Help popup showing all hotkeys
}

/// Transient status message, like a toast.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub expires_at: Instant,
}

/// Everything outside the sliders that reacts to their selection.
#[derive(Debug)]
pub struct Host {
    pub router: Router,
    pub selected_city: Option<String>,
    pub selected_year: Option<i32>,
    pub notice: Option<Notice>,
}

impl Host {
    fn post_notice(&mut self, title: &str, body: String) {
        self.notice = Some(Notice {
            title: title.to_string(),
            body,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }
}

impl SelectionSink for Host {
    fn navigate(&mut self, target: &str) -> NavigationResult<()> {
        let from = self.router.current();
        if self.router.navigate(target)? {
            log::log_navigation(from.name(), target);
        }
        Ok(())
    }

    fn city_changed(&mut self, city: &str) {
        if self.selected_city.as_deref() == Some(city) {
            return;
        }
        log::log_selection(SliderMode::Cities, city);
        self.selected_city = Some(city.to_string());
        self.post_notice("Location Updated", format!("Showing content for {}", city));
    }

    fn year_changed(&mut self, year: i32) {
        if self.selected_year == Some(year) {
            return;
        }
        log::log_selection(SliderMode::Years, &year.to_string());
        self.selected_year = Some(year);
        self.post_notice("Time Period Updated", format!("Showing content for {}", year));
    }
}

pub struct App {
    pub input_mode: InputMode,
    /// One controller per slider, in display order
    pub sliders: Vec<BindingController>,
    pub focused: usize,
    /// Slider held by the mouse, if any
    pub mouse_drag: Option<usize>,
    pub host: Host,
    pub layout: AxisLayout,
    pub step: f64,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalogs = config.catalogs()?;
        let options = config.controller_options()?;

        let root = Route::from_name(config.initial_route()).unwrap_or_else(|| {
            log::log(&format!(
                "Unknown initial route '{}', starting at Home",
                config.initial_route()
            ));
            Route::Home
        });

        let navigation = BindingController::mount(catalogs.navigation, options, Some(root.name()));
        let cities = BindingController::mount(catalogs.cities, options, config.initial_city());
        let years = BindingController::mount(catalogs.years, options, None);

        let host = Host {
            router: Router::new(root),
            selected_city: Some(cities.selected_item().name.clone()),
            selected_year: years.selected_item().year(),
            notice: None,
        };

        Ok(Self {
            input_mode: InputMode::Normal,
            sliders: vec![navigation, cities, years],
            focused: 0,
            mouse_drag: None,
            host,
            layout: config.axis_layout(),
            step: config.slider.step,
            interactions: InteractionRegistry::new(),
            should_quit: false,
        })
    }

    pub fn current_route(&self) -> Route {
        self.host.router.current()
    }

    /// City shown in the header: the last selection, else the item under
    /// the city slider's committed position
    pub fn selected_city(&self) -> Option<&str> {
        let slider = self.slider(SliderMode::Cities)?;
        slider
            .selected_city()
            .or(Some(slider.selected_item().name.as_str()))
    }

    pub fn selected_year(&self) -> Option<i32> {
        let slider = self.slider(SliderMode::Years)?;
        slider.selected_year().or_else(|| slider.selected_item().year())
    }

    fn slider(&self, mode: SliderMode) -> Option<&BindingController> {
        self.sliders.iter().find(|s| s.mode() == mode)
    }

    pub fn focused_slider(&self) -> &BindingController {
        &self.sliders[self.focused]
    }

    /// Apply an action produced by the event handlers.
    pub fn apply(&mut self, action: Action) {
        if !matches!(action, Action::None | Action::DragMove(_)) {
            log::log_event(&format!("{:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => {
                self.interrupt_all();
                self.input_mode = InputMode::Help;
            }
            Action::CloseHelp => self.input_mode = InputMode::Normal,
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(self.sliders.len() - 1),
            Action::FocusSlider(index) => self.focus(index),
            Action::NudgeFocused(steps) => {
                let delta = self.visual_delta(steps);
                self.sliders[self.focused].nudge(delta, &mut self.host);
            }
            Action::Commit => {
                let slider = &mut self.sliders[self.focused];
                let raw = slider.raw_position();
                slider.release(raw, &mut self.host);
            }
            Action::SelectFocusedItem(index) => {
                self.sliders[self.focused].select_index(index, &mut self.host);
            }
            Action::SelectItem { slider, index } => {
                self.end_mouse_drag();
                if slider < self.sliders.len() {
                    self.focus(slider);
                    self.sliders[slider].select_index(index, &mut self.host);
                }
            }
            Action::Wheel { slider, steps } => {
                if slider < self.sliders.len() && self.mouse_drag.is_none() {
                    self.focus(slider);
                    let steps = if self.layout.inverted { -steps } else { steps };
                    self.sliders[slider].step_items(steps, &mut self.host);
                }
            }
            Action::DragStart { slider, value } => {
                self.end_mouse_drag();
                if slider < self.sliders.len() {
                    self.focus(slider);
                    self.mouse_drag = Some(slider);
                    self.sliders[slider].drag_move(value, &mut self.host);
                }
            }
            Action::DragMove(value) => {
                if let Some(slider) = self.mouse_drag {
                    self.sliders[slider].drag_move(value, &mut self.host);
                }
            }
            Action::DragEnd(value) => {
                if let Some(slider) = self.mouse_drag.take() {
                    self.sliders[slider].release(value, &mut self.host);
                }
            }
            Action::DragInterrupt => self.end_mouse_drag(),
            Action::InterruptAll => self.interrupt_all(),
            Action::Back => {
                if let Err(e) = self.host.router.back() {
                    log::log(&format!("Back ignored: {}", e));
                }
            }
            Action::None => {}
        }

        self.sync_route();
    }

    /// Drop expired notices. Called on every tick of the event loop.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.host.notice {
            if Instant::now() >= notice.expires_at {
                self.host.notice = None;
            }
        }
    }

    /// Inbound sync: point the page slider at the current route.
    fn sync_route(&mut self) {
        let route = self.host.router.current();
        for slider in &mut self.sliders {
            if slider.mode() == SliderMode::Navigation {
                slider.sync_route(route.name());
            }
        }
    }

    fn focus(&mut self, index: usize) {
        if index == self.focused || index >= self.sliders.len() {
            return;
        }
        self.sliders[self.focused].interrupt(&mut self.host);
        self.focused = index;
    }

    fn move_focus(&mut self, by: usize) {
        let next = (self.focused + by) % self.sliders.len();
        self.focus(next);
    }

    /// Commit the slider held by the mouse, if any.
    fn end_mouse_drag(&mut self) {
        if let Some(slider) = self.mouse_drag.take() {
            self.sliders[slider].interrupt(&mut self.host);
        }
    }

    fn interrupt_all(&mut self) {
        self.mouse_drag = None;
        for slider in &mut self.sliders {
            slider.interrupt(&mut self.host);
        }
    }

    /// Convert on-screen steps (right or down is positive) into axis units.
    fn visual_delta(&self, steps: i32) -> f64 {
        let delta = f64::from(steps) * self.step;
        if self.layout.inverted { -delta } else { delta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.current_route(), Route::Home);
        assert_eq!(app.sliders.len(), 3);
        assert_eq!(app.host.selected_city.as_deref(), Some("Miami"));
        assert_eq!(app.host.selected_year, Some(2020));
        assert!(app.host.notice.is_none());
    }

    #[test]
    fn test_header_selection_reads_sliders() {
        let mut app = app();
        // Nothing selected yet: falls back to the item under the thumb
        assert_eq!(app.selected_city(), Some("Miami"));
        assert_eq!(app.selected_year(), Some(2020));

        app.apply(Action::DragStart { slider: 2, value: 62.0 });
        assert_eq!(app.selected_year(), Some(2023));
        assert_eq!(app.sliders[2].active_item().map(|i| i.name.as_str()), Some("2023"));
    }

    #[test]
    fn test_initial_route_and_city_seed_sliders() {
        let config = Config {
            initial_route: Some("Hotels".to_string()),
            initial_city: Some("New York".to_string()),
            ..Config::default()
        };
        let app = App::from_config(&config).unwrap();

        assert_eq!(app.current_route(), Route::Hotels);
        assert_eq!(app.sliders[0].raw_position(), 50.0);
        assert_eq!(app.sliders[1].raw_position(), 100.0);
        // Seeding is not a user change
        assert!(app.host.notice.is_none());
    }

    #[test]
    fn test_drag_navigates_and_syncs_back() {
        let mut app = app();

        app.apply(Action::DragStart { slider: 0, value: 23.0 });
        assert_eq!(app.current_route(), Route::Flights);
        assert_eq!(app.sliders[0].raw_position(), 23.0);

        app.apply(Action::DragEnd(23.0));
        assert_eq!(app.sliders[0].raw_position(), 25.0);
        assert_eq!(app.host.router.depth(), 2);
    }

    #[test]
    fn test_back_moves_thumb_without_navigating() {
        let mut app = app();
        app.apply(Action::SelectItem { slider: 0, index: 4 });
        assert_eq!(app.current_route(), Route::Events);

        app.apply(Action::Back);
        assert_eq!(app.current_route(), Route::Home);
        assert_eq!(app.sliders[0].committed_position(), 0.0);
        assert_eq!(app.host.router.depth(), 1);
    }

    #[test]
    fn test_city_change_posts_notice() {
        let mut app = app();
        app.apply(Action::SelectItem { slider: 1, index: 1 });

        assert_eq!(app.host.selected_city.as_deref(), Some("New York"));
        let notice = app.host.notice.as_ref().unwrap();
        assert_eq!(notice.title, "Location Updated");
        assert_eq!(notice.body, "Showing content for New York");
    }

    #[test]
    fn test_year_keyboard_drag() {
        let mut app = app();
        app.apply(Action::FocusSlider(2));
        for _ in 0..9 {
            app.apply(Action::NudgeFocused(1));
        }
        // 45 resolves to 2022
        assert_eq!(app.host.selected_year, Some(2022));
        assert!(app.sliders[2].is_dragging());

        app.apply(Action::Commit);
        assert!(!app.sliders[2].is_dragging());
        assert_eq!(app.sliders[2].raw_position(), 40.0);
    }

    #[test]
    fn test_focus_change_commits_drag() {
        let mut app = app();
        app.apply(Action::FocusSlider(1));
        app.apply(Action::NudgeFocused(14));
        assert!(app.sliders[1].is_dragging());

        app.apply(Action::FocusNext);
        assert_eq!(app.focused, 2);
        assert!(!app.sliders[1].is_dragging());
        assert_eq!(app.sliders[1].committed_position(), 100.0);
    }

    #[test]
    fn test_interrupt_all_leaves_nothing_dragging() {
        let mut app = app();
        app.apply(Action::DragStart { slider: 2, value: 70.0 });
        app.apply(Action::InterruptAll);

        assert!(app.mouse_drag.is_none());
        assert!(app.sliders.iter().all(|s| !s.is_dragging()));
        assert_eq!(app.host.selected_year, Some(2023));
    }

    #[test]
    fn test_drag_interrupt_commits_at_last_position() {
        let mut app = app();
        app.apply(Action::DragStart { slider: 1, value: 30.0 });
        app.apply(Action::DragMove(90.0));
        app.apply(Action::DragInterrupt);

        assert!(app.mouse_drag.is_none());
        assert_eq!(app.sliders[1].committed_position(), 100.0);
    }

    #[test]
    fn test_single_wheel_notch_moves_each_slider() {
        let mut app = app();
        let next = [25.0, 100.0, 20.0];

        for (slider, position) in next.into_iter().enumerate() {
            app.apply(Action::Wheel { slider, steps: 1 });
            assert_eq!(app.sliders[slider].committed_position(), position, "slider {slider}");

            app.apply(Action::Wheel { slider, steps: -1 });
            assert_eq!(app.sliders[slider].committed_position(), 0.0, "slider {slider}");
        }

        assert_eq!(app.current_route(), Route::Home);
        assert_eq!(app.host.router.depth(), 3);
        assert_eq!(app.selected_city(), Some("Miami"));
        assert_eq!(app.selected_year(), Some(2020));
    }

    #[test]
    fn test_wheel_notch_navigates() {
        let mut app = app();
        app.apply(Action::Wheel { slider: 0, steps: 1 });
        assert_eq!(app.current_route(), Route::Flights);

        app.apply(Action::Wheel { slider: 0, steps: 1 });
        assert_eq!(app.current_route(), Route::Hotels);
    }

    #[test]
    fn test_wheel_follows_inverted_axis() {
        let config = Config {
            locale: Some("he".to_string()),
            ..Config::default()
        };
        let mut app = App::from_config(&config).unwrap();
        app.apply(Action::SelectItem { slider: 2, index: 3 });

        // Scrolling down (right) moves toward position 0 on a right-to-left axis
        app.apply(Action::Wheel { slider: 2, steps: 1 });
        assert_eq!(app.selected_year(), Some(2022));
    }

    #[test]
    fn test_new_press_commits_stale_drag() {
        let mut app = app();
        app.apply(Action::DragStart { slider: 1, value: 90.0 });
        assert_eq!(app.mouse_drag, Some(1));

        app.apply(Action::DragStart { slider: 2, value: 40.0 });

        assert!(!app.sliders[1].is_dragging());
        assert_eq!(app.sliders[1].committed_position(), 100.0);
        assert_eq!(app.mouse_drag, Some(2));
        assert!(app.sliders[2].is_dragging());
    }

    #[test]
    fn test_inverted_layout_flips_keys() {
        let config = Config {
            locale: Some("he".to_string()),
            ..Config::default()
        };
        let mut app = App::from_config(&config).unwrap();
        app.apply(Action::FocusSlider(2));
        app.apply(Action::SelectFocusedItem(5));
        app.apply(Action::NudgeFocused(4));

        // Right moves toward position 0 when the axis runs right to left
        assert_eq!(app.sliders[2].raw_position(), 80.0);
    }

    #[test]
    fn test_notice_expires() {
        let mut app = app();
        app.host.notice = Some(Notice {
            title: "t".into(),
            body: "b".into(),
            expires_at: Instant::now() - Duration::from_millis(1),
        });
        app.tick();
        assert!(app.host.notice.is_none());
    }
}
