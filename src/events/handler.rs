//! Central event handler that routes terminal events to the keyboard and
//! mouse handlers.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse, focus) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            // A gesture can't survive the terminal losing focus
            Event::FocusLost => Action::InterruptAll,
            _ => Action::None,
        }
    }
}
