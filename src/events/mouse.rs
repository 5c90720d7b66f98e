//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the slider components during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode};

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    if app.input_mode != InputMode::Normal {
        return Action::None;
    }

    let x = mouse.column;
    let y = mouse.row;

    match (mouse.kind, app.mouse_drag) {
        // A press while a drag is latched means the Up was lost; the app
        // commits the stale drag before starting the new gesture
        (MouseEventKind::Down(MouseButton::Left), _) => app.interactions.handle_press(x, y),
        (MouseEventKind::Drag(MouseButton::Left), Some(slider)) => {
            app.interactions.handle_drag(slider, x, y)
        }
        (MouseEventKind::Up(MouseButton::Left), Some(slider)) => {
            app.interactions.handle_release(slider, x, y)
        }
        (MouseEventKind::ScrollDown, None) => app.interactions.handle_wheel(x, y, 1),
        (MouseEventKind::ScrollUp, None) => app.interactions.handle_wheel(x, y, -1),
        _ => Action::None,
    }
}
