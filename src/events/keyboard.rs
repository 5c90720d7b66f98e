//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode};
use crate::slider::Orientation;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    let vertical = app.layout.orientation == Orientation::Vertical;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::F(n) if (1..=app.sliders.len()).contains(&usize::from(n)) => {
            Action::FocusSlider(usize::from(n) - 1)
        }

        // Along the track
        KeyCode::Left | KeyCode::Char('h') if !vertical => Action::NudgeFocused(-1),
        KeyCode::Right | KeyCode::Char('l') if !vertical => Action::NudgeFocused(1),
        KeyCode::Up | KeyCode::Char('k') if vertical => Action::NudgeFocused(-1),
        KeyCode::Down | KeyCode::Char('j') if vertical => Action::NudgeFocused(1),

        // Across tracks
        KeyCode::Up | KeyCode::Char('k') => Action::FocusPrev,
        KeyCode::Down | KeyCode::Char('j') => Action::FocusNext,
        KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,

        KeyCode::Enter | KeyCode::Char(' ') => Action::Commit,

        // Item by number
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.focused_slider().catalog().len() {
                Action::SelectFocusedItem(index)
            } else {
                Action::None
            }
        }

        KeyCode::Backspace => Action::Back,

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            Action::CloseHelp
        }
        _ => Action::None,
    }
}
