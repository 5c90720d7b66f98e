//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
/// Slider values are already mapped onto the 0..=100 axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Focus ===
    /// Focus the next slider (commits a drag on the old one)
    FocusNext,
    /// Focus the previous slider
    FocusPrev,
    /// Focus a slider by index
    FocusSlider(usize),

    // === Keyboard gestures ===
    /// Move the focused slider's thumb by n steps as a drag (positive is right/down)
    NudgeFocused(i32),
    /// Release the focused slider at its thumb
    Commit,
    /// Tap the nth item of the focused slider
    SelectFocusedItem(usize),

    // === Pointer gestures ===
    /// Tap a label
    SelectItem { slider: usize, index: usize },
    /// Wheel over a slider: move n steps and commit
    Wheel { slider: usize, steps: i32 },
    /// Pointer pressed on a track
    DragStart { slider: usize, value: f64 },
    /// Pointer moved while held
    DragMove(f64),
    /// Pointer released
    DragEnd(f64),
    /// Pointer left the slider while held
    DragInterrupt,
    /// Terminal lost focus: commit every gesture in progress
    InterruptAll,

    // === Navigation ===
    /// Pop the route stack
    Back,

    // === No-op ===
    /// No action to take
    None,
}
