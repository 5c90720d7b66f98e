//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `page` - City/year header and the current route's page body
//! - `slider` - Page, city and year sliders (registers mouse regions)
//! - `status_bar` - Selection notices and hotkey hints
//! - `help_popup` - Help overlay with keybindings

mod help_popup;
mod page;
mod slider;
mod status_bar;

// Re-export all render functions for use in ui.rs
pub use help_popup::render_help_popup;
pub use page::{render_header, render_page};
pub use slider::render_slider;
pub use status_bar::{render_hotkeys, render_notice};
