//! Event handling module for keyboard, mouse, and focus events.
//!
//! Handlers translate terminal events into `Action`s; `App::apply` is the
//! only place state changes.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
