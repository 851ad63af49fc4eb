//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every
//! press moves exactly one step; there is no auto-shift timing.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_event, handle_key_event, should_quit, KeyBindings, DEFAULT_ROTATE_KEY};
