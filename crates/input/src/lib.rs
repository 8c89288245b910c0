//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] commands.
//! The engine decides whether a command applies; this layer only translates
//! keys and recognises the quit chord.

pub mod map;

pub use seesaw_types as types;

pub use map::{handle_key_event, should_quit};
