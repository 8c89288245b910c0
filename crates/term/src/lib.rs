//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget toolkits and
//! instead projects the engine's view model into a framebuffer that is then
//! flushed to the terminal.
//!
//! - `game_view` is pure and unit-testable
//! - `renderer` owns the terminal and does all the I/O

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use seesaw_core as core;
pub use seesaw_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
