//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules of seesaw: board geometry, weights, the
//! bending model, the turn state machine and the ticker that paces it. It has
//! no dependencies on terminals or I/O, which makes it:
//!
//! - **Deterministic**: same seed and same clock produce identical games
//! - **Testable**: time is injected through [`ticker::Clock`]
//! - **Portable**: hosts only poll the game and draw its snapshot
//!
//! # Module Structure
//!
//! - [`board`]: player halves, bounds checks, unit steps
//! - [`weight`]: immutable falling weights
//! - [`bending`]: per-area load model producing the signed bending
//! - [`game_state`]: the state machine (play, pause, reset, move, tick)
//! - [`ticker`]: restartable repeating timer over an injectable clock
//! - [`snapshot`]: detached state copies and the renderer view model
//! - [`rng`]: seeded generator for weight values, shapes and columns
//!
//! # Game Rules
//!
//! - Players alternate; the machine always takes the first turn
//! - A new weight appears on row 0 of its owner's half and falls one row per tick
//! - The human may steer their weight left, right and down within the left half
//! - Landed weights on the bottom row bend the board; past `max_bending` it
//!   breaks and the side it tipped toward loses
//! - Human turns get slower as the game goes on; machine turns fall fast
//!
//! # Example
//!
//! ```
//! use seesaw_core::{Game, ManualClock};
//! use seesaw_types::{GameAction, GameConfig, GameStatus, Player};
//!
//! let clock = ManualClock::new();
//! let mut game = Game::with_clock(GameConfig::DEFAULT, 42, clock.clone()).unwrap();
//!
//! game.apply_action(GameAction::Play);
//! clock.advance(GameConfig::DEFAULT.initial_tick_ms);
//! game.pump();
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.player(), Some(Player::Machine));
//! ```

pub mod bending;
pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod ticker;
pub mod weight;

pub use seesaw_types as types;

// Re-export commonly used types for convenience
pub use bending::{calculate_array_distribution, calculate_bending, Distribution};
pub use board::{board_limits, step, within_board, BoardLimits};
pub use game_state::{Game, GameState};
pub use rng::SimpleRng;
pub use snapshot::{derive_view_model, GameSnapshot, ViewModel, WeightView};
pub use ticker::{Clock, ManualClock, SystemClock, Ticker};
pub use weight::{Weight, WeightOverrides};
