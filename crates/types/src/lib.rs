//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the seesaw game.
//! All types are plain data with no engine behaviour, making them usable in
//! any context (engine logic, terminal rendering, host input mapping).
//!
//! # Board
//!
//! The board is split into two halves around a centre fulcrum:
//!
//! - **Human** drops weights onto the left half
//! - **Machine** drops weights onto the right half
//! - Weights fall one row per tick and settle on the bottom row
//!
//! # Default configuration
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns (indexed 0-9) |
//! | `BOARD_HEIGHT` | 20 | Rows (indexed 0-19) |
//! | `MIN_WEIGHT` / `MAX_WEIGHT` | 1 / 10 | Weight value range |
//! | `WEIGHT_DISTRIBUTION_AREA` | 2 | Columns summed per bending area |
//! | `SCALE_SENSIBILITY` | 1 | Multiplier of the area next to the centre |
//! | `DISTANCE_TO_CENTER_IMPACT` | 1 | Multiplier gain per area away from centre |
//! | `MAX_BENDING` | 30 | Bending magnitude that ends the game |
//! | `INITIAL_TICK_MS` | 500 | Human gravity interval at game start |
//! | `TICK_INCREMENT_MS` | 25 | Human interval gain per human turn |
//! | `MAX_TICK_MS` | 1000 | Human interval cap |
//! | `AUTO_TICK_MS` | 50 | Machine gravity interval |
//!
//! # Examples
//!
//! ```
//! use seesaw_types::{GameAction, GameConfig, Player};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! let owner = Player::from_raw("left").unwrap();
//! assert_eq!(owner, Player::Human);
//!
//! assert_eq!(GameConfig::DEFAULT.width, 10);
//! ```

use std::fmt;

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Smallest weight value a spawned shape can carry
pub const MIN_WEIGHT: u32 = 1;

/// Largest weight value a spawned shape can carry
pub const MAX_WEIGHT: u32 = 10;

/// Value used when a requested weight is out of range
pub const DEFAULT_WEIGHT: u32 = 5;

/// Number of adjacent columns summed into one bending area
pub const WEIGHT_DISTRIBUTION_AREA: usize = 2;

/// Impact multiplier of the area closest to the centre
pub const SCALE_SENSIBILITY: i64 = 1;

/// Extra impact per area away from the centre
pub const DISTANCE_TO_CENTER_IMPACT: i64 = 1;

/// Bending magnitude above which the board breaks
pub const MAX_BENDING: i64 = 30;

/// Human gravity interval when a game starts (ms)
pub const INITIAL_TICK_MS: u64 = 500;

/// Human gravity interval gain per human turn (ms)
pub const TICK_INCREMENT_MS: u64 = 25;

/// Human gravity interval cap (ms)
pub const MAX_TICK_MS: u64 = 1000;

/// Machine gravity interval (ms)
pub const AUTO_TICK_MS: u64 = 50;

/// Immutable game rules.
///
/// The process runs with [`GameConfig::DEFAULT`]; other values exist for tests
/// and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub height: u16,
    pub width: u16,
    pub min_weight: u32,
    pub max_weight: u32,
    pub weight_distribution_area: usize,
    pub scale_sensibility: i64,
    pub distance_to_center_impact: i64,
    pub max_bending: i64,
    pub initial_tick_ms: u64,
    pub tick_increment_ms: u64,
    pub max_tick_ms: u64,
    pub auto_tick_ms: u64,
}

impl GameConfig {
    pub const DEFAULT: GameConfig = GameConfig {
        height: BOARD_HEIGHT,
        width: BOARD_WIDTH,
        min_weight: MIN_WEIGHT,
        max_weight: MAX_WEIGHT,
        weight_distribution_area: WEIGHT_DISTRIBUTION_AREA,
        scale_sensibility: SCALE_SENSIBILITY,
        distance_to_center_impact: DISTANCE_TO_CENTER_IMPACT,
        max_bending: MAX_BENDING,
        initial_tick_ms: INITIAL_TICK_MS,
        tick_increment_ms: TICK_INCREMENT_MS,
        max_tick_ms: MAX_TICK_MS,
        auto_tick_ms: AUTO_TICK_MS,
    };

    /// Index of the bottom row, where weights settle.
    pub fn bottom_row(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Midpoint of the weight range, used for out-of-range value overrides.
    pub fn default_weight(&self) -> u32 {
        if (self.min_weight..=self.max_weight).contains(&DEFAULT_WEIGHT) {
            DEFAULT_WEIGHT
        } else {
            self.min_weight + (self.max_weight - self.min_weight) / 2
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.width, 10);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.bottom_row(), 19);
        assert_eq!(cfg.max_bending, 30);
        assert!(cfg.initial_tick_ms <= cfg.max_tick_ms);
        assert!(cfg.auto_tick_ms < cfg.initial_tick_ms);
    }

    #[test]
    fn default_weight_falls_back_to_midpoint() {
        assert_eq!(GameConfig::DEFAULT.default_weight(), 5);

        let cfg = GameConfig {
            min_weight: 20,
            max_weight: 30,
            ..GameConfig::DEFAULT
        };
        assert_eq!(cfg.default_weight(), 25);
    }

    #[test]
    fn player_parses_aliases() {
        assert_eq!(Player::from_raw("Human"), Ok(Player::Human));
        assert_eq!(Player::from_raw("left"), Ok(Player::Human));
        assert_eq!(Player::from_raw("MACHINE"), Ok(Player::Machine));
        assert_eq!(Player::from_raw("right"), Ok(Player::Machine));
        assert_eq!(Player::from_raw("1"), Ok(Player::Machine));
        assert_eq!(
            Player::from_raw("spectator"),
            Err(GameError::InvalidPlayer("spectator".to_string()))
        );
    }

    #[test]
    fn player_opponent_alternates() {
        assert_eq!(Player::Human.opponent(), Player::Machine);
        assert_eq!(Player::Machine.opponent(), Player::Human);
    }

    #[test]
    fn shape_size_matches_weight_classes() {
        assert_eq!(ShapeSize::for_value(1, 10), ShapeSize::Xs);
        assert_eq!(ShapeSize::for_value(2, 10), ShapeSize::Xs);
        assert_eq!(ShapeSize::for_value(4, 10), ShapeSize::S);
        assert_eq!(ShapeSize::for_value(5, 10), ShapeSize::S);
        assert_eq!(ShapeSize::for_value(6, 10), ShapeSize::M);
        assert_eq!(ShapeSize::for_value(8, 10), ShapeSize::L);
        assert_eq!(ShapeSize::for_value(10, 10), ShapeSize::Xl);
        assert_eq!(ShapeSize::for_value(99, 10), ShapeSize::Xl);
    }

    #[test]
    fn game_action_round_trips_through_str() {
        for action in [
            GameAction::Play,
            GameAction::Pause,
            GameAction::Reset,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveDown,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("rotateCw"), None);
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            GameError::InvalidPlayer("x".into()).to_string(),
            "invalid player: \"x\""
        );
        assert_eq!(
            GameError::InvalidInterval(0).to_string(),
            "invalid ticker interval: 0ms (must be positive)"
        );
    }
}

/// The two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Left half, steered by keyboard input.
    Human,
    /// Right half, drops where it spawns.
    Machine,
}

impl Player {
    /// Parse a raw owner identifier (case-insensitive).
    ///
    /// Accepts role names, positional aliases and numeric tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use seesaw_types::{GameError, Player};
    ///
    /// assert_eq!(Player::from_raw("machine"), Ok(Player::Machine));
    /// assert_eq!(Player::from_raw("0"), Ok(Player::Human));
    /// assert!(matches!(Player::from_raw("nobody"), Err(GameError::InvalidPlayer(_))));
    /// ```
    pub fn from_raw(s: &str) -> Result<Self, GameError> {
        match s.trim().to_lowercase().as_str() {
            "human" | "left" | "0" => Ok(Player::Human),
            "machine" | "right" | "1" => Ok(Player::Machine),
            _ => Err(GameError::InvalidPlayer(s.to_string())),
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Machine => "machine",
        }
    }
}

/// Cosmetic shape of a weight. Does not affect physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Triangle,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Triangle, Shape::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Circle => "circle",
        }
    }
}

/// Display size class of a weight, from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl ShapeSize {
    pub const ALL: [ShapeSize; 5] = [
        ShapeSize::Xs,
        ShapeSize::S,
        ShapeSize::M,
        ShapeSize::L,
        ShapeSize::Xl,
    ];

    /// Size class for `value` on a `1..=max_weight` scale.
    ///
    /// Values lighter than one class step map to `Xs`; values above
    /// `max_weight` map to `Xl`.
    pub fn for_value(value: u32, max_weight: u32) -> Self {
        let classes = Self::ALL.len() as u32;
        let step = (value * classes) / max_weight.max(1);
        let idx = step.saturating_sub(1).min(classes - 1);
        Self::ALL[idx as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeSize::Xs => "xs",
            ShapeSize::S => "s",
            ShapeSize::M => "m",
            ShapeSize::L => "l",
            ShapeSize::Xl => "xl",
        }
    }
}

/// Board coordinate; `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Unit movement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` applied by one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Game lifecycle status.
///
/// `PlayerWon` and `GameOver` are terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    #[default]
    Initial,
    Playing,
    Paused,
    PlayerWon,
    GameOver,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::PlayerWon | GameStatus::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Initial => "initial",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::PlayerWon => "player-won",
            GameStatus::GameOver => "game-over",
        }
    }
}

/// Commands a host can issue to the engine.
///
/// These carry no arguments; state guards decide whether they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameAction {
    /// Start or resume the game
    Play,
    /// Stop the ticker and freeze the board
    Pause,
    /// Return to the initial state
    Reset,
    /// Move the human weight one column left
    MoveLeft,
    /// Move the human weight one column right
    MoveRight,
    /// Move the human weight one row down
    MoveDown,
}

impl GameAction {
    /// Parse action from a camelCase command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use seesaw_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("PLAY"), Some(GameAction::Play));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(GameAction::Play),
            "pause" | "stop" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Play => "play",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
        }
    }

    /// Direction for movement actions, `None` for lifecycle commands.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Play | GameAction::Pause | GameAction::Reset => None,
        }
    }
}

/// Engine-side event emitted on turn and game transitions.
///
/// Hosts drain it after each update to drive status lines and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    TurnStarted { player: Player },
    WeightArchived { owner: Player, bending: i64 },
    Finished { status: GameStatus, bending: i64 },
}

/// Hard failures of the engine API.
///
/// Guard rejections (a command in a state that does not allow it) are not
/// errors and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Owner identifier outside the player set.
    InvalidPlayer(String),
    /// Ticker interval that is zero or negative.
    InvalidInterval(i64),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlayer(raw) => write!(f, "invalid player: {raw:?}"),
            GameError::InvalidInterval(ms) => {
                write!(f, "invalid ticker interval: {ms}ms (must be positive)")
            }
        }
    }
}

impl std::error::Error for GameError {}
