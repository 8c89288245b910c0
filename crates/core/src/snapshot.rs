//! Snapshots and view models for renderers.
//!
//! A [`GameSnapshot`] is a detached copy of everything a renderer may read.
//! [`derive_view_model`] turns it into display-ready data; it is a pure
//! function, so hosts call it after every state change and draw the result.

use serde::Serialize;

use crate::board::board_limits;
use crate::types::{GameConfig, GameStatus, Player, Position, Shape, ShapeSize};
use crate::weight::Weight;

/// Read-only copy of the game state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub player: Option<Player>,
    pub active: Option<Weight>,
    pub list: Vec<Weight>,
    pub bending: i64,
    pub max_bending: i64,
    /// Current ticker interval; `None` before the first play.
    pub tick_ms: Option<u64>,
}

/// One weight as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightView {
    pub position: Position,
    pub shape: Shape,
    pub size: ShapeSize,
    pub value: u32,
    pub owner: Player,
    pub active: bool,
}

/// Display-ready projection of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub width: u16,
    pub height: u16,
    /// Settled weights first, the active weight last.
    pub weights: Vec<WeightView>,
    /// Last column of the human half and first column of the machine half.
    pub split: (i32, i32),
    pub bending: i64,
    /// Bending relative to the breaking point, in `[-1.0, 1.0]`.
    pub tilt: f32,
    pub status: GameStatus,
    pub status_label: &'static str,
    pub turn: Option<Player>,
}

/// Project `snapshot` into drawable data.
pub fn derive_view_model(snapshot: &GameSnapshot, config: &GameConfig) -> ViewModel {
    let view = |w: &Weight, active: bool| WeightView {
        position: w.position(),
        shape: w.shape(),
        size: w.size(config),
        value: w.value(),
        owner: w.owner(),
        active,
    };

    let mut weights: Vec<WeightView> = snapshot.list.iter().map(|w| view(w, false)).collect();
    if let Some(active) = snapshot.active.as_ref() {
        weights.push(view(active, true));
    }

    let tilt = if snapshot.max_bending > 0 {
        (snapshot.bending as f32 / snapshot.max_bending as f32).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    ViewModel {
        width: config.width,
        height: config.height,
        weights,
        split: (
            board_limits(Player::Human, config).end.x,
            board_limits(Player::Machine, config).start.x,
        ),
        bending: snapshot.bending,
        tilt,
        status: snapshot.status,
        status_label: status_label(snapshot.status),
        turn: snapshot.player,
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Initial => "PRESS SPACE",
        GameStatus::Playing => "",
        GameStatus::Paused => "PAUSED",
        GameStatus::PlayerWon => "YOU WIN",
        GameStatus::GameOver => "GAME OVER",
    }
}
