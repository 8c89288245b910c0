//! Weight entity - an immutable falling shape
//!
//! A weight never changes in place. Moving it produces a new value via
//! [`Weight::with_position`], so the engine's active slot and the archived
//! list can never alias each other.

use serde::Serialize;

use crate::board::board_limits;
use crate::rng::SimpleRng;
use crate::types::{GameConfig, GameError, Player, Position, Shape, ShapeSize};

/// Optional fields fixed by the caller instead of rolled at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightOverrides {
    pub value: Option<u32>,
    pub shape: Option<Shape>,
    pub position: Option<Position>,
}

/// A weighted shape dropped by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Weight {
    value: u32,
    shape: Shape,
    position: Position,
    owner: Player,
}

impl Weight {
    /// Spawn a fully random weight for `owner`.
    ///
    /// The value is rolled in `[min_weight, max_weight]` and the weight starts
    /// on row 0 at a random column of the owner's half.
    pub fn spawn(owner: Player, config: &GameConfig, rng: &mut SimpleRng) -> Self {
        Self::with_overrides(owner, WeightOverrides::default(), config, rng)
    }

    /// Spawn a weight, taking any field present in `overrides` as given.
    ///
    /// An out-of-range value override falls back to the default weight.
    pub fn with_overrides(
        owner: Player,
        overrides: WeightOverrides,
        config: &GameConfig,
        rng: &mut SimpleRng,
    ) -> Self {
        let value = match overrides.value {
            Some(v) if (config.min_weight..=config.max_weight).contains(&v) => v,
            Some(_) => config.default_weight(),
            None => rng.next_inclusive(config.min_weight, config.max_weight),
        };

        let shape = match overrides.shape {
            Some(shape) => shape,
            None => rng.pick(&Shape::ALL).unwrap_or(Shape::Square),
        };

        let position = match overrides.position {
            Some(position) => position,
            None => {
                let limits = board_limits(owner, config);
                let span = (limits.end.x - limits.start.x).max(0) as u32;
                let x = limits.start.x + rng.next_range(span + 1) as i32;
                Position::new(x, limits.start.y)
            }
        };

        Self {
            value,
            shape,
            position,
            owner,
        }
    }

    /// Build a weight from a raw owner identifier.
    ///
    /// Fails with [`GameError::InvalidPlayer`] when `owner` does not name a
    /// player; nothing is rolled in that case.
    pub fn from_raw_owner(
        owner: &str,
        overrides: WeightOverrides,
        config: &GameConfig,
        rng: &mut SimpleRng,
    ) -> Result<Self, GameError> {
        let owner = Player::from_raw(owner)?;
        Ok(Self::with_overrides(owner, overrides, config, rng))
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Display size class of this weight.
    pub fn size(&self, config: &GameConfig) -> ShapeSize {
        ShapeSize::for_value(self.value, config.max_weight)
    }

    /// Same weight, moved to `position`.
    #[must_use]
    pub fn with_position(&self, position: Position) -> Self {
        Self { position, ..*self }
    }
}
