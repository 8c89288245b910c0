//! Board geometry - player halves, bounds checks and unit steps
//!
//! The board is split at its centre. The human owns the left half, the machine
//! the right half, and neither can cross into the other. For odd widths the
//! centre column is the fulcrum and belongs to nobody.
//!
//! Everything here is a pure function of its inputs.

use crate::types::{Direction, GameConfig, Player, Position};

/// Inclusive rectangle a player's weight may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    pub start: Position,
    pub end: Position,
}

impl BoardLimits {
    /// Columns `start.x..=end.x` as a range.
    pub fn columns(&self) -> std::ops::RangeInclusive<i32> {
        self.start.x..=self.end.x
    }
}

/// Movement limits for `player` on a board described by `config`.
///
/// Left half: `x ∈ [0, floor(width/2) - 1]`. Right half:
/// `x ∈ [ceil(width/2), width - 1]`. Both span every row.
pub fn board_limits(player: Player, config: &GameConfig) -> BoardLimits {
    let width = config.width as i32;
    let bottom = config.bottom_row();
    match player {
        Player::Human => BoardLimits {
            start: Position::new(0, 0),
            end: Position::new(width / 2 - 1, bottom),
        },
        Player::Machine => BoardLimits {
            start: Position::new((width + 1) / 2, 0),
            end: Position::new(width - 1, bottom),
        },
    }
}

/// Check that `position` lies inside `limits` on both axes (inclusive).
pub fn within_board(position: Position, limits: &BoardLimits) -> bool {
    (limits.start.x..=limits.end.x).contains(&position.x)
        && (limits.start.y..=limits.end.y).contains(&position.y)
}

/// Apply a single unit step in `direction`.
pub fn step(direction: Direction, position: Position) -> Position {
    let (dx, dy) = direction.delta();
    Position::new(position.x + dx, position.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_limits_even_width() {
        let cfg = GameConfig::DEFAULT;
        let human = board_limits(Player::Human, &cfg);
        let machine = board_limits(Player::Machine, &cfg);

        assert_eq!(human.start, Position::new(0, 0));
        assert_eq!(human.end, Position::new(4, 19));
        assert_eq!(machine.start, Position::new(5, 0));
        assert_eq!(machine.end, Position::new(9, 19));
    }

    #[test]
    fn test_limits_odd_width_leave_fulcrum_column() {
        let cfg = GameConfig {
            width: 9,
            ..GameConfig::DEFAULT
        };
        let human = board_limits(Player::Human, &cfg);
        let machine = board_limits(Player::Machine, &cfg);

        assert_eq!(human.columns(), 0..=3);
        assert_eq!(machine.columns(), 5..=8);
    }

    #[test]
    fn test_within_board_is_inclusive() {
        let limits = board_limits(Player::Human, &GameConfig::DEFAULT);
        assert!(within_board(Position::new(0, 0), &limits));
        assert!(within_board(Position::new(4, 19), &limits));
        assert!(!within_board(Position::new(5, 0), &limits));
        assert!(!within_board(Position::new(-1, 0), &limits));
        assert!(!within_board(Position::new(0, 20), &limits));
        assert!(!within_board(Position::new(0, -1), &limits));
    }

    #[test]
    fn test_step_deltas() {
        let p = Position::new(3, 3);
        assert_eq!(step(Direction::Down, p), Position::new(3, 4));
        assert_eq!(step(Direction::Left, p), Position::new(2, 3));
        assert_eq!(step(Direction::Right, p), Position::new(4, 3));
        assert_eq!(step(Direction::Up, p), Position::new(3, 2));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    fn arb_player() -> impl Strategy<Value = Player> {
        prop_oneof![Just(Player::Human), Just(Player::Machine)]
    }

    proptest! {
        #[test]
        fn prop_guarded_step_never_leaves_half(
            player in arb_player(),
            width in 2u16..30,
            height in 1u16..30,
            dirs in proptest::collection::vec(arb_direction(), 0..64),
        ) {
            let cfg = GameConfig { width, height, ..GameConfig::DEFAULT };
            let limits = board_limits(player, &cfg);
            let mut pos = limits.start;
            for dir in dirs {
                let candidate = step(dir, pos);
                if within_board(candidate, &limits) {
                    pos = candidate;
                }
                prop_assert!(within_board(pos, &limits));
            }
        }

        #[test]
        fn prop_halves_never_overlap(width in 2u16..64) {
            let cfg = GameConfig { width, ..GameConfig::DEFAULT };
            let human = board_limits(Player::Human, &cfg);
            let machine = board_limits(Player::Machine, &cfg);
            prop_assert!(human.end.x < machine.start.x);
            prop_assert_eq!(human.end.x - human.start.x, machine.end.x - machine.start.x);
        }
    }
}
