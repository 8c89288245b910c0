//! Game state module - the turn/ticker state machine
//!
//! [`Game`] owns the [`GameState`] (status, current player, active weight,
//! settled list), the seeded RNG and the [`Ticker`] handle that paces gravity.
//! All mutation goes through `&mut Game`, so a tick and a command can never
//! interleave.
//!
//! Lifecycle:
//!
//! ```text
//! Initial ──play──▶ Playing ◀──play/pause──▶ Paused
//!                     │
//!                     ├──board breaks on the human side──▶ GameOver
//!                     └──board breaks on the machine side─▶ PlayerWon
//! ```
//!
//! `reset` returns to `Initial` from anywhere. Commands issued in a state that
//! does not allow them are ignored and leave the state untouched.

use log::{debug, info, warn};
use serde::Serialize;

use crate::bending::calculate_bending;
use crate::board::{board_limits, step, within_board};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::ticker::{Clock, SystemClock, Ticker};
use crate::types::*;
use crate::weight::Weight;

/// Observable game data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub status: GameStatus,
    pub player: Option<Player>,
    /// Falling weight of the current turn.
    pub active: Option<Weight>,
    /// Settled weights, in landing order.
    pub list: Vec<Weight>,
}

impl GameState {
    pub fn initial() -> Self {
        Self::default()
    }
}

/// A single game instance: state machine plus its own ticker.
#[derive(Debug, Clone)]
pub struct Game<C: Clock + Clone = SystemClock> {
    config: GameConfig,
    state: GameState,
    rng: SimpleRng,
    clock: C,
    /// Created on the first `play`.
    ticker: Option<Ticker<C>>,
    /// Gravity interval for human turns; grows every human turn.
    human_tick_ms: u64,
    last_event: Option<GameEvent>,
}

impl Game<SystemClock> {
    /// Create a game with the default rules on the wall clock.
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::DEFAULT, seed, SystemClock::new())
    }
}

impl<C: Clock + Clone> Game<C> {
    /// Create a game with custom rules and clock.
    ///
    /// Fails with [`GameError::InvalidInterval`] if any tick interval in
    /// `config` is zero.
    pub fn with_clock(config: GameConfig, seed: u32, clock: C) -> Result<Self, GameError> {
        for ms in [config.initial_tick_ms, config.max_tick_ms, config.auto_tick_ms] {
            if ms == 0 {
                return Err(GameError::InvalidInterval(0));
            }
        }
        Ok(Self::build(config, seed, clock))
    }

    fn build(config: GameConfig, seed: u32, clock: C) -> Self {
        Self {
            config,
            state: GameState::initial(),
            rng: SimpleRng::new(seed),
            clock,
            ticker: None,
            human_tick_ms: config.initial_tick_ms,
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn player(&self) -> Option<Player> {
        self.state.player
    }

    pub fn active(&self) -> Option<Weight> {
        self.state.active
    }

    pub fn list(&self) -> &[Weight] {
        &self.state.list
    }

    pub fn human_tick_ms(&self) -> u64 {
        self.human_tick_ms
    }

    pub fn ticker(&self) -> Option<&Ticker<C>> {
        self.ticker.as_ref()
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Current bending of the settled weights.
    pub fn bending(&self) -> i64 {
        calculate_bending(&self.state.list, &self.config)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.state.status,
            player: self.state.player,
            active: self.state.active,
            list: self.state.list.clone(),
            bending: self.bending(),
            max_bending: self.config.max_bending,
            tick_ms: self.ticker.as_ref().map(|t| t.interval_ms()),
        }
    }

    /// Take and clear the last turn/game event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Return to the initial state. Allowed from any state.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        self.human_tick_ms = self.config.initial_tick_ms;
        self.last_event = None;
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
        self.apply_interval(self.human_tick_ms);
        info!("game reset");
    }

    /// Start or resume. Only from `Initial` or `Paused`.
    pub fn play(&mut self) -> bool {
        match self.state.status {
            GameStatus::Initial | GameStatus::Paused => {}
            GameStatus::Playing | GameStatus::PlayerWon | GameStatus::GameOver => return false,
        }

        if self.ticker.is_none() {
            self.reset();
            match Ticker::new(self.clock.clone(), self.human_tick_ms) {
                Ok(ticker) => self.ticker = Some(ticker),
                Err(err) => {
                    warn!("cannot start game: {err}");
                    return false;
                }
            }
        }

        if let Some(ticker) = self.ticker.as_mut() {
            ticker.start();
        }
        self.state.status = GameStatus::Playing;
        info!("game playing (seed {})", self.rng.seed());
        true
    }

    /// Freeze the game. Only from `Playing` or `Paused`.
    pub fn pause(&mut self) -> bool {
        match self.state.status {
            GameStatus::Playing | GameStatus::Paused => {}
            GameStatus::Initial | GameStatus::PlayerWon | GameStatus::GameOver => return false,
        }

        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
        self.state.status = GameStatus::Paused;
        info!("game paused");
        true
    }

    /// Alias of [`Game::pause`].
    pub fn stop(&mut self) -> bool {
        self.pause()
    }

    /// Move the human's active weight one step.
    ///
    /// Ignored unless playing on the human's turn with an active weight, and
    /// when the step would leave the human's half. `Up` is never applied.
    pub fn move_active(&mut self, direction: Direction) -> bool {
        if self.state.status != GameStatus::Playing || self.state.player != Some(Player::Human) {
            return false;
        }
        let Some(active) = self.state.active else {
            return false;
        };
        if direction == Direction::Up {
            return false;
        }

        let candidate = step(direction, active.position());
        if !within_board(candidate, &board_limits(Player::Human, &self.config)) {
            return false;
        }

        self.state.active = Some(active.with_position(candidate));
        true
    }

    /// Advance the game by one gravity step.
    ///
    /// Returns `true` when the state changed.
    pub fn tick(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }

        let Some(active) = self.state.active else {
            self.start_turn(false);
            return true;
        };

        let bottom = self.config.bottom_row();
        let below = step(Direction::Down, active.position());
        let moved = active.with_position(Position::new(below.x, below.y.min(bottom)));

        if moved.position().y < bottom {
            self.state.active = Some(moved);
            return true;
        }

        self.archive(moved);
        let bending = self.bending();
        self.last_event = Some(GameEvent::WeightArchived {
            owner: moved.owner(),
            bending,
        });
        debug!(
            "{} weight {} settled at column {}, bending {}",
            moved.owner().as_str(),
            moved.value(),
            moved.position().x,
            bending
        );

        if bending.abs() > self.config.max_bending {
            self.finish(bending);
        } else {
            self.start_turn(true);
        }
        true
    }

    /// Run one tick if the ticker reports a firing as due.
    ///
    /// Hosts call this from their loop; at most one tick runs per call.
    pub fn pump(&mut self) -> bool {
        let due = self.ticker.as_mut().is_some_and(|t| t.poll());
        if due {
            self.tick();
        }
        due
    }

    /// Apply a host command.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if let Some(direction) = action.direction() {
            return self.move_active(direction);
        }
        match action {
            GameAction::Play => self.play(),
            GameAction::Pause => self.pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => false,
        }
    }

    fn archive(&mut self, weight: Weight) {
        self.state.active = None;
        self.state.list.push(weight);
    }

    /// Hand the board to the other player and spawn their weight.
    fn start_turn(&mut self, after_landing: bool) {
        let next = match self.state.player {
            None | Some(Player::Human) => Player::Machine,
            Some(Player::Machine) => Player::Human,
        };
        self.state.player = Some(next);
        self.state.active = Some(Weight::spawn(next, &self.config, &mut self.rng));
        self.last_event = Some(GameEvent::TurnStarted { player: next });

        let interval = match next {
            Player::Machine => self.config.auto_tick_ms,
            Player::Human => {
                if after_landing {
                    self.human_tick_ms = (self.human_tick_ms + self.config.tick_increment_ms)
                        .min(self.config.max_tick_ms);
                }
                self.human_tick_ms
            }
        };
        self.apply_interval(interval);
        debug!("{} turn, tick {}ms", next.as_str(), interval);
    }

    fn finish(&mut self, bending: i64) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
        // The side the board tips toward overloaded it.
        let status = if bending < 0 {
            GameStatus::GameOver
        } else {
            GameStatus::PlayerWon
        };
        self.state.status = status;
        self.last_event = Some(GameEvent::Finished { status, bending });
        info!(
            "game finished: {} (bending {}, {} weights)",
            status.as_str(),
            bending,
            self.state.list.len()
        );
    }

    fn apply_interval(&mut self, interval_ms: u64) {
        if let Some(ticker) = self.ticker.as_mut() {
            if let Err(err) = ticker.set_interval(interval_ms as i64) {
                warn!("keeping {}ms tick: {err}", ticker.interval_ms());
            }
        }
    }
}
