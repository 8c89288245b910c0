use seesaw::core::{Game, ManualClock, Ticker};
use seesaw::types::{GameConfig, GameError, Player};

const INITIAL: u64 = GameConfig::DEFAULT.initial_tick_ms;
const AUTO: u64 = GameConfig::DEFAULT.auto_tick_ms;

fn game_at_zero() -> (Game<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let game = Game::with_clock(GameConfig::DEFAULT, 7, clock.clone()).unwrap();
    (game, clock)
}

#[test]
fn test_first_play_creates_ticker() {
    let (mut game, _clock) = game_at_zero();
    assert!(game.ticker().is_none());
    assert!(!game.pump());

    assert!(game.play());
    let ticker = game.ticker().unwrap();
    assert!(ticker.is_running());
    assert_eq!(ticker.interval_ms(), INITIAL);
    assert_eq!(ticker.next_deadline_ms(), Some(INITIAL));
}

#[test]
fn test_pump_waits_for_deadline() {
    let (mut game, clock) = game_at_zero();
    game.play();

    clock.set(INITIAL - 1);
    assert!(!game.pump());
    assert_eq!(game.player(), None);

    clock.set(INITIAL);
    assert!(game.pump());
    assert_eq!(game.player(), Some(Player::Machine));
}

#[test]
fn test_machine_turn_switches_to_auto_interval() {
    let (mut game, clock) = game_at_zero();
    game.play();
    clock.set(INITIAL);
    game.pump();

    let ticker = game.ticker().unwrap();
    assert_eq!(ticker.interval_ms(), AUTO);
    // Restarted from the switch, not from the old schedule.
    assert_eq!(ticker.next_deadline_ms(), Some(INITIAL + AUTO));

    let y0 = game.active().unwrap().position().y;
    clock.set(INITIAL + AUTO - 1);
    assert!(!game.pump());
    clock.set(INITIAL + AUTO);
    assert!(game.pump());
    assert_eq!(game.active().unwrap().position().y, y0 + 1);
}

#[test]
fn test_human_interval_grows_each_turn() {
    let (mut game, _clock) = game_at_zero();
    game.play();

    let cfg = *game.config();
    let mut seen = Vec::new();
    let mut last = None;
    for _ in 0..2000 {
        if game.status().is_terminal() || seen.len() == 3 {
            break;
        }
        game.tick();
        let turn = (game.player(), game.list().len());
        if game.player() == Some(Player::Human) && last != Some(turn) {
            seen.push(game.ticker().unwrap().interval_ms());
        }
        last = Some(turn);
    }

    assert!(!seen.is_empty());
    for (i, interval) in seen.iter().enumerate() {
        let expected =
            (cfg.initial_tick_ms + cfg.tick_increment_ms * (i as u64 + 1)).min(cfg.max_tick_ms);
        assert_eq!(*interval, expected);
    }
}

#[test]
fn test_human_interval_is_capped() {
    let config = GameConfig {
        initial_tick_ms: 990,
        tick_increment_ms: 25,
        max_tick_ms: 1000,
        ..GameConfig::DEFAULT
    };
    let mut game = Game::with_clock(config, 7, ManualClock::new()).unwrap();
    game.play();

    while game.player() != Some(Player::Human) {
        game.tick();
    }
    assert_eq!(game.human_tick_ms(), 1000);
    assert_eq!(game.ticker().unwrap().interval_ms(), 1000);
}

#[test]
fn test_paused_game_does_not_pump() {
    let (mut game, clock) = game_at_zero();
    game.play();
    game.pause();

    clock.advance(10 * INITIAL);
    assert!(!game.pump());
    assert_eq!(game.player(), None);

    game.play();
    assert_eq!(
        game.ticker().unwrap().next_deadline_ms(),
        Some(10 * INITIAL + INITIAL)
    );
}

#[test]
fn test_late_host_gets_one_tick() {
    let (mut game, clock) = game_at_zero();
    game.play();

    clock.set(5 * INITIAL);
    assert!(game.pump());
    assert!(!game.pump());
}

#[test]
fn test_zero_interval_is_rejected() {
    let config = GameConfig {
        auto_tick_ms: 0,
        ..GameConfig::DEFAULT
    };
    assert!(matches!(
        Game::with_clock(config, 1, ManualClock::new()),
        Err(GameError::InvalidInterval(0))
    ));

    let mut ticker = Ticker::new(ManualClock::new(), 100).unwrap();
    ticker.start();
    assert_eq!(
        ticker.set_interval(-5),
        Err(GameError::InvalidInterval(-5))
    );
    assert_eq!(ticker.interval_ms(), 100);
    assert_eq!(ticker.next_deadline_ms(), Some(100));
}
