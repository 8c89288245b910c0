//! Terminal seesaw runner (default binary).
//!
//! Owns the terminal, forwards key presses to the engine as commands, pumps
//! the engine's ticker and redraws the view model after every change.
//!
//! Environment:
//! - `SEESAW_SEED`: RNG seed (defaults to the current time)
//! - `SEESAW_LOG_FILE`: log destination; `RUST_LOG` alone logs to `seesaw.log`

use std::env;
use std::fs::File;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use seesaw::core::{derive_view_model, Game};
use seesaw::input::{handle_key_event, should_quit};
use seesaw::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use seesaw::types::GameEvent;

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
struct RunConfig {
    seed: u32,
    log_path: Option<String>,
}

impl RunConfig {
    fn from_env() -> Self {
        let seed = env::var("SEESAW_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let log_path = env::var("SEESAW_LOG_FILE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| env::var("RUST_LOG").ok().map(|_| "seesaw.log".to_string()));

        Self { seed, log_path }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Send logs to a file; stderr would tear the alternate screen.
fn init_logging(path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_logging(path)?;
    }
    info!("starting seesaw with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = Game::new(seed);
    let view = GameView;
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let vm = derive_view_model(&game.snapshot(), game.config());
        view.render_into(&vm, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick is due.
        let timeout = game
            .ticker()
            .and_then(|t| t.time_until_due())
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        game.pump();

        if let Some(GameEvent::Finished { status, bending }) = game.take_last_event() {
            info!("finished {} at bending {}", status.as_str(), bending);
            match serde_json::to_string(&game.snapshot()) {
                Ok(json) => info!("final board: {json}"),
                Err(err) => log::warn!("cannot serialize final board: {err}"),
            }
        }
    }
}
