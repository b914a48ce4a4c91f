//! Terminal snake runner (default binary).
//!
//! Reads [`PlayerConfig`] from the environment, takes over the terminal for
//! the length of one game and hands it back afterwards.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use term_snake::core::{Game, JsonFileStore, MonotonicClock, Selector, SnakeGame};
use term_snake::engine::config::FALLBACK_TERMINAL_SIZE;
use term_snake::engine::{field_dimensions, GameLoop, LoopConfig, PlayerConfig};
use term_snake::input::TerminalInput;
use term_snake::term::{TerminalRenderer, TerminalSession};

fn main() -> Result<()> {
    let config = PlayerConfig::from_env();
    init_tracing(&config)?;

    let size = crossterm::terminal::size().unwrap_or(FALLBACK_TERMINAL_SIZE);
    let (width, height) = field_dimensions(size);
    let mut game = build_game(&config);

    let mut session = TerminalSession::start(TerminalRenderer::new())?;
    let mut input = TerminalInput::new();
    let mut driver = GameLoop::new(
        MonotonicClock::new(),
        LoopConfig {
            width,
            height,
            fps: config.fps,
        },
    );

    let result = driver.run(game.as_mut(), &mut input, &mut session);

    // Always try to restore terminal state.
    let restored = session.finish();
    let reason = result?;
    restored?;

    info!(?reason, "exiting");
    println!("Game over");
    Ok(())
}

fn build_game(config: &PlayerConfig) -> Box<dyn Game> {
    let store = JsonFileStore::new(&config.records_path);
    let mut snake = SnakeGame::new(MonotonicClock::new(), Box::new(store)).with_speed(config.speed);
    if let Some(seed) = config.seed {
        snake = snake.with_seed(seed);
    }

    let snake: Box<dyn Game> = Box::new(snake);
    if config.menu {
        Box::new(Selector::new(vec![snake]))
    } else {
        snake
    }
}

/// Log to a file when one is configured; the terminal belongs to the game.
fn init_tracing(config: &PlayerConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))?;
    info!(path = %path.display(), "logging initialised");
    Ok(())
}
