//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, the scene builder and the game
//! interface shared with the console runner. It has **no dependencies** on the
//! terminal, making it:
//!
//! - **Deterministic**: time comes from a [`Clock`], apples from a seedable RNG
//! - **Testable**: every rule can be stepped tick by tick
//! - **Portable**: scenes are abstract pixel grids, not escape sequences
//!
//! # Module Structure
//!
//! - [`clock`]: monotonic and hand-driven time sources
//! - [`game`]: the [`Game`] trait every runnable game implements
//! - [`grid`]: the toroidal play field of freshness counters
//! - [`keymap`]: static key table (raw sequence → action + help label)
//! - [`records`]: best time per score and its persistence boundary
//! - [`scene`]: snake state → play, help or end scene
//! - [`selector`]: menu decorator over several games
//! - [`snake`]: the snake state machine
//!
//! # Game Rules
//!
//! - The snake starts as a single cell in the top-left corner, not moving
//! - Arrow keys steer; a key that would reverse the snake is ignored
//! - The field wraps around on all four edges
//! - Eating an apple scores a point, grows the snake by one and places a new
//!   apple on a uniformly chosen empty cell
//! - Running into the body ends the game
//! - The fastest time to reach each score is kept as a record
//!
//! # Example
//!
//! ```
//! use term_snake_core::{Game, ManualClock, MemoryStore, SnakeGame};
//! use term_snake_core::types::keys::ARROW_DOWN;
//!
//! let clock = ManualClock::new();
//! let mut game = SnakeGame::new(clock.clone(), Box::new(MemoryStore::new())).with_seed(42);
//! game.init(10, 8, 60);
//!
//! game.handle_key(ARROW_DOWN);
//! clock.advance(game.tick_interval());
//! assert!(game.next_frame().is_some());
//! assert_eq!(game.head(), (1, 0));
//! ```

pub mod clock;
pub mod game;
pub mod grid;
pub mod keymap;
pub mod records;
pub mod scene;
pub mod selector;
pub mod snake;
pub mod timefmt;

pub use term_snake_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use game::Game;
pub use grid::{Grid, APPLE, EMPTY};
pub use keymap::{KeyBinding, SnakeAction, SNAKE_BINDINGS};
pub use records::{JsonFileStore, MemoryStore, RecordStore, Records, RecordsError};
pub use scene::{build_scene, SnakeView};
pub use selector::Selector;
pub use snake::{Outcome, SnakeGame};
pub use timefmt::format_game_time;
