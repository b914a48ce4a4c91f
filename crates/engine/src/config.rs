//! Runner configuration read from the environment.

use std::path::PathBuf;

use crate::types::{DEFAULT_FPS, DEFAULT_SPEED, MAX_FPS, MAX_SPEED, MIN_SPEED};

pub const DEFAULT_RECORDS_PATH: &str = "snake-records.json";

/// Fallback when the terminal size cannot be queried.
pub const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Terminal columns per field cell.
pub const FIELD_CELL_COLUMNS: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub fps: u32,
    /// Initial snake speed in ticks per second.
    pub speed: u32,
    pub records_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Wrap the game in the selector menu.
    pub menu: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            speed: DEFAULT_SPEED,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            log_path: None,
            seed: None,
            menu: false,
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let fps = non_empty("SNAKE_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.fps)
            .clamp(1, MAX_FPS);
        let speed = non_empty("SNAKE_SPEED")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.speed)
            .clamp(MIN_SPEED, MAX_SPEED);
        let records_path = non_empty("SNAKE_RECORDS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.records_path);
        let log_path = non_empty("SNAKE_LOG_PATH").map(PathBuf::from);
        let seed = non_empty("SNAKE_SEED").and_then(|s| s.parse().ok());
        let menu = non_empty("SNAKE_MENU")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.menu);

        Self {
            fps,
            speed,
            records_path,
            log_path,
            seed,
            menu,
        }
    }
}

/// Game dimensions `(width in field cells, height in rows)` for a terminal
/// of `cols` x `rows`.
pub fn field_dimensions((cols, rows): (u16, u16)) -> (u16, u16) {
    (cols / FIELD_CELL_COLUMNS, rows)
}
