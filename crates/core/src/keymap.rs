//! Static key table for the snake game.
//!
//! Each entry binds a raw key sequence to a [`SnakeAction`] and carries the
//! label shown on the help screen. The table is the single source for both
//! dispatch and the legend.

use crate::types::keys::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, ESC};
use crate::types::Direction;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    /// Buffer a new direction for the next tick
    Steer(Direction),
    SpeedUp,
    SpeedDown,
    TogglePause,
    Quit,
}

/// One row of the key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: &'static [u8],
    pub action: SnakeAction,
    pub help: &'static str,
}

pub const SNAKE_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: ARROW_UP,
        action: SnakeAction::Steer(Direction::UP),
        help: "[arrow up] up",
    },
    KeyBinding {
        key: ARROW_LEFT,
        action: SnakeAction::Steer(Direction::LEFT),
        help: "[left arrow] left",
    },
    KeyBinding {
        key: ARROW_DOWN,
        action: SnakeAction::Steer(Direction::DOWN),
        help: "[down arrow] down",
    },
    KeyBinding {
        key: ARROW_RIGHT,
        action: SnakeAction::Steer(Direction::RIGHT),
        help: "[right arrow] right",
    },
    KeyBinding {
        key: b"w",
        action: SnakeAction::SpeedUp,
        help: "[w] speed up",
    },
    KeyBinding {
        key: b"s",
        action: SnakeAction::SpeedDown,
        help: "[s] speed down",
    },
    KeyBinding {
        key: ESC,
        action: SnakeAction::TogglePause,
        help: "[ESC] pause",
    },
    KeyBinding {
        key: b"q",
        action: SnakeAction::Quit,
        help: "[q] quit",
    },
];

/// Find the action bound to `key`.
pub fn lookup(key: &[u8]) -> Option<SnakeAction> {
    SNAKE_BINDINGS
        .iter()
        .find(|b| b.key == key)
        .map(|b| b.action)
}
