//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable in any
//! context (simulation, scene building, terminal rendering, tests).
//!
//! # Play Field
//!
//! The field is a toroidal grid addressed as `(row, col)`:
//!
//! - **Rows** grow downwards; `Direction::DOWN` is `(1, 0)`
//! - **Columns** grow to the right; `Direction::RIGHT` is `(0, 1)`
//! - The top [`HEADER_ROWS`] rows of the screen are reserved for the header
//!   line and the border row, so the field is `height - HEADER_ROWS` rows tall
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 60 | Console redraw rate |
//! | `DEFAULT_SPEED` | 10 | Snake ticks per second |
//! | `MAX_FPS` | 1000 | Highest accepted redraw rate |
//! | `MIN_SPEED` | 1 | Lowest speed reachable with `s` |
//! | `MAX_SPEED` | 1000 | Highest speed reachable with `w` |
//! | `GAME_TIME_EPSILON` | 0.01 | Offset keeping displayed time non-zero |
//!
//! # Examples
//!
//! ```
//! use term_snake_types::{Color, Direction, Pixel, Scene, Symbol};
//!
//! let dir = Direction::RIGHT;
//! assert!(!dir.is_reverse_of(Direction::DOWN));
//! assert!(dir.is_reverse_of(Direction::LEFT));
//!
//! let mut scene = Scene::new();
//! scene.push_text("SCORE: 1", Color::Default);
//! scene.push_row(vec![Pixel::new(Symbol::Apple, Color::Red)]);
//! assert_eq!(scene.height(), 2);
//! ```

pub mod keys;
pub mod scene;

pub use keys::KeyBytes;
pub use scene::{text_pixels, Color, Pixel, Scene, Symbol};

/// Rows reserved above the play field (header line + border row)
pub const HEADER_ROWS: u16 = 2;

/// Console redraw rate in frames per second
pub const DEFAULT_FPS: u32 = 60;

/// Initial snake speed in ticks per second
pub const DEFAULT_SPEED: u32 = 10;

/// Highest console redraw rate
pub const MAX_FPS: u32 = 1000;

/// Lowest snake speed
pub const MIN_SPEED: u32 = 1;

/// Highest snake speed
pub const MAX_SPEED: u32 = 1000;

/// Apples on the field at any time
pub const INITIAL_APPLES: usize = 4;

/// Added to the game time so the clock never reads zero
pub const GAME_TIME_EPSILON: f64 = 0.01;

/// Upcoming records listed on the help screen
pub const RECORDS_AHEAD: usize = 3;

/// Movement vector on the grid, `(row delta, column delta)`.
///
/// Only the four unit vectors and the resting vector are ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    /// Not moving (the snake's initial state)
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };
    pub const UP: Direction = Direction { dx: -1, dy: 0 };
    pub const DOWN: Direction = Direction { dx: 1, dy: 0 };
    pub const LEFT: Direction = Direction { dx: 0, dy: -1 };
    pub const RIGHT: Direction = Direction { dx: 0, dy: 1 };

    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Whether `self` points exactly opposite to `other`
    ///
    /// # Examples
    ///
    /// ```
    /// use term_snake_types::Direction;
    ///
    /// assert!(Direction::UP.is_reverse_of(Direction::DOWN));
    /// assert!(!Direction::UP.is_reverse_of(Direction::NONE));
    /// ```
    pub fn is_reverse_of(&self, other: Direction) -> bool {
        !self.is_none() && self.dx == -other.dx && self.dy == -other.dy
    }

    /// Step `pos` by this direction on a `rows x cols` torus.
    ///
    /// # Examples
    ///
    /// ```
    /// use term_snake_types::Direction;
    ///
    /// assert_eq!(Direction::UP.wrap_step((0, 3), 6, 10), (5, 3));
    /// assert_eq!(Direction::RIGHT.wrap_step((2, 9), 6, 10), (2, 0));
    /// ```
    pub fn wrap_step(&self, pos: (usize, usize), rows: usize, cols: usize) -> (usize, usize) {
        let step = |p: usize, d: i8, n: usize| -> usize {
            if n == 0 {
                return 0;
            }
            let n = n as i64;
            ((p as i64 + d as i64 + n) % n) as usize
        };
        (step(pos.0, self.dx, rows), step(pos.1, self.dy, cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_direction_is_not_a_reverse() {
        assert!(!Direction::NONE.is_reverse_of(Direction::NONE));
        assert!(!Direction::NONE.is_reverse_of(Direction::LEFT));
        assert!(!Direction::LEFT.is_reverse_of(Direction::NONE));
    }

    #[test]
    fn wrap_step_stays_in_bounds() {
        for (dir, pos) in [
            (Direction::UP, (0, 0)),
            (Direction::DOWN, (5, 9)),
            (Direction::LEFT, (0, 0)),
            (Direction::RIGHT, (5, 9)),
        ] {
            let (r, c) = dir.wrap_step(pos, 6, 10);
            assert!(r < 6 && c < 10, "{:?} from {:?}", dir, pos);
        }
    }

    #[test]
    fn resting_step_is_identity() {
        assert_eq!(Direction::NONE.wrap_step((3, 4), 6, 10), (3, 4));
    }
}
