//! Raw key sequences as they arrive from a terminal in non-canonical mode.
//!
//! Games receive input as byte sequences: arrow keys are three-byte escape
//! sequences, letters are single ASCII bytes.

use arrayvec::ArrayVec;

/// Longest key sequence a game ever sees.
pub const MAX_KEY_LEN: usize = 8;

/// One key press, stack-allocated.
pub type KeyBytes = ArrayVec<u8, MAX_KEY_LEN>;

pub const ESC: &[u8] = b"\x1b";
pub const ARROW_UP: &[u8] = b"\x1b[A";
pub const ARROW_DOWN: &[u8] = b"\x1b[B";
pub const ARROW_RIGHT: &[u8] = b"\x1b[C";
pub const ARROW_LEFT: &[u8] = b"\x1b[D";
pub const ENTER: &[u8] = b"\r";

/// Copy a sequence into a [`KeyBytes`], truncating anything past [`MAX_KEY_LEN`].
pub fn key_bytes(seq: &[u8]) -> KeyBytes {
    seq.iter().take(MAX_KEY_LEN).copied().collect()
}
