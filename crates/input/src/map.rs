//! Key mapping from terminal events to raw key sequences.
//!
//! Games speak in the byte sequences a terminal sends in non-canonical mode.
//! crossterm has already decoded those into [`KeyEvent`]s, so this module
//! encodes them back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::keys::{self, key_bytes, KeyBytes};

/// Encode a key event as the byte sequence a terminal would have sent.
///
/// Keys no game binds (function keys, media keys, ...) yield `None`.
pub fn encode_key_event(key: KeyEvent) -> Option<KeyBytes> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                Some(key_bytes(&[(c.to_ascii_lowercase() as u8) & 0x1f]))
            }
            _ => None,
        };
    }

    let seq: &[u8] = match key.code {
        KeyCode::Up => keys::ARROW_UP,
        KeyCode::Down => keys::ARROW_DOWN,
        KeyCode::Right => keys::ARROW_RIGHT,
        KeyCode::Left => keys::ARROW_LEFT,
        KeyCode::Esc => keys::ESC,
        KeyCode::Enter => keys::ENTER,
        KeyCode::Backspace => b"\x7f",
        KeyCode::Tab => b"\t",
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            return Some(key_bytes(c.encode_utf8(&mut buf).as_bytes()));
        }
        _ => return None,
    };
    Some(key_bytes(seq))
}

/// Check if key is the interrupt chord.
///
/// In raw mode Ctrl+C arrives as a key instead of a signal.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
