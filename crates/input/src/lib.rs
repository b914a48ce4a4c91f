//! Terminal input module (engine-facing).
//!
//! This module is independent of any game. It turns `crossterm` key events
//! into the raw byte sequences games bind, and provides the bounded-wait
//! poller the loop driver yields on.

pub mod map;
pub mod poller;

pub use term_snake_types as types;

pub use map::{encode_key_event, is_interrupt};
pub use poller::{InputEvent, InputSource, ScriptedInput, TerminalInput};
