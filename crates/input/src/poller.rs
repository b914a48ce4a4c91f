//! Bounded-wait input polling.
//!
//! The only place the console runner yields: wait up to a timeout for input,
//! then drain everything already queued without waiting again.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{encode_key_event, is_interrupt};
use crate::types::KeyBytes;

/// Something read from the terminal during one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyBytes),
    /// Ctrl+C (or an equivalent request to stop right away)
    Interrupt,
}

/// Source of input for the loop driver.
pub trait InputSource {
    /// Wait at most `timeout` for input and return every queued event, in
    /// arrival order. An empty result means nothing arrived.
    fn poll(&mut self, timeout: Duration) -> Result<Vec<InputEvent>>;
}

/// [`InputSource`] reading crossterm events from the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    fn translate(key: KeyEvent) -> Option<InputEvent> {
        // Terminals that report releases would otherwise double every key.
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if is_interrupt(key) {
            return Some(InputEvent::Interrupt);
        }
        encode_key_event(key).map(InputEvent::Key)
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
        let mut out = Vec::new();
        if !event::poll(timeout)? {
            return Ok(out);
        }
        loop {
            if let Event::Key(key) = event::read()? {
                out.extend(Self::translate(key));
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(out)
    }
}

/// [`InputSource`] replaying a fixed script, one batch per poll.
///
/// Once the script runs out every poll returns nothing.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: std::collections::VecDeque<Vec<InputEvent>>,
    polls: usize,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
            polls: 0,
        }
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn is_exhausted(&self) -> bool {
        self.batches.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> Result<Vec<InputEvent>> {
        self.polls += 1;
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
