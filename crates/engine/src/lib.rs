//! Console runner: frame pacing, the game loop driver and its configuration.
//!
//! The driver owns no terminal state itself; it talks to the keyboard
//! through an [`InputSource`](input::InputSource) and to the screen through a
//! [`RenderSink`](term::RenderSink), so tests can run it against scripted
//! input and an in-memory sink.

pub mod config;
pub mod driver;
pub mod frame_clock;

pub use term_snake_core as core;
pub use term_snake_input as input;
pub use term_snake_term as term;
pub use term_snake_types as types;

pub use config::{field_dimensions, PlayerConfig};
pub use driver::{GameLoop, LoopConfig, LoopState, StopReason};
pub use frame_clock::FrameClock;
