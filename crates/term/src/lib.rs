//! Terminal render module.
//!
//! A small render layer for terminal games. Scenes from the games are laid
//! out into a framebuffer and flushed as a full redraw every frame.
//!
//! - [`fb`]: styled character cells
//! - [`scene_view`]: symbol and color table (scene → framebuffer)
//! - [`renderer`]: crossterm output
//! - [`sink`]: the [`RenderSink`] boundary the loop driver draws through
//! - [`session`]: raw mode scoped to a guard value

pub mod fb;
pub mod renderer;
pub mod scene_view;
pub mod session;
pub mod sink;

pub use term_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use scene_view::SceneView;
pub use session::TerminalSession;
pub use sink::{RecordingSink, RenderSink};
