//! The interface shared by every game the console runner can drive.

use crate::types::Scene;

/// A game the loop driver can run.
///
/// The driver calls [`Game::init`] once, then alternates between feeding key
/// sequences to [`Game::handle_key`] and asking [`Game::next_frame`] for a
/// scene to draw, until [`Game::is_stopped`] reports true.
pub trait Game {
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Prepare a session for a `width x height` screen redrawn `fps` times a second.
    ///
    /// `width` is in field cells, `height` in terminal rows.
    fn init(&mut self, width: u16, height: u16, fps: u32);

    /// The scene to draw now, or `None` when nothing changed since the last frame.
    fn next_frame(&mut self) -> Option<Scene>;

    /// Apply one raw key sequence. Unknown sequences are ignored.
    fn handle_key(&mut self, key: &[u8]);

    fn is_stopped(&self) -> bool;
}

impl<G: Game + ?Sized> Game for Box<G> {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn init(&mut self, width: u16, height: u16, fps: u32) {
        (**self).init(width, height, fps)
    }

    fn next_frame(&mut self) -> Option<Scene> {
        (**self).next_frame()
    }

    fn handle_key(&mut self, key: &[u8]) {
        (**self).handle_key(key)
    }

    fn is_stopped(&self) -> bool {
        (**self).is_stopped()
    }
}
