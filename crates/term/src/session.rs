//! Scoped ownership of the terminal mode.
//!
//! [`TerminalSession::start`] enters raw mode and hides the cursor; the
//! terminal is restored when the session is finished or dropped, whichever
//! comes first. Drop also runs while unwinding from a panic.

use anyhow::Result;

use crate::renderer::TerminalRenderer;
use crate::sink::RenderSink;
use crate::types::Scene;

pub struct TerminalSession {
    renderer: TerminalRenderer,
    active: bool,
}

impl TerminalSession {
    pub fn start(mut renderer: TerminalRenderer) -> Result<Self> {
        renderer.enter()?;
        Ok(Self {
            renderer,
            active: true,
        })
    }

    /// Restore the terminal now, reporting failures.
    pub fn finish(mut self) -> Result<()> {
        self.active = false;
        self.renderer.exit()
    }
}

impl RenderSink for TerminalSession {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        self.renderer.draw(scene)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = self.renderer.exit();
        }
    }
}
