//! The render boundary the loop driver draws through.

use anyhow::Result;

use crate::types::Scene;

/// Somewhere a finished scene goes.
pub trait RenderSink {
    fn draw(&mut self, scene: &Scene) -> Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        (**self).draw(scene)
    }
}

/// Keeps every drawn scene in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<Scene>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Scene] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Scene> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        self.frames.push(scene.clone());
        Ok(())
    }
}
