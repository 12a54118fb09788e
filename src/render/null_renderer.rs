use crate::error::ChartResult;
use crate::render::{CommandCounts, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry without
/// a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_counts: CommandCounts,
    pub last_was_empty_state: bool,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_counts = frame.counts();
        self.last_was_empty_state = frame.is_empty_state();
        self.frames_rendered += 1;
        Ok(())
    }
}
