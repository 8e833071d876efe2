use crate::core::Viewport;
use crate::error::AxisResult;
use crate::render::{
    EstimatedTextMeasurer, RenderFrame, Renderer, TextBounds, TextMeasurer,
};

/// Headless renderer used by tests and hosts without a drawing surface.
///
/// It still validates frame content so invalid geometry is caught before a
/// real backend sees it, and keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub viewport: Viewport,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl TextMeasurer for NullRenderer {
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds {
        EstimatedTextMeasurer.measure_text(text, font_size_px)
    }
}

impl Renderer for NullRenderer {
    fn resize(&mut self, viewport: Viewport) -> AxisResult<()> {
        self.viewport = viewport;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
