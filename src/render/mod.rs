mod frame;
mod null_renderer;
mod primitives;
mod text_metrics;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextPrimitive};
pub use text_metrics::{
    ESTIMATED_LINE_HEIGHT_RATIO, EstimatedTextMeasurer, TextBounds, TextMeasurer,
};

use crate::core::Viewport;
use crate::error::AxisResult;

/// Contract implemented by any drawing surface the axis paints on.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from tick layout. Rendering a frame replaces the previous contents.
pub trait Renderer: TextMeasurer {
    /// Resizes the owned surface. Surfaces that follow their host size keep the default.
    fn resize(&mut self, viewport: Viewport) -> AxisResult<()> {
        let _ = viewport;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
