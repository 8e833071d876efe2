use tracing::{debug, trace, warn};

use crate::core::{StepTickSource, TickSource, ValueRange, Viewport};
use crate::error::AxisResult;
use crate::render::{RenderFrame, Renderer};

use super::{
    AxisConfig, AxisRendererConfig, AxisStyle, RenderedTick, build_axis_render_frame,
    build_axis_ticks,
};

/// Vertical value ruler drawn next to a graph or timeline.
///
/// `AxisRenderer` owns its drawing surface, a tick source and the axis
/// geometry. Every mutation re-queries the tick source and redraws
/// synchronously; nothing is cached between passes.
pub struct AxisRenderer<R: Renderer, T: TickSource = StepTickSource> {
    renderer: R,
    tick_source: T,
    config: AxisConfig,
    style: AxisStyle,
}

impl<R: Renderer> AxisRenderer<R, StepTickSource> {
    /// Creates a `width` x `height` ruler with the stock tick source, the
    /// default `[-1, 1]` range and default style, and draws it.
    pub fn with_defaults(renderer: R, width: u32, height: u32) -> AxisResult<Self> {
        Self::new(
            renderer,
            StepTickSource::default(),
            AxisRendererConfig::new(Viewport::new(width, height)),
        )
    }
}

impl<R: Renderer, T: TickSource> AxisRenderer<R, T> {
    /// Sizes the surface, configures the tick source and performs the first draw.
    pub fn new(renderer: R, tick_source: T, config: AxisRendererConfig) -> AxisResult<Self> {
        let resolved = config.resolve()?;
        let mut axis = Self {
            renderer,
            tick_source,
            config: resolved,
            style: config.style,
        };

        debug!(
            width = resolved.viewport.width,
            height = resolved.viewport.height,
            range_start = resolved.range.start(),
            range_end = resolved.range.end(),
            "create axis renderer"
        );
        axis.renderer.resize(resolved.viewport)?;
        axis.sync_tick_source();
        axis.redraw()?;
        Ok(axis)
    }

    #[must_use]
    pub fn config(&self) -> AxisConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.config.range
    }

    #[must_use]
    pub fn style(&self) -> AxisStyle {
        self.style
    }

    #[must_use]
    pub fn tick_source(&self) -> &T {
        &self.tick_source
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Sets the pixel size of the ruler, resizes the surface and redraws.
    pub fn set_size(&mut self, width: u32, height: u32) -> AxisResult<()> {
        let viewport = Viewport::new(width, height);
        debug!(width, height, "set axis size");

        self.config.viewport = viewport;
        self.sync_tick_source();
        self.renderer.resize(viewport)?;
        self.redraw()
    }

    /// Sets the displayed value range and redraws.
    ///
    /// Reversed bounds are swapped. Non-finite bounds are rejected and leave
    /// the current range untouched.
    pub fn set_range(&mut self, start: f64, end: f64) -> AxisResult<()> {
        let range = ValueRange::try_new(start, end).inspect_err(|err| {
            warn!(start, end, error = %err, "rejecting axis range");
        })?;
        debug!(
            start = range.start(),
            end = range.end(),
            swapped = start > end,
            "set axis range"
        );

        self.config.range = range;
        self.sync_tick_source();
        self.redraw()
    }

    /// Replaces the visual style and redraws.
    pub fn set_style(&mut self, style: AxisStyle) -> AxisResult<()> {
        style.validate().inspect_err(|err| {
            warn!(error = %err, "rejecting axis style");
        })?;
        debug!("set axis style");

        self.style = style;
        self.redraw()
    }

    /// Mutates the tick source (for example its tick spacing), then
    /// re-applies the current range and redraws.
    pub fn configure_tick_source<F>(&mut self, configure: F) -> AxisResult<()>
    where
        F: FnOnce(&mut T) -> AxisResult<()>,
    {
        configure(&mut self.tick_source)?;
        self.sync_tick_source();
        self.redraw()
    }

    /// Ticks for the current state, in draw order.
    #[must_use]
    pub fn build_ticks(&self) -> Vec<RenderedTick> {
        let levels = self.tick_source.detail_levels();
        build_axis_ticks(self.config, &levels, &self.style, &self.renderer)
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        build_axis_render_frame(&self.build_ticks(), self.config.viewport, &self.style)
    }

    /// Clears the surface and draws every tick level again.
    pub fn redraw(&mut self) -> AxisResult<()> {
        let frame = self.build_render_frame();
        trace!(
            levels = self.tick_source.level_count(),
            lines = frame.lines.len(),
            labels = frame.texts.len(),
            "redraw axis"
        );
        self.renderer.render(&frame)
    }

    fn sync_tick_source(&mut self) {
        let (start, end) = self.config.range.bounds();
        self.tick_source
            .set_range(start, end, self.config.viewport.height);
    }
}
