use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use tracing::{debug, warn};

use crate::core::Viewport;
use crate::error::{AxisError, AxisResult};
use crate::render::{
    Color, EstimatedTextMeasurer, RenderFrame, Renderer, TextBounds, TextMeasurer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub lines_skipped: usize,
    pub texts_drawn: usize,
}

/// Part of the target wiped before a frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClearArea {
    /// The owned surface, including the padding pixel of empty viewports.
    WholeSurface,
    /// Only the axis rectangle of an external host context.
    Viewport,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> AxisResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Owns an offscreen ARGB32 surface matching the axis viewport. Cairo cannot
/// allocate empty surfaces, so an empty viewport keeps a 1x1 surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    viewport: Viewport,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: u32, height: u32) -> AxisResult<Self> {
        let viewport = Viewport::new(width, height);
        Ok(Self {
            surface: create_surface(viewport)?,
            viewport,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> AxisResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Consumes the renderer and hands back its offscreen surface.
    #[must_use]
    pub fn into_surface(self) -> ImageSurface {
        self.surface
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        clear: ClearArea,
    ) -> AxisResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.set_operator(Operator::Source);
        apply_color(context, self.clear_color);
        let cleared = match clear {
            ClearArea::WholeSurface => context.paint(),
            ClearArea::Viewport => {
                context.rectangle(
                    0.0,
                    0.0,
                    f64::from(frame.viewport.width),
                    f64::from(frame.viewport.height),
                );
                context.fill()
            }
        };
        cleared.map_err(|err| map_backend_error("failed to clear surface", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            if line.is_zero_length() {
                stats.lines_skipped += 1;
                continue;
            }
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&font_description(text.font_size_px)));
            layout.set_text(&text.text);

            apply_color(context, text.color);
            context.move_to(text.x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl TextMeasurer for CairoRenderer {
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds {
        let context = match Context::new(&self.surface) {
            Ok(context) => context,
            Err(err) => {
                warn!(error = %err, "cairo context unavailable, estimating text bounds");
                return EstimatedTextMeasurer.measure_text(text, font_size_px);
            }
        };
        let layout = pangocairo::functions::create_layout(&context);
        layout.set_font_description(Some(&font_description(font_size_px)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        TextBounds::new(f64::from(width), f64::from(height))
    }
}

impl Renderer for CairoRenderer {
    fn resize(&mut self, viewport: Viewport) -> AxisResult<()> {
        if viewport == self.viewport {
            return Ok(());
        }
        self.surface = create_surface(viewport)?;
        self.viewport = viewport;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resized cairo surface"
        );
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame, ClearArea::WholeSurface)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> AxisResult<()> {
        self.render_with_context(context, frame, ClearArea::Viewport)
    }
}

fn create_surface(viewport: Viewport) -> AxisResult<ImageSurface> {
    let width = i32::try_from(viewport.width.max(1)).map_err(|_| AxisError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    })?;
    let height = i32::try_from(viewport.height.max(1)).map_err(|_| AxisError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    })?;
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn font_description(font_size_px: f64) -> FontDescription {
    let mut description = FontDescription::from_string("Sans");
    description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> AxisError {
    AxisError::InvalidData(format!("{prefix}: {err}"))
}
