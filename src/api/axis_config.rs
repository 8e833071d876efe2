use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_RANGE_END, DEFAULT_RANGE_START, ValueRange, Viewport};
use crate::error::{AxisError, AxisResult};
use crate::render::Color;

/// Geometry inputs of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisConfig {
    pub viewport: Viewport,
    pub range: ValueRange,
}

impl AxisConfig {
    #[must_use]
    pub fn new(viewport: Viewport, range: ValueRange) -> Self {
        Self { viewport, range }
    }
}

/// Visual settings of the ruler.
///
/// Defaults reproduce the translucent light-gray editor look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    #[serde(default = "default_axis_color")]
    pub line_color: Color,
    #[serde(default = "default_axis_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    /// Gap between a tick line and a label drawn below it.
    #[serde(default = "default_label_padding_px")]
    pub label_padding_px: f64,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: default_axis_color(),
            label_color: default_axis_color(),
            label_font_size_px: default_label_font_size_px(),
            label_padding_px: default_label_padding_px(),
            line_stroke_width: default_line_stroke_width(),
        }
    }
}

impl AxisStyle {
    pub fn validate(self) -> AxisResult<()> {
        self.line_color.validate()?;
        self.label_color.validate()?;
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_padding_px.is_finite() || self.label_padding_px < 0.0 {
            return Err(AxisError::InvalidData(
                "label padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.line_stroke_width.is_finite() || self.line_stroke_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Bootstrap configuration of an [`AxisRenderer`](super::AxisRenderer).
///
/// Serializable so hosts can persist the ruler setup next to their own view
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRendererConfig {
    pub viewport: Viewport,
    #[serde(default = "default_range_start")]
    pub range_start: f64,
    #[serde(default = "default_range_end")]
    pub range_end: f64,
    #[serde(default)]
    pub style: AxisStyle,
}

impl AxisRendererConfig {
    /// Creates a config with the default `[-1, 1]` range and default style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            range_start: DEFAULT_RANGE_START,
            range_end: DEFAULT_RANGE_END,
            style: AxisStyle::default(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range_start = start;
        self.range_end = end;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Validates the config and returns the normalized geometry it describes.
    pub fn resolve(self) -> AxisResult<AxisConfig> {
        self.style.validate()?;
        let range = ValueRange::try_new(self.range_start, self.range_end)?;
        Ok(AxisConfig::new(self.viewport, range))
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse axis config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize axis config json: {e}"))
        })
    }
}

fn default_axis_color() -> Color {
    Color::rgb8_alpha(200, 200, 200, 0.5)
}

fn default_label_font_size_px() -> f64 {
    10.0
}

fn default_label_padding_px() -> f64 {
    3.0
}

fn default_line_stroke_width() -> f64 {
    1.0
}

fn default_range_start() -> f64 {
    DEFAULT_RANGE_START
}

fn default_range_end() -> f64 {
    DEFAULT_RANGE_END
}
