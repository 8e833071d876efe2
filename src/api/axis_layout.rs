use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::DetailLevel;
use crate::render::{Color, TextMeasurer};

use super::{AxisConfig, AxisStyle, TimeLabelFormat, format_time_label};

/// Where a label sits relative to its tick line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPlacement {
    Above,
    Below,
}

impl LabelPlacement {
    /// Non-positive values are labelled above their line, positive ones below.
    #[must_use]
    pub fn for_value(value: f64) -> Self {
        if value <= 0.0 { Self::Above } else { Self::Below }
    }
}

/// Label box of a tick, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub placement: LabelPlacement,
}

/// One tick of a layout pass, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTick {
    pub level: usize,
    pub value: f64,
    pub pixel_y: i32,
    pub line_length: i32,
    pub color: Color,
    pub label: Option<RenderedLabel>,
}

/// Line length for a level of `strength` on an axis `width` pixels wide.
#[must_use]
pub fn line_length_for_strength(width: u32, strength: f64) -> i32 {
    let strength = if strength.is_finite() {
        strength.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (f64::from(width) * strength).round() as i32
}

/// Converts detail levels into positioned ticks.
///
/// Levels are emitted from the last (faintest) to level `0`, so the labelled
/// level ends up on top. Empty levels are skipped. Only level `0` gets labels,
/// formatted by the spacing of its own ticks.
#[must_use]
pub fn build_axis_ticks<M>(
    config: AxisConfig,
    levels: &[DetailLevel],
    style: &AxisStyle,
    measurer: &M,
) -> Vec<RenderedTick>
where
    M: TextMeasurer + ?Sized,
{
    let viewport = config.viewport;
    let range = config.range;
    let tick_total = levels.iter().map(|level| level.tick_values.len()).sum();
    let mut ticks = Vec::with_capacity(tick_total);

    for (level_index, level) in levels.iter().enumerate().rev() {
        if level.is_empty() {
            continue;
        }

        let value_per_tick = range.span() / level.tick_values.len() as f64;
        let label_format = TimeLabelFormat::for_step(value_per_tick);
        let line_length = line_length_for_strength(viewport.width, level.strength);
        let color = style.line_color.with_alpha_scaled(level.strength);

        for value in level.tick_values.iter().copied() {
            let pixel_y = range.value_to_pixel_y(value, viewport);
            let label = (level_index == 0)
                .then(|| layout_label(value, pixel_y, label_format, config, style, measurer));

            ticks.push(RenderedTick {
                level: level_index,
                value,
                pixel_y,
                line_length,
                color,
                label,
            });
        }

        trace!(
            level = level_index,
            ticks = level.tick_values.len(),
            strength = level.strength,
            ?label_format,
            "laid out tick level"
        );
    }

    ticks
}

fn layout_label<M>(
    value: f64,
    pixel_y: i32,
    format: TimeLabelFormat,
    config: AxisConfig,
    style: &AxisStyle,
    measurer: &M,
) -> RenderedLabel
where
    M: TextMeasurer + ?Sized,
{
    let text = format_time_label(value, format);
    let bounds = measurer.measure_text(&text, style.label_font_size_px);
    let placement = LabelPlacement::for_value(value);
    let line_y = f64::from(pixel_y);
    let y = match placement {
        LabelPlacement::Above => line_y - bounds.height,
        LabelPlacement::Below => line_y + style.label_padding_px,
    };

    RenderedLabel {
        text,
        x: f64::from(config.viewport.width) - bounds.width,
        y,
        width: bounds.width,
        height: bounds.height,
        placement,
    }
}
