/// Pixel size of a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

impl TextBounds {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Text-bounds query used to right-align and stack labels.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds;
}

/// Line height relative to the font size used by [`EstimatedTextMeasurer`].
pub const ESTIMATED_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Deterministic, backend-independent glyph-width estimate.
///
/// Headless rendering and tests use this so label geometry does not depend on
/// installed fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextBounds {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextBounds::new(
            units * font_size_px,
            font_size_px * ESTIMATED_LINE_HEIGHT_RATIO,
        )
    }
}
