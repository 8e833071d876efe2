use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{AxisError, AxisResult};

pub const DEFAULT_RANGE_START: f64 = -1.0;
pub const DEFAULT_RANGE_END: f64 = 1.0;

/// Closed value interval displayed by the axis.
///
/// Always normalized: `start <= end`. Constructors swap reversed bounds, so
/// callers never observe an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawValueRange")]
pub struct ValueRange {
    start: f64,
    end: f64,
}

#[derive(Deserialize)]
struct RawValueRange {
    start: f64,
    end: f64,
}

impl From<RawValueRange> for ValueRange {
    fn from(raw: RawValueRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_START, DEFAULT_RANGE_END)
    }
}

impl ValueRange {
    /// Builds a normalized range, swapping the bounds when `start > end`.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        if start > end {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Same as [`ValueRange::new`] but rejects non-finite bounds.
    pub fn try_new(start: f64, end: f64) -> AxisResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AxisError::InvalidData(
                "value range bounds must be finite".to_owned(),
            ));
        }
        Ok(Self::new(start, end))
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.end == self.start
    }

    /// Vertical pixels per value unit for `height`; `0.0` for a zero-width range.
    #[must_use]
    pub fn pixels_per_unit(self, height: u32) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            f64::from(height) / self.span()
        }
    }

    /// Maps `value` to a canvas row.
    ///
    /// Value `0.0` sits on the vertical center and larger values move up. The
    /// offset from center truncates toward zero so the mapping is symmetric.
    #[must_use]
    pub fn value_to_pixel_y(self, value: f64, viewport: Viewport) -> i32 {
        let offset = (value * self.pixels_per_unit(viewport.height)).trunc();
        let offset = offset.clamp(f64::from(i32::MIN / 2), f64::from(i32::MAX / 2)) as i32;
        viewport.center_y().saturating_sub(offset)
    }
}
