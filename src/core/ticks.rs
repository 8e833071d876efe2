use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{AxisError, AxisResult};

/// Ticks sharing one visual weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailLevel {
    pub tick_values: Vec<f64>,
    pub strength: f64,
}

impl DetailLevel {
    #[must_use]
    pub fn new(tick_values: Vec<f64>, strength: f64) -> Self {
        Self {
            tick_values,
            strength,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tick_values.is_empty()
    }
}

/// Produces tick positions grouped by level of detail.
///
/// Level `0` is the most prominent level (highest strength); higher indices
/// are progressively fainter. Every query is a pure function of the last
/// `set_range` call.
pub trait TickSource {
    fn set_range(&mut self, start: f64, end: f64, pixel_extent: u32);

    fn level_count(&self) -> usize;

    /// Ordered tick values of `level`; empty for out-of-range levels.
    fn ticks_at(&self, level: usize) -> Vec<f64>;

    /// Blend weight of `level` in `[0, 1]`; `0.0` for out-of-range levels.
    fn strength_at(&self, level: usize) -> f64;

    fn detail_levels(&self) -> Vec<DetailLevel> {
        (0..self.level_count())
            .map(|level| DetailLevel::new(self.ticks_at(level), self.strength_at(level)))
            .collect()
    }
}

const GENERIC_STEPS: [f64; 25] = [
    1_000_000.0,
    500_000.0,
    100_000.0,
    50_000.0,
    10_000.0,
    5_000.0,
    1_000.0,
    500.0,
    100.0,
    50.0,
    10.0,
    5.0,
    1.0,
    0.5,
    0.1,
    0.05,
    0.01,
    0.005,
    0.001,
    0.000_5,
    0.000_1,
    0.000_05,
    0.000_01,
    0.000_005,
    0.000_001,
];

const TIME_STEPS: [f64; 14] = [
    3_600.0, 1_800.0, 600.0, 300.0, 60.0, 30.0, 10.0, 5.0, 1.0, 0.5, 0.25, 0.1, 0.05, 0.01,
];

/// Step ladder used by [`StepTickSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickStepKind {
    /// Powers of ten and their halves, `1e6` down to `1e-6`.
    #[default]
    Generic,
    /// Clock-friendly second steps, one hour down to ten milliseconds.
    Time,
}

impl TickStepKind {
    /// Valid steps, largest first.
    #[must_use]
    pub fn steps(self) -> &'static [f64] {
        match self {
            Self::Generic => &GENERIC_STEPS,
            Self::Time => &TIME_STEPS,
        }
    }
}

/// Pixel distance window in which a level fades from invisible to full strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSpacing {
    pub min_px: f64,
    pub max_px: f64,
}

impl Default for TickSpacing {
    fn default() -> Self {
        Self {
            min_px: 5.0,
            max_px: 30.0,
        }
    }
}

impl TickSpacing {
    pub fn new(min_px: f64, max_px: f64) -> AxisResult<Self> {
        if !min_px.is_finite() || !max_px.is_finite() || min_px < 0.0 || min_px >= max_px {
            return Err(AxisError::InvalidData(
                "tick spacing must be finite with 0 <= min_px < max_px".to_owned(),
            ));
        }
        Ok(Self { min_px, max_px })
    }
}

/// Stock [`TickSource`] picking levels from a fixed step ladder.
///
/// Each step's on-screen spacing is mapped linearly onto `[min_px, max_px]`
/// to get its strength. The finest step that is still fully strong becomes
/// level `0`; finer steps follow until one would be closer than `min_px`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTickSource {
    kind: TickStepKind,
    spacing: TickSpacing,
    range_start: f64,
    range_end: f64,
    pixel_extent: u32,
    raw_strengths: Vec<f64>,
    first_level_step: usize,
    level_count: usize,
}

impl Default for StepTickSource {
    fn default() -> Self {
        Self::new(TickStepKind::Generic)
    }
}

impl StepTickSource {
    #[must_use]
    pub fn new(kind: TickStepKind) -> Self {
        let mut source = Self {
            kind,
            spacing: TickSpacing::default(),
            range_start: 0.0,
            range_end: 0.0,
            pixel_extent: 0,
            raw_strengths: Vec::with_capacity(kind.steps().len()),
            first_level_step: 0,
            level_count: 0,
        };
        source.rebuild();
        source
    }

    #[must_use]
    pub fn kind(&self) -> TickStepKind {
        self.kind
    }

    #[must_use]
    pub fn tick_spacing(&self) -> TickSpacing {
        self.spacing
    }

    pub fn set_tick_spacing(&mut self, min_px: f64, max_px: f64) -> AxisResult<()> {
        self.spacing = TickSpacing::new(min_px, max_px)?;
        self.rebuild();
        Ok(())
    }

    /// Step value of `level`, if it exists.
    #[must_use]
    pub fn step_at(&self, level: usize) -> Option<f64> {
        if level >= self.level_count {
            return None;
        }
        self.kind
            .steps()
            .get(self.first_level_step + level)
            .copied()
    }

    fn rebuild(&mut self) {
        let steps = self.kind.steps();
        let span = self.range_end - self.range_start;
        let window = self.spacing.max_px - self.spacing.min_px;

        self.raw_strengths.clear();
        self.first_level_step = 0;

        let mut stop = 0;
        for (index, step) in steps.iter().copied().enumerate() {
            // A zero span yields infinite spacing, which keeps every step strong.
            let spacing_px = step / span * f64::from(self.pixel_extent);
            let strength = (spacing_px - self.spacing.min_px) / window;
            self.raw_strengths.push(strength);
            stop = index + 1;

            if strength > 1.0 {
                self.first_level_step = index;
            } else if strength.is_nan() || strength <= 0.0 {
                stop = index;
                break;
            }
        }

        self.level_count = stop.saturating_sub(self.first_level_step);
        trace!(
            kind = ?self.kind,
            value_span = span,
            pixel_extent = self.pixel_extent,
            levels = self.level_count,
            "rebuild tick levels"
        );
    }
}

impl TickSource for StepTickSource {
    fn set_range(&mut self, start: f64, end: f64, pixel_extent: u32) {
        self.range_start = start;
        self.range_end = end;
        self.pixel_extent = pixel_extent;
        self.rebuild();
    }

    fn level_count(&self) -> usize {
        self.level_count
    }

    fn ticks_at(&self, level: usize) -> Vec<f64> {
        let Some(step) = self.step_at(level) else {
            return Vec::new();
        };

        // One extra tick past each edge so labels hugging the border still draw.
        let first = ((self.range_start / step).ceil() as i64).saturating_sub(1);
        let last = ((self.range_end / step).floor() as i64).saturating_add(1);
        if last < first {
            return Vec::new();
        }

        (first..=last).map(|index| index as f64 * step).collect()
    }

    fn strength_at(&self, level: usize) -> f64 {
        if level >= self.level_count {
            return 0.0;
        }
        self.raw_strengths
            .get(self.first_level_step + level)
            .map_or(0.0, |strength| strength.clamp(0.0, 1.0))
    }
}
