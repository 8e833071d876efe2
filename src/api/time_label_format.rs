use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// How tick values are printed as durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeLabelFormat {
    /// Decimal seconds with two fractional digits, e.g. `45.00`.
    Seconds,
    /// Whole minutes and zero-padded seconds, e.g. `1:30`.
    MinutesSeconds,
}

impl TimeLabelFormat {
    /// Picks the format for ticks spaced `value_per_tick` seconds apart.
    ///
    /// Only the minutes component of the spacing counts: it wraps every hour,
    /// so whole-hour spacings stay on `Seconds`. There is no hysteresis around
    /// the 60s cutoff.
    #[must_use]
    pub fn for_step(value_per_tick: f64) -> Self {
        match seconds_to_duration(value_per_tick) {
            Some(step) if step.num_minutes() % 60 != 0 => Self::MinutesSeconds,
            _ => Self::Seconds,
        }
    }
}

/// Formats `seconds` as an axis label.
#[must_use]
pub fn format_time_label(seconds: f64, format: TimeLabelFormat) -> String {
    let Some(duration) = seconds_to_duration(seconds) else {
        return "nan".to_owned();
    };

    match format {
        TimeLabelFormat::Seconds => {
            // Hundredths rounded half away from zero.
            let millis = duration.num_milliseconds();
            let hundredths = (millis.unsigned_abs() + 5) / 10;
            let sign = if millis < 0 && hundredths > 0 { "-" } else { "" };
            format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
        }
        TimeLabelFormat::MinutesSeconds => {
            let magnitude = duration.abs();
            let minutes = magnitude.num_minutes();
            let seconds_in_minute = magnitude.num_seconds() % 60;
            let sign = if duration < TimeDelta::zero() && magnitude.num_seconds() > 0 {
                "-"
            } else {
                ""
            };
            format!("{sign}{minutes}:{seconds_in_minute:02}")
        }
    }
}

/// Millisecond-precision duration; `None` for non-finite input.
fn seconds_to_duration(seconds: f64) -> Option<TimeDelta> {
    if !seconds.is_finite() {
        return None;
    }
    // The float-to-int cast saturates, keep one unit of headroom for `abs()`.
    let millis = ((seconds * 1_000.0).round() as i64).clamp(i64::MIN + 1, i64::MAX);
    TimeDelta::try_milliseconds(millis)
}
