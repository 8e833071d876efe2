pub mod ticks;
pub mod types;
pub mod value_range;

pub use ticks::{DetailLevel, StepTickSource, TickSource, TickSpacing, TickStepKind};
pub use types::Viewport;
pub use value_range::{DEFAULT_RANGE_END, DEFAULT_RANGE_START, ValueRange};
