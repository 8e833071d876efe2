mod axis_config;
mod axis_frame_builder;
mod axis_layout;
mod axis_renderer;
mod axis_snapshot;
mod time_label_format;

pub use axis_config::{AxisConfig, AxisRendererConfig, AxisStyle};
pub use axis_frame_builder::build_axis_render_frame;
pub use axis_layout::{
    LabelPlacement, RenderedLabel, RenderedTick, build_axis_ticks, line_length_for_strength,
};
pub use axis_renderer::AxisRenderer;
pub use axis_snapshot::{
    AXIS_SNAPSHOT_JSON_SCHEMA_V1, AxisSnapshot, AxisSnapshotJsonContractV1, LevelSnapshot,
};
pub use time_label_format::{TimeLabelFormat, format_time_label};
