//! graph-values: vertical value-axis ruler for graph and timeline views.
//!
//! The crate maps a value range and a pixel height to multi-level tick marks
//! and time labels. Geometry is derived by pure functions in [`api`]; drawing
//! goes through the [`render::Renderer`] contract so hosts can plug any
//! backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisRenderer, AxisRendererConfig, AxisStyle};
pub use error::{AxisError, AxisResult};
