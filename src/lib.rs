//! chart-geometry: renderer-agnostic geometry core for radar and bar charts.
//!
//! Configuration and raw series values go in; counter-clockwise polygons
//! with resolved colors come out through a [`render::ChartRenderSink`].
//! Text, themes, interaction and mesh submission stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
