//! chartsmith: deterministic chart-layout rendering engine.
//!
//! This crate turns a chart-type tag, a sequence of loosely-typed data
//! points, and display options into a self-contained SVG document string.
//! Layout is pure and synchronous; transport, persistence, and raster
//! conversion belong to the calling layer.

pub mod api;
pub mod core;
pub mod engines;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::render_chart;
pub use core::{ChartKind, ChartOptions, ChartRequest};
pub use error::{ChartError, ChartResult};
