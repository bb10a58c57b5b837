pub mod points;
pub mod scale;
pub mod types;

pub use points::{
    ChartData, DualAxesData, GroupedPoint, LabeledPoint, RadarPoint, ScatterPoint,
};
pub use scale::{linear_scale, scale_max, value_extent, zero_safe};
pub use types::{
    CanvasArea, ChartKind, ChartOptions, ChartRequest, MarginPreset, SeriesKind, SeriesSpec,
};
