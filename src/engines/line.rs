//! Line engine.
//!
//! Samples are evenly spaced across the canvas width by index and scaled
//! against the value extent. Every point gets a marker and a value label;
//! axis labels are thinned to every `ceil(n / 8)`-th point.

use std::fmt::Write as _;

use crate::core::{CanvasArea, ChartOptions, LabeledPoint, value_extent, zero_safe};
use crate::engines::{cartesian_axes, placeholder};
use crate::render::{SvgFragment, fmt, fmt_value, series_color};

#[derive(Debug, Clone, PartialEq)]
pub struct LinePointLayout {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
    pub show_axis_label: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub points: Vec<LinePointLayout>,
    pub min: f64,
    pub max: f64,
}

#[must_use]
pub fn layout(points: &[LabeledPoint], area: CanvasArea) -> LineLayout {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let (min, max) = value_extent(&values).unwrap_or((0.0, 0.0));
    let span = zero_safe(max - min);
    let step = area.width / zero_safe(points.len() as f64 - 1.0);
    let label_every = points.len().div_ceil(8).max(1);

    let laid_out = points
        .iter()
        .enumerate()
        .map(|(index, point)| LinePointLayout {
            x: area.x + index as f64 * step,
            y: area.bottom() - (point.value - min) / span * area.height,
            value: point.value,
            label: point.label.clone(),
            show_axis_label: index % label_every == 0,
        })
        .collect();

    LineLayout {
        points: laid_out,
        min,
        max,
    }
}

/// `M`/`L` path data connecting the laid-out points in order.
#[must_use]
pub fn path_data(points: &[LinePointLayout]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command} {} {} ", fmt(point.x), fmt(point.y));
    }
    d.trim_end().to_owned()
}

#[must_use]
pub fn render(points: &[LabeledPoint], options: &ChartOptions, area: CanvasArea) -> String {
    if points.is_empty() {
        return placeholder(area, "No data available");
    }

    let layout = layout(points, area);
    let mut fragment = SvgFragment::new();
    let color = series_color(0);

    fragment.stroke_path(&path_data(&layout.points), color, 2.0);
    for point in &layout.points {
        fragment.circle(point.x, point.y, 4.0, color);
        fragment.text(point.x, point.y - 10.0, "value-label", &fmt_value(point.value));
    }

    for point in &layout.points {
        if point.show_axis_label {
            fragment.text(point.x, area.bottom() + 20.0, "axis-label", &point.label);
        }
    }
    cartesian_axes(&mut fragment, area, options);

    fragment.into_string()
}
