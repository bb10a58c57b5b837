//! Area engine.
//!
//! Reuses the line engine's normalization and scaling, then closes the shape
//! down to the baseline for the fill and strokes the open polyline on top for
//! a crisp boundary.

use std::fmt::Write as _;

use crate::core::{CanvasArea, ChartOptions, LabeledPoint};
use crate::engines::{cartesian_axes, line, placeholder};
use crate::render::{SvgFragment, fmt, series_color};

/// Closed fill path: baseline to first point, point to point, last point back
/// to baseline, close.
#[must_use]
pub fn fill_path_data(points: &[line::LinePointLayout], baseline: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let last = points.last().unwrap_or(first);

    let mut d = String::with_capacity(points.len() * 16 + 32);
    let _ = write!(d, "M {} {} ", fmt(first.x), fmt(baseline));
    for point in points {
        let _ = write!(d, "L {} {} ", fmt(point.x), fmt(point.y));
    }
    let _ = write!(d, "L {} {} Z", fmt(last.x), fmt(baseline));
    d
}

#[must_use]
pub fn render(points: &[LabeledPoint], options: &ChartOptions, area: CanvasArea) -> String {
    if points.is_empty() {
        return placeholder(area, "No data available");
    }

    let layout = line::layout(points, area);
    let mut fragment = SvgFragment::new();
    let color = series_color(0);

    fragment.fill_path(&fill_path_data(&layout.points, area.bottom()), color, 0.3);
    fragment.stroke_path(&line::path_data(&layout.points), color, 2.0);

    for point in &layout.points {
        if point.show_axis_label {
            fragment.text(point.x, area.bottom() + 20.0, "axis-label", &point.label);
        }
    }
    cartesian_axes(&mut fragment, area, options);

    fragment.into_string()
}
