//! Per-chart layout engines and the dispatcher that selects between them.
//!
//! Each engine is a pure function of `(points, options, area)` split into a
//! layout step (plain geometry structs, unit-testable without parsing SVG)
//! and an emit step that serializes the geometry into a fragment. Within a
//! fragment the draw order is legend, shapes, then axes and titles; SVG
//! paints later elements over earlier ones.

pub mod area;
pub mod column;
pub mod dual_axes;
pub mod funnel;
pub mod histogram;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scatter;

use crate::core::{CanvasArea, ChartData, ChartKind, ChartOptions};
use crate::render::{AXIS_COLOR, SvgFragment, series_color};

/// Routes a coerced data set to the engine for `kind`.
///
/// `ChartData::coerce` is keyed by the same `ChartKind`, so the shapes always
/// line up; a mismatched pairing still degrades to the placeholder rather
/// than panicking.
#[must_use]
pub fn render_fragment(
    kind: ChartKind,
    data: &ChartData,
    options: &ChartOptions,
    area: CanvasArea,
) -> String {
    match (kind, data) {
        (ChartKind::Column, ChartData::Grouped(points)) => column::render(points, options, area),
        (ChartKind::Line, ChartData::Labeled(points)) => line::render(points, options, area),
        (ChartKind::Area, ChartData::Labeled(points)) => area::render(points, options, area),
        (ChartKind::Pie, ChartData::Labeled(points)) => pie::render(points, area),
        (ChartKind::Funnel, ChartData::Labeled(points)) => funnel::render(points, area),
        (ChartKind::Scatter, ChartData::Xy(points)) => scatter::render(points, options, area),
        (ChartKind::Radar, ChartData::Radar(points)) => radar::render(points, area),
        (ChartKind::DualAxes, ChartData::DualAxes(data)) => {
            dual_axes::render(data, options, area)
        }
        (ChartKind::Histogram, ChartData::Values(values)) => {
            histogram::render(values, options, area)
        }
        _ => placeholder(area, "No data available"),
    }
}

/// Centered placeholder fragment for degenerate input. This is a successful
/// render, not an error (the caller still gets a complete document).
#[must_use]
pub fn placeholder(area: CanvasArea, message: &str) -> String {
    let mut fragment = SvgFragment::new();
    let (cx, cy) = area.center();
    fragment.text(cx, cy, "placeholder", message);
    fragment.into_string()
}

/// Horizontal legend row above the canvas, one swatch + label per entry.
pub(crate) fn legend_row(fragment: &mut SvgFragment, area: CanvasArea, labels: &[&str]) {
    let y = area.y - 25.0;
    let mut x = area.x;
    for (index, label) in labels.iter().enumerate() {
        fragment.rect(x, y - 10.0, 12.0, 12.0, series_color(index));
        fragment.text_anchored(x + 17.0, y, "legend-label", "start", label);
        // No text measuring here; advance by an estimated glyph width.
        x += 17.0 + label.chars().count() as f64 * 7.0 + 18.0;
    }
}

/// Axis lines plus optional axis titles for the cartesian engines.
pub(crate) fn cartesian_axes(fragment: &mut SvgFragment, area: CanvasArea, options: &ChartOptions) {
    fragment.line(area.x, area.bottom(), area.right(), area.bottom(), AXIS_COLOR, 1.0);
    fragment.line(area.x, area.y, area.x, area.bottom(), AXIS_COLOR, 1.0);

    if let Some(title) = options.axis_x_title.as_deref() {
        fragment.text(area.x + area.width / 2.0, area.bottom() + 45.0, "axis-title", title);
    }
    if let Some(title) = options.axis_y_title.as_deref() {
        fragment.text_rotated(
            area.x - 50.0,
            area.y + area.height / 2.0,
            "axis-title",
            -90.0,
            title,
        );
    }
}
