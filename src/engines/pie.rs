//! Pie engine.
//!
//! Slices sweep clockwise from 12 o'clock in input order. Percentage labels
//! sit at 70% radius along the slice bisector and are suppressed below ~0.2
//! radians; the legend still lists every slice with a positive value.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::core::{CanvasArea, LabeledPoint};
use crate::engines::placeholder;
use crate::render::{SvgFragment, fmt, series_color};

/// Minimum slice sweep (radians) before a percentage label is drawn.
const LABEL_MIN_SWEEP: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub ratio: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub show_label: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub slices: Vec<PieSlice>,
    pub total: f64,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// `None` when the value total is not positive (rendered as a placeholder).
#[must_use]
pub fn layout(points: &[LabeledPoint], area: CanvasArea) -> Option<PieLayout> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        return None;
    }

    let (cx, cy) = area.center();
    let radius = area.width.min(area.height) / 2.0 * 0.8;

    let mut angle = -PI / 2.0;
    let mut slices = Vec::with_capacity(points.len());
    for point in points.iter().filter(|p| p.value > 0.0) {
        let ratio = point.value / total;
        let sweep = ratio * 2.0 * PI;
        slices.push(PieSlice {
            label: point.label.clone(),
            value: point.value,
            ratio,
            start_angle: angle,
            sweep,
            show_label: sweep > LABEL_MIN_SWEEP,
        });
        angle += sweep;
    }

    Some(PieLayout {
        slices,
        total,
        cx,
        cy,
        radius,
    })
}

fn arc_point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Wedge path from the center through a clockwise arc.
#[must_use]
pub fn slice_path(cx: f64, cy: f64, radius: f64, start_angle: f64, sweep: f64) -> String {
    let (x1, y1) = arc_point(cx, cy, radius, start_angle);
    let (x2, y2) = arc_point(cx, cy, radius, start_angle + sweep);
    let large_arc = i32::from(sweep > PI);
    let mut d = String::with_capacity(64);
    let _ = write!(
        d,
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        fmt(cx),
        fmt(cy),
        fmt(x1),
        fmt(y1),
        fmt(x2),
        fmt(y2),
        r = fmt(radius),
    );
    d
}

#[must_use]
pub fn render(points: &[LabeledPoint], area: CanvasArea) -> String {
    let Some(layout) = layout(points, area) else {
        return placeholder(area, "No valid data");
    };

    let mut fragment = SvgFragment::new();

    let legend_x = area.right() - 130.0;
    for (index, slice) in layout.slices.iter().enumerate() {
        let y = area.y + index as f64 * 20.0;
        fragment.rect(legend_x, y - 10.0, 12.0, 12.0, series_color(index));
        fragment.text_anchored(legend_x + 17.0, y, "legend-label", "start", &slice.label);
    }

    for (index, slice) in layout.slices.iter().enumerate() {
        let color = series_color(index);
        // A lone slice is the full disc; an arc from a point to itself
        // paints nothing, so emit a circle instead.
        if slice.sweep >= 2.0 * PI - 1e-9 {
            fragment.circle(layout.cx, layout.cy, layout.radius, color);
        } else {
            fragment.filled_path(
                &slice_path(layout.cx, layout.cy, layout.radius, slice.start_angle, slice.sweep),
                color,
            );
        }
    }

    for slice in &layout.slices {
        if !slice.show_label {
            continue;
        }
        let mid = slice.start_angle + slice.sweep / 2.0;
        let (lx, ly) = arc_point(layout.cx, layout.cy, layout.radius * 0.7, mid);
        fragment.text(lx, ly, "value-label", &format!("{:.1}%", slice.ratio * 100.0));
    }

    fragment.into_string()
}
