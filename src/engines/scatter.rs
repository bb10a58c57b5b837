//! Scatter engine.
//!
//! Points carrying numeric `x`/`y` scale against a fixed assumed domain of
//! `[0, 100]` on both axes. Points missing either coordinate fall back to an
//! index-proportional x and a pseudo-random y inside the canvas; that path is
//! deliberately non-deterministic, so byte-identical re-render guarantees do
//! not apply to it.

use rand::Rng;

use crate::core::{CanvasArea, ChartOptions, ScatterPoint, zero_safe};
use crate::engines::{cartesian_axes, placeholder};
use crate::render::{SvgFragment, series_color};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterMark {
    pub x: f64,
    pub y: f64,
    /// True when the y coordinate was synthesized (missing input coordinate).
    pub synthetic: bool,
}

#[must_use]
pub fn layout(points: &[ScatterPoint], area: CanvasArea) -> Vec<ScatterMark> {
    let mut rng = rand::thread_rng();
    let index_span = zero_safe(points.len() as f64 - 1.0);

    points
        .iter()
        .enumerate()
        .map(|(index, point)| match (point.x, point.y) {
            (Some(x), Some(y)) => ScatterMark {
                x: area.x + x / 100.0 * area.width,
                y: area.bottom() - y / 100.0 * area.height,
                synthetic: false,
            },
            _ => ScatterMark {
                x: area.x + index as f64 / index_span * area.width,
                y: area.y + rng.gen_range(0.0..1.0) * area.height,
                synthetic: true,
            },
        })
        .collect()
}

#[must_use]
pub fn render(points: &[ScatterPoint], options: &ChartOptions, area: CanvasArea) -> String {
    if points.is_empty() {
        return placeholder(area, "No data available");
    }

    let marks = layout(points, area);
    let mut fragment = SvgFragment::new();
    let color = series_color(0);

    for mark in &marks {
        fragment.circle(mark.x, mark.y, 5.0, color);
    }
    cartesian_axes(&mut fragment, area, options);

    fragment.into_string()
}
