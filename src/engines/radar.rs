//! Radar engine.
//!
//! Dimensions and groups keep first-seen order; the first dimension points at
//! 12 o'clock and spokes proceed clockwise. Values are taken on a fixed 0-100
//! scale with no clamping, so out-of-range values extend beyond (or collapse
//! inside) the grid. Missing (group, dimension) pairs default to 0.

use std::f64::consts::PI;

use indexmap::{IndexMap, IndexSet};

use crate::core::{CanvasArea, RadarPoint};
use crate::engines::{legend_row, placeholder};
use crate::render::{GRID_COLOR, SvgFragment, series_color};

/// Number of concentric grid rings.
const GRID_RINGS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub dimensions: Vec<String>,
    pub groups: Vec<String>,
    /// Spoke angle per dimension, radians.
    pub angles: Vec<f64>,
    /// One vertex ring per group, one vertex per dimension.
    pub polygons: Vec<Vec<(f64, f64)>>,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// `None` when no dimension survives coercion (rendered as a placeholder).
#[must_use]
pub fn layout(points: &[RadarPoint], area: CanvasArea) -> Option<RadarLayout> {
    let mut dimensions: IndexSet<String> = IndexSet::new();
    let mut groups: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
    for point in points {
        dimensions.insert(point.name.clone());
        groups
            .entry(point.group.clone())
            .or_default()
            .insert(point.name.clone(), point.value);
    }
    if dimensions.is_empty() {
        return None;
    }

    let (cx, cy) = area.center();
    let radius = area.width.min(area.height) / 2.0 * 0.8;
    let angles: Vec<f64> = (0..dimensions.len())
        .map(|index| index as f64 / dimensions.len() as f64 * 2.0 * PI - PI / 2.0)
        .collect();

    let polygons = groups
        .values()
        .map(|values| {
            dimensions
                .iter()
                .zip(&angles)
                .map(|(dimension, &angle)| {
                    let value = values.get(dimension).copied().unwrap_or(0.0);
                    let r = radius * (value / 100.0);
                    (cx + r * angle.cos(), cy + r * angle.sin())
                })
                .collect()
        })
        .collect();

    Some(RadarLayout {
        dimensions: dimensions.into_iter().collect(),
        groups: groups.keys().cloned().collect(),
        angles,
        polygons,
        cx,
        cy,
        radius,
    })
}

#[must_use]
pub fn render(points: &[RadarPoint], area: CanvasArea) -> String {
    let Some(layout) = layout(points, area) else {
        return placeholder(area, "No data available");
    };

    let mut fragment = SvgFragment::new();

    let labels: Vec<&str> = layout.groups.iter().map(String::as_str).collect();
    legend_row(&mut fragment, area, &labels);

    for ring in 1..=GRID_RINGS {
        let r = layout.radius * ring as f64 / GRID_RINGS as f64;
        fragment.circle_outline(layout.cx, layout.cy, r, GRID_COLOR, 1.0);
    }
    for &angle in &layout.angles {
        fragment.line(
            layout.cx,
            layout.cy,
            layout.cx + layout.radius * angle.cos(),
            layout.cy + layout.radius * angle.sin(),
            GRID_COLOR,
            1.0,
        );
    }

    for (index, polygon) in layout.polygons.iter().enumerate() {
        let color = series_color(index);
        fragment.polygon(polygon, color, 0.3, color, 2.0);
    }

    for (dimension, &angle) in layout.dimensions.iter().zip(&layout.angles) {
        let r = layout.radius * 1.12;
        fragment.text(
            layout.cx + r * angle.cos(),
            layout.cy + r * angle.sin(),
            "axis-label",
            dimension,
        );
    }

    fragment.into_string()
}
