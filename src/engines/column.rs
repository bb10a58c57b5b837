//! Column / grouped-bar engine.
//!
//! Categories and groups keep first-seen order; that order is observable as
//! bar position and legend order. A missing (category, group) cell renders no
//! bar at all rather than a zero-height rect.

use indexmap::{IndexMap, IndexSet};

use crate::core::{CanvasArea, ChartOptions, GroupedPoint, scale_max};
use crate::engines::{cartesian_axes, legend_row, placeholder};
use crate::render::{SvgFragment, fmt_value, series_color};

/// Label used when input rows carry no `group` field.
pub const IMPLICIT_GROUP: &str = "Series";

/// Minimum bar height before a value label is drawn above it.
const LABEL_MIN_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBar {
    pub category_index: usize,
    pub group_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub show_label: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub bars: Vec<ColumnBar>,
    pub category_width: f64,
    pub show_legend: bool,
}

#[must_use]
pub fn layout(points: &[GroupedPoint], area: CanvasArea) -> ColumnLayout {
    let mut groups: IndexSet<String> = IndexSet::new();
    let mut cells: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
    for point in points {
        let group = point
            .group
            .clone()
            .unwrap_or_else(|| IMPLICIT_GROUP.to_owned());
        groups.insert(group.clone());
        cells
            .entry(point.category.clone())
            .or_default()
            .insert(group, point.value);
    }

    let max = scale_max(cells.values().flat_map(|row| row.values().copied()));
    let category_count = cells.len().max(1);
    let group_count = groups.len().max(1);
    let category_width = area.width / category_count as f64;
    let bar_width = category_width / (group_count as f64 * 1.2);
    let cluster_offset = (category_width - group_count as f64 * bar_width) / 2.0;

    let mut bars = Vec::with_capacity(points.len());
    for (category_index, row) in cells.values().enumerate() {
        for (group_index, group) in groups.iter().enumerate() {
            let Some(&value) = row.get(group) else {
                continue;
            };
            let height = value / max * area.height;
            bars.push(ColumnBar {
                category_index,
                group_index,
                x: area.x
                    + category_index as f64 * category_width
                    + cluster_offset
                    + group_index as f64 * bar_width,
                y: area.bottom() - height,
                width: bar_width,
                height,
                value,
                show_label: height > LABEL_MIN_HEIGHT,
            });
        }
    }

    ColumnLayout {
        categories: cells.keys().cloned().collect(),
        show_legend: groups.len() > 1,
        groups: groups.into_iter().collect(),
        bars,
        category_width,
    }
}

#[must_use]
pub fn render(points: &[GroupedPoint], options: &ChartOptions, area: CanvasArea) -> String {
    if points.is_empty() {
        return placeholder(area, "No data available");
    }

    let layout = layout(points, area);
    let mut fragment = SvgFragment::new();

    if layout.show_legend {
        let labels: Vec<&str> = layout.groups.iter().map(String::as_str).collect();
        legend_row(&mut fragment, area, &labels);
    }

    for bar in &layout.bars {
        fragment.rect(bar.x, bar.y, bar.width, bar.height, series_color(bar.group_index));
        if bar.show_label {
            fragment.text(
                bar.x + bar.width / 2.0,
                bar.y - 5.0,
                "value-label",
                &fmt_value(bar.value),
            );
        }
    }

    for (index, category) in layout.categories.iter().enumerate() {
        fragment.text(
            area.x + (index as f64 + 0.5) * layout.category_width,
            area.bottom() + 20.0,
            "axis-label",
            category,
        );
    }
    cartesian_axes(&mut fragment, area, options);

    fragment.into_string()
}
