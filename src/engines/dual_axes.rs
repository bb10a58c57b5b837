//! Dual-axes engine: column series on the left axis, line series on the right.
//!
//! The two series scale independently; one series' magnitude never moves the
//! other axis's ticks. Category labels index positionally against both series,
//! so a shorter series simply stops drawing early.

use std::fmt::Write as _;

use crate::core::{CanvasArea, ChartOptions, DualAxesData, scale_max, zero_safe};
use crate::engines::placeholder;
use crate::render::{AXIS_COLOR, SvgFragment, fmt, series_color};

/// Number of tick intervals on each value axis.
const TICK_STEPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualBar {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DualAxesLayout {
    pub categories: Vec<String>,
    pub bars: Vec<DualBar>,
    pub line_points: Vec<(f64, f64)>,
    /// Left-axis tick values, bottom to top (`0 .. bar_max`).
    pub left_ticks: Vec<f64>,
    /// Right-axis tick values, bottom to top (`0 .. line_max`).
    pub right_ticks: Vec<f64>,
    pub bar_max: f64,
    pub line_max: f64,
    pub category_width: f64,
}

#[must_use]
pub fn layout(data: &DualAxesData, area: CanvasArea) -> DualAxesLayout {
    let bar_max = scale_max(data.bars.iter().copied());
    let line_max = scale_max(data.lines.iter().copied());
    let category_width = area.width / zero_safe(data.categories.len() as f64);

    let bars = data
        .bars
        .iter()
        .take(data.categories.len())
        .enumerate()
        .map(|(index, &value)| {
            let height = value / bar_max * area.height;
            DualBar {
                index,
                x: area.x + (index as f64 + 0.2) * category_width,
                y: area.bottom() - height,
                width: category_width * 0.6,
                height,
                value,
            }
        })
        .collect();

    let line_points = data
        .lines
        .iter()
        .take(data.categories.len())
        .enumerate()
        .map(|(index, &value)| {
            (
                area.x + (index as f64 + 0.5) * category_width,
                area.bottom() - value / line_max * area.height,
            )
        })
        .collect();

    let ticks = |max: f64| {
        (0..=TICK_STEPS)
            .map(|step| max * step as f64 / TICK_STEPS as f64)
            .collect::<Vec<f64>>()
    };

    DualAxesLayout {
        categories: data.categories.clone(),
        bars,
        line_points,
        left_ticks: ticks(bar_max),
        right_ticks: ticks(line_max),
        bar_max,
        line_max,
        category_width,
    }
}

#[must_use]
pub fn render(data: &DualAxesData, options: &ChartOptions, area: CanvasArea) -> String {
    if data.bars.is_empty() && data.lines.is_empty() {
        return placeholder(area, "No data available");
    }

    let layout = layout(data, area);
    let mut fragment = SvgFragment::new();
    let bar_color = series_color(0);
    let line_color = series_color(4);

    // Two-entry legend, always drawn.
    let legend_y = area.y - 25.0;
    let bar_label = data.bar_axis_title.as_deref().unwrap_or("Column");
    let line_label = data.line_axis_title.as_deref().unwrap_or("Line");
    fragment.rect(area.x, legend_y - 10.0, 12.0, 12.0, bar_color);
    fragment.text_anchored(area.x + 17.0, legend_y, "legend-label", "start", bar_label);
    let line_legend_x = area.x + 17.0 + bar_label.chars().count() as f64 * 7.0 + 18.0;
    fragment.line(line_legend_x, legend_y - 4.0, line_legend_x + 24.0, legend_y - 4.0, line_color, 2.0);
    fragment.circle(line_legend_x + 12.0, legend_y - 4.0, 3.0, line_color);
    fragment.text_anchored(line_legend_x + 29.0, legend_y, "legend-label", "start", line_label);

    for bar in &layout.bars {
        fragment.rect(bar.x, bar.y, bar.width, bar.height, bar_color);
    }

    if !layout.line_points.is_empty() {
        let mut d = String::with_capacity(layout.line_points.len() * 16);
        for (index, (x, y)) in layout.line_points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{command} {} {} ", fmt(*x), fmt(*y));
        }
        fragment.stroke_path(d.trim_end(), line_color, 2.0);
        for &(x, y) in &layout.line_points {
            fragment.circle(x, y, 3.0, line_color);
        }
    }

    fragment.line(area.x, area.y, area.x, area.bottom(), AXIS_COLOR, 1.0);
    fragment.line(area.right(), area.y, area.right(), area.bottom(), AXIS_COLOR, 1.0);
    fragment.line(area.x, area.bottom(), area.right(), area.bottom(), AXIS_COLOR, 1.0);

    for (step, (&left, &right)) in layout
        .left_ticks
        .iter()
        .zip(&layout.right_ticks)
        .enumerate()
    {
        let y = area.bottom() - step as f64 / TICK_STEPS as f64 * area.height;
        fragment.text_anchored(
            area.x - 8.0,
            y + 4.0,
            "axis-label",
            "end",
            &format!("{}", left.round() as i64),
        );
        fragment.text_anchored(
            area.right() + 8.0,
            y + 4.0,
            "axis-label",
            "start",
            &format!("{right:.2}"),
        );
    }

    for (index, category) in layout.categories.iter().enumerate() {
        fragment.text(
            area.x + (index as f64 + 0.5) * layout.category_width,
            area.bottom() + 20.0,
            "axis-label",
            category,
        );
    }

    if let Some(title) = options.axis_x_title.as_deref() {
        fragment.text(area.x + area.width / 2.0, area.bottom() + 45.0, "axis-title", title);
    }
    if let Some(title) = data.bar_axis_title.as_deref() {
        fragment.text_rotated(area.x - 50.0, area.y + area.height / 2.0, "axis-title", -90.0, title);
    }
    if let Some(title) = data.line_axis_title.as_deref() {
        fragment.text_rotated(area.right() + 50.0, area.y + area.height / 2.0, "axis-title", 90.0, title);
    }

    fragment.into_string()
}
