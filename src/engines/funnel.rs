//! Funnel engine.
//!
//! Stage width is proportional to `value / maxValue`, centered horizontally.
//! Every stage but the last renders as a trapezoid tapering toward the next
//! stage's width; the final stage is a plain rectangle. Conversion rates are
//! shown to the right of every stage except the first.

use std::fmt::Write as _;

use crate::core::{CanvasArea, LabeledPoint, scale_max};
use crate::engines::placeholder;
use crate::render::{SvgFragment, fmt, fmt_value, series_color};

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub label: String,
    pub value: f64,
    pub y: f64,
    pub height: f64,
    pub top_width: f64,
    pub bottom_width: f64,
    pub is_rect: bool,
    /// Percent of the previous stage's value; `None` for the first stage or
    /// after a zero-valued stage.
    pub conversion: Option<f64>,
}

#[must_use]
pub fn layout(points: &[LabeledPoint], area: CanvasArea) -> Vec<FunnelStage> {
    let max = scale_max(points.iter().map(|p| p.value));
    let stage_height = area.height / points.len().max(1) as f64;

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let top_width = point.value / max * area.width;
            let bottom_width = match points.get(index + 1) {
                Some(next) => next.value / max * area.width,
                None => top_width * 0.8,
            };
            let conversion = (index > 0)
                .then(|| points[index - 1].value)
                .filter(|&previous| previous > 0.0)
                .map(|previous| point.value / previous * 100.0);
            FunnelStage {
                label: point.label.clone(),
                value: point.value,
                y: area.y + index as f64 * stage_height,
                height: stage_height,
                top_width,
                bottom_width,
                is_rect: index == points.len() - 1,
                conversion,
            }
        })
        .collect()
}

#[must_use]
pub fn render(points: &[LabeledPoint], area: CanvasArea) -> String {
    if points.is_empty() {
        return placeholder(area, "No data available");
    }

    let stages = layout(points, area);
    let mut fragment = SvgFragment::new();
    let center_x = area.x + area.width / 2.0;

    for (index, stage) in stages.iter().enumerate() {
        let color = series_color(index);
        if stage.is_rect {
            fragment.rect(
                center_x - stage.top_width / 2.0,
                stage.y,
                stage.top_width,
                stage.height,
                color,
            );
        } else {
            let mut d = String::with_capacity(64);
            let _ = write!(
                d,
                "M {} {} L {} {} L {} {} L {} {} Z",
                fmt(center_x - stage.top_width / 2.0),
                fmt(stage.y),
                fmt(center_x + stage.top_width / 2.0),
                fmt(stage.y),
                fmt(center_x + stage.bottom_width / 2.0),
                fmt(stage.y + stage.height),
                fmt(center_x - stage.bottom_width / 2.0),
                fmt(stage.y + stage.height),
            );
            fragment.filled_path(&d, color);
        }
    }

    for stage in &stages {
        let mid_y = stage.y + stage.height / 2.0 + 4.0;
        fragment.text(
            center_x,
            mid_y,
            "value-label",
            &format!("{}: {}", stage.label, fmt_value(stage.value)),
        );
        if let Some(conversion) = stage.conversion {
            fragment.text_anchored(
                area.right() + 10.0,
                mid_y,
                "axis-label",
                "start",
                &format!("{conversion:.1}%"),
            );
        }
    }

    fragment.into_string()
}
