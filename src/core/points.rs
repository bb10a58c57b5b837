//! One-time coercion of loosely-typed request rows into per-chart records.
//!
//! Incoming `data` rows are dynamic JSON objects (or bare numbers). Each chart
//! family reads a different shape out of them, so coercion happens once at the
//! API boundary, discriminated by [`ChartKind`], and the engines only ever see
//! strict record types. Rows that do not fit the selected shape are dropped;
//! missing numeric fields coerce to 0 where the shape tolerates it.

use serde_json::Value;

use crate::core::types::{ChartKind, ChartOptions, SeriesKind};

/// Column/grouped-bar cell: `{category, value, group?}`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPoint {
    pub category: String,
    pub group: Option<String>,
    pub value: f64,
}

/// Line/area/pie/funnel sample normalized to `{label, value}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub label: String,
    pub value: f64,
}

/// Scatter sample; either coordinate may be absent (fallback placement).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Radar sample: `{name, group, value}` on an assumed 0-100 scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    pub name: String,
    pub group: String,
    pub value: f64,
}

/// Dual-axes input after reconciling both accepted shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DualAxesData {
    pub categories: Vec<String>,
    pub bars: Vec<f64>,
    pub lines: Vec<f64>,
    pub bar_axis_title: Option<String>,
    pub line_axis_title: Option<String>,
}

/// The tagged union the dispatcher hands to the engines.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Grouped(Vec<GroupedPoint>),
    Labeled(Vec<LabeledPoint>),
    Xy(Vec<ScatterPoint>),
    Radar(Vec<RadarPoint>),
    DualAxes(DualAxesData),
    Values(Vec<f64>),
}

impl ChartData {
    #[must_use]
    pub fn coerce(kind: ChartKind, data: &[Value], options: &ChartOptions) -> Self {
        match kind {
            ChartKind::Column => Self::Grouped(grouped_points(data)),
            ChartKind::Line | ChartKind::Area => {
                Self::Labeled(labeled_points(data, &["time", "category"]))
            }
            ChartKind::Pie | ChartKind::Funnel => {
                Self::Labeled(labeled_points(data, &["category", "time"]))
            }
            ChartKind::Scatter => Self::Xy(scatter_points(data)),
            ChartKind::Radar => Self::Radar(radar_points(data)),
            ChartKind::DualAxes => Self::DualAxes(dual_axes_data(data, options)),
            ChartKind::Histogram => Self::Values(numeric_values(data)),
        }
    }
}

/// Lenient numeric coercion: JSON numbers and numeric strings both count.
#[must_use]
pub fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn field_number(row: &Value, key: &str) -> Option<f64> {
    row.get(key).and_then(number_of)
}

fn field_string(row: &Value, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn grouped_points(data: &[Value]) -> Vec<GroupedPoint> {
    data.iter()
        .filter_map(|row| {
            let category = field_string(row, "category")?;
            let value = field_number(row, "value")?;
            Some(GroupedPoint {
                category,
                group: field_string(row, "group"),
                value,
            })
        })
        .collect()
}

fn labeled_points(data: &[Value], label_keys: &[&str]) -> Vec<LabeledPoint> {
    data.iter()
        .map(|row| {
            let label = label_keys
                .iter()
                .find_map(|key| field_string(row, key))
                .unwrap_or_else(|| "Unknown".to_owned());
            let value = field_number(row, "value")
                .or_else(|| number_of(row))
                .unwrap_or(0.0);
            LabeledPoint { label, value }
        })
        .collect()
}

fn scatter_points(data: &[Value]) -> Vec<ScatterPoint> {
    data.iter()
        .map(|row| ScatterPoint {
            x: field_number(row, "x"),
            y: field_number(row, "y"),
        })
        .collect()
}

fn radar_points(data: &[Value]) -> Vec<RadarPoint> {
    data.iter()
        .filter_map(|row| {
            Some(RadarPoint {
                name: field_string(row, "name")?,
                group: field_string(row, "group")?,
                value: field_number(row, "value")?,
            })
        })
        .collect()
}

fn numeric_values(data: &[Value]) -> Vec<f64> {
    data.iter()
        .filter_map(|row| number_of(row).or_else(|| field_number(row, "value")))
        .collect()
}

/// Reconciles the two accepted dual-axes shapes into one record.
///
/// Shape (a): `options.series` tagged `column`/`line` plus shared
/// `options.categories`. Shape (b): legacy per-row objects
/// `{category|time, bar|value, line|value2}`. When no category list exists,
/// positional labels `"1".."n"` cover the longer series.
fn dual_axes_data(data: &[Value], options: &ChartOptions) -> DualAxesData {
    let mut out = DualAxesData::default();

    if let Some(series) = options.series.as_deref() {
        for spec in series {
            let values: Vec<f64> = spec
                .data
                .iter()
                .map(|v| number_of(v).unwrap_or(0.0))
                .collect();
            match spec.kind {
                SeriesKind::Column if out.bars.is_empty() => {
                    out.bars = values;
                    out.bar_axis_title = spec.axis_y_title.clone();
                }
                SeriesKind::Line if out.lines.is_empty() => {
                    out.lines = values;
                    out.line_axis_title = spec.axis_y_title.clone();
                }
                _ => {}
            }
        }
        out.categories = options.categories.clone().unwrap_or_default();
    } else {
        for (index, row) in data.iter().enumerate() {
            let category = field_string(row, "category")
                .or_else(|| field_string(row, "time"))
                .unwrap_or_else(|| (index + 1).to_string());
            out.categories.push(category);
            out.bars.push(
                field_number(row, "bar")
                    .or_else(|| field_number(row, "value"))
                    .unwrap_or(0.0),
            );
            out.lines.push(
                field_number(row, "line")
                    .or_else(|| field_number(row, "value2"))
                    .unwrap_or(0.0),
            );
        }
    }

    if out.categories.is_empty() {
        let len = out.bars.len().max(out.lines.len());
        out.categories = (1..=len).map(|i| i.to_string()).collect();
    }

    out
}
