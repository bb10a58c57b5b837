use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Closed set of supported chart families.
///
/// Tags are matched case-insensitively; `"bar"` is an alias for `Column`.
/// Any unrecognized tag routes to `Column` — the fallback is a documented
/// API policy, not an error (`from_tag` reports whether it was taken).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Column,
    Line,
    Pie,
    Area,
    Scatter,
    Radar,
    DualAxes,
    Histogram,
    Funnel,
}

impl ChartKind {
    /// Resolves a raw type tag. Returns the kind and `true` when the tag was
    /// recognized, or `(Column, false)` for the unsupported-tag fallback.
    #[must_use]
    pub fn from_tag(tag: &str) -> (Self, bool) {
        match tag.to_ascii_lowercase().as_str() {
            "column" | "bar" => (Self::Column, true),
            "line" => (Self::Line, true),
            "pie" => (Self::Pie, true),
            "area" => (Self::Area, true),
            "scatter" => (Self::Scatter, true),
            "radar" => (Self::Radar, true),
            "dual-axes" => (Self::DualAxes, true),
            "histogram" => (Self::Histogram, true),
            "funnel" => (Self::Funnel, true),
            _ => (Self::Column, false),
        }
    }

    #[must_use]
    pub fn margin_preset(self) -> MarginPreset {
        match self {
            Self::Funnel => MarginPreset::Funnel,
            _ => MarginPreset::Standard,
        }
    }
}

/// Series role inside a dual-axes request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Column,
    Line,
}

/// One tagged series of a dual-axes request.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesSpec {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, rename = "axisYTitle")]
    pub axis_y_title: Option<String>,
}

/// Display options, deserializable from the caller's camelCase wire shape.
/// Every field carries the documented default.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "axisXTitle")]
    pub axis_x_title: Option<String>,
    #[serde(default, rename = "axisYTitle")]
    pub axis_y_title: Option<String>,
    #[serde(default = "default_bins")]
    pub bins: usize,
    #[serde(default)]
    pub series: Option<Vec<SeriesSpec>>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: None,
            axis_x_title: None,
            axis_y_title: None,
            bins: default_bins(),
            series: None,
            categories: None,
        }
    }
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

fn default_bins() -> usize {
    10
}

/// One render request. Immutable, constructed fresh per call.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub data: Vec<Value>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartRequest {
    #[must_use]
    pub fn new(chart_type: impl Into<String>, data: Vec<Value>) -> Self {
        Self {
            chart_type: chart_type.into(),
            data,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

/// Non-array `data` is degenerate input, not a hard failure: it coerces to an
/// empty row set and the selected engine renders its placeholder.
fn lenient_rows<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(rows) => rows,
        _ => Vec::new(),
    })
}

/// Fixed margins carved out of the requested viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginPreset {
    Standard,
    Funnel,
}

impl MarginPreset {
    /// `(left, top, right, bottom)` in pixels.
    #[must_use]
    pub const fn margins(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Standard => (80.0, 60.0, 60.0, 80.0),
            Self::Funnel => (100.0, 80.0, 100.0, 80.0),
        }
    }
}

/// Pixel rectangle reserved for the chart body, after fixed margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasArea {
    pub fn from_viewport(width: f64, height: f64, preset: MarginPreset) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ChartError::InvalidData(
                "viewport dimensions must be finite".to_owned(),
            ));
        }

        let (left, top, right, bottom) = preset.margins();
        let area = Self {
            x: left,
            y: top,
            width: width - left - right,
            height: height - top - bottom,
        };

        if area.width <= 0.0 || area.height <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(area)
    }

    /// Pixel x of the canvas right edge.
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Pixel y of the canvas bottom edge (the cartesian baseline).
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Center of the canvas area, used by the polar engines.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
