//! Histogram engine.
//!
//! Values bin into `options.bins` equal-width buckets over `[min, max]`; the
//! maximum value lands in the last bin instead of overflowing past it. Bar
//! height scales against the busiest bin (never less than 1).

use crate::core::{CanvasArea, ChartOptions, value_extent};
use crate::engines::{cartesian_axes, placeholder};
use crate::render::{SvgFragment, fmt_value, series_color};

/// Minimum bar height before a frequency label is drawn above it.
const LABEL_MIN_HEIGHT: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBinning {
    pub counts: Vec<usize>,
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBar {
    pub bin_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub count: usize,
    /// Bin start value; labelled on the axis every `ceil(bins / 6)`-th bin.
    pub bin_start: f64,
    pub show_count: bool,
    pub show_bin_label: bool,
}

#[must_use]
pub fn bin_values(values: &[f64], bins: usize) -> HistogramBinning {
    let bins = bins.max(1);
    let (min, max) = value_extent(values).unwrap_or((0.0, 0.0));
    let bin_width = (max - min) / bins as f64;

    let mut counts = vec![0_usize; bins];
    for &value in values {
        // Degenerate bin width (all values equal) collapses into bin 0.
        let index = if bin_width > 0.0 {
            (((value - min) / bin_width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[index] += 1;
    }

    HistogramBinning {
        counts,
        min,
        max,
        bin_width,
    }
}

#[must_use]
pub fn layout(values: &[f64], bins: usize, area: CanvasArea) -> Vec<HistogramBar> {
    let binning = bin_values(values, bins);
    let max_count = binning.counts.iter().copied().max().unwrap_or(0).max(1);
    let bar_width = area.width / binning.counts.len() as f64;
    let label_every = binning.counts.len().div_ceil(6).max(1);

    binning
        .counts
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let height = count as f64 / max_count as f64 * area.height;
            HistogramBar {
                bin_index: index,
                x: area.x + index as f64 * bar_width,
                y: area.bottom() - height,
                width: bar_width,
                height,
                count,
                bin_start: binning.min + index as f64 * binning.bin_width,
                show_count: height > LABEL_MIN_HEIGHT,
                show_bin_label: index % label_every == 0,
            }
        })
        .collect()
}

#[must_use]
pub fn render(values: &[f64], options: &ChartOptions, area: CanvasArea) -> String {
    if values.is_empty() {
        return placeholder(area, "No valid numeric data");
    }

    let bars = layout(values, options.bins, area);
    let mut fragment = SvgFragment::new();
    let color = series_color(0);

    for bar in &bars {
        // 1px gap between adjacent bins.
        fragment.rect(bar.x, bar.y, (bar.width - 1.0).max(1.0), bar.height, color);
        if bar.show_count {
            fragment.text(
                bar.x + bar.width / 2.0,
                bar.y - 5.0,
                "value-label",
                &bar.count.to_string(),
            );
        }
    }

    for bar in &bars {
        if bar.show_bin_label {
            fragment.text(bar.x, area.bottom() + 20.0, "axis-label", &fmt_value(bar.bin_start));
        }
    }
    cartesian_axes(&mut fragment, area, options);

    fragment.into_string()
}
