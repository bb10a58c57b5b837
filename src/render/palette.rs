//! Fixed categorical palette and shared stroke colors.

/// Categorical series palette, cycled by index.
pub const PALETTE: [&str; 9] = [
    "#5B8FF9", "#5AD8A6", "#5D7092", "#F6BD16", "#E8684A", "#6DC8EC", "#9270CA", "#FF9D4D",
    "#269A99",
];

/// Axis and frame stroke color.
pub const AXIS_COLOR: &str = "#333333";

/// Concentric/background grid stroke color.
pub const GRID_COLOR: &str = "#e0e0e0";

/// Color for the indexed series, cycling past the palette end.
#[must_use]
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
