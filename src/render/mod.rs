mod document;
mod palette;
mod svg;

pub use document::{FOOTER_NOTICE, assemble_document, default_title};
pub use palette::{AXIS_COLOR, GRID_COLOR, PALETTE, series_color};
pub use svg::{SvgFragment, escape_text, fmt, fmt_value};
