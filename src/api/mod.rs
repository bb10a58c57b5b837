//! Public entry point for the render core.
//!
//! The calling layer (transport, CLI, persistence) hands in a [`ChartRequest`]
//! and gets back either a complete SVG document string or an explicit error.
//! Degenerate data is not an error: the selected engine renders a placeholder
//! fragment and the document is still complete.

use tracing::{debug, warn};

use crate::core::{CanvasArea, ChartData, ChartKind, ChartRequest};
use crate::engines::render_fragment;
use crate::error::ChartResult;
use crate::render::assemble_document;

/// Renders one request into a self-contained SVG document.
///
/// Fails only on hard boundary violations (a viewport too small to leave a
/// positive canvas area, or non-finite dimensions); no partial document is
/// ever returned.
pub fn render_chart(request: &ChartRequest) -> ChartResult<String> {
    let (kind, recognized) = ChartKind::from_tag(&request.chart_type);
    if !recognized {
        warn!(
            tag = %request.chart_type,
            "unsupported chart type, falling back to column"
        );
    }

    let area = CanvasArea::from_viewport(
        request.options.width,
        request.options.height,
        kind.margin_preset(),
    )?;
    let data = ChartData::coerce(kind, &request.data, &request.options);
    debug!(?kind, rows = request.data.len(), "rendering chart");

    let fragment = render_fragment(kind, &data, &request.options, area);
    Ok(assemble_document(
        &request.chart_type,
        &request.options,
        &fragment,
    ))
}
