use chartsmith::core::{CanvasArea, ChartKind, ChartRequest, MarginPreset};

#[test]
fn tag_resolution_is_case_insensitive_with_bar_alias() {
    assert_eq!(ChartKind::from_tag("column"), (ChartKind::Column, true));
    assert_eq!(ChartKind::from_tag("BAR"), (ChartKind::Column, true));
    assert_eq!(ChartKind::from_tag("Dual-Axes"), (ChartKind::DualAxes, true));
    assert_eq!(ChartKind::from_tag("histogram"), (ChartKind::Histogram, true));
}

#[test]
fn unsupported_tag_falls_back_to_column() {
    let (kind, recognized) = ChartKind::from_tag("treemap");
    assert_eq!(kind, ChartKind::Column);
    assert!(!recognized);
}

#[test]
fn standard_margins_match_the_canvas_contract() {
    let area = CanvasArea::from_viewport(800.0, 600.0, MarginPreset::Standard).expect("valid area");
    assert_eq!(area.x, 80.0);
    assert_eq!(area.y, 60.0);
    assert_eq!(area.width, 660.0);
    assert_eq!(area.height, 460.0);
    assert_eq!(area.bottom(), 520.0);
}

#[test]
fn funnel_margins_are_wider() {
    let area = CanvasArea::from_viewport(800.0, 600.0, MarginPreset::Funnel).expect("valid area");
    assert_eq!(area.x, 100.0);
    assert_eq!(area.y, 80.0);
    assert_eq!(area.width, 600.0);
    assert_eq!(area.height, 440.0);
}

#[test]
fn minimum_guaranteed_viewport_still_yields_positive_canvas() {
    let standard =
        CanvasArea::from_viewport(141.0, 141.0, MarginPreset::Standard).expect("valid area");
    assert!(standard.width > 0.0);
    assert!(standard.height > 0.0);

    let funnel = CanvasArea::from_viewport(201.0, 161.0, MarginPreset::Funnel).expect("valid area");
    assert!(funnel.width > 0.0);
    assert!(funnel.height > 0.0);
}

#[test]
fn degenerate_viewport_is_rejected() {
    assert!(CanvasArea::from_viewport(140.0, 600.0, MarginPreset::Standard).is_err());
    assert!(CanvasArea::from_viewport(800.0, 140.0, MarginPreset::Standard).is_err());
    assert!(CanvasArea::from_viewport(f64::NAN, 600.0, MarginPreset::Standard).is_err());
}

#[test]
fn request_deserializes_from_camel_case_wire_shape() {
    let request: ChartRequest = serde_json::from_str(
        r#"{
            "type": "dual-axes",
            "data": [],
            "options": {
                "width": 1000,
                "axisXTitle": "Month",
                "series": [
                    {"type": "column", "data": [10, 20], "axisYTitle": "Revenue"},
                    {"type": "line", "data": [1.5, 2.5]}
                ],
                "categories": ["Jan", "Feb"]
            }
        }"#,
    )
    .expect("request parses");

    assert_eq!(request.chart_type, "dual-axes");
    assert_eq!(request.options.width, 1000.0);
    assert_eq!(request.options.height, 600.0);
    assert_eq!(request.options.bins, 10);
    assert_eq!(request.options.axis_x_title.as_deref(), Some("Month"));
    let series = request.options.series.as_deref().expect("series present");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].axis_y_title.as_deref(), Some("Revenue"));
}

#[test]
fn non_array_data_coerces_to_empty_rows() {
    let request: ChartRequest =
        serde_json::from_str(r#"{"type": "pie", "data": "oops"}"#).expect("request parses");
    assert!(request.data.is_empty());
}
