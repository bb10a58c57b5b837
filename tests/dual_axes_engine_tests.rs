use chartsmith::core::{
    CanvasArea, ChartData, ChartKind, ChartOptions, DualAxesData, MarginPreset,
};
use chartsmith::engines::dual_axes;
use serde_json::json;

fn canvas() -> CanvasArea {
    CanvasArea::from_viewport(800.0, 600.0, MarginPreset::Standard).expect("valid area")
}

fn data(bars: &[f64], lines: &[f64], categories: &[&str]) -> DualAxesData {
    DualAxesData {
        categories: categories.iter().map(|c| (*c).to_owned()).collect(),
        bars: bars.to_vec(),
        lines: lines.to_vec(),
        bar_axis_title: None,
        line_axis_title: None,
    }
}

#[test]
fn axes_scale_independently() {
    let base = dual_axes::layout(&data(&[10.0, 20.0], &[1.0, 2.0], &["a", "b"]), canvas());
    let line_boosted =
        dual_axes::layout(&data(&[10.0, 20.0], &[100.0, 200.0], &["a", "b"]), canvas());

    // Boosting the line series must not move the bar (left) axis ticks.
    assert_eq!(base.left_ticks, line_boosted.left_ticks);
    assert_ne!(base.right_ticks, line_boosted.right_ticks);

    let bar_boosted =
        dual_axes::layout(&data(&[1000.0, 2000.0], &[1.0, 2.0], &["a", "b"]), canvas());
    assert_eq!(base.right_ticks, bar_boosted.right_ticks);
}

#[test]
fn five_even_tick_intervals_per_axis() {
    let layout = dual_axes::layout(&data(&[100.0], &[10.0], &["a"]), canvas());

    assert_eq!(layout.left_ticks.len(), 6);
    assert_eq!(layout.right_ticks.len(), 6);
    assert_eq!(layout.left_ticks[0], 0.0);
    assert!((layout.left_ticks[5] - 100.0).abs() <= 1e-9);
    assert!((layout.left_ticks[1] - 20.0).abs() <= 1e-9);
    assert!((layout.right_ticks[5] - 10.0).abs() <= 1e-9);
}

#[test]
fn shorter_series_stops_drawing_early() {
    let layout = dual_axes::layout(
        &data(&[10.0, 20.0, 30.0], &[1.0], &["a", "b", "c"]),
        canvas(),
    );
    assert_eq!(layout.bars.len(), 3);
    assert_eq!(layout.line_points.len(), 1);
}

#[test]
fn right_ticks_render_with_two_decimals_and_left_as_integers() {
    let fragment = dual_axes::render(
        &data(&[50.0], &[7.5], &["a"]),
        &ChartOptions::default(),
        canvas(),
    );
    assert!(fragment.contains(">7.50<"));
    assert!(fragment.contains(">1.50<"));
    assert!(fragment.contains(">50<"));
    assert!(fragment.contains(">10<"));
}

#[test]
fn legend_always_has_two_entries() {
    let fragment = dual_axes::render(
        &data(&[1.0], &[1.0], &["a"]),
        &ChartOptions::default(),
        canvas(),
    );
    assert!(fragment.contains(">Column<"));
    assert!(fragment.contains(">Line<"));
}

#[test]
fn series_form_coerces_with_shared_categories() {
    let options: ChartOptions = serde_json::from_value(json!({
        "series": [
            {"type": "column", "data": [10, 20, 30], "axisYTitle": "Sales"},
            {"type": "line", "data": [1.5, 2.5, 3.5], "axisYTitle": "Rate"}
        ],
        "categories": ["Jan", "Feb", "Mar"]
    }))
    .expect("options parse");

    let ChartData::DualAxes(parsed) = ChartData::coerce(ChartKind::DualAxes, &[], &options) else {
        panic!("expected dual-axes data");
    };
    assert_eq!(parsed.categories, vec!["Jan", "Feb", "Mar"]);
    assert_eq!(parsed.bars, vec![10.0, 20.0, 30.0]);
    assert_eq!(parsed.lines, vec![1.5, 2.5, 3.5]);
    assert_eq!(parsed.bar_axis_title.as_deref(), Some("Sales"));
    assert_eq!(parsed.line_axis_title.as_deref(), Some("Rate"));
}

#[test]
fn legacy_row_shape_coerces_positionally() {
    let rows = vec![
        json!({"category": "Q1", "value": 100, "value2": 0.4}),
        json!({"time": "Q2", "bar": 120, "line": 0.5}),
    ];
    let ChartData::DualAxes(parsed) =
        ChartData::coerce(ChartKind::DualAxes, &rows, &ChartOptions::default())
    else {
        panic!("expected dual-axes data");
    };
    assert_eq!(parsed.categories, vec!["Q1", "Q2"]);
    assert_eq!(parsed.bars, vec![100.0, 120.0]);
    assert_eq!(parsed.lines, vec![0.4, 0.5]);
}

#[test]
fn empty_input_renders_placeholder() {
    let fragment = dual_axes::render(
        &DualAxesData::default(),
        &ChartOptions::default(),
        canvas(),
    );
    assert!(fragment.contains("No data available"));
}
