use std::f64::consts::PI;

use approx::assert_relative_eq;
use chartsmith::core::{CanvasArea, LabeledPoint, MarginPreset};
use chartsmith::engines::pie;

fn canvas() -> CanvasArea {
    CanvasArea::from_viewport(800.0, 600.0, MarginPreset::Standard).expect("valid area")
}

fn slice(label: &str, value: f64) -> LabeledPoint {
    LabeledPoint {
        label: label.to_owned(),
        value,
    }
}

#[test]
fn sweeps_sum_to_full_circle() {
    let points = vec![slice("a", 45.0), slice("b", 30.0), slice("c", 15.0)];
    let layout = pie::layout(&points, canvas()).expect("positive total");

    let total_sweep: f64 = layout.slices.iter().map(|s| s.sweep).sum();
    assert_relative_eq!(total_sweep, 2.0 * PI, epsilon = 1e-9);

    let total_ratio: f64 = layout.slices.iter().map(|s| s.ratio).sum();
    assert_relative_eq!(total_ratio, 1.0, epsilon = 1e-9);
}

#[test]
fn slices_start_at_twelve_o_clock_in_input_order() {
    let points = vec![slice("first", 1.0), slice("second", 1.0)];
    let layout = pie::layout(&points, canvas()).expect("positive total");

    assert_eq!(layout.slices[0].label, "first");
    assert_relative_eq!(layout.slices[0].start_angle, -PI / 2.0, epsilon = 1e-9);
    assert_relative_eq!(layout.slices[1].start_angle, PI / 2.0, epsilon = 1e-9);
}

#[test]
fn documented_example_percentages_render_in_order() {
    let points = vec![
        slice("Mobile", 45.0),
        slice("Desktop", 30.0),
        slice("Tablet", 15.0),
    ];
    let fragment = pie::render(&points, canvas());

    let mobile = fragment.find("50.0%").expect("mobile label");
    let desktop = fragment.find("33.3%").expect("desktop label");
    let tablet = fragment.find("16.7%").expect("tablet label");
    assert!(mobile < desktop);
    assert!(desktop < tablet);
}

#[test]
fn zero_total_renders_placeholder_not_empty_pie() {
    let fragment = pie::render(&[slice("a", 0.0), slice("b", 0.0)], canvas());
    assert!(fragment.contains("No valid data"));

    let fragment = pie::render(&[], canvas());
    assert!(fragment.contains("No valid data"));
}

#[test]
fn micro_slices_skip_their_percentage_label_but_stay_in_the_legend() {
    // 0.5 of 100 is ~0.031 radians, below the 0.2 radian threshold.
    let points = vec![slice("big", 99.5), slice("tiny", 0.5)];
    let layout = pie::layout(&points, canvas()).expect("positive total");

    assert!(layout.slices[0].show_label);
    assert!(!layout.slices[1].show_label);

    let fragment = pie::render(&points, canvas());
    assert!(fragment.contains("tiny"));
    assert!(!fragment.contains("0.5%"));
}

#[test]
fn large_arc_flag_set_when_slice_exceeds_half_circle() {
    let majority = pie::slice_path(400.0, 300.0, 100.0, -PI / 2.0, 1.5 * PI);
    assert!(majority.contains(" 1 1 "));

    let minority = pie::slice_path(400.0, 300.0, 100.0, -PI / 2.0, 0.5 * PI);
    assert!(minority.contains(" 0 1 "));
}

#[test]
fn non_positive_values_produce_no_slice() {
    let points = vec![slice("a", 10.0), slice("b", -5.0), slice("c", 0.0)];
    let layout = pie::layout(&points, canvas()).expect("positive total");
    assert_eq!(layout.slices.len(), 1);
    assert_eq!(layout.slices[0].label, "a");
}

#[test]
fn single_slice_renders_a_full_disc() {
    let fragment = pie::render(&[slice("all", 10.0)], canvas());
    assert!(fragment.contains("<circle"));
    assert!(fragment.contains("100.0%"));
}
