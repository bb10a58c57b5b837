use chartsmith::core::{CanvasArea, ChartOptions, MarginPreset};
use chartsmith::engines::histogram;

fn canvas() -> CanvasArea {
    CanvasArea::from_viewport(800.0, 600.0, MarginPreset::Standard).expect("valid area")
}

#[test]
fn every_valid_value_lands_in_exactly_one_bin() {
    let values: Vec<f64> = (0..97).map(|i| f64::from(i) * 1.37).collect();
    let binning = histogram::bin_values(&values, 10);

    assert_eq!(binning.counts.len(), 10);
    assert_eq!(binning.counts.iter().sum::<usize>(), values.len());
}

#[test]
fn maximum_value_lands_in_the_last_bin() {
    let values = vec![0.0, 2.5, 5.0, 7.5, 10.0];
    let binning = histogram::bin_values(&values, 4);

    // floor((10 - 0) / 2.5) = 4 would overflow; it must clamp to bin 3.
    assert_eq!(binning.counts, vec![1, 1, 1, 2]);
}

#[test]
fn all_equal_values_collapse_into_bin_zero() {
    let binning = histogram::bin_values(&[4.0, 4.0, 4.0], 5);
    assert_eq!(binning.counts[0], 3);
    assert_eq!(binning.counts.iter().sum::<usize>(), 3);
    assert_eq!(binning.bin_width, 0.0);
}

#[test]
fn zero_bins_clamps_to_one() {
    let binning = histogram::bin_values(&[1.0, 2.0], 0);
    assert_eq!(binning.counts.len(), 1);
    assert_eq!(binning.counts[0], 2);
}

#[test]
fn bar_heights_scale_against_the_busiest_bin() {
    let values = vec![0.0, 0.1, 0.2, 9.9];
    let bars = histogram::layout(&values, 2, canvas());

    assert!((bars[0].height - 460.0).abs() <= 1e-9);
    assert!((bars[1].height - 460.0 / 3.0).abs() <= 1e-6);
}

#[test]
fn bin_start_labels_thin_to_every_ceil_bins_over_6th() {
    let values: Vec<f64> = (0..100).map(f64::from).collect();
    let bars = histogram::layout(&values, 20, canvas());

    // ceil(20 / 6) = 4: bins 0, 4, 8, 12, 16 carry labels.
    let labelled: Vec<usize> = bars
        .iter()
        .filter(|bar| bar.show_bin_label)
        .map(|bar| bar.bin_index)
        .collect();
    assert_eq!(labelled, vec![0, 4, 8, 12, 16]);
}

#[test]
fn count_label_requires_height_above_threshold() {
    // 1 of 100 samples in a bin is 4.6px tall, under the 15px threshold.
    let mut values = vec![50.0; 100];
    values.push(0.0);
    let bars = histogram::layout(&values, 10, canvas());

    let sparse = bars.iter().find(|bar| bar.count == 1).expect("sparse bin");
    let dense = bars.iter().find(|bar| bar.count == 100).expect("dense bin");
    assert!(!sparse.show_count);
    assert!(dense.show_count);
}

#[test]
fn empty_values_render_placeholder() {
    let fragment = histogram::render(&[], &ChartOptions::default(), canvas());
    assert!(fragment.contains("No valid numeric data"));
}
