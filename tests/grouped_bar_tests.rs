use approx::assert_abs_diff_eq;
use dashboard_charts::api::ChartOptions;
use dashboard_charts::core::{AxisRange, PlotGeometry, project_grouped_bars};
use dashboard_charts::render::{RecordingSurface, palette};
use dashboard_charts::{ChartData, ChartError, ChartKind, draw};

fn sample_series() -> Vec<Vec<f64>> {
    vec![
        vec![10.0, 20.0, 30.0],
        vec![15.0, 25.0, 35.0],
        vec![5.0, 12.0, 8.0],
    ]
}

#[test]
fn emits_one_rect_per_series_and_category() {
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::GroupedBar,
        &mut surface,
        &ChartData::MultiSeries(sample_series()),
        &ChartOptions::new().with_grid(false),
    )
    .expect("draw");

    let rects = surface.filled_rects();
    assert_eq!(rects.len(), 3 * 3);
    // Series-major order, colored by series index.
    assert_eq!(rects[0].4, palette::PRIMARY_PURPLE);
    assert_eq!(rects[3].4, palette::ALT_BLUE);
    assert_eq!(rects[6].4, palette::PRIMARY_PURPLE);
}

#[test]
fn bars_within_a_category_do_not_overlap() {
    let plot = PlotGeometry::new(200.0, 100.0, 28.0).expect("plot");
    let range = AxisRange::new(0.0, 42.0).expect("range");
    let bars = project_grouped_bars(&sample_series(), range, plot).expect("bars");

    let group_width = plot.inner_width / 3.0;
    for category in 0..3 {
        let mut in_slot: Vec<_> = bars
            .iter()
            .filter(|bar| bar.category_index == category)
            .map(|bar| bar.rect)
            .collect();
        assert_eq!(in_slot.len(), 3);
        in_slot.sort_by(|a, b| a.x.total_cmp(&b.x));

        let slot_left = plot.left() + category as f64 * group_width;
        let slot_right = slot_left + group_width;
        assert!(in_slot[0].x >= slot_left);
        assert!(in_slot[2].right() <= slot_right);
        for pair in in_slot.windows(2) {
            assert!(pair[0].right() <= pair[1].x);
        }
    }
}

#[test]
fn sub_slot_layout_matches_reference_offsets() {
    let plot = PlotGeometry::new(200.0, 100.0, 28.0).expect("plot");
    let range = AxisRange::new(0.0, 42.0).expect("range");
    let series = vec![vec![10.0, 20.0, 30.0], vec![15.0, 25.0, 35.0]];
    let bars = project_grouped_bars(&series, range, plot).expect("bars");

    // Group width 48, sub-slot 16, bar width 12.8.
    let second_series_third_category = bars[5];
    assert_eq!(second_series_third_category.series_index, 1);
    assert_eq!(second_series_third_category.category_index, 2);
    assert_abs_diff_eq!(
        second_series_third_category.rect.x,
        28.0 + 2.0 * 48.0 + 1.2 * 16.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(second_series_third_category.rect.width, 12.8, epsilon = 1e-9);
}

#[test]
fn value_ceiling_is_derived_across_all_series() {
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::GroupedBar,
        &mut surface,
        &ChartData::MultiSeries(vec![vec![10.0], vec![50.0]]),
        &ChartOptions::new().with_grid(false),
    )
    .expect("draw");

    let rects = surface.filled_rects();
    assert_abs_diff_eq!(rects[1].3, 44.0 / 1.2, epsilon = 1e-9);
}

#[test]
fn unequal_series_lengths_are_rejected_before_drawing() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::GroupedBar,
        &mut surface,
        &ChartData::MultiSeries(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]),
        &ChartOptions::new(),
    )
    .expect_err("ragged");
    assert!(matches!(
        err,
        ChartError::ShapeMismatch {
            kind: "grouped bar chart",
            ..
        }
    ));
    assert!(surface.is_empty());
}

#[test]
fn matrix_is_not_accepted_as_multi_series() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::GroupedBar,
        &mut surface,
        &ChartData::Matrix(vec![vec![1.0, 2.0]]),
        &ChartOptions::new(),
    )
    .expect_err("matrix");
    assert!(matches!(err, ChartError::ShapeMismatch { .. }));
    assert!(surface.is_empty());
}
