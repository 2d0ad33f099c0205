use approx::assert_abs_diff_eq;
use dashboard_charts::api::{ChartOptions, render_line};
use dashboard_charts::core::{BandBound, PixelPoint, Viewport};
use dashboard_charts::render::{DashPattern, DrawCommand, RecordingSurface, palette};
use dashboard_charts::{ChartData, ChartError, ChartKind, draw};

fn stroke_commands(surface: &RecordingSurface) -> Vec<(Vec<PixelPoint>, f64, DashPattern)> {
    surface
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokePath {
                points,
                width,
                dash,
                ..
            } => Some((points.clone(), *width, dash.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn line_maps_reference_series_onto_exact_pixels() {
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![10.0, 20.0, 15.0, 25.0]),
        &ChartOptions::new(),
    )
    .expect("draw");

    assert_eq!(
        surface.commands()[0],
        DrawCommand::Clear {
            width: 200.0,
            height: 100.0
        }
    );

    let strokes = stroke_commands(&surface);
    // Five grid lines, then the series.
    assert_eq!(strokes.len(), 6);
    let (points, width, dash) = &strokes[5];
    assert_eq!(*width, 2.0);
    assert!(dash.is_solid());

    let expected_y = [
        72.0 - 44.0 * 10.0 / 30.0,
        72.0 - 44.0 * 20.0 / 30.0,
        72.0 - 44.0 * 15.0 / 30.0,
        72.0 - 44.0 * 25.0 / 30.0,
    ];
    assert_eq!(points.len(), 4);
    for (index, point) in points.iter().enumerate() {
        assert_abs_diff_eq!(point.x, 28.0 + 48.0 * index as f64, epsilon = 1e-9);
        assert_abs_diff_eq!(point.y, expected_y[index], epsilon = 1e-9);
    }
    assert_abs_diff_eq!(points[0].y, 57.333_333_333, epsilon = 1e-6);
}

#[test]
fn band_is_filled_before_the_stroke() {
    let series = vec![10.0, 20.0, 15.0];
    let band = vec![
        BandBound::new(8.0, 12.0).expect("bound"),
        BandBound::new(18.0, 22.0).expect("bound"),
        BandBound::new(13.0, 17.0).expect("bound"),
    ];
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::banded(series, band),
        &ChartOptions::new().with_grid(false),
    )
    .expect("draw");

    let commands = surface.commands();
    assert_eq!(commands.len(), 3);
    let DrawCommand::FillPath { points, color } = &commands[1] else {
        panic!("expected band fill, got {:?}", commands[1]);
    };
    assert_eq!(*color, palette::BAND_FILL);
    assert_eq!(points.len(), 6);
    // Lower bounds forward, upper bounds backward.
    assert_eq!(points[0].x, 28.0);
    assert_eq!(points[2].x, 172.0);
    assert_eq!(points[3].x, 172.0);
    assert_eq!(points[5].x, 28.0);
    assert!(points[0].y > points[5].y);
    assert!(matches!(commands[2], DrawCommand::StrokePath { .. }));
}

#[test]
fn overlay_keeps_previous_content_and_skips_grid() {
    let mut surface = RecordingSurface::new(200, 100);
    let shared = ChartOptions::new().with_value_max(50.0);
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![10.0, 20.0]),
        &shared,
    )
    .expect("first");
    let before = surface.commands().len();

    let dashed = DashPattern::new([6.0, 4.0]).expect("dash");
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![30.0, 25.0]),
        &shared
            .clone()
            .overlay()
            .with_stroke_color(palette::ALT_BLUE)
            .with_dash_pattern(dashed.clone()),
    )
    .expect("overlay");

    let commands = surface.commands();
    assert_eq!(commands.len(), before + 1);
    let DrawCommand::StrokePath { color, dash, .. } = &commands[before] else {
        panic!("expected overlay stroke");
    };
    assert_eq!(*color, palette::ALT_BLUE);
    assert_eq!(*dash, dashed);
    // The first series' stroke is still solid.
    let DrawCommand::StrokePath { dash, .. } = &commands[before - 1] else {
        panic!("expected first stroke");
    };
    assert!(dash.is_solid());
}

#[test]
fn short_series_are_rejected_without_drawing() {
    for series in [vec![], vec![42.0]] {
        let mut surface = RecordingSurface::new(200, 100);
        let err = draw(
            ChartKind::Line,
            &mut surface,
            &ChartData::series(series),
            &ChartOptions::new(),
        )
        .expect_err("short series");
        assert!(matches!(err, ChartError::InvalidSeriesLength { .. }));
        assert!(surface.is_empty());
    }
}

#[test]
fn band_length_mismatch_is_a_shape_error() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::banded(
            vec![1.0, 2.0, 3.0],
            vec![BandBound::new(0.0, 2.0).expect("bound")],
        ),
        &ChartOptions::new(),
    )
    .expect_err("mismatch");
    assert!(matches!(err, ChartError::ShapeMismatch { .. }));
    assert!(surface.is_empty());
}

#[test]
fn inverted_band_bound_is_rejected() {
    let resolved = ChartOptions::new()
        .resolve(ChartKind::Line, Viewport::new(200, 100))
        .expect("resolve");
    let band = [
        BandBound { lower: 1.0, upper: 2.0 },
        BandBound { lower: 5.0, upper: 3.0 },
    ];
    let mut surface = RecordingSurface::new(200, 100);
    let err = render_line(&mut surface, &[1.0, 2.0], Some(&band[..]), &resolved)
        .expect_err("bad band");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_empty());
}

#[test]
fn non_finite_values_are_rejected() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![1.0, f64::NAN, 3.0]),
        &ChartOptions::new().with_value_max(10.0),
    )
    .expect_err("nan");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_empty());
}

#[test]
fn all_negative_series_renders_under_default_options() {
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![-10.0, -20.0, -5.0]),
        &ChartOptions::new(),
    )
    .expect("negative series is a valid series");

    let strokes = stroke_commands(&surface);
    let (points, _, _) = strokes.last().expect("series stroke");
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|point| point.is_finite()));
    // Derived range is [0, -6]: the pixel mapping runs inverted.
    assert_abs_diff_eq!(points[2].y, 72.0 - 44.0 * -5.0 / -6.0, epsilon = 1e-9);
}

#[test]
fn series_below_configured_minimum_still_renders() {
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![100.0, 200.0]),
        &ChartOptions::new().with_value_min(3600.0),
    )
    .expect("derived maximum below the minimum");
    assert_eq!(stroke_commands(&surface).len(), 6);
}

#[test]
fn overflowing_value_span_fails_before_any_drawing() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![1e308, 1e308]),
        &ChartOptions::new().with_value_min(-1e308),
    )
    .expect_err("span overflows f64");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_empty());
}

#[test]
fn out_of_range_values_that_overflow_pixels_leave_surface_untouched() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::Area,
        &mut surface,
        &ChartData::series(vec![1e308, 1.0]),
        &ChartOptions::new().with_value_range(0.0, 1e-300),
    )
    .expect_err("pixel overflow");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_empty());
}
