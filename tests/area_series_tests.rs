use approx::assert_abs_diff_eq;
use dashboard_charts::api::ChartOptions;
use dashboard_charts::core::{AxisRange, PlotGeometry, project_area_geometry};
use dashboard_charts::render::{DrawCommand, RecordingSurface, palette};
use dashboard_charts::{ChartData, ChartError, ChartKind, draw};

#[test]
fn area_polygon_is_closed_against_the_baseline() {
    let plot = PlotGeometry::new(200.0, 100.0, 28.0).expect("plot");
    let range = AxisRange::new(0.0, 24.0).expect("range");
    let geometry = project_area_geometry("area chart", &[10.0, 20.0], range, plot).expect("area");

    let polygon = &geometry.fill_polygon;
    assert_eq!(polygon.len(), 5);
    assert_eq!((polygon[0].x, polygon[0].y), (28.0, 72.0));
    assert_eq!(polygon[1], geometry.line_points[0]);
    assert_eq!(polygon[2], geometry.line_points[1]);
    assert_eq!((polygon[3].x, polygon[3].y), (172.0, 72.0));
    assert_eq!(polygon[4], polygon[0]);
    assert_abs_diff_eq!(geometry.line_points[1].y, 72.0 - 44.0 * 20.0 / 24.0, epsilon = 1e-9);
}

#[test]
fn area_chart_draws_grid_fill_then_outline() {
    let mut surface = RecordingSurface::new(200, 100);
    draw(
        ChartKind::Area,
        &mut surface,
        &ChartData::series(vec![3.0, 9.0, 6.0]),
        &ChartOptions::new(),
    )
    .expect("draw");

    let commands = surface.commands();
    assert_eq!(commands.len(), 1 + 5 + 2);
    let DrawCommand::FillPath { color, .. } = &commands[6] else {
        panic!("expected area fill, got {:?}", commands[6]);
    };
    assert_eq!(*color, palette::AREA_FILL);
    let DrawCommand::StrokePath { width, color, .. } = &commands[7] else {
        panic!("expected outline");
    };
    assert_eq!(*width, 1.5);
    assert_eq!(*color, palette::PRIMARY_PURPLE);
}

#[test]
fn sparkline_uses_compact_defaults() {
    let mut surface = RecordingSurface::new(120, 40);
    draw(
        ChartKind::Sparkline,
        &mut surface,
        &ChartData::series(vec![5.0, 7.0, 4.0, 8.0]),
        &ChartOptions::new(),
    )
    .expect("draw");

    let commands = surface.commands();
    assert_eq!(commands.len(), 3, "no grid on sparklines");
    let DrawCommand::StrokePath { points, .. } = &commands[2] else {
        panic!("expected outline");
    };
    assert_eq!(points[0].x, 8.0);
    assert_eq!(points[3].x, 112.0);
    let DrawCommand::FillPath { color, .. } = &commands[1] else {
        panic!("expected fill");
    };
    assert_eq!(*color, palette::SPARKLINE_FILL);
}

#[test]
fn area_with_one_point_is_rejected() {
    let mut surface = RecordingSurface::new(200, 100);
    let err = draw(
        ChartKind::Area,
        &mut surface,
        &ChartData::series(vec![4.0]),
        &ChartOptions::new(),
    )
    .expect_err("single point");
    assert_eq!(
        err,
        ChartError::InvalidSeriesLength {
            kind: "area chart",
            required: 2,
            actual: 1
        }
    );
    assert!(surface.is_empty());
}
