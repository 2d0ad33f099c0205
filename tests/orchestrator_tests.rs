use dashboard_charts::api::ChartOptions;
use dashboard_charts::core::{BandBound, ScatterPoint};
use dashboard_charts::render::{DrawCommand, RecordingSurface};
use dashboard_charts::{ChartData, ChartError, ChartKind, draw};

fn sample_for(kind: ChartKind) -> ChartData {
    match kind {
        ChartKind::Line => ChartData::banded(
            vec![10.0, 20.0, 15.0, 25.0],
            vec![
                BandBound::new(8.0, 12.0).expect("bound"),
                BandBound::new(18.0, 22.0).expect("bound"),
                BandBound::new(13.0, 17.0).expect("bound"),
                BandBound::new(23.0, 27.0).expect("bound"),
            ],
        ),
        ChartKind::Area | ChartKind::Sparkline | ChartKind::Bar => {
            ChartData::series(vec![10.0, 20.0, 15.0, 25.0])
        }
        ChartKind::Doughnut | ChartKind::Treemap => {
            ChartData::series(vec![25.0, 30.0, 20.0, 15.0, 10.0])
        }
        ChartKind::GroupedBar => ChartData::MultiSeries(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
        ChartKind::Scatter => ChartData::Points(vec![
            ScatterPoint::new(0.0, 1.0),
            ScatterPoint::new(2.0, 3.0),
        ]),
        ChartKind::Heatmap => ChartData::Matrix(vec![vec![70.0, 80.0], vec![60.0, 90.0]]),
    }
}

#[test]
fn every_kind_draws_onto_a_cleared_surface() {
    for kind in ChartKind::ALL {
        let mut surface = RecordingSurface::new(320, 180);
        draw(kind, &mut surface, &sample_for(kind), &ChartOptions::new())
            .unwrap_or_else(|err| panic!("{kind} failed: {err}"));
        assert!(
            matches!(surface.commands()[0], DrawCommand::Clear { .. }),
            "{kind} should clear first"
        );
        assert!(surface.commands().len() > 1, "{kind} drew nothing");
    }
}

#[test]
fn repeated_draws_are_idempotent() {
    for kind in ChartKind::ALL {
        let data = sample_for(kind);
        let mut once = RecordingSurface::new(320, 180);
        draw(kind, &mut once, &data, &ChartOptions::new()).expect("first");

        let mut twice = RecordingSurface::new(320, 180);
        draw(kind, &mut twice, &data, &ChartOptions::new()).expect("first");
        draw(kind, &mut twice, &data, &ChartOptions::new()).expect("second");

        assert_eq!(once.commands(), twice.commands(), "{kind} is not idempotent");
    }
}

#[test]
fn mismatched_shapes_never_render() {
    let matrix = ChartData::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    for kind in ChartKind::ALL {
        if kind == ChartKind::Heatmap {
            continue;
        }
        let mut surface = RecordingSurface::new(320, 180);
        let err = draw(kind, &mut surface, &matrix, &ChartOptions::new())
            .expect_err("matrix should be rejected");
        assert!(
            matches!(err, ChartError::ShapeMismatch { actual: ref shape, .. } if shape == "matrix"),
            "{kind}: unexpected {err:?}"
        );
        assert!(surface.is_empty());
    }
}

#[test]
fn banded_series_is_only_for_line_charts() {
    let mut surface = RecordingSurface::new(320, 180);
    let err = draw(
        ChartKind::Area,
        &mut surface,
        &sample_for(ChartKind::Line),
        &ChartOptions::new(),
    )
    .expect_err("band on area");
    assert!(matches!(err, ChartError::ShapeMismatch { kind: "area chart", .. }));
}

#[test]
fn unset_size_falls_back_to_the_surface() {
    let mut surface = RecordingSurface::new(640, 200);
    draw(
        ChartKind::Line,
        &mut surface,
        &ChartData::series(vec![1.0, 2.0]),
        &ChartOptions::new().with_grid(false),
    )
    .expect("draw");
    assert_eq!(
        surface.commands()[0],
        DrawCommand::Clear {
            width: 640.0,
            height: 200.0
        }
    );
    let DrawCommand::StrokePath { points, .. } = &surface.commands()[1] else {
        panic!("expected stroke");
    };
    assert_eq!(points[1].x, 612.0);
}

#[test]
fn invalid_options_fail_before_drawing() {
    let mut surface = RecordingSurface::new(100, 100);
    let err = draw(
        ChartKind::Bar,
        &mut surface,
        &ChartData::series(vec![1.0]),
        &ChartOptions::new().with_padding(60.0),
    )
    .expect_err("padding too large");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    let err = draw(
        ChartKind::Bar,
        &mut surface,
        &ChartData::series(vec![1.0]),
        &ChartOptions::new().with_value_range(10.0, 1.0),
    )
    .expect_err("inverted range");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_empty());
}

#[test]
fn command_log_serializes_to_tagged_json() {
    let mut surface = RecordingSurface::new(120, 120);
    draw(
        ChartKind::Doughnut,
        &mut surface,
        &ChartData::series(vec![1.0, 3.0]),
        &ChartOptions::new(),
    )
    .expect("draw");

    let json = surface.to_json_pretty().expect("json");
    let parsed: Vec<DrawCommand> = serde_json::from_str(&json).expect("parse back");
    assert_eq!(parsed.len(), surface.commands().len());
    assert_eq!(
        parsed[0],
        DrawCommand::Clear {
            width: 120.0,
            height: 120.0
        }
    );
    assert!(json.contains("\"op\": \"fill_arc_segment\""));
}
