use criterion::{Criterion, criterion_group, criterion_main};
use dashboard_charts::api::{ChartData, ChartKind, ChartOptions, draw};
use dashboard_charts::core::{AxisRange, PlotGeometry, project_heatmap, project_line_geometry};
use dashboard_charts::render::RecordingSurface;
use dashboard_charts::synthetic::{synthetic_band, synthetic_series, utilization_grid};
use std::hint::black_box;

fn bench_line_projection_10k(c: &mut Criterion) {
    let series = synthetic_series(10_000, 100.0, 20.0, 0.1, 1.0);
    let band = synthetic_band(&series, 0.1);
    let plot = PlotGeometry::new(1920.0, 1080.0, 28.0).expect("plot");
    let range = AxisRange::derive("line chart", &series, Some(0.0), None).expect("range");

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line_geometry(
                black_box(&series),
                black_box(Some(band.as_slice())),
                black_box(range),
                black_box(plot),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_heatmap_projection_100x100(c: &mut Criterion) {
    let matrix = utilization_grid(100, 100);
    let plot = PlotGeometry::new(1600.0, 900.0, 28.0).expect("plot");
    let range = AxisRange::new(0.0, 100.0).expect("range");

    c.bench_function("heatmap_projection_100x100", |b| {
        b.iter(|| {
            let _ = project_heatmap(black_box(&matrix), black_box(range), black_box(plot))
                .expect("projection should succeed");
        })
    });
}

fn bench_dashboard_draw_recording(c: &mut Criterion) {
    let charts = vec![
        (
            ChartKind::Line,
            ChartData::series(synthetic_series(365, 100.0, 18.0, 0.5, 3.0)),
        ),
        (
            ChartKind::Bar,
            ChartData::series(synthetic_series(12, 40.0, 20.0, 0.0, 5.0)),
        ),
        (
            ChartKind::Doughnut,
            ChartData::series(vec![25.0, 30.0, 20.0, 15.0, 10.0]),
        ),
        (ChartKind::Heatmap, ChartData::Matrix(utilization_grid(3, 52))),
    ];
    let options = ChartOptions::new();

    c.bench_function("dashboard_draw_recording", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new(640, 320);
            for (kind, data) in &charts {
                draw(*kind, &mut surface, black_box(data), &options).expect("draw");
            }
            black_box(surface.commands().len())
        })
    });
}

criterion_group!(
    benches,
    bench_line_projection_10k,
    bench_heatmap_projection_100x100,
    bench_dashboard_draw_recording
);
criterion_main!(benches);
