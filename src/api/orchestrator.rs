use tracing::{debug, error, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::{
    ChartData, ChartKind, ChartOptions, ResolvedChartOptions, render_area, render_bar, render_doughnut,
    render_grouped_bar, render_heatmap, render_line, render_scatter, render_treemap,
};

/// Resolves `options` for `kind`, checks the data shape and draws onto
/// `surface`.
///
/// Nothing is drawn when resolution, shape checking or geometry projection
/// fails.
pub fn draw<S: DrawingSurface + ?Sized>(
    kind: ChartKind,
    surface: &mut S,
    data: &ChartData,
    options: &ChartOptions,
) -> ChartResult<()> {
    let resolved = options.resolve(kind, surface.size())?;
    if let Err(err) = kind.check_shape(data) {
        warn!(kind = kind.name(), shape = data.shape_name(), "rejected chart input");
        return Err(err);
    }
    debug!(
        kind = kind.name(),
        shape = data.shape_name(),
        samples = data.sample_count(),
        width = resolved.width,
        height = resolved.height,
        "dispatching chart draw"
    );

    let result = dispatch(kind, surface, data, &resolved);
    match &result {
        Err(err) if err.is_data_error() => {
            warn!(kind = kind.name(), error = %err, "chart data rejected");
        }
        Err(err) => error!(kind = kind.name(), error = %err, "chart draw failed"),
        Ok(()) => {}
    }
    result
}

fn dispatch<S: DrawingSurface + ?Sized>(
    kind: ChartKind,
    surface: &mut S,
    data: &ChartData,
    resolved: &ResolvedChartOptions,
) -> ChartResult<()> {
    match (kind, data) {
        (ChartKind::Line, ChartData::Series(series)) => {
            render_line(surface, series, None, resolved)
        }
        (ChartKind::Line, ChartData::BandedSeries { series, band }) => {
            render_line(surface, series, Some(band.as_slice()), resolved)
        }
        (ChartKind::Area | ChartKind::Sparkline, ChartData::Series(series)) => {
            render_area(surface, series, resolved)
        }
        (ChartKind::Bar, ChartData::Series(values)) => render_bar(surface, values, resolved),
        (ChartKind::GroupedBar, ChartData::MultiSeries(series_list)) => {
            render_grouped_bar(surface, series_list, resolved)
        }
        (ChartKind::Doughnut, ChartData::Series(values)) => {
            render_doughnut(surface, values, resolved)
        }
        (ChartKind::Scatter, ChartData::Points(points)) => {
            render_scatter(surface, points, resolved)
        }
        (ChartKind::Heatmap, ChartData::Matrix(matrix)) => {
            render_heatmap(surface, matrix, resolved)
        }
        (ChartKind::Treemap, ChartData::Series(values)) => {
            render_treemap(surface, values, resolved)
        }
        (kind, data) => Err(ChartError::ShapeMismatch {
            kind: kind.name(),
            expected: kind.expected_shape(),
            actual: data.shape_name().to_owned(),
        }),
    }
}
