use crate::core::project_area_geometry;
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::ResolvedChartOptions;
use super::grid_renderer::GridLayout;
use super::render_pass::begin_pass;

/// Draws a filled area under a series, then its outline on top.
///
/// Serves both the full area chart and the KPI-card sparkline; the two differ
/// only in their resolved defaults (padding, grid, fill, stroke width).
pub fn render_area<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series: &[f64],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    let range = options.value_range(series)?;
    let geometry = project_area_geometry(options.kind.name(), series, range, plot)?;

    let grid = if options.show_grid {
        GridLayout::DEFAULT_HORIZONTAL.lines(plot)
    } else {
        Vec::new()
    };
    begin_pass(surface, options, &grid)?;

    surface.fill_path(&geometry.fill_polygon, options.fill_color)?;
    surface.stroke_path(
        &geometry.line_points,
        options.stroke_color,
        options.stroke_width,
        &options.dash_pattern,
    )
}
