use crate::core::{BandBound, project_line_geometry};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::ResolvedChartOptions;
use super::grid_renderer::GridLayout;
use super::render_pass::begin_pass;

/// Draws a line series, optionally over a band envelope.
///
/// With `clear_surface_first == false` the line is layered over whatever the
/// surface already shows and no grid is drawn, which is how two series share
/// one canvas. The band is filled before the stroke so the line sits on top.
pub fn render_line<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series: &[f64],
    band: Option<&[BandBound]>,
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    let range = options.value_range(series)?;
    let geometry = project_line_geometry(series, band, range, plot)?;

    let grid = if options.show_grid && options.clear_surface_first {
        GridLayout::DEFAULT_HORIZONTAL.lines(plot)
    } else {
        Vec::new()
    };
    begin_pass(surface, options, &grid)?;

    if let Some(polygon) = &geometry.band_polygon {
        surface.fill_path(polygon, options.band_fill_color)?;
    }
    surface.stroke_path(
        &geometry.points,
        options.stroke_color,
        options.stroke_width,
        &options.dash_pattern,
    )
}
