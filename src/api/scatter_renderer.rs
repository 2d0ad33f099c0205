use std::f64::consts::TAU;

use crate::core::{ScatterPoint, project_scatter};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::ResolvedChartOptions;
use super::grid_renderer::GridLayout;
use super::render_pass::begin_pass;

/// Draws one filled disc per point, with both axes fitted to the data extent.
pub fn render_scatter<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    points: &[ScatterPoint],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    let markers = project_scatter(points, plot)?;

    let grid = if options.show_grid {
        GridLayout::DEFAULT_HORIZONTAL.lines(plot)
    } else {
        Vec::new()
    };
    begin_pass(surface, options, &grid)?;

    for marker in &markers {
        surface.fill_arc_segment(
            marker.center,
            0.0,
            marker.radius,
            0.0,
            TAU,
            options.fill_color,
        )?;
    }
    Ok(())
}
