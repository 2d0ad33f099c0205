use tracing::trace;

use crate::core::GridLine;
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::ResolvedChartOptions;
use super::grid_renderer::draw_grid_lines;

/// Opens a draw pass: clears the surface when requested, then strokes the
/// grid lines the caller decided to show.
///
/// Called only after geometry projection succeeded, so a rejected input never
/// touches the surface.
pub(super) fn begin_pass<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    options: &ResolvedChartOptions,
    grid: &[GridLine],
) -> ChartResult<()> {
    trace!(
        kind = options.kind.name(),
        clear = options.clear_surface_first,
        grid_lines = grid.len(),
        "begin draw pass"
    );
    if options.clear_surface_first {
        surface.clear(options.width, options.height)?;
    }
    draw_grid_lines(surface, grid)
}
