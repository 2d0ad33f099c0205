use crate::core::project_heatmap;
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Font, palette};

use super::ResolvedChartOptions;
use super::grid_renderer::{GridLayout, draw_grid_lines};
use super::render_pass::begin_pass;

pub const HEATMAP_LABEL_FONT_PX: f64 = 10.0;
pub const HEATMAP_LABEL_ALPHA: f64 = 0.7;

/// Draws an `R x C` matrix as tinted cells with percentage labels.
///
/// Intensity is scaled over the configured value range (`0..=100` unless
/// overridden). The cell boundary grid is stroked last, over the cells.
pub fn render_heatmap<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    matrix: &[Vec<f64>],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    let values: Vec<f64> = matrix.iter().flatten().copied().collect();
    let range = options.value_range(&values)?;
    let geometry = project_heatmap(matrix, range, plot)?;
    let font = Font::system_ui(HEATMAP_LABEL_FONT_PX);

    begin_pass(surface, options, &[])?;
    for cell in &geometry.cells {
        surface.fill_rect(
            cell.rect.x,
            cell.rect.y,
            cell.rect.width,
            cell.rect.height,
            options.fill_color.with_alpha(cell.alpha),
        )?;
        surface.draw_text(
            &cell.label,
            cell.label_anchor.x,
            cell.label_anchor.y,
            &font,
            palette::LABEL_SLATE,
            HEATMAP_LABEL_ALPHA,
        )?;
    }

    if options.show_grid {
        let layout = GridLayout::Cells {
            rows: geometry.rows,
            cols: geometry.cols,
        };
        draw_grid_lines(surface, &layout.lines(plot))?;
    }
    Ok(())
}
