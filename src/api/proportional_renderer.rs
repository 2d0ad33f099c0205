use crate::core::{project_doughnut, project_treemap};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Font, palette};

use super::ResolvedChartOptions;
use super::render_pass::begin_pass;

/// Font size of treemap cell labels.
pub const TREEMAP_LABEL_FONT_PX: f64 = 12.0;

/// Draws one annulus wedge per value, clockwise from 12 o'clock.
///
/// Wedge `i` uses `palette[i % len]`. Empty or zero-sum input is rejected
/// with `ZeroTotal` before anything is drawn.
pub fn render_doughnut<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    values: &[f64],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let geometry = project_doughnut(values, options.width, options.height)?;

    begin_pass(surface, options, &[])?;
    for wedge in &geometry.wedges {
        surface.fill_arc_segment(
            geometry.center,
            geometry.inner_radius,
            geometry.outer_radius,
            wedge.start_angle,
            wedge.end_angle,
            options.palette_color(wedge.index),
        )?;
    }
    Ok(())
}

/// Draws a strip-packed treemap with intensity scaled by `value / max`.
///
/// Cell labels come from the `labels` option, falling back to `Client <n>`.
pub fn render_treemap<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    values: &[f64],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    let cells = project_treemap(values, plot)?;
    let font = Font::system_ui(TREEMAP_LABEL_FONT_PX);

    begin_pass(surface, options, &[])?;
    for cell in &cells {
        surface.fill_rect(
            cell.rect.x,
            cell.rect.y,
            cell.rect.width,
            cell.rect.height,
            options.fill_color.with_alpha(cell.alpha),
        )?;
        let label = options.label(cell.index);
        if label.is_empty() {
            continue;
        }
        surface.draw_text(
            &label,
            cell.label_anchor.x,
            cell.label_anchor.y,
            &font,
            palette::LABEL_SLATE,
            1.0,
        )?;
    }
    Ok(())
}
