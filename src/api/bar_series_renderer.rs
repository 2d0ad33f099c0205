use crate::core::{BarOrientation, project_bars, project_grouped_bars, validate_multi_series};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::ResolvedChartOptions;
use super::grid_renderer::GridLayout;
use super::render_pass::begin_pass;

/// Draws one bar per category.
///
/// Bar `i` is filled with `palette[i % len]`; with no palette configured the
/// palette is the single fill color. `horizontal_orientation` swaps the
/// category and value axes and uses a vertical reference grid.
pub fn render_bar<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    values: &[f64],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    let range = options.value_range(values)?;
    let (orientation, layout) = if options.horizontal_orientation {
        (BarOrientation::Horizontal, GridLayout::DEFAULT_VERTICAL)
    } else {
        (BarOrientation::Vertical, GridLayout::DEFAULT_HORIZONTAL)
    };
    let bars = project_bars(values, range, plot, orientation)?;

    let grid = if options.show_grid {
        layout.lines(plot)
    } else {
        Vec::new()
    };
    begin_pass(surface, options, &grid)?;

    for bar in &bars {
        surface.fill_rect(
            bar.rect.x,
            bar.rect.y,
            bar.rect.width,
            bar.rect.height,
            options.palette_color(bar.category_index),
        )?;
    }
    Ok(())
}

/// Draws `k` aligned series as grouped bars, colored by series index.
///
/// The value maximum, when not configured, is derived over every series.
pub fn render_grouped_bar<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series_list: &[Vec<f64>],
    options: &ResolvedChartOptions,
) -> ChartResult<()> {
    let plot = options.plot_geometry()?;
    validate_multi_series(series_list)?;
    let flattened: Vec<f64> = series_list.iter().flatten().copied().collect();
    let range = options.value_range(&flattened)?;
    let bars = project_grouped_bars(series_list, range, plot)?;

    let grid = if options.show_grid {
        GridLayout::DEFAULT_HORIZONTAL.lines(plot)
    } else {
        Vec::new()
    };
    begin_pass(surface, options, &grid)?;

    for bar in &bars {
        surface.fill_rect(
            bar.rect.x,
            bar.rect.y,
            bar.rect.width,
            bar.rect.height,
            options.palette_color(bar.series_index),
        )?;
    }
    Ok(())
}
