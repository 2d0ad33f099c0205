use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PlotGeometry};

/// Default number of horizontal reference lines (0%, 25%, 50%, 75%, 100%).
pub const DEFAULT_GRID_LINES: usize = 5;

/// One straight reference line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

impl GridLine {
    #[must_use]
    pub const fn new(from: PixelPoint, to: PixelPoint) -> Self {
        Self { from, to }
    }
}

fn even_offsets(count: usize, extent: f64) -> impl Iterator<Item = f64> {
    let divisions = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |i| i as f64 * (extent / divisions))
}

/// `count` horizontal lines evenly spaced from the plot top to its baseline.
#[must_use]
pub fn horizontal_grid_lines(plot: PlotGeometry, count: usize) -> Vec<GridLine> {
    even_offsets(count, plot.inner_height)
        .map(|offset| {
            let y = plot.top() + offset;
            GridLine::new(PixelPoint::new(plot.left(), y), PixelPoint::new(plot.right(), y))
        })
        .collect()
}

/// `count` vertical lines evenly spaced from the plot left edge to its right edge.
#[must_use]
pub fn vertical_grid_lines(plot: PlotGeometry, count: usize) -> Vec<GridLine> {
    even_offsets(count, plot.inner_width)
        .map(|offset| {
            let x = plot.left() + offset;
            GridLine::new(PixelPoint::new(x, plot.top()), PixelPoint::new(x, plot.bottom()))
        })
        .collect()
}

/// Cell boundaries for a `rows x cols` grid: `rows + 1` horizontal lines
/// followed by `cols + 1` vertical lines.
#[must_use]
pub fn cell_grid_lines(plot: PlotGeometry, rows: usize, cols: usize) -> Vec<GridLine> {
    let mut lines = horizontal_grid_lines(plot, rows + 1);
    lines.extend(vertical_grid_lines(plot, cols + 1));
    lines
}
