//! Strip-packing treemap layout.
//!
//! Cells are packed left-to-right in fixed-height rows and wrap once the
//! running x passes 95% of the plot width. This is a single-pass heuristic,
//! not a squarified treemap: cell aspect ratios are not optimized, and inputs
//! needing more than `TREEMAP_ROWS` rows overflow below the plot area.

use serde::{Deserialize, Serialize};

use crate::core::validation::proportional_total;
use crate::core::{PixelPoint, PixelRect, PlotGeometry, series_max};
use crate::error::{ChartError, ChartResult};

/// Number of rows the plot height is divided into.
pub const TREEMAP_ROWS: usize = 3;
/// Fraction of the plot width after which the layout wraps.
pub const TREEMAP_WRAP_RATIO: f64 = 0.95;
/// Gap subtracted from each cell's width and height.
pub const TREEMAP_CELL_GAP: f64 = 4.0;
pub const TREEMAP_ALPHA_BASE: f64 = 0.25;
pub const TREEMAP_ALPHA_RANGE: f64 = 0.6;
/// Label offset from the cell's top-left corner.
pub const TREEMAP_LABEL_OFFSET: PixelPoint = PixelPoint::new(6.0, 16.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreemapCell {
    pub index: usize,
    pub value: f64,
    pub row: usize,
    pub rect: PixelRect,
    /// `0.25 + 0.6 * value / max(values)`.
    pub alpha: f64,
    pub label_anchor: PixelPoint,
}

/// Lays out `values` as proportional strips.
pub fn project_treemap(values: &[f64], plot: PlotGeometry) -> ChartResult<Vec<TreemapCell>> {
    let total = proportional_total("treemap", values)?;
    let max = series_max(values)
        .filter(|max| *max > 0.0)
        .ok_or(ChartError::ZeroTotal { kind: "treemap" })?;

    let row_height = plot.inner_height / TREEMAP_ROWS as f64;
    let wrap_at = plot.left() + plot.inner_width * TREEMAP_WRAP_RATIO;

    let mut cells = Vec::with_capacity(values.len());
    let mut x = plot.left();
    let mut row = 0usize;
    for (index, value) in values.iter().copied().enumerate() {
        let y = plot.top() + row as f64 * row_height;
        let cell_width = value / total * plot.inner_width;
        cells.push(TreemapCell {
            index,
            value,
            row,
            rect: PixelRect::new(
                x,
                y,
                (cell_width - TREEMAP_CELL_GAP).max(0.0),
                (row_height - TREEMAP_CELL_GAP).max(0.0),
            ),
            alpha: TREEMAP_ALPHA_BASE + TREEMAP_ALPHA_RANGE * (value / max),
            label_anchor: PixelPoint::new(x + TREEMAP_LABEL_OFFSET.x, y + TREEMAP_LABEL_OFFSET.y),
        });

        x += cell_width;
        if x > wrap_at {
            x = plot.left();
            row += 1;
        }
    }

    Ok(cells)
}
