use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::validation::{ensure_finite, ensure_min_len};
use crate::core::{AxisRange, PixelPoint, PixelRect, PlotGeometry};
use crate::error::{ChartError, ChartResult};

/// Fill alpha of a cell at the bottom of the intensity range.
pub const HEATMAP_ALPHA_LOW: f64 = 0.08;
/// Alpha added between the bottom and the top of the intensity range.
pub const HEATMAP_ALPHA_RANGE: f64 = 0.6;
/// Pixel gap left between neighbouring cells.
pub const HEATMAP_CELL_GAP: f64 = 1.0;
/// Label offset from the cell's top-left corner.
pub const HEATMAP_LABEL_OFFSET: PixelPoint = PixelPoint::new(4.0, 12.0);

/// One projected matrix cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub row: usize,
    pub col: usize,
    pub value: f64,
    pub rect: PixelRect,
    /// Always within `[HEATMAP_ALPHA_LOW, HEATMAP_ALPHA_LOW + HEATMAP_ALPHA_RANGE]`.
    pub alpha: f64,
    pub label: String,
    pub label_anchor: PixelPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapGeometry {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Row-major.
    pub cells: Vec<HeatmapCell>,
}

/// Checks that `matrix` is non-empty, rectangular and finite.
///
/// Returns `(rows, cols)`.
pub fn validate_matrix(matrix: &[Vec<f64>]) -> ChartResult<(usize, usize)> {
    ensure_min_len("heatmap", matrix.len(), 1)?;
    let cols = matrix[0].len();
    ensure_min_len("heatmap", cols, 1)?;
    for (row_index, row) in matrix.iter().enumerate() {
        if row.len() != cols {
            return Err(ChartError::ShapeMismatch {
                kind: "heatmap",
                expected: "rectangular matrix",
                actual: format!("row {row_index} has {} cells, row 0 has {cols}", row.len()),
            });
        }
        ensure_finite("heatmap", row)?;
    }
    Ok((matrix.len(), cols))
}

/// Intensity alpha for `value` inside `range`, clamped to the alpha bounds.
///
/// A degenerate range maps every value to the low bound.
#[must_use]
pub fn cell_alpha(value: f64, range: AxisRange) -> f64 {
    let t = range.normalize(value).clamp(0.0, 1.0);
    HEATMAP_ALPHA_LOW + t * HEATMAP_ALPHA_RANGE
}

/// Percentage label with half-up rounding (`2.5 -> 3`, `-2.5 -> -2`).
#[must_use]
pub fn percent_label(value: f64) -> String {
    let rounded = (value + 0.5).floor() as i64;
    format!("{rounded}%")
}

/// Projects an `R x C` matrix into cells over the full plot area.
pub fn project_heatmap(
    matrix: &[Vec<f64>],
    range: AxisRange,
    plot: PlotGeometry,
) -> ChartResult<HeatmapGeometry> {
    let (rows, cols) = validate_matrix(matrix)?;
    let cell_width = plot.inner_width / cols as f64;
    let cell_height = plot.inner_height / rows as f64;

    let project_row = |(row, values): (usize, &Vec<f64>)| -> Vec<HeatmapCell> {
        values
            .iter()
            .copied()
            .enumerate()
            .map(|(col, value)| {
                let x = plot.left() + col as f64 * cell_width;
                let y = plot.top() + row as f64 * cell_height;
                HeatmapCell {
                    row,
                    col,
                    value,
                    rect: PixelRect::new(
                        x,
                        y,
                        (cell_width - HEATMAP_CELL_GAP).max(0.0),
                        (cell_height - HEATMAP_CELL_GAP).max(0.0),
                    ),
                    alpha: cell_alpha(value, range),
                    label: percent_label(value),
                    label_anchor: PixelPoint::new(
                        x + HEATMAP_LABEL_OFFSET.x,
                        y + HEATMAP_LABEL_OFFSET.y,
                    ),
                }
            })
            .collect()
    };

    // Row order is preserved either way; only the per-row work is parallel.
    #[cfg(feature = "parallel-projection")]
    let cells: Vec<HeatmapCell> = matrix
        .par_iter()
        .enumerate()
        .map(project_row)
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let cells: Vec<HeatmapCell> = matrix.iter().enumerate().flat_map(project_row).collect();

    Ok(HeatmapGeometry {
        rows,
        cols,
        cell_width,
        cell_height,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::{HEATMAP_ALPHA_LOW, cell_alpha, percent_label};
    use crate::core::AxisRange;

    #[test]
    fn labels_round_half_up() {
        assert_eq!(percent_label(72.4), "72%");
        assert_eq!(percent_label(72.5), "73%");
        assert_eq!(percent_label(-2.5), "-2%");
    }

    #[test]
    fn alpha_is_clamped_outside_range() {
        let range = AxisRange::new(0.0, 100.0).expect("range");
        assert!((cell_alpha(150.0, range) - 0.68).abs() <= 1e-12);
        assert_eq!(cell_alpha(-20.0, range), HEATMAP_ALPHA_LOW);
    }

    #[test]
    fn degenerate_range_uses_low_alpha() {
        let range = AxisRange::new(50.0, 50.0).expect("range");
        assert_eq!(cell_alpha(50.0, range), HEATMAP_ALPHA_LOW);
    }
}
