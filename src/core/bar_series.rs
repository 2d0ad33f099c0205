use crate::core::validation::{ensure_finite, ensure_min_len};
use crate::core::{AxisRange, PixelRect, PlotGeometry, to_pixel_value_x, to_pixel_y};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Fraction of each category slot covered by its bar.
pub const BAR_WIDTH_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarOrientation {
    /// Categories left-to-right, values grow upward from the baseline.
    Vertical,
    /// Categories top-to-bottom, values grow rightward from the left edge.
    Horizontal,
}

/// One category bar in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub category_index: usize,
    pub value: f64,
    pub rect: PixelRect,
}

/// Projects a single-series bar chart.
///
/// Each category owns a slot of `inner_extent / n`; the bar covers 70% of the
/// slot and is centered in it. Bars span from the value's pixel position to
/// the baseline (vertical) or the left edge (horizontal).
pub fn project_bars(
    values: &[f64],
    range: AxisRange,
    plot: PlotGeometry,
    orientation: BarOrientation,
) -> ChartResult<Vec<BarGeometry>> {
    ensure_min_len("bar chart", values.len(), 1)?;
    ensure_finite("bar chart", values)?;

    let n = values.len() as f64;
    let mut bars = Vec::with_capacity(values.len());
    for (category_index, value) in values.iter().copied().enumerate() {
        let rect = match orientation {
            BarOrientation::Vertical => {
                let slot = plot.inner_width / n;
                let bar_width = slot * BAR_WIDTH_RATIO;
                let x = plot.left() + category_index as f64 * slot + (slot - bar_width) / 2.0;
                let y = to_pixel_y(
                    value,
                    range.min,
                    range.max,
                    plot.inner_height,
                    plot.padding,
                );
                PixelRect::from_edges(x, y, x + bar_width, plot.bottom())
            }
            BarOrientation::Horizontal => {
                let slot = plot.inner_height / n;
                let bar_height = slot * BAR_WIDTH_RATIO;
                let y = plot.top() + category_index as f64 * slot + (slot - bar_height) / 2.0;
                let x_end = to_pixel_value_x(
                    value,
                    range.min,
                    range.max,
                    plot.inner_width,
                    plot.padding,
                );
                PixelRect::from_edges(plot.left(), y, x_end, y + bar_height)
            }
        };
        bars.push(BarGeometry {
            category_index,
            value,
            rect,
        });
    }

    Ok(bars)
}
