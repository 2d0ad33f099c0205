use crate::core::validation::{ensure_finite, ensure_min_len};
use crate::core::{AxisRange, PixelRect, PlotGeometry, to_pixel_y};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Offset of each bar inside its sub-slot, in sub-slot widths.
pub const GROUPED_BAR_OFFSET: f64 = 0.2;
/// Fraction of a sub-slot covered by the bar.
pub const GROUPED_BAR_WIDTH_RATIO: f64 = 0.8;

/// One `(series, category)` bar in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBarGeometry {
    pub series_index: usize,
    pub category_index: usize,
    pub value: f64,
    pub rect: PixelRect,
}

/// Checks that every series is non-empty, finite and of one shared length.
///
/// Returns the shared category count.
pub fn validate_multi_series(series_list: &[Vec<f64>]) -> ChartResult<usize> {
    ensure_min_len("grouped bar chart", series_list.len(), 1)?;
    let categories = series_list[0].len();
    ensure_min_len("grouped bar chart", categories, 1)?;

    for (series_index, series) in series_list.iter().enumerate() {
        if series.len() != categories {
            return Err(ChartError::ShapeMismatch {
                kind: "grouped bar chart",
                expected: "series of equal length",
                actual: format!(
                    "series {series_index} has {} values, series 0 has {categories}",
                    series.len()
                ),
            });
        }
        ensure_finite("grouped bar chart", series)?;
    }
    Ok(categories)
}

/// Projects `k` aligned series as grouped bars.
///
/// Each category slot is split into `k + 1` sub-slots; the spare sub-slot
/// separates neighbouring groups. Bars are emitted series-major.
pub fn project_grouped_bars(
    series_list: &[Vec<f64>],
    range: AxisRange,
    plot: PlotGeometry,
) -> ChartResult<Vec<GroupedBarGeometry>> {
    let categories = validate_multi_series(series_list)?;

    let group_width = plot.inner_width / categories as f64;
    let sub_slot = group_width / (series_list.len() + 1) as f64;
    let bar_width = sub_slot * GROUPED_BAR_WIDTH_RATIO;

    let mut bars = Vec::with_capacity(series_list.len() * categories);
    for (series_index, series) in series_list.iter().enumerate() {
        for (category_index, value) in series.iter().copied().enumerate() {
            let x = plot.left()
                + category_index as f64 * group_width
                + (series_index as f64 + GROUPED_BAR_OFFSET) * sub_slot;
            let y = to_pixel_y(
                value,
                range.min,
                range.max,
                plot.inner_height,
                plot.padding,
            );
            bars.push(GroupedBarGeometry {
                series_index,
                category_index,
                value,
                rect: PixelRect::from_edges(x, y, x + bar_width, plot.bottom()),
            });
        }
    }

    Ok(bars)
}
