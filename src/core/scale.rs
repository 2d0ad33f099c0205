use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Headroom multiplier applied to the data maximum when no explicit value
/// maximum is supplied, so peaks stay below the plot ceiling.
pub const VALUE_HEADROOM: f64 = 1.2;

/// Value-axis range `(min, max)`.
///
/// `max == min` is a legal degenerate range: projections clamp the scale
/// factor to zero instead of dividing by it. A derived range may also come out
/// inverted (an all-negative series under the default zero minimum); the
/// pixel mappings stay well-defined for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Explicitly configured range. Rejects `max < min`.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        let range = Self::from_bounds(min, max)?;
        if max < min {
            return Err(ChartError::InvalidData(format!(
                "value range is inverted: min={min}, max={max}"
            )));
        }
        Ok(range)
    }

    fn from_bounds(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "value range must be finite".to_owned(),
            ));
        }
        if !(max - min).is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value range span overflows: min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Derives `[supplied_min ?? 0, supplied_max ?? max(values) * 1.2]`.
    ///
    /// Deriving a maximum from no values is an `InvalidSeriesLength` for `kind`.
    /// A derived maximum below the minimum is kept as an inverted range.
    pub fn derive(
        kind: &'static str,
        values: &[f64],
        supplied_min: Option<f64>,
        supplied_max: Option<f64>,
    ) -> ChartResult<Self> {
        let min = supplied_min.unwrap_or(0.0);
        match supplied_max {
            Some(max) => Self::new(min, max),
            None => {
                let data_max = series_max(values).ok_or(ChartError::InvalidSeriesLength {
                    kind,
                    required: 1,
                    actual: 0,
                })?;
                Self::from_bounds(min, data_max * VALUE_HEADROOM)
            }
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    /// Position of `value` inside the range as a `0..=1` fraction when in range.
    ///
    /// Degenerate ranges map everything to `0`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.min) / self.span()
    }
}

/// Largest finite-ordered value of `values`.
#[must_use]
pub fn series_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}

/// `(min, max)` of `values`, or `None` when empty.
#[must_use]
pub fn series_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut iter = values.into_iter().map(OrderedFloat);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    Some((min.into_inner(), max.into_inner()))
}

/// Maps a sample index onto `[padding, padding + inner_width]`.
///
/// A horizontal index scale needs at least two samples; a single sample has
/// no defined slope and is rejected with `InvalidSeriesLength`.
pub fn to_pixel_x(
    index: usize,
    series_len: usize,
    inner_width: f64,
    padding: f64,
) -> ChartResult<f64> {
    if series_len < 2 {
        return Err(ChartError::InvalidSeriesLength {
            kind: "index scale",
            required: 2,
            actual: series_len,
        });
    }
    if index >= series_len {
        return Err(ChartError::InvalidData(format!(
            "index {index} is outside a series of length {series_len}"
        )));
    }

    let fraction = index as f64 / (series_len - 1) as f64;
    Ok(padding + fraction * inner_width)
}

/// Maps a value onto the inverted pixel y axis.
///
/// Higher values land on smaller y. When `value_max == value_min` the scale
/// factor is clamped to zero and every value sits on the baseline.
#[must_use]
pub fn to_pixel_y(
    value: f64,
    value_min: f64,
    value_max: f64,
    inner_height: f64,
    padding: f64,
) -> f64 {
    let span = value_max - value_min;
    let factor = if span == 0.0 {
        0.0
    } else {
        inner_height / span
    };
    padding + inner_height - (value - value_min) * factor
}

/// Maps a value onto the horizontal pixel axis starting at `padding`.
///
/// Used by horizontal bars. Degenerate ranges collapse onto the left edge.
#[must_use]
pub fn to_pixel_value_x(
    value: f64,
    value_min: f64,
    value_max: f64,
    inner_width: f64,
    padding: f64,
) -> f64 {
    let span = value_max - value_min;
    let factor = if span == 0.0 { 0.0 } else { inner_width / span };
    padding + (value - value_min) * factor
}

/// Scatter x mapping. A degenerate range centers the point horizontally.
#[must_use]
pub fn to_pixel_x_centered(
    value: f64,
    value_min: f64,
    value_max: f64,
    inner_width: f64,
    padding: f64,
) -> f64 {
    let span = value_max - value_min;
    if span == 0.0 {
        return padding + inner_width / 2.0;
    }
    padding + (value - value_min) / span * inner_width
}

/// Scatter y mapping. A degenerate range centers the point vertically.
#[must_use]
pub fn to_pixel_y_centered(
    value: f64,
    value_min: f64,
    value_max: f64,
    inner_height: f64,
    padding: f64,
) -> f64 {
    let span = value_max - value_min;
    if span == 0.0 {
        return padding + inner_height / 2.0;
    }
    padding + inner_height - (value - value_min) / span * inner_height
}
