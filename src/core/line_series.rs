use serde::{Deserialize, Serialize};

use crate::core::validation::{ensure_finite, ensure_finite_pixels, ensure_min_len};
use crate::core::{AxisRange, BandBound, PixelPoint, PlotGeometry, to_pixel_x, to_pixel_y};
use crate::error::{ChartError, ChartResult};

/// Deterministic geometry for a line series with an optional band envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub points: Vec<PixelPoint>,
    /// Lower bounds left-to-right followed by upper bounds right-to-left.
    pub band_polygon: Option<Vec<PixelPoint>>,
}

/// Projects `series` onto the plot area as a polyline.
///
/// Every sample maps to `(to_pixel_x(i), to_pixel_y(value_i))`. Requires at
/// least two finite samples.
pub fn project_polyline(
    kind: &'static str,
    series: &[f64],
    range: AxisRange,
    plot: PlotGeometry,
) -> ChartResult<Vec<PixelPoint>> {
    ensure_min_len(kind, series.len(), 2)?;
    ensure_finite(kind, series)?;

    let n = series.len();
    let mut points = Vec::with_capacity(n);
    for (index, value) in series.iter().enumerate() {
        let x = to_pixel_x(index, n, plot.inner_width, plot.padding)?;
        let y = to_pixel_y(
            *value,
            range.min,
            range.max,
            plot.inner_height,
            plot.padding,
        );
        points.push(PixelPoint::new(x, y));
    }
    ensure_finite_pixels(kind, &points)?;
    Ok(points)
}

/// Projects a line series and, when supplied, its band envelope.
///
/// The band must be parallel to the series (same length) and each bound must
/// satisfy `lower <= upper`.
pub fn project_line_geometry(
    series: &[f64],
    band: Option<&[BandBound]>,
    range: AxisRange,
    plot: PlotGeometry,
) -> ChartResult<LineGeometry> {
    let points = project_polyline("line chart", series, range, plot)?;

    let band_polygon = match band {
        Some(bounds) => Some(project_band_polygon(bounds, series.len(), range, plot)?),
        None => None,
    };

    Ok(LineGeometry {
        points,
        band_polygon,
    })
}

fn project_band_polygon(
    bounds: &[BandBound],
    series_len: usize,
    range: AxisRange,
    plot: PlotGeometry,
) -> ChartResult<Vec<PixelPoint>> {
    if bounds.len() != series_len {
        return Err(ChartError::ShapeMismatch {
            kind: "line chart",
            expected: "band parallel to the series",
            actual: format!("band of {} bounds for {series_len} samples", bounds.len()),
        });
    }
    for bound in bounds {
        bound.validate()?;
    }

    let n = bounds.len();
    let y_of =
        |value: f64| to_pixel_y(value, range.min, range.max, plot.inner_height, plot.padding);

    let mut polygon = Vec::with_capacity(n * 2);
    for (index, bound) in bounds.iter().enumerate() {
        let x = to_pixel_x(index, n, plot.inner_width, plot.padding)?;
        polygon.push(PixelPoint::new(x, y_of(bound.lower)));
    }
    for (index, bound) in bounds.iter().enumerate().rev() {
        let x = to_pixel_x(index, n, plot.inner_width, plot.padding)?;
        polygon.push(PixelPoint::new(x, y_of(bound.upper)));
    }
    ensure_finite_pixels("line chart band", &polygon)?;
    Ok(polygon)
}
