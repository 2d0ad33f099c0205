use serde::{Deserialize, Serialize};

use crate::core::validation::ensure_min_len;
use crate::core::{
    PixelPoint, PlotGeometry, ScatterPoint, series_extent, to_pixel_x_centered,
    to_pixel_y_centered,
};
use crate::error::{ChartError, ChartResult};

/// Marker radius in pixels.
pub const SCATTER_MARKER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterMarker {
    pub index: usize,
    pub center: PixelPoint,
    pub radius: f64,
}

/// Projects scatter points with both axis ranges derived from the data.
///
/// Unlike the series projectors no external value range is used. If every x
/// (or every y) is equal, the markers are centered on that axis.
pub fn project_scatter(
    points: &[ScatterPoint],
    plot: PlotGeometry,
) -> ChartResult<Vec<ScatterMarker>> {
    ensure_min_len("scatter chart", points.len(), 1)?;
    if let Some(index) = points
        .iter()
        .position(|point| !point.x.is_finite() || !point.y.is_finite())
    {
        return Err(ChartError::InvalidData(format!(
            "scatter point at index {index} must be finite"
        )));
    }

    let (x_min, x_max) = series_extent(points.iter().map(|point| point.x))
        .ok_or_else(|| ChartError::InvalidData("scatter x extent is empty".to_owned()))?;
    let (y_min, y_max) = series_extent(points.iter().map(|point| point.y))
        .ok_or_else(|| ChartError::InvalidData("scatter y extent is empty".to_owned()))?;

    Ok(points
        .iter()
        .enumerate()
        .map(|(index, point)| ScatterMarker {
            index,
            center: PixelPoint::new(
                to_pixel_x_centered(point.x, x_min, x_max, plot.inner_width, plot.padding),
                to_pixel_y_centered(point.y, y_min, y_max, plot.inner_height, plot.padding),
            ),
            radius: SCATTER_MARKER_RADIUS,
        })
        .collect())
}
