use crate::core::line_series::project_polyline;
use crate::core::{AxisRange, PixelPoint, PlotGeometry};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Deterministic geometry for an area series.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the plot baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<PixelPoint>,
    pub fill_polygon: Vec<PixelPoint>,
}

/// Projects a series into area geometry.
///
/// The baseline is the bottom edge of the inner plot area, independent of the
/// value range minimum.
pub fn project_area_geometry(
    kind: &'static str,
    series: &[f64],
    range: AxisRange,
    plot: PlotGeometry,
) -> ChartResult<AreaGeometry> {
    let line_points = project_polyline(kind, series, range, plot)?;

    let baseline_y = plot.bottom();
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(PixelPoint::new(first_x, baseline_y));
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(PixelPoint::new(last_x, baseline_y));
    // Repeat the first baseline vertex so the polygon is closed without
    // relying on backend closure rules.
    fill_polygon.push(PixelPoint::new(first_x, baseline_y));

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
