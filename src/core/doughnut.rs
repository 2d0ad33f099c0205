use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::core::validation::proportional_total;
use crate::error::{ChartError, ChartResult};

/// First wedge starts at 12 o'clock.
pub const DOUGHNUT_START_ANGLE: f64 = -FRAC_PI_2;
/// Inner radius as a fraction of the outer radius.
pub const DOUGHNUT_INNER_RADIUS_RATIO: f64 = 0.6;
/// Gap between the outer ring and the surface edge.
pub const DOUGHNUT_EDGE_MARGIN: f64 = 4.0;

/// One annulus segment. Angles are in radians, increasing clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    #[must_use]
    pub fn span(self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughnutGeometry {
    pub center: PixelPoint,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub wedges: Vec<Wedge>,
}

/// Partitions the full circle proportionally to `values`.
///
/// Wedge boundaries are computed from running sums, so the last wedge ends at
/// exactly `start + 2pi`.
pub fn project_doughnut(values: &[f64], width: f64, height: f64) -> ChartResult<DoughnutGeometry> {
    let total = proportional_total("doughnut chart", values)?;

    let outer_radius = width.min(height) / 2.0 - DOUGHNUT_EDGE_MARGIN;
    if !outer_radius.is_finite() || outer_radius <= 0.0 {
        return Err(ChartError::InvalidViewport { width, height });
    }

    let mut wedges = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    for (index, value) in values.iter().copied().enumerate() {
        let start_angle = DOUGHNUT_START_ANGLE + TAU * (cumulative / total);
        cumulative += value;
        let end_angle = DOUGHNUT_START_ANGLE + TAU * (cumulative / total);
        wedges.push(Wedge {
            index,
            value,
            start_angle,
            end_angle,
        });
    }

    Ok(DoughnutGeometry {
        center: PixelPoint::new(width / 2.0, height / 2.0),
        outer_radius,
        inner_radius: outer_radius * DOUGHNUT_INNER_RADIUS_RATIO,
        wedges,
    })
}
