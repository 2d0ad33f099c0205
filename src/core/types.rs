use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in pixel space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in pixel space, normalized to non-negative extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle spanning two edges on each axis, in any order.
    #[must_use]
    pub fn from_edges(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Inner plot rectangle derived from surface size and padding.
///
/// Recomputed for every draw call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PlotGeometry {
    /// Derives the inner plot area.
    ///
    /// Fails with `InvalidViewport` when padding leaves no positive plot area.
    pub fn new(width: f64, height: f64, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        let inner_width = width - padding * 2.0;
        let inner_height = height - padding * 2.0;
        if !inner_width.is_finite()
            || !inner_height.is_finite()
            || inner_width <= 0.0
            || inner_height <= 0.0
        {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(Self {
            width,
            height,
            padding,
            inner_width,
            inner_height,
        })
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.padding + self.inner_width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.padding
    }

    /// Pixel y of the value-axis baseline.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.padding + self.inner_height
    }
}

/// Lower/upper envelope for one sample of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandBound {
    pub lower: f64,
    pub upper: f64,
}

impl BandBound {
    /// Builds a validated bound. Invariant: both finite and `lower <= upper`.
    pub fn new(lower: f64, upper: f64) -> ChartResult<Self> {
        let bound = Self { lower, upper };
        bound.validate()?;
        Ok(bound)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(ChartError::InvalidData(
                "band bounds must be finite".to_owned(),
            ));
        }
        if self.lower > self.upper {
            return Err(ChartError::InvalidData(
                "band lower bound must be <= upper bound".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One scatter sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
