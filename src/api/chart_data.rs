use serde::{Deserialize, Serialize};

use crate::core::{BandBound, ScatterPoint};

/// Caller-supplied chart input, tagged by shape.
///
/// `MultiSeries` and `Matrix` share a representation but are never
/// interchangeable: a matrix handed to a grouped bar chart is a shape error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "values", rename_all = "snake_case")]
pub enum ChartData {
    Series(Vec<f64>),
    BandedSeries {
        series: Vec<f64>,
        band: Vec<BandBound>,
    },
    MultiSeries(Vec<Vec<f64>>),
    Matrix(Vec<Vec<f64>>),
    Points(Vec<ScatterPoint>),
}

impl ChartData {
    #[must_use]
    pub fn series(values: impl Into<Vec<f64>>) -> Self {
        Self::Series(values.into())
    }

    #[must_use]
    pub fn banded(series: impl Into<Vec<f64>>, band: impl Into<Vec<BandBound>>) -> Self {
        Self::BandedSeries {
            series: series.into(),
            band: band.into(),
        }
    }

    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Series(_) => "series",
            Self::BandedSeries { .. } => "banded series",
            Self::MultiSeries(_) => "multi-series",
            Self::Matrix(_) => "matrix",
            Self::Points(_) => "points",
        }
    }

    /// Number of scalar samples carried, used for logging.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        match self {
            Self::Series(values) | Self::BandedSeries { series: values, .. } => values.len(),
            Self::MultiSeries(rows) | Self::Matrix(rows) => rows.iter().map(Vec::len).sum(),
            Self::Points(points) => points.len(),
        }
    }
}
