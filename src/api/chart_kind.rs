use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartData;

/// Chart families the orchestrator can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Area,
    /// Compact area chart for KPI cards: small padding, no grid.
    Sparkline,
    Bar,
    GroupedBar,
    Doughnut,
    Scatter,
    Heatmap,
    Treemap,
}

impl ChartKind {
    pub const ALL: [Self; 9] = [
        Self::Line,
        Self::Area,
        Self::Sparkline,
        Self::Bar,
        Self::GroupedBar,
        Self::Doughnut,
        Self::Scatter,
        Self::Heatmap,
        Self::Treemap,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line chart",
            Self::Area => "area chart",
            Self::Sparkline => "sparkline",
            Self::Bar => "bar chart",
            Self::GroupedBar => "grouped bar chart",
            Self::Doughnut => "doughnut chart",
            Self::Scatter => "scatter chart",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
        }
    }

    /// Human-readable name of the data shape this kind accepts.
    #[must_use]
    pub fn expected_shape(self) -> &'static str {
        match self {
            Self::Line => "series or banded series",
            Self::Area | Self::Sparkline | Self::Bar | Self::Doughnut | Self::Treemap => "series",
            Self::GroupedBar => "multi-series",
            Self::Scatter => "points",
            Self::Heatmap => "matrix",
        }
    }

    #[must_use]
    pub fn accepts(self, data: &ChartData) -> bool {
        matches!(
            (self, data),
            (Self::Line, ChartData::Series(_) | ChartData::BandedSeries { .. })
                | (
                    Self::Area
                        | Self::Sparkline
                        | Self::Bar
                        | Self::Doughnut
                        | Self::Treemap,
                    ChartData::Series(_)
                )
                | (Self::GroupedBar, ChartData::MultiSeries(_))
                | (Self::Scatter, ChartData::Points(_))
                | (Self::Heatmap, ChartData::Matrix(_))
        )
    }

    /// Fails with `ShapeMismatch` unless this kind accepts `data`.
    pub fn check_shape(self, data: &ChartData) -> ChartResult<()> {
        if self.accepts(data) {
            return Ok(());
        }
        Err(ChartError::ShapeMismatch {
            kind: self.name(),
            expected: self.expected_shape(),
            actual: data.shape_name().to_owned(),
        })
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
