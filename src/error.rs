use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("{kind} needs at least {required} values, got {actual}")]
    InvalidSeriesLength {
        kind: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("value range is degenerate: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("{kind} expects {expected} data, got {actual}")]
    ShapeMismatch {
        kind: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("{kind} values sum to zero")]
    ZeroTotal { kind: &'static str },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}

impl ChartError {
    /// Returns `true` for errors caused by caller-supplied data rather than
    /// by geometry or the drawing backend.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSeriesLength { .. }
                | Self::ShapeMismatch { .. }
                | Self::ZeroTotal { .. }
                | Self::InvalidData(_)
        )
    }
}
