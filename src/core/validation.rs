use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

pub(crate) fn ensure_min_len(kind: &'static str, len: usize, required: usize) -> ChartResult<()> {
    if len < required {
        return Err(ChartError::InvalidSeriesLength {
            kind,
            required,
            actual: len,
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite(kind: &str, values: &[f64]) -> ChartResult<()> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{kind} value at index {index} must be finite"
        )));
    }
    Ok(())
}

/// Rejects projected geometry whose pixel coordinates overflowed.
pub(crate) fn ensure_finite_pixels(kind: &str, points: &[PixelPoint]) -> ChartResult<()> {
    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{kind} point {index} projects outside the representable pixel range"
        )));
    }
    Ok(())
}

/// Validates proportional-layout input and returns its total.
///
/// Empty input and zero totals are `ZeroTotal`; negative or non-finite
/// values are `InvalidData`.
pub(crate) fn proportional_total(kind: &'static str, values: &[f64]) -> ChartResult<f64> {
    if values.is_empty() {
        return Err(ChartError::ZeroTotal { kind });
    }
    ensure_finite(kind, values)?;
    if let Some(index) = values.iter().position(|value| *value < 0.0) {
        return Err(ChartError::InvalidData(format!(
            "{kind} value at index {index} must be >= 0"
        )));
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(ChartError::ZeroTotal { kind });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::proportional_total;
    use crate::error::ChartError;

    #[test]
    fn proportional_total_rejects_empty_and_zero_input() {
        assert_eq!(
            proportional_total("doughnut", &[]),
            Err(ChartError::ZeroTotal { kind: "doughnut" })
        );
        assert_eq!(
            proportional_total("doughnut", &[0.0, 0.0]),
            Err(ChartError::ZeroTotal { kind: "doughnut" })
        );
    }

    #[test]
    fn proportional_total_rejects_negative_values() {
        let err = proportional_total("treemap", &[3.0, -1.0]).expect_err("negative");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
