use crate::error::{ChartError, ChartResult};

/// Rounds to the nearest integer with ties going toward positive infinity.
///
/// `f64::round` sends ties away from zero, which shifts negative half-pixel
/// values by one compared to the canvas convention used for label values and
/// bar spacing.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}
