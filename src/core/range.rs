use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{BarValue, ChartConfig};
use crate::error::{ChartError, ChartResult};

/// Displayed value bounds and the vertical value-to-pixel scale.
///
/// `min_value`/`max_value` are integral after caption compensation.
/// `pixels_per_unit` is the chart height divided by the displayed value span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min_value: f64,
    pub max_value: f64,
    pub pixels_per_unit: f64,
}

impl ValueRange {
    fn from_bounds(min_value: f64, max_value: f64, height_px: f64) -> ChartResult<Self> {
        let span = max_value - min_value;
        if !span.is_finite() || span <= 0.0 {
            return Err(ChartError::DegenerateRange(format!(
                "value span must be finite and > 0, got [{min_value}, {max_value}]"
            )));
        }
        Ok(Self {
            min_value,
            max_value,
            pixels_per_unit: height_px / span,
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max_value - self.min_value
    }

    /// Vertical pixel distance of `value` below the top edge of the plot.
    #[must_use]
    pub fn offset_from_top(self, value: f64) -> f64 {
        (self.max_value - value) * self.pixels_per_unit
    }

    /// Converts a pixel distance into value units.
    #[must_use]
    pub fn pixels_to_units(self, pixels: f64) -> f64 {
        pixels / self.pixels_per_unit
    }
}

/// Lowest bar start and highest bar end, before any compensation.
pub fn raw_value_bounds(values: &[BarValue]) -> ChartResult<(f64, f64)> {
    let Some(first) = values.first() else {
        return Err(ChartError::DegenerateRange(
            "at least one bar value is required".to_owned(),
        ));
    };

    let mut raw_min = first.start_point;
    let mut raw_max = first.end_point();
    for value in values {
        value.validate()?;
        raw_min = raw_min.min(value.start_point);
        raw_max = raw_max.max(value.end_point());
    }

    if raw_max == raw_min {
        return Err(ChartError::DegenerateRange(format!(
            "all bars collapse onto value {raw_min}"
        )));
    }
    Ok((raw_min, raw_max))
}

/// Resolves the displayed value range for `values`.
///
/// The raw bounds are widened so captions below the lowest bar and labels at
/// the top edge stay inside the chart height: the lower bound drops by one
/// caption line plus two caption margins, the upper bound rises by two
/// caption margins. Both compensations are converted to value units with the
/// provisional scale, then the bounds are snapped outward to integers and the
/// final scale is recomputed from them.
pub fn resolve_value_range(values: &[BarValue], config: &ChartConfig) -> ChartResult<ValueRange> {
    let (raw_min, raw_max) = raw_value_bounds(values)?;
    let height_px = f64::from(config.viewport.height);
    let provisional = ValueRange::from_bounds(raw_min, raw_max, height_px)?;

    let caption_margin_px = f64::from(config.bar_caption_margin) * 2.0;
    let lower = provisional.pixels_to_units(config.bar_caption_font_size + caption_margin_px);
    let upper = provisional.pixels_to_units(caption_margin_px);

    let min_value = (raw_min - lower).floor();
    let max_value = (raw_max + upper).ceil();
    trace!(
        raw_min,
        raw_max,
        min_value,
        max_value,
        "compensated value range"
    );

    ValueRange::from_bounds(min_value, max_value, height_px)
}
