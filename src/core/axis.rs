use serde::{Deserialize, Serialize};

use crate::core::primitives::round_half_up;
use crate::core::{ChartConfig, LayoutContext};

/// One value label on the left axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub text: String,
}

/// Formats an integral axis value followed by `suffix`.
#[must_use]
pub fn format_axis_value(value: f64, suffix: &str) -> String {
    // `-0` would otherwise print with its sign.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}{suffix}")
}

/// Plans `row_count + 1` labels, one per row boundary, top to bottom.
#[must_use]
pub fn plan_axis_labels(context: &LayoutContext, config: &ChartConfig) -> Vec<AxisLabel> {
    let row_height = f64::from(config.grid_row_height);
    (0..=context.row_count)
        .map(|row_index| {
            let offset = f64::from(row_index) * row_height;
            let value =
                context.range.max_value - round_half_up(context.range.pixels_to_units(offset));
            AxisLabel {
                x: context.origin_x(),
                y: offset + context.origin_y(),
                value,
                text: format_axis_value(value, &config.axis_label_suffix),
            }
        })
        .collect()
}
