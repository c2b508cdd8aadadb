use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::round_half_up;
use crate::core::{BarValue, ChartConfig, LayoutContext, SingleBarPolicy};
use crate::error::{ChartError, ChartResult};

/// Horizontal placement shared by all bars of one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    /// Left edge of the first bar.
    pub first_x: f64,
    /// Gap between adjacent bars; `0` for a centered single bar.
    pub margin: f64,
}

impl BarSpacing {
    #[must_use]
    pub fn bar_x(self, index: usize, bar_width: f64) -> f64 {
        self.first_x + index as f64 * (bar_width + self.margin)
    }
}

/// Pixel geometry of one bar body plus its caption anchor.
///
/// The drop shadow reuses `x`, `y`, `width` and `height`; its offset comes
/// from the shadow style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub caption_x: f64,
    pub caption_y: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Gap between adjacent bars so the group fills the plot width.
///
/// Fails with `InsufficientBars` for fewer than two bars.
pub fn inter_bar_margin(
    plot_width: f64,
    side_margin: f64,
    bar_width: f64,
    bar_count: usize,
) -> ChartResult<f64> {
    if bar_count < 2 {
        return Err(ChartError::InsufficientBars { count: bar_count });
    }
    let remaining = plot_width - side_margin * 2.0 - bar_width * bar_count as f64;
    Ok(round_half_up(remaining / (bar_count - 1) as f64))
}

pub fn resolve_bar_spacing(
    context: &LayoutContext,
    config: &ChartConfig,
    bar_count: usize,
) -> ChartResult<BarSpacing> {
    let bar_width = f64::from(config.bar_width);
    let side_margin = f64::from(config.bar_group_side_margin);

    if bar_count == 1 && config.single_bar_policy == SingleBarPolicy::Center {
        return Ok(BarSpacing {
            first_x: context.plot_origin_x + round_half_up((context.plot_width - bar_width) / 2.0),
            margin: 0.0,
        });
    }

    let margin = inter_bar_margin(context.plot_width, side_margin, bar_width, bar_count)?;
    if margin < 0.0 {
        warn!(
            margin,
            bar_count,
            plot_width = context.plot_width,
            "bars do not fit the plot width and will overlap"
        );
    }
    Ok(BarSpacing {
        first_x: side_margin + context.plot_origin_x,
        margin,
    })
}

/// Plans every bar left to right, in input order.
pub fn plan_bars(
    values: &[BarValue],
    context: &LayoutContext,
    config: &ChartConfig,
) -> ChartResult<Vec<BarGeometry>> {
    let spacing = resolve_bar_spacing(context, config, values.len())?;

    #[cfg(feature = "parallel-projection")]
    {
        Ok(values
            .par_iter()
            .enumerate()
            .map(|(index, value)| project_single_bar(index, value, spacing, context, config))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(values
            .iter()
            .enumerate()
            .map(|(index, value)| project_single_bar(index, value, spacing, context, config))
            .collect())
    }
}

fn project_single_bar(
    index: usize,
    value: &BarValue,
    spacing: BarSpacing,
    context: &LayoutContext,
    config: &ChartConfig,
) -> BarGeometry {
    let bar_width = f64::from(config.bar_width);
    let x = spacing.bar_x(index, bar_width);
    let top_offset =
        (context.range.max_value - value.end_point()).abs() * context.range.pixels_per_unit;
    let y = round_half_up(top_offset) + context.origin_y();
    let height = value.tallness * context.range.pixels_per_unit;
    trace!(index, x, y, height, "bar geometry");

    BarGeometry {
        index,
        x,
        y,
        width: bar_width,
        height,
        caption_x: x + bar_width / 2.0,
        caption_y: y + height + f64::from(config.bar_caption_margin),
    }
}
