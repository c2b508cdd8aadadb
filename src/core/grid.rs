use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ChartConfig, LayoutContext};

/// Offset applied to horizontal lines so a 1px stroke lands on one pixel row.
pub const CRISP_LINE_OFFSET_PX: f64 = 0.5;

/// Background panel covering the full plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One horizontal row separator in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLineGeometry {
    pub row_index: u32,
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    pub row_count: u32,
    pub panel: PanelGeometry,
    pub lines: Vec<GridLineGeometry>,
}

/// Number of whole grid rows that fit in the chart height.
///
/// A trailing partial row is dropped; the plotted area is not adjusted.
#[must_use]
pub fn grid_row_count(height: u32, grid_row_height: u32) -> u32 {
    height.checked_div(grid_row_height).unwrap_or(0)
}

/// Plans the background panel and interior row lines.
///
/// Lines sit strictly between the top and bottom edges and are emitted from
/// the bottom row boundary upward.
#[must_use]
pub fn plan_grid(context: &LayoutContext, config: &ChartConfig) -> GridPlan {
    let row_height = f64::from(config.grid_row_height);
    if config.viewport.height % config.grid_row_height.max(1) != 0 {
        warn!(
            height = config.viewport.height,
            grid_row_height = config.grid_row_height,
            row_count = context.row_count,
            "chart height is not a multiple of grid row height; last partial row is dropped"
        );
    }

    let panel = PanelGeometry {
        x: context.plot_origin_x,
        y: context.origin_y(),
        width: context.plot_width,
        height: context.height,
    };

    let lines = (1..context.row_count)
        .rev()
        .map(|row_index| {
            let y = f64::from(row_index) * row_height + context.origin_y() + CRISP_LINE_OFFSET_PX;
            GridLineGeometry {
                row_index,
                x1: context.plot_origin_x,
                x2: context.plot_origin_x + context.plot_width,
                y,
            }
        })
        .collect();

    GridPlan {
        row_count: context.row_count,
        panel,
        lines,
    }
}
