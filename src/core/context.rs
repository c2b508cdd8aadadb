use serde::{Deserialize, Serialize};

use crate::core::{ChartConfig, ChartOrigin, ValueRange, grid_row_count};

/// Immutable state shared by every planner in one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    pub origin: ChartOrigin,
    pub plot_origin_x: f64,
    pub plot_width: f64,
    pub height: f64,
    pub range: ValueRange,
    pub row_count: u32,
}

impl LayoutContext {
    /// Builds the context from a validated config and resolved range.
    #[must_use]
    pub fn new(config: &ChartConfig, range: ValueRange) -> Self {
        Self {
            origin: config.origin,
            plot_origin_x: config.plot_origin_x(),
            plot_width: f64::from(config.plot_width()),
            height: f64::from(config.viewport.height),
            range,
            row_count: grid_row_count(config.viewport.height, config.grid_row_height),
        }
    }

    #[must_use]
    pub fn origin_x(&self) -> f64 {
        f64::from(self.origin.x)
    }

    #[must_use]
    pub fn origin_y(&self) -> f64 {
        f64::from(self.origin.y)
    }
}
