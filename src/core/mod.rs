pub mod axis;
pub mod bar_layout;
pub mod config;
pub mod context;
pub mod grid;
pub mod primitives;
pub mod range;
pub mod types;

pub use axis::{AxisLabel, format_axis_value, plan_axis_labels};
pub use bar_layout::{
    BarGeometry, BarSpacing, inter_bar_margin, plan_bars, resolve_bar_spacing,
};
pub use config::{BarShadowStyle, ChartConfig, SingleBarPolicy, StrokeStyle};
pub use context::LayoutContext;
pub use grid::{
    CRISP_LINE_OFFSET_PX, GridLineGeometry, GridPlan, PanelGeometry, grid_row_count, plan_grid,
};
pub use range::{ValueRange, raw_value_bounds, resolve_value_range};
pub use types::{BarValue, ChartOrigin, FillStyle, Viewport};
