//! floating-bars: layout engine for floating bar charts.
//!
//! Bars start at an arbitrary value instead of zero. Given chart bounds, a
//! list of value ranges and sizing configuration, the engine computes every
//! drawable primitive (background panel, grid lines, axis labels, bar
//! shadows, bar bodies, captions) as plain data, then hands them to a
//! `render::Renderer` in paint order.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{FloatingBarChart, RenderedChart, layout, plan_layout};
pub use crate::core::{BarValue, ChartConfig, ChartOrigin, FillStyle, Viewport};
pub use crate::error::{ChartError, ChartResult};
pub use crate::render::DrawPrimitive;
