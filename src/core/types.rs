use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_finite;
use crate::error::{ChartError, ChartResult};

/// Pixel size of the whole chart area (axis column plus plot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel offset of the chart relative to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartOrigin {
    pub x: i32,
    pub y: i32,
}

impl ChartOrigin {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Opaque style descriptor (CSS color, gradient string, ...).
///
/// The layout engine never interprets it; renderers decide what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillStyle(String);

impl FillStyle {
    #[must_use]
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FillStyle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FillStyle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One floating bar: spans `start_point ..= start_point + tallness`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarValue {
    pub start_point: f64,
    pub tallness: f64,
    #[serde(default)]
    pub fill: FillStyle,
    #[serde(default)]
    pub caption: String,
}

impl BarValue {
    pub fn new(start_point: f64, tallness: f64) -> ChartResult<Self> {
        let bar = Self {
            start_point,
            tallness,
            fill: FillStyle::default(),
            caption: String::new(),
        };
        bar.validate()?;
        Ok(bar)
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<FillStyle>) -> Self {
        self.fill = fill.into();
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Value at the top edge of the bar.
    #[must_use]
    pub fn end_point(&self) -> f64 {
        self.start_point + self.tallness
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(self.start_point, "bar start point")?;
        ensure_finite(self.tallness, "bar tallness")?;
        ensure_finite(self.end_point(), "bar end point")?;
        if self.tallness < 0.0 {
            return Err(ChartError::InvalidData(
                "bar tallness must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
