use serde::{Deserialize, Serialize};

use crate::core::{ChartOrigin, FillStyle, Viewport};
use crate::error::{ChartError, ChartResult};

/// Stroke used for the panel border and grid lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: FillStyle,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: FillStyle::new("#ccc"),
            width: 1.0,
        }
    }
}

/// Cosmetic drop shadow drawn under every bar body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarShadowStyle {
    pub offset_x: f64,
    pub offset_y: f64,
    pub fill: FillStyle,
    pub opacity: f64,
}

impl Default for BarShadowStyle {
    fn default() -> Self {
        Self {
            offset_x: 2.0,
            offset_y: 2.0,
            fill: FillStyle::new("#555"),
            opacity: 0.4,
        }
    }
}

/// What to do when only one bar is supplied and inter-bar spacing is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SingleBarPolicy {
    /// Center the bar horizontally inside the plot area.
    #[default]
    Center,
    /// Fail with `ChartError::InsufficientBars`.
    Reject,
}

/// Chart bounds plus sizing and styling inputs for one layout pass.
///
/// This type is serializable so hosts can persist chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub origin: ChartOrigin,
    pub viewport: Viewport,
    pub grid_row_height: u32,
    pub axis_width: u32,
    #[serde(default = "default_font_size")]
    pub axis_font_size: f64,
    #[serde(default = "default_font_size")]
    pub bar_caption_font_size: f64,
    #[serde(default = "default_font_face")]
    pub font_face: String,
    #[serde(default = "default_font_line_height")]
    pub font_line_height: f64,
    #[serde(default)]
    pub bar_caption_margin: u32,
    #[serde(default)]
    pub bar_group_side_margin: u32,
    pub bar_width: u32,
    #[serde(default)]
    pub background_fill: FillStyle,
    #[serde(default)]
    pub grid_stroke: StrokeStyle,
    #[serde(default)]
    pub bar_shadow: BarShadowStyle,
    #[serde(default = "default_axis_label_suffix")]
    pub axis_label_suffix: String,
    #[serde(default)]
    pub single_bar_policy: SingleBarPolicy,
}

impl ChartConfig {
    /// Creates a config with default sizing for the given bounds.
    #[must_use]
    pub fn new(origin: ChartOrigin, viewport: Viewport) -> Self {
        Self {
            origin,
            viewport,
            grid_row_height: 50,
            axis_width: 40,
            axis_font_size: default_font_size(),
            bar_caption_font_size: default_font_size(),
            font_face: default_font_face(),
            font_line_height: default_font_line_height(),
            bar_caption_margin: 4,
            bar_group_side_margin: 20,
            bar_width: 30,
            background_fill: FillStyle::new("#fff"),
            grid_stroke: StrokeStyle::default(),
            bar_shadow: BarShadowStyle::default(),
            axis_label_suffix: default_axis_label_suffix(),
            single_bar_policy: SingleBarPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_grid_row_height(mut self, grid_row_height: u32) -> Self {
        self.grid_row_height = grid_row_height;
        self
    }

    #[must_use]
    pub fn with_axis_width(mut self, axis_width: u32) -> Self {
        self.axis_width = axis_width;
        self
    }

    #[must_use]
    pub fn with_fonts(
        mut self,
        font_face: impl Into<String>,
        axis_font_size: f64,
        bar_caption_font_size: f64,
        font_line_height: f64,
    ) -> Self {
        self.font_face = font_face.into();
        self.axis_font_size = axis_font_size;
        self.bar_caption_font_size = bar_caption_font_size;
        self.font_line_height = font_line_height;
        self
    }

    #[must_use]
    pub fn with_bar_caption_margin(mut self, margin: u32) -> Self {
        self.bar_caption_margin = margin;
        self
    }

    #[must_use]
    pub fn with_bar_group_side_margin(mut self, margin: u32) -> Self {
        self.bar_group_side_margin = margin;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width: u32) -> Self {
        self.bar_width = bar_width;
        self
    }

    #[must_use]
    pub fn with_background_fill(mut self, fill: impl Into<FillStyle>) -> Self {
        self.background_fill = fill.into();
        self
    }

    #[must_use]
    pub fn with_grid_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.grid_stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_bar_shadow(mut self, shadow: BarShadowStyle) -> Self {
        self.bar_shadow = shadow;
        self
    }

    #[must_use]
    pub fn with_axis_label_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.axis_label_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_single_bar_policy(mut self, policy: SingleBarPolicy) -> Self {
        self.single_bar_policy = policy;
        self
    }

    /// Width of the plotting area, i.e. the chart width minus the axis column.
    #[must_use]
    pub fn plot_width(&self) -> u32 {
        self.viewport.width.saturating_sub(self.axis_width)
    }

    /// Horizontal pixel where the plotting area starts.
    #[must_use]
    pub fn plot_origin_x(&self) -> f64 {
        f64::from(self.origin.x) + f64::from(self.axis_width)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidConfig(format!(
                "chart size must be > 0: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.bar_width == 0 {
            return Err(ChartError::InvalidConfig(
                "bar width must be > 0".to_owned(),
            ));
        }
        if self.grid_row_height == 0 {
            return Err(ChartError::InvalidConfig(
                "grid row height must be > 0".to_owned(),
            ));
        }
        if self.axis_width >= self.viewport.width {
            return Err(ChartError::InvalidConfig(format!(
                "axis width {} leaves no plot area in chart width {}",
                self.axis_width, self.viewport.width
            )));
        }
        for (field, value) in [
            ("axis font size", self.axis_font_size),
            ("bar caption font size", self.bar_caption_font_size),
            ("font line height", self.font_line_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{field} must be finite and > 0"
                )));
            }
        }
        if !self.grid_stroke.width.is_finite() || self.grid_stroke.width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "grid stroke width must be finite and > 0".to_owned(),
            ));
        }
        let shadow = &self.bar_shadow;
        if !shadow.offset_x.is_finite() || !shadow.offset_y.is_finite() {
            return Err(ChartError::InvalidConfig(
                "bar shadow offset must be finite".to_owned(),
            ));
        }
        if !shadow.opacity.is_finite() || !(0.0..=1.0).contains(&shadow.opacity) {
            return Err(ChartError::InvalidConfig(
                "bar shadow opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_font_size() -> f64 {
    12.0
}

fn default_font_face() -> String {
    "Sans".to_owned()
}

fn default_font_line_height() -> f64 {
    14.0
}

fn default_axis_label_suffix() -> String {
    "%".to_owned()
}
