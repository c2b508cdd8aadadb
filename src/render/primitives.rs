use serde::{Deserialize, Serialize};

use crate::core::{FillStyle, StrokeStyle};
use crate::error::{ChartError, ChartResult};

fn ensure_finite_coords(coords: &[f64], what: &str) -> ChartResult<()> {
    if coords.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

fn ensure_size(width: f64, height: f64, what: &str) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} size must be finite and >= 0"
        )));
    }
    Ok(())
}

/// Background rectangle behind the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: FillStyle,
    pub stroke: StrokeStyle,
}

impl PanelPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coords(&[self.x, self.y], "panel")?;
        ensure_size(self.width, self.height, "panel")
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: StrokeStyle,
}

impl LinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coords(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        if !self.stroke.width.is_finite() || self.stroke.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_face: String,
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    /// Captions may be empty; only geometry and font sizing are checked.
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coords(&[self.x, self.y], "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Bar body or bar shadow.
///
/// `offset_x`/`offset_y` translate the rectangle at draw time; they are zero
/// for bar bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: FillStyle,
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub is_shadow: bool,
}

impl RectPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coords(&[self.x, self.y, self.offset_x, self.offset_y], "rect")?;
        ensure_size(self.width, self.height, "rect")?;
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "rect opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One drawable element, in the order the renderer must paint it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Panel(PanelPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
    Rect(RectPrimitive),
}

impl DrawPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Panel(panel) => panel.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
            Self::Rect(rect) => rect.validate(),
        }
    }

    #[must_use]
    pub fn as_rect(&self) -> Option<&RectPrimitive> {
        match self {
            Self::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&TextPrimitive> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LinePrimitive> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_panel(&self) -> Option<&PanelPrimitive> {
        match self {
            Self::Panel(panel) => Some(panel),
            _ => None,
        }
    }
}
