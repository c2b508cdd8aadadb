use crate::core::FillStyle;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Parses `#rgb`, `#rrggbb` or `none`.
    pub fn parse_hex(input: &str) -> ChartResult<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("none") {
            return Ok(Self::TRANSPARENT);
        }
        let digits = input
            .strip_prefix('#')
            .filter(|digits| digits.chars().all(|ch| ch.is_ascii_hexdigit()))
            .ok_or_else(|| invalid_color(input))?;
        let channel = |hex: &str| -> ChartResult<f64> {
            u8::from_str_radix(hex, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| invalid_color(input))
        };

        match digits.len() {
            3 => {
                let mut expanded = [0.0; 3];
                for (slot, ch) in expanded.iter_mut().zip(digits.chars()) {
                    *slot = channel(&format!("{ch}{ch}"))?;
                }
                Ok(Self::rgb(expanded[0], expanded[1], expanded[2]))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid_color(input)),
        }
    }
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported color `{input}`"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Resolved paint for a fill descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient; `angle_deg` follows the canvas convention where `0`
    /// runs left to right and `90` runs bottom to top.
    LinearGradient {
        angle_deg: f64,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Parses a fill descriptor.
    ///
    /// Accepted forms: empty (transparent), `none`, `#rgb`, `#rrggbb`, and
    /// linear gradients written `<angle>-<color>[:<offset%>]-...-<color>`.
    /// The angle may be negative (`-90-#fff-#000`).
    /// Stops without an explicit offset are spread evenly between their
    /// neighbours.
    pub fn parse(fill: &FillStyle) -> ChartResult<Self> {
        let descriptor = fill.as_str().trim();
        if descriptor.is_empty() {
            return Ok(Self::Solid(Color::TRANSPARENT));
        }
        if !descriptor.contains('-') || descriptor.starts_with('#') {
            return Color::parse_hex(descriptor).map(Self::Solid);
        }

        // A leading `-` belongs to the angle.
        let (angle, stops) = descriptor
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| ch == '-')
            .map(|(index, _)| (&descriptor[..index], &descriptor[index + 1..]))
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "gradient `{descriptor}` needs at least two colors"
                ))
            })?;
        let angle_deg = angle
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|angle| angle.is_finite())
            .ok_or_else(|| {
                ChartError::InvalidData(format!("gradient `{descriptor}` has no valid angle"))
            })?;

        let mut raw_stops = Vec::new();
        for part in stops.split('-') {
            let (color, offset) = match part.split_once(':') {
                Some((color, offset)) => {
                    let offset = offset.trim().parse::<f64>().map_err(|_| {
                        ChartError::InvalidData(format!("invalid gradient offset `{offset}`"))
                    })?;
                    (color, Some((offset / 100.0).clamp(0.0, 1.0)))
                }
                None => (part, None),
            };
            raw_stops.push((Color::parse_hex(color)?, offset));
        }
        if raw_stops.len() < 2 {
            return Err(ChartError::InvalidData(format!(
                "gradient `{descriptor}` needs at least two colors"
            )));
        }

        Ok(Self::LinearGradient {
            angle_deg,
            stops: spread_stop_offsets(&raw_stops),
        })
    }

    /// Color used when a backend cannot draw gradients.
    #[must_use]
    pub fn primary_color(&self) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::LinearGradient { stops, .. } => stops
                .first()
                .map_or(Color::TRANSPARENT, |stop| stop.color),
        }
    }
}

fn spread_stop_offsets(raw: &[(Color, Option<f64>)]) -> Vec<GradientStop> {
    let last = raw.len() - 1;
    let mut offsets: Vec<Option<f64>> = raw.iter().map(|(_, offset)| *offset).collect();
    if offsets[0].is_none() {
        offsets[0] = Some(0.0);
    }
    if offsets[last].is_none() {
        offsets[last] = Some(1.0);
    }

    let mut anchor = 0;
    for index in 1..=last {
        if let Some(end) = offsets[index] {
            let start = offsets[anchor].unwrap_or(0.0);
            let gap = index - anchor;
            for (step, slot) in offsets[anchor + 1..index].iter_mut().enumerate() {
                *slot = Some(start + (end - start) * (step + 1) as f64 / gap as f64);
            }
            anchor = index;
        }
    }

    raw.iter()
        .zip(offsets)
        .map(|((color, _), offset)| GradientStop {
            offset: offset.unwrap_or(0.0),
            color: *color,
        })
        .collect()
}
