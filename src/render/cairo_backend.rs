use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawPrimitive, DrawableHandle, Paint, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub panels_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<Vec<DrawableHandle>>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Handles are sequence numbers in draw order; they stay unique for the
/// lifetime of the renderer.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    next_handle: u64,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidConfig(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            next_handle: 0,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Writes the current surface as PNG.
    pub fn write_png(&self, out: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<Vec<DrawableHandle>> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        self.last_stats = CairoRenderStats::default();
        let mut handles = Vec::with_capacity(frame.primitives.len());
        for primitive in &frame.primitives {
            handles.push(self.draw_on_context(context, primitive)?);
        }
        Ok(handles)
    }

    fn draw_on_context(
        &mut self,
        context: &Context,
        primitive: &DrawPrimitive,
    ) -> ChartResult<DrawableHandle> {
        match primitive {
            DrawPrimitive::Panel(panel) => {
                context.rectangle(panel.x, panel.y, panel.width, panel.height);
                apply_paint(
                    context,
                    &Paint::parse(&panel.fill)?,
                    (panel.x, panel.y, panel.width, panel.height),
                )?;
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill panel", err))?;
                apply_color(context, Paint::parse(&panel.stroke.color)?.primary_color());
                context.set_line_width(panel.stroke.width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke panel border", err))?;
                self.last_stats.panels_drawn += 1;
            }
            DrawPrimitive::Line(line) => {
                apply_color(context, Paint::parse(&line.stroke.color)?.primary_color());
                context.set_line_width(line.stroke.width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                self.last_stats.lines_drawn += 1;
            }
            DrawPrimitive::Rect(rect) => {
                let x = rect.x + rect.offset_x;
                let y = rect.y + rect.offset_y;
                context.rectangle(x, y, rect.width, rect.height);
                apply_paint(
                    context,
                    &Paint::parse(&rect.fill)?,
                    (x, y, rect.width, rect.height),
                )?;
                if rect.opacity < 1.0 {
                    context.clip();
                    context
                        .paint_with_alpha(rect.opacity)
                        .map_err(|err| map_backend_error("failed to paint rectangle", err))?;
                    context.reset_clip();
                } else {
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                }
                self.last_stats.rects_drawn += 1;
            }
            DrawPrimitive::Text(text) => {
                let layout = pangocairo::functions::create_layout(context);
                let font_description = FontDescription::from_string(&format!(
                    "{} {}",
                    text.font_face, text.font_size_px
                ));
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, text_height) = layout.pixel_size();
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };
                // Anchor points are vertical centers.
                let y = text.y - f64::from(text_height) / 2.0;

                apply_color(context, Color::rgb(0.0, 0.0, 0.0));
                context.move_to(x, y);
                pangocairo::functions::show_layout(context, &layout);
                self.last_stats.texts_drawn += 1;
            }
        }

        let handle = DrawableHandle::new(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }
}

impl Renderer for CairoRenderer {
    fn draw(&mut self, primitive: &DrawPrimitive) -> ChartResult<DrawableHandle> {
        primitive.validate()?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.draw_on_context(&context, primitive)
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Vec<DrawableHandle>> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<Vec<DrawableHandle>> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_paint(
    context: &Context,
    paint: &Paint,
    bounds: (f64, f64, f64, f64),
) -> ChartResult<()> {
    match paint {
        Paint::Solid(color) => {
            apply_color(context, *color);
            Ok(())
        }
        Paint::LinearGradient { angle_deg, stops } => {
            let (x, y, width, height) = bounds;
            let radians = angle_deg.to_radians();
            let (dx, dy) = (radians.cos(), -radians.sin());
            let center_x = x + width / 2.0;
            let center_y = y + height / 2.0;
            let half_extent = (width * dx.abs() + height * dy.abs()) / 2.0;

            let gradient = LinearGradient::new(
                center_x - dx * half_extent,
                center_y - dy * half_extent,
                center_x + dx * half_extent,
                center_y + dy * half_extent,
            );
            for stop in stops {
                gradient.add_color_stop_rgba(
                    stop.offset,
                    stop.color.red,
                    stop.color.green,
                    stop.color.blue,
                    stop.color.alpha,
                );
            }
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
