use crate::error::ChartResult;
use crate::render::{DrawPrimitive, DrawableHandle, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates every primitive and hands out sequential handles, so
/// tests can catch invalid geometry without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_handle: u64,
    pub last_primitive_count: usize,
    pub rect_count: usize,
    pub line_count: usize,
    pub text_count: usize,
    pub panel_count: usize,
}

impl Renderer for NullRenderer {
    fn draw(&mut self, primitive: &DrawPrimitive) -> ChartResult<DrawableHandle> {
        primitive.validate()?;
        match primitive {
            DrawPrimitive::Panel(_) => self.panel_count += 1,
            DrawPrimitive::Line(_) => self.line_count += 1,
            DrawPrimitive::Text(_) => self.text_count += 1,
            DrawPrimitive::Rect(_) => self.rect_count += 1,
        }
        let handle = DrawableHandle::new(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Vec<DrawableHandle>> {
        frame.validate()?;
        self.panel_count = 0;
        self.line_count = 0;
        self.text_count = 0;
        self.rect_count = 0;
        let handles = frame
            .primitives
            .iter()
            .map(|primitive| self.draw(primitive))
            .collect::<ChartResult<Vec<_>>>()?;
        self.last_primitive_count = handles.len();
        Ok(handles)
    }
}
