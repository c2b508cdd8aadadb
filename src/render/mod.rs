mod fill;
mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;

pub use fill::{Color, GradientStop, Paint};
pub use frame::RenderFrame;
pub use layer_stack::{CanvasLayerKind, canonical_layer_order};
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    DrawPrimitive, LinePrimitive, PanelPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

/// Opaque reference to something a backend has drawn.
///
/// Hosts keep handles to remove or restyle drawn elements later; only the
/// backend that issued a handle knows what it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DrawableHandle(u64);

impl DrawableHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by any rendering backend.
///
/// Backends receive fully computed primitives so drawing code stays isolated
/// from layout math.
pub trait Renderer {
    fn draw(&mut self, primitive: &DrawPrimitive) -> ChartResult<DrawableHandle>;

    /// Validates `frame` and draws its primitives in order.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Vec<DrawableHandle>> {
        frame.validate()?;
        frame
            .primitives
            .iter()
            .map(|primitive| self.draw(primitive))
            .collect()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
