use serde::{Deserialize, Serialize};

use crate::core::Viewport;

use super::{CanvasLayerKind, DrawPrimitive, RenderFrame, canonical_layer_order};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub primitives: Vec<DrawPrimitive>,
}

/// Primitives grouped per paint layer, in canonical layer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let layers = canonical_layer_order()
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                primitives: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    pub fn push(&mut self, kind: CanvasLayerKind, primitive: DrawPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.push(primitive);
        }
    }

    pub fn extend(
        &mut self,
        kind: CanvasLayerKind,
        primitives: impl IntoIterator<Item = DrawPrimitive>,
    ) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.extend(primitives);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.primitives.len()).sum()
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.primitives.extend(layer.primitives.iter().cloned());
        }
        frame
    }

    #[must_use]
    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.layers
            .into_iter()
            .flat_map(|layer| layer.primitives)
            .collect()
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
