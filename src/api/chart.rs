use tracing::debug;

use crate::core::{BarValue, ChartConfig, LayoutContext};
use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, DrawableHandle, LayeredRenderFrame, RenderFrame, Renderer};

use super::layout_engine::{layout_context, plan_layout};

/// Handles returned by the renderer, grouped like the drawn chart parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedChart {
    /// Panel and grid lines.
    pub background: Vec<DrawableHandle>,
    /// Axis labels.
    pub axis: Vec<DrawableHandle>,
    /// Shadow, body and caption of every bar.
    pub bars: Vec<DrawableHandle>,
}

impl RenderedChart {
    #[must_use]
    pub fn len(&self) -> usize {
        self.background.len() + self.axis.len() + self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A validated chart configuration bound to a rendering backend.
///
/// Every call recomputes the layout from scratch; nothing about previous
/// passes is kept besides what the renderer itself retains.
pub struct FloatingBarChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
}

impl<R: Renderer> FloatingBarChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn layout_context(&self, values: &[BarValue]) -> ChartResult<LayoutContext> {
        layout_context(&self.config, values)
    }

    pub fn build_layered_render_frame(
        &self,
        values: &[BarValue],
    ) -> ChartResult<LayeredRenderFrame> {
        plan_layout(&self.config, values)
    }

    pub fn build_render_frame(&self, values: &[BarValue]) -> ChartResult<RenderFrame> {
        Ok(self.build_layered_render_frame(values)?.flatten())
    }

    /// Lays out `values` and draws the result in paint order.
    pub fn render(&mut self, values: &[BarValue]) -> ChartResult<RenderedChart> {
        let layered = self.build_layered_render_frame(values)?;
        let layer_sizes: Vec<(CanvasLayerKind, usize)> = layered
            .layers
            .iter()
            .map(|layer| (layer.kind, layer.primitives.len()))
            .collect();

        let handles = self.renderer.render(&layered.flatten())?;
        debug!(handle_count = handles.len(), "rendered floating bar chart");

        let mut rendered = RenderedChart::default();
        let mut handles = handles.into_iter();
        for (kind, count) in layer_sizes {
            let target = match kind {
                CanvasLayerKind::Background | CanvasLayerKind::Grid => &mut rendered.background,
                CanvasLayerKind::Axis => &mut rendered.axis,
                CanvasLayerKind::Bars => &mut rendered.bars,
            };
            target.extend(handles.by_ref().take(count));
        }
        Ok(rendered)
    }
}
