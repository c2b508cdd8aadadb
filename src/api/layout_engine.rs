use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    AxisLabel, BarGeometry, BarValue, ChartConfig, GridPlan, LayoutContext, plan_axis_labels,
    plan_bars, plan_grid, resolve_value_range,
};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, DrawPrimitive, LayeredRenderFrame, LinePrimitive, PanelPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

/// Primitives emitted for one bar: shadow, body, caption.
pub type BarPrimitives = SmallVec<[DrawPrimitive; 3]>;

/// Validates inputs and resolves the shared layout state.
pub fn layout_context(config: &ChartConfig, values: &[BarValue]) -> ChartResult<LayoutContext> {
    config.validate()?;
    let range = resolve_value_range(values, config)?;
    Ok(LayoutContext::new(config, range))
}

/// Computes every primitive of the chart grouped by paint layer.
///
/// Nothing is emitted unless the whole pass succeeds.
pub fn plan_layout(config: &ChartConfig, values: &[BarValue]) -> ChartResult<LayeredRenderFrame> {
    let context = layout_context(config, values)?;
    let grid = plan_grid(&context, config);
    let labels = plan_axis_labels(&context, config);
    let bars = plan_bars(values, &context, config)?;

    debug!(
        bar_count = values.len(),
        row_count = context.row_count,
        min_value = context.range.min_value,
        max_value = context.range.max_value,
        pixels_per_unit = context.range.pixels_per_unit,
        "floating bar layout pass"
    );

    let mut frame = LayeredRenderFrame::new(config.viewport);
    frame.push(CanvasLayerKind::Background, panel_primitive(&grid, config));
    frame.extend(CanvasLayerKind::Grid, grid_line_primitives(&grid, config));
    frame.extend(
        CanvasLayerKind::Axis,
        labels
            .into_iter()
            .map(|label| axis_label_primitive(label, config)),
    );
    for (geometry, value) in bars.iter().zip(values) {
        frame.extend(
            CanvasLayerKind::Bars,
            bar_primitives(geometry, value, config),
        );
    }
    Ok(frame)
}

/// Computes the ordered primitive list: panel, grid lines, axis labels,
/// then shadow, body and caption of each bar in input order.
pub fn layout(config: &ChartConfig, values: &[BarValue]) -> ChartResult<Vec<DrawPrimitive>> {
    Ok(plan_layout(config, values)?.into_primitives())
}

fn panel_primitive(grid: &GridPlan, config: &ChartConfig) -> DrawPrimitive {
    DrawPrimitive::Panel(PanelPrimitive {
        x: grid.panel.x,
        y: grid.panel.y,
        width: grid.panel.width,
        height: grid.panel.height,
        fill: config.background_fill.clone(),
        stroke: config.grid_stroke.clone(),
    })
}

fn grid_line_primitives<'a>(
    grid: &'a GridPlan,
    config: &'a ChartConfig,
) -> impl Iterator<Item = DrawPrimitive> + 'a {
    grid.lines.iter().map(|line| {
        DrawPrimitive::Line(LinePrimitive {
            x1: line.x1,
            y1: line.y,
            x2: line.x2,
            y2: line.y,
            stroke: config.grid_stroke.clone(),
        })
    })
}

fn axis_label_primitive(label: AxisLabel, config: &ChartConfig) -> DrawPrimitive {
    DrawPrimitive::Text(TextPrimitive {
        x: label.x,
        y: label.y,
        text: label.text,
        font_face: config.font_face.clone(),
        font_size_px: config.axis_font_size,
        line_height_px: config.font_line_height,
        h_align: TextHAlign::Left,
    })
}

/// Shadow, body and caption for one bar, in paint order.
#[must_use]
pub fn bar_primitives(
    geometry: &BarGeometry,
    value: &BarValue,
    config: &ChartConfig,
) -> BarPrimitives {
    let shadow = &config.bar_shadow;
    let mut primitives = BarPrimitives::new();
    primitives.push(DrawPrimitive::Rect(RectPrimitive {
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        fill: shadow.fill.clone(),
        opacity: shadow.opacity,
        offset_x: shadow.offset_x,
        offset_y: shadow.offset_y,
        is_shadow: true,
    }));
    primitives.push(DrawPrimitive::Rect(RectPrimitive {
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        fill: value.fill.clone(),
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        is_shadow: false,
    }));
    primitives.push(DrawPrimitive::Text(TextPrimitive {
        x: geometry.caption_x,
        y: geometry.caption_y,
        text: value.caption.clone(),
        font_face: config.font_face.clone(),
        font_size_px: config.bar_caption_font_size,
        line_height_px: config.font_line_height,
        h_align: TextHAlign::Center,
    }));
    primitives
}
