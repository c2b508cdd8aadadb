use floating_bars::api::FloatingBarChart;
use floating_bars::core::{BarValue, ChartConfig, ChartOrigin, StrokeStyle, Viewport};
use floating_bars::render::{
    DrawPrimitive, DrawableHandle, LinePrimitive, NullRenderer, RenderFrame, Renderer,
};
use floating_bars::{ChartError, ChartResult, FillStyle};

fn config() -> ChartConfig {
    ChartConfig::new(ChartOrigin::new(0, 0), Viewport::new(400, 200))
}

fn values() -> Vec<BarValue> {
    vec![
        BarValue::new(0.0, 50.0).expect("bar").with_caption("Alpha"),
        BarValue::new(0.0, 80.0).expect("bar").with_caption("Beta"),
    ]
}

/// Records the primitives it is asked to draw.
#[derive(Debug, Default)]
struct RecordingRenderer {
    drawn: Vec<DrawPrimitive>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, primitive: &DrawPrimitive) -> ChartResult<DrawableHandle> {
        self.drawn.push(primitive.clone());
        Ok(DrawableHandle::new(1_000 + self.drawn.len() as u64))
    }
}

#[test]
fn null_renderer_counts_each_primitive_kind() {
    let mut chart = FloatingBarChart::new(NullRenderer::default(), config()).expect("chart");
    let rendered = chart.render(&values()).expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.last_primitive_count, 15);
    assert_eq!(renderer.panel_count, 1);
    assert_eq!(renderer.line_count, 3);
    assert_eq!(renderer.text_count, 7);
    assert_eq!(renderer.rect_count, 4);
    assert_eq!(rendered.len(), 15);
}

#[test]
fn rendered_handles_are_grouped_like_chart_parts() {
    let mut chart = FloatingBarChart::new(NullRenderer::default(), config()).expect("chart");
    let rendered = chart.render(&values()).expect("render");

    assert_eq!(rendered.background.len(), 4);
    assert_eq!(rendered.axis.len(), 5);
    assert_eq!(rendered.bars.len(), 6);
    assert_eq!(rendered.background[0], DrawableHandle::new(0));
    assert_eq!(rendered.axis[0], DrawableHandle::new(4));
    assert_eq!(rendered.bars[5], DrawableHandle::new(14));
}

#[test]
fn renderer_receives_primitives_in_layout_order() {
    let mut chart =
        FloatingBarChart::new(RecordingRenderer::default(), config()).expect("chart");
    let rendered = chart.render(&values()).expect("render");
    let expected = chart.build_render_frame(&values()).expect("frame");

    assert_eq!(chart.renderer().drawn, expected.primitives);
    assert_eq!(rendered.background[0], DrawableHandle::new(1_001));
}

#[test]
fn chart_rejects_invalid_config_up_front() {
    let result = FloatingBarChart::new(NullRenderer::default(), config().with_bar_width(0));
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn failed_layout_draws_nothing() {
    let mut chart =
        FloatingBarChart::new(RecordingRenderer::default(), config()).expect("chart");
    assert!(chart.render(&[]).is_err());
    assert!(chart.renderer().drawn.is_empty());
}

#[test]
fn frame_validation_rejects_non_finite_geometry() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_primitive(DrawPrimitive::Line(
        LinePrimitive {
            x1: 0.0,
            y1: f64::NAN,
            x2: 10.0,
            y2: 10.0,
            stroke: StrokeStyle::default(),
        },
    ));
    assert!(frame.validate().is_err());

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
}

#[test]
fn shadow_style_is_configurable() {
    let mut shadow = config().bar_shadow;
    shadow.fill = FillStyle::new("#222");
    shadow.opacity = 0.25;
    let chart = FloatingBarChart::new(NullRenderer::default(), config().with_bar_shadow(shadow))
        .expect("chart");
    let frame = chart.build_render_frame(&values()).expect("frame");

    let shadows: Vec<_> = frame
        .primitives
        .iter()
        .filter_map(DrawPrimitive::as_rect)
        .filter(|rect| rect.is_shadow)
        .collect();
    assert_eq!(shadows.len(), 2);
    assert!(shadows
        .iter()
        .all(|rect| rect.opacity == 0.25 && rect.fill == FillStyle::new("#222")));
}
