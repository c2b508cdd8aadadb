use approx::assert_relative_eq;
use floating_bars::api::{layout, layout_context, plan_layout};
use floating_bars::core::{BarValue, ChartConfig, ChartOrigin, SingleBarPolicy, Viewport};
use floating_bars::render::{CanvasLayerKind, DrawPrimitive, TextHAlign};
use floating_bars::{ChartError, FillStyle};

fn scenario_a_config() -> ChartConfig {
    ChartConfig::new(ChartOrigin::new(0, 0), Viewport::new(400, 200))
        .with_grid_row_height(50)
        .with_background_fill("90-#fff-#eee")
}

fn scenario_a_values() -> Vec<BarValue> {
    vec![
        BarValue::new(0.0, 50.0)
            .expect("bar")
            .with_fill("#08c")
            .with_caption("Alpha"),
        BarValue::new(0.0, 80.0)
            .expect("bar")
            .with_fill("90-#f80-#fc0")
            .with_caption("Beta"),
    ]
}

fn kind_name(primitive: &DrawPrimitive) -> &'static str {
    match primitive {
        DrawPrimitive::Panel(_) => "panel",
        DrawPrimitive::Line(_) => "line",
        DrawPrimitive::Text(_) => "text",
        DrawPrimitive::Rect(rect) if rect.is_shadow => "shadow",
        DrawPrimitive::Rect(_) => "rect",
    }
}

#[test]
fn scenario_a_emits_panel_grid_axis_then_bar_groups() {
    let primitives = layout(&scenario_a_config(), &scenario_a_values()).expect("layout");

    let kinds: Vec<&str> = primitives.iter().map(kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "panel", "line", "line", "line", "text", "text", "text", "text", "text", "shadow",
            "rect", "text", "shadow", "rect", "text",
        ]
    );
}

#[test]
fn scenario_a_counts_match_row_and_bar_arithmetic() {
    let config = scenario_a_config();
    let values = scenario_a_values();
    let context = layout_context(&config, &values).expect("context");
    let primitives = layout(&config, &values).expect("layout");

    assert_eq!(context.row_count, 4);
    let row_count = context.row_count as usize;
    let expected = 1 + (row_count - 1) + (row_count + 1) + 3 * values.len();
    assert_eq!(primitives.len(), expected);
    assert_eq!(primitives.len(), 15);

    let rects = primitives.iter().filter(|p| p.as_rect().is_some()).count();
    let lines = primitives.iter().filter(|p| p.as_line().is_some()).count();
    let panels = primitives.iter().filter(|p| p.as_panel().is_some()).count();
    assert_eq!(rects, 4);
    assert_eq!(lines, 3);
    assert_eq!(panels, 1);
}

#[test]
fn panel_and_lines_carry_configured_styles() {
    let config = scenario_a_config();
    let primitives = layout(&config, &scenario_a_values()).expect("layout");

    let panel = primitives[0].as_panel().expect("panel first");
    assert_eq!(panel.fill, FillStyle::new("90-#fff-#eee"));
    assert_eq!(panel.stroke, config.grid_stroke);
    assert_eq!(
        (panel.x, panel.y, panel.width, panel.height),
        (40.0, 0.0, 360.0, 200.0)
    );

    let line = primitives[1].as_line().expect("line");
    assert_eq!(line.y1, line.y2);
    assert_eq!(line.y1, 150.5);
}

#[test]
fn axis_labels_use_axis_font_and_left_alignment() {
    let config = scenario_a_config().with_fonts("Helvetica", 11.0, 13.0, 16.0);
    let primitives = layout(&config, &scenario_a_values()).expect("layout");

    let labels: Vec<_> = primitives[4..9]
        .iter()
        .map(|p| p.as_text().expect("axis label"))
        .collect();
    assert_eq!(labels[0].text, "84%");
    // A 13px caption font widens the lower compensation to 8.4 units.
    assert_eq!(labels[4].text, "-9%");
    for label in labels {
        assert_eq!(label.font_face, "Helvetica");
        assert_eq!(label.font_size_px, 11.0);
        assert_eq!(label.line_height_px, 16.0);
        assert_eq!(label.h_align, TextHAlign::Left);
    }
}

#[test]
fn bar_group_is_shadow_body_caption() {
    let config = scenario_a_config();
    let primitives = layout(&config, &scenario_a_values()).expect("layout");

    let shadow = primitives[9].as_rect().expect("shadow");
    let body = primitives[10].as_rect().expect("body");
    let caption = primitives[11].as_text().expect("caption");

    assert!(shadow.is_shadow);
    assert_eq!(shadow.fill, FillStyle::new("#555"));
    assert_eq!(shadow.opacity, 0.4);
    assert_eq!((shadow.offset_x, shadow.offset_y), (2.0, 2.0));
    assert_eq!(
        (shadow.x, shadow.y, shadow.width, shadow.height),
        (body.x, body.y, body.width, body.height)
    );

    assert!(!body.is_shadow);
    assert_eq!(body.fill, FillStyle::new("#08c"));
    assert_eq!(body.opacity, 1.0);
    assert_eq!((body.offset_x, body.offset_y), (0.0, 0.0));
    assert_eq!((body.x, body.y), (60.0, 74.0));

    assert_eq!(caption.text, "Alpha");
    assert_eq!(caption.h_align, TextHAlign::Center);
    assert_eq!(caption.x, 75.0);
    assert_relative_eq!(caption.y, body.y + body.height + 4.0);
    assert_eq!(caption.font_size_px, config.bar_caption_font_size);
}

#[test]
fn layered_plan_flattens_to_the_same_sequence() {
    let config = scenario_a_config();
    let values = scenario_a_values();
    let layered = plan_layout(&config, &values).expect("plan");

    let kinds: Vec<CanvasLayerKind> = layered.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CanvasLayerKind::Background,
            CanvasLayerKind::Grid,
            CanvasLayerKind::Axis,
            CanvasLayerKind::Bars,
        ]
    );
    assert_eq!(
        layered
            .layer(CanvasLayerKind::Bars)
            .map(|layer| layer.primitives.len()),
        Some(6)
    );
    assert_eq!(
        layered.flatten().primitives,
        layout(&config, &values).expect("layout")
    );
}

#[test]
fn layout_is_idempotent() {
    let config = scenario_a_config();
    let values = scenario_a_values();
    let first = layout(&config, &values).expect("first");
    let second = layout(&config, &values).expect("second");
    assert_eq!(first, second);
}

#[test]
fn scenario_b_single_bar_centered_or_rejected() {
    let values = vec![
        BarValue::new(5.0, 20.0)
            .expect("bar")
            .with_caption("Solo"),
    ];

    let centered = layout(&scenario_a_config(), &values).expect("centered layout");
    let body = centered
        .iter()
        .filter_map(DrawPrimitive::as_rect)
        .find(|rect| !rect.is_shadow)
        .expect("body");
    assert_eq!(body.x + body.width / 2.0, 220.0);

    let config = scenario_a_config().with_single_bar_policy(SingleBarPolicy::Reject);
    assert!(matches!(
        layout(&config, &values),
        Err(ChartError::InsufficientBars { count: 1 })
    ));
}

#[test]
fn scenario_c_bounds_strictly_widen() {
    let config = scenario_a_config().with_bar_caption_margin(3);
    let values = vec![
        BarValue::new(-12.0, 30.0).expect("bar"),
        BarValue::new(4.0, 6.0).expect("bar"),
    ];
    let context = layout_context(&config, &values).expect("context");
    assert!(context.range.min_value < -12.0);
    assert!(context.range.max_value > 18.0);
    assert!(context.range.pixels_per_unit > 0.0);
}

#[test]
fn invalid_config_is_rejected_before_any_output() {
    let values = scenario_a_values();
    let cases = [
        ChartConfig::new(ChartOrigin::new(0, 0), Viewport::new(0, 200)),
        ChartConfig::new(ChartOrigin::new(0, 0), Viewport::new(400, 0)),
        scenario_a_config().with_bar_width(0),
        scenario_a_config().with_grid_row_height(0),
        scenario_a_config().with_axis_width(400),
        scenario_a_config().with_fonts("Sans", 0.0, 12.0, 14.0),
    ];
    for config in cases {
        assert!(matches!(
            layout(&config, &values),
            Err(ChartError::InvalidConfig(_))
        ));
    }
}

#[test]
fn empty_input_is_a_degenerate_range() {
    assert!(matches!(
        layout(&scenario_a_config(), &[]),
        Err(ChartError::DegenerateRange(_))
    ));
}
