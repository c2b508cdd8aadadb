use approx::assert_relative_eq;
use floating_bars::ChartError;
use floating_bars::core::{
    BarValue, ChartConfig, ChartOrigin, LayoutContext, SingleBarPolicy, Viewport, plan_bars,
    resolve_bar_spacing, resolve_value_range,
};

fn config() -> ChartConfig {
    ChartConfig::new(ChartOrigin::new(0, 0), Viewport::new(400, 200))
}

fn context_for(config: &ChartConfig, values: &[BarValue]) -> LayoutContext {
    let range = resolve_value_range(values, config).expect("range");
    LayoutContext::new(config, range)
}

fn two_bars() -> Vec<BarValue> {
    vec![
        BarValue::new(0.0, 50.0)
            .expect("bar")
            .with_caption("Alpha"),
        BarValue::new(0.0, 80.0).expect("bar").with_caption("Beta"),
    ]
}

#[test]
fn bars_fill_plot_width_between_side_margins() {
    let config = config();
    let values = two_bars();
    let context = context_for(&config, &values);
    let bars = plan_bars(&values, &context, &config).expect("bars");

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].x, 60.0);
    assert_eq!(bars[1].x, 350.0);
    assert_eq!(bars[1].x + bars[1].width, 380.0);
    assert!(bars.iter().all(|bar| bar.width == 30.0));
}

#[test]
fn bar_top_edge_is_rounded_and_height_is_exact() {
    let config = config();
    let values = two_bars();
    let context = context_for(&config, &values);
    let bars = plan_bars(&values, &context, &config).expect("bars");
    let ppu = 200.0 / 92.0;

    // 34 units below the top bound: 73.9px rounds to 74
    assert_eq!(bars[0].y, 74.0);
    assert_relative_eq!(bars[0].height, 50.0 * ppu);
    assert_eq!(bars[1].y, 9.0);
    assert_relative_eq!(bars[1].height, 80.0 * ppu);
}

#[test]
fn caption_sits_centered_below_bar() {
    let config = config();
    let values = two_bars();
    let context = context_for(&config, &values);
    let bars = plan_bars(&values, &context, &config).expect("bars");

    assert_eq!(bars[0].caption_x, 75.0);
    assert_relative_eq!(bars[0].caption_y, bars[0].bottom() + 4.0);
    assert_eq!(bars[1].caption_x, 365.0);
}

#[test]
fn origin_offsets_every_bar() {
    let config = ChartConfig::new(ChartOrigin::new(100, 50), Viewport::new(400, 200));
    let values = two_bars();
    let context = context_for(&config, &values);
    let bars = plan_bars(&values, &context, &config).expect("bars");

    assert_eq!(bars[0].x, 160.0);
    assert_eq!(bars[0].y, 124.0);
    assert_eq!(bars[1].x, 450.0);
}

#[test]
fn negative_start_points_float_below_zero() {
    let config = config();
    let values = vec![
        BarValue::new(-40.0, 30.0).expect("bar"),
        BarValue::new(-10.0, 60.0).expect("bar"),
        BarValue::new(20.0, 5.0).expect("bar"),
    ];
    let context = context_for(&config, &values);
    let bars = plan_bars(&values, &context, &config).expect("bars");
    let range = context.range;

    for (bar, value) in bars.iter().zip(&values) {
        let top = range.offset_from_top(value.end_point());
        let bottom = range.offset_from_top(value.start_point);
        assert!((bar.y - top).abs() <= 0.5);
        assert!((bar.bottom() - bottom).abs() <= 0.5 + 1e-9);
    }
    assert_eq!(bars[0].index, 0);
    assert_eq!(bars[2].index, 2);
}

#[test]
fn single_bar_is_centered_by_default() {
    let config = config();
    let values = vec![BarValue::new(10.0, 40.0).expect("bar")];
    let context = context_for(&config, &values);
    let bars = plan_bars(&values, &context, &config).expect("bars");

    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].x, 205.0);
    assert_eq!(bars[0].x + bars[0].width / 2.0, 40.0 + 360.0 / 2.0);
}

#[test]
fn single_bar_is_rejected_when_policy_requires_spacing() {
    let config = config().with_single_bar_policy(SingleBarPolicy::Reject);
    let values = vec![BarValue::new(10.0, 40.0).expect("bar")];
    let context = context_for(&config, &values);

    let result = plan_bars(&values, &context, &config);
    assert!(matches!(
        result,
        Err(ChartError::InsufficientBars { count: 1 })
    ));
}

#[test]
fn crowded_bars_get_negative_spacing_instead_of_error() {
    let config = config().with_bar_width(120);
    let values = vec![
        BarValue::new(0.0, 1.0).expect("bar"),
        BarValue::new(0.0, 2.0).expect("bar"),
        BarValue::new(0.0, 3.0).expect("bar"),
        BarValue::new(0.0, 4.0).expect("bar"),
    ];
    let context = context_for(&config, &values);
    let spacing = resolve_bar_spacing(&context, &config, values.len()).expect("spacing");
    // (360 - 40 - 480) / 3 = -53.3
    assert_eq!(spacing.margin, -53.0);
}
