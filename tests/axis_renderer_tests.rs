use approx::assert_abs_diff_eq;
use graph_values::AxisError;
use graph_values::api::{AxisRenderer, AxisRendererConfig, AxisStyle, LabelPlacement};
use graph_values::core::{StepTickSource, TickStepKind, ValueRange, Viewport};
use graph_values::render::NullRenderer;

#[test]
fn construct_draws_default_range_immediately() {
    let axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 20).expect("axis init");

    assert_eq!(axis.range(), ValueRange::new(-1.0, 1.0));
    assert_eq!(axis.viewport(), Viewport::new(20, 20));

    let renderer = axis.renderer();
    assert_eq!(renderer.viewport, Viewport::new(20, 20));
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_frame.is_some());
}

#[test]
fn set_range_swaps_reversed_bounds() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 20).expect("axis init");
    axis.set_range(5.0, -5.0).expect("set range");

    assert_eq!(axis.range().bounds(), (-5.0, 5.0));
    assert_eq!(axis.renderer().frames_rendered, 2);
}

#[test]
fn set_range_rejects_non_finite_bounds_and_keeps_previous_range() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 20).expect("axis init");
    let err = axis.set_range(f64::NAN, 1.0).expect_err("nan must fail");

    assert!(matches!(err, AxisError::InvalidData(_)));
    assert_eq!(axis.range().bounds(), (-1.0, 1.0));
    assert_eq!(axis.renderer().frames_rendered, 1);
}

#[test]
fn doubling_height_doubles_displacement_from_center() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 20).expect("axis init");
    axis.set_range(5.0, -5.0).expect("set range");

    let range = axis.range();
    let short = range.value_to_pixel_y(1.0, axis.viewport());
    let short_displacement = axis.viewport().center_y() - short;

    axis.set_size(20, 40).expect("set size");
    let tall = range.value_to_pixel_y(1.0, axis.viewport());
    let tall_displacement = axis.viewport().center_y() - tall;

    assert_eq!(short_displacement, 2);
    assert_eq!(tall_displacement, 2 * short_displacement);
    assert_eq!(axis.renderer().viewport, Viewport::new(20, 40));
}

#[test]
fn zero_value_sits_on_vertical_center() {
    let axis = AxisRenderer::with_defaults(NullRenderer::default(), 30, 240).expect("axis init");
    let ticks = axis.build_ticks();

    let zero = ticks
        .iter()
        .find(|tick| tick.level == 0 && tick.value == 0.0)
        .expect("zero tick at level 0");
    assert_eq!(zero.pixel_y, 120);
    assert_eq!(zero.line_length, 30);
}

#[test]
fn labelled_level_is_drawn_last_with_full_width_lines() {
    let axis = AxisRenderer::with_defaults(NullRenderer::default(), 40, 400).expect("axis init");
    let ticks = axis.build_ticks();

    let levels: Vec<usize> = ticks.iter().map(|tick| tick.level).collect();
    let mut sorted = levels.clone();
    sorted.sort_unstable_by(|left, right| right.cmp(left));
    assert_eq!(levels, sorted, "faint levels must come first");

    for tick in ticks.iter().filter(|tick| tick.level == 0) {
        let label = tick.label.as_ref().expect("level 0 is labelled");
        assert_abs_diff_eq!(label.x + label.width, 40.0, epsilon = 1e-9);
        let expected = if tick.value <= 0.0 {
            LabelPlacement::Above
        } else {
            LabelPlacement::Below
        };
        assert_eq!(label.placement, expected);
    }
    assert!(
        ticks
            .iter()
            .filter(|tick| tick.level > 0)
            .all(|tick| tick.label.is_none())
    );
}

#[test]
fn frame_counts_match_ticks_and_labels() {
    let axis = AxisRenderer::with_defaults(NullRenderer::default(), 40, 400).expect("axis init");
    let ticks = axis.build_ticks();
    let labels = ticks.iter().filter(|tick| tick.label.is_some()).count();

    let renderer = axis.into_renderer();
    assert_eq!(renderer.last_line_count, ticks.len());
    assert_eq!(renderer.last_text_count, labels);
    assert!(labels > 0);
}

#[test]
fn degenerate_range_collapses_ticks_to_center() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 100).expect("axis init");
    axis.set_range(3.0, 3.0).expect("degenerate range still draws");

    let ticks = axis.build_ticks();
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|tick| tick.pixel_y == 50));
}

#[test]
fn zero_height_draws_nothing() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 100).expect("axis init");
    axis.set_size(20, 0).expect("zero height still redraws");

    assert!(axis.build_ticks().is_empty());
    let renderer = axis.renderer();
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn minute_spaced_ticks_use_minute_labels() {
    let config = AxisRendererConfig::new(Viewport::new(40, 120)).with_range(0.0, 1_200.0);
    let axis = AxisRenderer::new(
        NullRenderer::default(),
        StepTickSource::new(TickStepKind::Time),
        config,
    )
    .expect("axis init");

    let labels: Vec<String> = axis
        .build_ticks()
        .into_iter()
        .filter_map(|tick| tick.label)
        .map(|label| label.text)
        .collect();
    assert!(!labels.is_empty());
    assert!(labels.iter().all(|text| text.contains(':')), "{labels:?}");
}

#[test]
fn second_spaced_ticks_use_decimal_labels() {
    let axis = AxisRenderer::with_defaults(NullRenderer::default(), 40, 200).expect("axis init");
    let labels: Vec<String> = axis
        .build_ticks()
        .into_iter()
        .filter_map(|tick| tick.label)
        .map(|label| label.text)
        .collect();

    assert!(labels.contains(&"0.00".to_owned()), "{labels:?}");
    assert!(labels.iter().all(|text| !text.contains(':')));
}

#[test]
fn style_changes_redraw_with_new_colors() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 200).expect("axis init");
    let mut style = AxisStyle::default();
    style.label_color = graph_values::render::Color::rgb(1.0, 0.0, 0.0);
    axis.set_style(style).expect("set style");

    let frame = axis.renderer().last_frame.clone().expect("frame");
    assert!(!frame.texts.is_empty());
    assert!(frame.texts.iter().all(|text| text.color == style.label_color));
}

#[test]
fn invalid_style_is_rejected() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 200).expect("axis init");
    let style = AxisStyle {
        line_stroke_width: -1.0,
        ..AxisStyle::default()
    };

    assert!(axis.set_style(style).is_err());
    assert_eq!(axis.style(), AxisStyle::default());
}

#[test]
fn tick_spacing_changes_are_applied_on_next_pass() {
    let mut axis = AxisRenderer::with_defaults(NullRenderer::default(), 20, 400).expect("axis init");
    let before = axis.tick_source().step_at(0);

    axis.configure_tick_source(|source| source.set_tick_spacing(40.0, 120.0))
        .expect("configure spacing");

    let after = axis.tick_source().step_at(0);
    assert!(after > before, "wider spacing must pick a coarser step");
    assert_eq!(axis.renderer().frames_rendered, 2);
}
