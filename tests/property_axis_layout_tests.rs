use graph_values::api::{AxisConfig, AxisStyle, build_axis_ticks, line_length_for_strength};
use graph_values::core::{DetailLevel, ValueRange, Viewport};
use graph_values::render::EstimatedTextMeasurer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_range_is_ordered_and_keeps_bounds(
        a in -1_000_000.0f64..1_000_000.0,
        b in -1_000_000.0f64..1_000_000.0
    ) {
        let range = ValueRange::new(a, b);
        prop_assert!(range.start() <= range.end());
        prop_assert_eq!(range.start(), a.min(b));
        prop_assert_eq!(range.end(), a.max(b));
    }

    #[test]
    fn zero_maps_to_center_for_symmetric_range(height in 0u32..4_096) {
        let range = ValueRange::new(-1.0, 1.0);
        let viewport = Viewport::new(20, height);
        prop_assert_eq!(range.value_to_pixel_y(0.0, viewport), (height / 2) as i32);
    }

    #[test]
    fn larger_values_never_map_lower(
        start in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        lo_factor in 0.0f64..1.0,
        hi_factor in 0.0f64..1.0,
        height in 1u32..4_096
    ) {
        let range = ValueRange::new(start, start + span);
        let viewport = Viewport::new(20, height);
        let (lo, hi) = if lo_factor <= hi_factor { (lo_factor, hi_factor) } else { (hi_factor, lo_factor) };
        let lo_value = start + lo * span;
        let hi_value = start + hi * span;

        let lo_y = range.value_to_pixel_y(lo_value, viewport);
        let hi_y = range.value_to_pixel_y(hi_value, viewport);
        prop_assert!(hi_y <= lo_y);

        let pixel_gap = (hi_value - lo_value) * range.pixels_per_unit(height);
        if pixel_gap >= 2.5 {
            prop_assert!(hi_y < lo_y);
        }
    }

    #[test]
    fn line_length_matches_rounded_width_share(width in 0u32..2_048, strength in 0.0f64..=1.0) {
        let expected = (f64::from(width) * strength).round() as i32;
        prop_assert_eq!(line_length_for_strength(width, strength), expected);
    }

    #[test]
    fn layout_never_fails_on_degenerate_inputs(
        value in -100.0f64..100.0,
        height in 0u32..512,
        width in 0u32..64
    ) {
        let config = AxisConfig::new(Viewport::new(width, height), ValueRange::new(value, value));
        let levels = vec![DetailLevel::new(vec![value - 1.0, value, value + 1.0], 1.0)];
        let ticks = build_axis_ticks(config, &levels, &AxisStyle::default(), &EstimatedTextMeasurer);

        prop_assert_eq!(ticks.len(), 3);
        for tick in ticks {
            prop_assert_eq!(tick.pixel_y, (height / 2) as i32);
        }
    }
}
