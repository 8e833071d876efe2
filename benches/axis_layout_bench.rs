use criterion::{Criterion, criterion_group, criterion_main};
use graph_values::api::{AxisConfig, AxisRenderer, AxisStyle, build_axis_ticks};
use graph_values::core::{StepTickSource, TickSource, ValueRange, Viewport};
use graph_values::render::{EstimatedTextMeasurer, NullRenderer};
use std::hint::black_box;

fn bench_layout_pass_tall_axis(c: &mut Criterion) {
    let viewport = Viewport::new(40, 2_160);
    let range = ValueRange::new(-3_600.0, 3_600.0);
    let mut source = StepTickSource::default();
    source.set_range(range.start(), range.end(), viewport.height);
    let levels = source.detail_levels();
    let style = AxisStyle::default();

    c.bench_function("axis_layout_pass_2160px", |b| {
        b.iter(|| {
            let _ = build_axis_ticks(
                black_box(AxisConfig::new(viewport, range)),
                black_box(&levels),
                black_box(&style),
                &EstimatedTextMeasurer,
            );
        })
    });
}

fn bench_range_drag_redraw(c: &mut Criterion) {
    let mut axis =
        AxisRenderer::with_defaults(NullRenderer::default(), 40, 1_080).expect("axis init");
    let mut offset = 0.0;

    c.bench_function("axis_set_range_redraw_1080px", |b| {
        b.iter(|| {
            offset += 0.25;
            axis.set_range(black_box(-10.0 + offset), black_box(10.0 + offset))
                .expect("redraw");
        })
    });
}

criterion_group!(benches, bench_layout_pass_tall_axis, bench_range_drag_redraw);
criterion_main!(benches);
