use chart_geometry::api::{ChartEngine, ChartEngineConfig};
use chart_geometry::core::{
    AllActive, Axis, AxisRange, BarLayoutInput, BarOrientation, ContainerSize, CoordinateRect,
    Indicator, RadarConfig, RadarLayout, Series, layout_bars,
};
use chart_geometry::render::{NullSink, Palette};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_stacked_bar_layout_10k(c: &mut Criterion) {
    let x_axes = [Axis::category(10_000)];
    let y_axes = [Axis::value(AxisRange::new(0.0, 400.0))];
    let plot = CoordinateRect::new(40.0, 30.0, 1_800.0, 1_000.0);
    let input = BarLayoutInput::new(BarOrientation::Vertical, plot, &x_axes, &y_axes);

    let series: Vec<Series> = (0..4)
        .map(|s| {
            let values = (0..10_000)
                .map(|i| ((i * (s + 3)) % 97) as f64)
                .collect();
            let stack = if s % 2 == 0 { "even" } else { "odd" };
            Series::new(format!("series-{s}"), values).with_stack(stack)
        })
        .collect();

    c.bench_function("stacked_bar_layout_10k", |b| {
        b.iter(|| {
            let _ = layout_bars(black_box(&input), black_box(&series), &AllActive)
                .expect("layout should succeed");
        })
    });
}

fn bench_radar_rings_24(c: &mut Criterion) {
    let indicators = (0..24)
        .map(|i| Indicator::new(format!("indicator-{i}"), 0.0, 100.0))
        .collect();
    let mut layout = RadarLayout::new(RadarConfig::new(indicators));
    layout.update_center(1_600.0, 900.0).expect("geometry");

    let series: Vec<Series> = (0..32)
        .map(|s| {
            let values = (0..24).map(|i| ((i * 7 + s * 13) % 100) as f64).collect();
            Series::new(format!("series-{s}"), values)
        })
        .collect();
    let palette = Palette::default();

    c.bench_function("radar_rings_24x32", |b| {
        b.iter(|| {
            let mut sink = NullSink::default();
            let _ = layout
                .emit_series(black_box(&series), &AllActive, &mut sink, &palette)
                .expect("rings should emit");
        })
    });
}

fn bench_engine_snapshot_json(c: &mut Criterion) {
    let config = ChartEngineConfig::new(ContainerSize::new(1_600.0, 900.0));
    let mut engine = ChartEngine::new(NullSink::default(), config).expect("engine init");
    let x_axes = [Axis::category(2_000)];
    let y_axes = [Axis::value(AxisRange::new(0.0, 100.0))];
    let series = vec![Series::new(
        "bars",
        (0..2_000).map(|i| (i % 100) as f64).collect(),
    )];
    engine
        .render_bars(&series, &x_axes, &y_axes, &AllActive, &Palette::default())
        .expect("bar pass");

    c.bench_function("engine_snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_stacked_bar_layout_10k,
    bench_radar_rings_24,
    bench_engine_snapshot_json
);
criterion_main!(benches);
