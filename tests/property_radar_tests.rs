use chart_geometry::core::{
    AllActive, Indicator, IndicatorPosition, RadarConfig, RadarLayout, RadarShape, Series,
    indicator_angle, signed_area,
};
use chart_geometry::render::{Palette, PolygonFrame};
use proptest::prelude::*;
use std::f64::consts::TAU;

fn config(count: usize, radius: f64) -> RadarConfig {
    RadarConfig::new(
        (0..count)
            .map(|i| Indicator::new(format!("i{i}"), 0.0, 100.0))
            .collect(),
    )
    .with_radius(radius)
    .with_center(0.5, 0.5)
}

proptest! {
    #[test]
    fn vertex_angles_are_evenly_spaced(
        (count, index) in (3usize..24).prop_flat_map(|count| (Just(count), 0..count - 1))
    ) {
        let step = indicator_angle(IndicatorPosition::Vertex, index + 1, count)
            - indicator_angle(IndicatorPosition::Vertex, index, count);
        prop_assert!((step - TAU / count as f64).abs() <= 1e-9);

        let between = indicator_angle(IndicatorPosition::Between, index, count)
            - indicator_angle(IndicatorPosition::Vertex, index, count);
        prop_assert!((between - TAU / (2.0 * count as f64)).abs() <= 1e-9);
    }

    #[test]
    fn vertices_sit_on_the_outer_radius(
        count in 3usize..24,
        radius in 10.0f64..500.0,
        width in 100.0f64..2_000.0,
        height in 100.0f64..2_000.0
    ) {
        let mut layout = RadarLayout::new(config(count, radius));
        let geometry = layout.update_center(width, height).expect("layout");

        prop_assert_eq!(geometry.vertex_positions.len(), count);
        for vertex in &geometry.vertex_positions {
            prop_assert!((vertex.distance(geometry.center) - radius).abs() <= 1e-6);
        }
    }

    #[test]
    fn between_polygon_data_radius_is_the_apothem(count in 3usize..24, radius in 10.0f64..500.0) {
        let mut layout = RadarLayout::new(
            config(count, radius).with_position(IndicatorPosition::Between),
        );
        let geometry = layout.update_center(1_000.0, 1_000.0).expect("layout");

        prop_assert!(geometry.data_radius < geometry.radius);
        prop_assert!(geometry.data_radius > 0.0);

        let mut circle = RadarLayout::new(
            config(count, radius)
                .with_position(IndicatorPosition::Between)
                .with_shape(RadarShape::Circle),
        );
        let geometry = circle.update_center(1_000.0, 1_000.0).expect("layout");
        prop_assert!((geometry.data_radius - geometry.radius).abs() <= 1e-12);
    }

    #[test]
    fn emitted_rings_are_counter_clockwise(
        values in prop::collection::vec(1.0f64..100.0, 3..12),
        position_between in any::<bool>()
    ) {
        let position = if position_between {
            IndicatorPosition::Between
        } else {
            IndicatorPosition::Vertex
        };
        let mut layout = RadarLayout::new(config(values.len(), 200.0).with_position(position));
        layout.update_center(800.0, 800.0).expect("layout");

        let mut frame = PolygonFrame::new();
        let emitted = layout
            .emit_series(&[Series::new("s", values)], &AllActive, &mut frame, &Palette::default())
            .expect("emit");

        prop_assert_eq!(emitted, 1);
        prop_assert!(signed_area(&frame.polygons[0].vertices) > 0.0);
    }
}
