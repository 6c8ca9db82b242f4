use chart_geometry::core::{
    AllActive, Axis, AxisRange, BarLayoutInput, BarOrientation, BarPolicy, CoordinateRect, Series,
    layout_bars,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stacked_members_are_contiguous_and_sum_to_the_accumulation(
        columns in prop::collection::vec(prop::collection::vec(0.0f64..50.0, 4), 1..6),
        height in 50.0f64..1_000.0
    ) {
        let series: Vec<Series> = columns
            .iter()
            .enumerate()
            .map(|(i, values)| Series::new(format!("s{i}"), values.clone()).with_stack("total"))
            .collect();
        let x_axes = [Axis::category(4)];
        let y_axes = [Axis::value(AxisRange::new(0.0, 300.0))];
        let plot = CoordinateRect::new(0.0, 0.0, 400.0, height);
        let input = BarLayoutInput::new(BarOrientation::Vertical, plot, &x_axes, &y_axes);

        let pass = layout_bars(&input, &series, &AllActive).expect("layout");
        prop_assert_eq!(pass.groups.len(), 1);
        let group = &pass.groups[0];

        for data_index in 0..4 {
            let mut expected_origin = 0.0;
            for layout in &group.series {
                let placement = layout.placements[data_index];
                prop_assert!((placement.origin_offset - expected_origin).abs() <= 1e-9);
                expected_origin = placement.far();
            }
            prop_assert!((group.accumulated[&data_index] - expected_origin).abs() <= 1e-9);
        }
    }

    #[test]
    fn side_by_side_groups_step_by_width_plus_space(
        group_count in 1usize..8,
        width in 100.0f64..2_000.0,
        bar_width in 0.05f64..1.0,
        space in 0.0f64..20.0
    ) {
        let series: Vec<Series> = (0..group_count)
            .map(|i| Series::new(format!("s{i}"), vec![1.0, 2.0]))
            .collect();
        let x_axes = [Axis::category(2)];
        let y_axes = [Axis::value(AxisRange::new(0.0, 10.0))];
        let plot = CoordinateRect::new(0.0, 0.0, width, 100.0);
        let policy = BarPolicy { in_same_bar: false, bar_width, space };
        let input = BarLayoutInput::new(BarOrientation::Vertical, plot, &x_axes, &y_axes)
            .with_policy(policy);

        let pass = layout_bars(&input, &series, &AllActive).expect("layout");
        let resolved = policy.resolve_bar_width(width / 2.0);
        let offsets: Vec<f64> = pass
            .series()
            .map(|layout| layout.placements[0].lateral_offset)
            .collect();

        prop_assert_eq!(offsets.len(), group_count);
        for pair in offsets.windows(2) {
            prop_assert!((pair[1] - pair[0] - (resolved + space)).abs() <= 1e-9);
        }
        let first = offsets[0];
        let last = offsets[group_count - 1] + resolved;
        // The row of bars is centered inside its slot.
        prop_assert!((first - (width / 2.0 - last)).abs() <= 1e-9);
    }
}
