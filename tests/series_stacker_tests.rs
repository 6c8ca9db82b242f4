use chart_geometry::core::{Series, StackGroup, StackKey, group_by_stack};

fn stacked(name: &str, stack: &str) -> Series {
    Series::new(name, vec![1.0]).with_stack(stack)
}

fn single(name: &str) -> Series {
    Series::new(name, vec![1.0])
}

#[test]
fn groups_follow_first_seen_order() {
    let series = vec![
        stacked("a", "s1"),
        single("b"),
        stacked("c", "s2"),
        stacked("d", "s1"),
        single("e"),
        stacked("f", "s2"),
    ];

    let groups = group_by_stack(&series);
    assert_eq!(
        groups,
        vec![
            StackGroup {
                key: StackKey::Stack("s1".to_owned()),
                series: vec![0, 3],
            },
            StackGroup {
                key: StackKey::Single(1),
                series: vec![1],
            },
            StackGroup {
                key: StackKey::Stack("s2".to_owned()),
                series: vec![2, 5],
            },
            StackGroup {
                key: StackKey::Single(4),
                series: vec![4],
            },
        ]
    );
}

#[test]
fn ids_are_not_sorted() {
    let series = vec![stacked("z", "zeta"), stacked("a", "alpha"), stacked("y", "zeta")];

    let keys: Vec<StackKey> = group_by_stack(&series)
        .into_iter()
        .map(|group| group.key)
        .collect();
    assert_eq!(
        keys,
        vec![
            StackKey::Stack("zeta".to_owned()),
            StackKey::Stack("alpha".to_owned()),
        ]
    );
}

#[test]
fn empty_stack_id_is_a_singleton() {
    let series = vec![stacked("a", ""), stacked("b", "")];

    let groups = group_by_stack(&series);
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|group| !group.is_stacked() && group.len() == 1));
}

#[test]
fn hidden_series_still_belong_to_their_group() {
    let series = vec![stacked("a", "s").with_show(false), stacked("b", "s")];
    let groups = group_by_stack(&series);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].series, vec![0, 1]);
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group_by_stack(&[]).is_empty());
}

#[test]
fn grouping_is_deterministic() {
    let series = vec![stacked("a", "x"), single("b"), stacked("c", "x")];
    assert_eq!(group_by_stack(&series), group_by_stack(&series));
}
