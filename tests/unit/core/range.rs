use super::*;

#[test]
fn test_new_swaps_reversed_endpoints() {
    let r = Range::new(3, 4, 1, 2);
    assert_eq!(r.start(), Position::new(1, 2));
    assert_eq!(r.end(), Position::new(3, 4));
    assert_eq!(r, Range::new(1, 2, 3, 4));

    let same_line = Range::new(0, 9, 0, 1);
    assert_eq!(same_line.start_column(), 1);
    assert_eq!(same_line.end_column(), 9);
}

#[test]
fn test_lift() {
    assert_eq!(Range::lift(None::<&Range>), None);
    let lifted = Range::lift(Some(&[2usize, 0, 0, 5])).unwrap();
    assert_eq!(lifted, Range::new(0, 5, 2, 0));
    let r = Range::new(1, 1, 2, 2);
    assert_eq!(Range::lift(Some(&r)), Some(r));
}

#[test]
fn test_is_empty_and_multiline() {
    assert!(Range::at(Position::new(2, 3)).is_empty());
    assert!(!Range::new(0, 0, 0, 1).is_empty());
    assert!(!Range::new(0, 5, 0, 9).spans_multiple_lines());
    assert!(Range::new(0, 5, 1, 0).spans_multiple_lines());
}

#[test]
fn test_contains_position_is_inclusive() {
    let r = Range::new(1, 2, 3, 4);
    assert!(r.contains_position(Position::new(1, 2)));
    assert!(r.contains_position(Position::new(3, 4)));
    assert!(r.contains_position(Position::new(2, 100)));
    assert!(!r.contains_position(Position::new(1, 1)));
    assert!(!r.contains_position(Position::new(3, 5)));
    assert!(!r.contains_position(Position::new(0, 9)));
    assert!(!r.contains_position(Position::new(4, 0)));
}

#[test]
fn test_contains_range_reflexive_strict_irreflexive() {
    let r = Range::new(1, 2, 3, 4);
    assert!(r.contains_range(&r));
    assert!(!r.strict_contains_range(&r));

    let inner = Range::new(1, 3, 3, 3);
    assert!(r.contains_range(&inner));
    assert!(r.strict_contains_range(&inner));

    let sharing_start = Range::new(1, 2, 2, 0);
    assert!(r.contains_range(&sharing_start));
    assert!(!r.strict_contains_range(&sharing_start));

    assert!(!r.contains_range(&Range::new(0, 0, 2, 0)));
    assert!(!r.contains_range(&Range::new(2, 0, 3, 5)));
}

#[test]
fn test_contains_zero_length_ranges_at_boundaries() {
    let r = Range::new(0, 3, 1, 0);
    assert!(r.contains_range(&Range::at(Position::new(0, 3))));
    assert!(r.contains_range(&Range::at(Position::new(1, 0))));
    assert!(!r.strict_contains_range(&Range::at(Position::new(0, 3))));
    assert!(!r.strict_contains_range(&Range::at(Position::new(1, 0))));
    assert!(r.strict_contains_range(&Range::at(Position::new(0, 4))));
    assert!(!r.contains_range(&Range::at(Position::new(0, 2))));
}

#[test]
fn test_plus_range_contains_both() {
    let a = Range::new(1, 5, 2, 1);
    let b = Range::new(1, 2, 1, 8);
    let sum = a.plus_range(&b);
    assert_eq!(sum, Range::new(1, 2, 2, 1));
    assert!(sum.contains_range(&a));
    assert!(sum.contains_range(&b));

    let far = Range::new(4, 0, 5, 3);
    let sum = a.plus_range(&far);
    assert_eq!(sum, Range::new(1, 5, 5, 3));
    assert_eq!(far.plus_range(&a), sum);
}

#[test]
fn test_intersect_ranges() {
    let a = Range::new(1, 0, 3, 0);
    let b = Range::new(2, 5, 4, 0);
    assert_eq!(a.intersect_ranges(&b), Some(Range::new(2, 5, 3, 0)));
    assert_eq!(b.intersect_ranges(&a), Some(Range::new(2, 5, 3, 0)));

    let touching = Range::new(3, 0, 3, 4);
    assert_eq!(a.intersect_ranges(&touching), Some(Range::at(Position::new(3, 0))));

    let disjoint = Range::new(5, 0, 6, 0);
    assert_eq!(a.intersect_ranges(&disjoint), None);
    assert_eq!(
        Range::new(0, 0, 0, 2).intersect_ranges(&Range::new(0, 3, 0, 5)),
        None
    );
}

#[test]
fn test_intersecting_vs_touching() {
    let a = Range::new(0, 0, 0, 3);
    let b = Range::new(0, 3, 0, 6);
    assert!(Range::are_intersecting_or_touching(&a, &b));
    assert!(!Range::are_intersecting(&a, &b));

    let c = Range::new(0, 2, 0, 6);
    assert!(Range::are_intersecting(&a, &c));
    assert!(Range::are_intersecting(&c, &a));

    let d = Range::new(1, 0, 1, 1);
    assert!(!Range::are_intersecting_or_touching(&a, &d));
    assert!(!Range::are_intersecting(&d, &a));
}

#[test]
fn test_set_positions_normalize() {
    let r = Range::new(1, 0, 2, 0);
    assert_eq!(r.set_start_position(0, 4), Range::new(0, 4, 2, 0));
    assert_eq!(r.set_end_position(1, 6), Range::new(1, 0, 1, 6));
    // 新起点越过终点时两端交换
    assert_eq!(r.set_start_position(5, 0), Range::new(2, 0, 5, 0));
    assert_eq!(r.collapse_to_start(), Range::at(Position::new(1, 0)));
}

#[test]
fn test_transform() {
    let r = Range::new(1, 1, 2, 2);
    assert_eq!(r.transform(1, 2), Range::new(2, 3, 3, 4));
    assert_eq!(r.transform(-3, 0), Range::new(0, 1, 0, 2));
}

#[test]
fn test_equals_range() {
    let r = Range::new(0, 1, 0, 2);
    assert!(r.equals_range(Some(&Range::new(0, 2, 0, 1))));
    assert!(!r.equals_range(Some(&Range::new(0, 1, 0, 3))));
    assert!(!r.equals_range(None));
}

#[test]
fn test_sort_by_starts_and_ends() {
    let a = Range::new(0, 0, 2, 0);
    let b = Range::new(0, 0, 1, 0);
    let c = Range::new(0, 5, 0, 6);

    assert_eq!(
        Range::compare_ranges_using_starts(Some(&b), Some(&a)),
        Ordering::Less
    );
    assert_eq!(
        Range::compare_ranges_using_starts(Some(&c), Some(&a)),
        Ordering::Greater
    );
    assert_eq!(
        Range::compare_ranges_using_starts(None, Some(&a)),
        Ordering::Less
    );
    assert_eq!(
        Range::compare_ranges_using_starts(Some(&a), None),
        Ordering::Greater
    );
    assert_eq!(Range::compare_ranges_using_starts(None, None), Ordering::Equal);

    let mut ranges = vec![a, b, c];
    ranges.sort_by(Range::compare_ranges_using_ends);
    assert_eq!(ranges, vec![c, b, a]);
}

#[test]
fn test_display_and_serde() {
    let r = Range::new(1, 2, 3, 4);
    assert_eq!(r.to_string(), "[1,2 -> 3,4]");
    assert_eq!(serde_json::to_string(&r).unwrap(), "[1,2,3,4]");
    let reversed: Range = serde_json::from_str("[3,4,1,2]").unwrap();
    assert_eq!(reversed, r);
}
