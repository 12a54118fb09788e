use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use sparkline_rs::core::{
    SPARKLINE_GEOMETRY, Series, ValueDomain, build_coordinates, horizontal_step,
    normalize_series, segments_between,
};

#[test]
fn single_point_normalizes_to_two_equal_coordinates() {
    let series = normalize_series(&Series::new(vec![10.0])).expect("normalized");
    let domain = ValueDomain::resolve(series.points(), None, None).expect("domain");
    let coordinates = build_coordinates(&series, domain, SPARKLINE_GEOMETRY);

    assert_eq!(coordinates.len(), 2);
    assert_eq!(coordinates[0].y, coordinates[1].y);
    assert_abs_diff_eq!(coordinates[0].x, 34.0, epsilon = 1e-9);
    assert_abs_diff_eq!(coordinates[1].x, 312.0, epsilon = 1e-9);
}

#[test]
fn coordinates_are_index_aligned_and_evenly_spaced() {
    let points: Vec<f64> = (1..=10).map(f64::from).collect();
    let series = normalize_series(&Series::new(points)).expect("normalized");
    let domain = ValueDomain::resolve(series.points(), None, None).expect("domain");
    assert_eq!(domain, ValueDomain::new(1.0, 10.0));

    let coordinates = build_coordinates(&series, domain, SPARKLINE_GEOMETRY);
    assert_eq!(coordinates.len(), 10);
    let step = horizontal_step(10, SPARKLINE_GEOMETRY);
    assert_abs_diff_eq!(step, 278.0 / 9.0, epsilon = 1e-12);
    for (index, coordinate) in coordinates.iter().enumerate() {
        assert_abs_diff_eq!(coordinate.x, 34.0 + index as f64 * step, epsilon = 1e-9);
        assert_abs_diff_eq!(coordinate.y, 98.0 - 10.0 * index as f64, epsilon = 1e-9);
    }
}

#[test]
fn step_never_divides_by_zero() {
    assert_eq!(horizontal_step(0, SPARKLINE_GEOMETRY), 278.0);
    assert_eq!(horizontal_step(1, SPARKLINE_GEOMETRY), 278.0);
    assert_eq!(horizontal_step(2, SPARKLINE_GEOMETRY), 278.0);
}

#[test]
fn segments_join_consecutive_coordinates() {
    let series = normalize_series(&Series::new(vec![0.0, 50.0, 100.0])).expect("normalized");
    let domain = ValueDomain::new(0.0, 100.0);
    let coordinates = build_coordinates(&series, domain, SPARKLINE_GEOMETRY);
    let segments = segments_between(&coordinates);

    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].x2, segments[0].y2), (segments[1].x1, segments[1].y1));
    assert_abs_diff_eq!(segments[0].y1, 98.0, epsilon = 1e-9);
    assert_abs_diff_eq!(segments[1].y2, 8.0, epsilon = 1e-9);
}

#[test]
fn time_labels_follow_bucket_timestamps() {
    let times = [
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).single().expect("time"),
        Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 5).single().expect("time"),
    ];
    let series = Series::new(vec![1.0, 2.0]).with_time_labels(&times);
    assert_eq!(series.labels, vec!["09:00:00".to_owned(), "10:30:05".to_owned()]);
}
