use super::*;
use flo_island_boolean::bezier::intersection::*;

#[test]
fn find_intersections_between_arch_and_valley() {
    let mut intersections = curve_intersects_curve_bbox(&arch(), &valley(), 0.01, 20);
    intersections.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap());

    assert!(intersections.len() == 2);

    // Both curves have the same x coordinate at the same t, so they meet at the same t value on each
    assert!((intersections[0].0 - 0.2113).abs() < 0.01);
    assert!((intersections[0].1 - 0.2113).abs() < 0.01);
    assert!((intersections[1].0 - 0.7887).abs() < 0.01);
    assert!((intersections[1].1 - 0.7887).abs() < 0.01);
}

#[test]
fn intersection_points_are_on_both_curves() {
    let intersections = curve_intersects_curve_bbox(&arch(), &valley(), 0.001, 20);

    assert!(intersections.len() == 2);

    for (t1, t2) in intersections {
        let p1 = arch().point_at_pos(t1);
        let p2 = valley().point_at_pos(t2);

        assert!(p1.distance_to(&p2) < 0.005);
        assert!((p1.y() - 0.5).abs() < 0.005);
    }
}

#[test]
fn separate_curves_do_not_intersect() {
    let high_arch = bezier::Curve::from_points(Coord2(0.0, 2.0), (Coord2(0.0, 3.0), Coord2(1.0, 3.0)), Coord2(1.0, 2.0));

    assert!(curve_intersects_curve_bbox(&arch(), &high_arch, 0.01, 20).len() == 0);
}

#[test]
fn curves_that_cross_once() {
    // A curve that rises from below the arch to above it
    let rising          = bezier::Curve::from_points(Coord2(0.0, -0.5), (Coord2(0.3, 0.0), Coord2(0.7, 1.0)), Coord2(1.0, 1.5));
    let intersections   = curve_intersects_curve_bbox(&arch(), &rising, 0.001, 20);

    assert!(intersections.len() == 1);
    assert!(arch().point_at_pos(intersections[0].0).distance_to(&rising.point_at_pos(intersections[0].1)) < 0.005);
}

#[test]
fn intersections_at_shared_end_points() {
    // Two curves that meet at their start point
    let curve1 = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.0), Coord2(2.0, 2.0)), Coord2(3.0, 0.0));
    let curve2 = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, -2.0), Coord2(2.0, -2.0)), Coord2(3.0, -3.0));

    let intersections = curve_intersects_curve_bbox(&curve1, &curve2, 0.01, 20);

    assert!(intersections.len() >= 1);
    assert!(intersections.iter().any(|(t1, t2)| *t1 < 0.01 && *t2 < 0.01));
}

#[test]
fn sections_that_do_not_converge_are_not_intersections() {
    // The bounding boxes of these curves overlap but the curves themselves do not meet
    let wide_arch   = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(0.0, 10.0), Coord2(10.0, 10.0)), Coord2(10.0, 0.0));
    let loop_curve  = bezier::Curve::from_points(Coord2(5.0, 1.0), (Coord2(8.0, 1.0), Coord2(8.0, -1.0)), Coord2(5.0, -1.0));

    assert!(curve_intersects_curve_bbox(&wide_arch, &loop_curve, 0.001, 0).len() == 0);
    assert!(curve_intersects_curve_bbox(&wide_arch, &loop_curve, 0.001, 20).len() == 0);
}

#[test]
fn running_out_of_depth_finds_nothing() {
    assert!(curve_intersects_curve_bbox(&arch(), &valley(), 0.001, 3).len() == 0);
    assert!(curve_intersects_curve_bbox(&arch(), &valley(), 0.001, 20).len() == 2);
}
