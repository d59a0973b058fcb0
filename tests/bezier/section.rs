use super::*;

#[test]
fn section_follows_the_original_curve() {
    let curve   = arch();
    let section = bezier::CurveSection::new(&curve, 0.25, 0.75);

    for x in 0..=10 {
        let t = (x as f32)/10.0;

        assert!(section.point_at_pos(t).distance_to(&curve.point_at_pos(0.25 + t*0.5)) < 0.0001);
    }
}

#[test]
fn section_t_values_map_to_the_original_curve() {
    let curve   = arch();
    let section = curve.section(0.25, 0.75);

    assert!(approx_equal(section.t_for_t(0.0), 0.25));
    assert!(approx_equal(section.t_for_t(0.5), 0.5));
    assert!(approx_equal(section.t_for_t(1.0), 0.75));
    assert!(approx_equal(section.section_t_for_original_t(0.5), 0.5));
    assert!(approx_equal(section.section_t_for_original_t(0.25), 0.0));
}

#[test]
fn subsection_is_relative_to_the_original_curve() {
    let curve       = arch();
    let section     = curve.section(0.25, 0.75);
    let subsection  = section.subsection(0.5, 1.0);

    let (t_min, t_max) = subsection.original_curve_t_values();

    assert!(approx_equal(t_min, 0.5));
    assert!(approx_equal(t_max, 0.75));
    assert!(subsection.start_point().distance_to(&curve.point_at_pos(0.5)) < 0.0001);
    assert!(subsection.end_point().distance_to(&curve.point_at_pos(0.75)) < 0.0001);
}

#[test]
fn section_points_match_subdivision() {
    let (w1, w2, w3, w4)    = (Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0));
    let (p1, _p2, _p3, p4)  = bezier::section_points4(0.2, 0.6, w1, w2, w3, w4);

    assert!(p1.distance_to(&bezier::basis(0.2, w1, w2, w3, w4)) < 0.0001);
    assert!(p4.distance_to(&bezier::basis(0.6, w1, w2, w3, w4)) < 0.0001);
}

#[test]
fn tiny_section() {
    let curve = arch();

    assert!(curve.section(0.5, 0.5).is_tiny());
    assert!(!curve.section(0.5, 0.6).is_tiny());
}
