use super::shapes::*;

use flo_island_boolean::*;
use flo_island_boolean::bezier::path::*;

#[test]
fn rectangle_segments_are_lines() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let rect        = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 1.0));

    let segments    = graph.island_segments(rect);

    assert!(segments.len() == 4);
    assert!(segments.iter().all(|(_node, segment)| segment.is_line()));
    assert!(segments[0].1 == PathSegment::Line(Coord2(0.0, 0.0), Coord2(2.0, 0.0)));
    assert!(segments[3].1 == PathSegment::Line(Coord2(0.0, 1.0), Coord2(0.0, 0.0)));
}

#[test]
fn circle_segments_are_curves() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);

    let segment     = graph.segment(circle).unwrap();

    assert!(!segment.is_line());
    assert!(segment.start_point() == Coord2(6.0, 5.0));
    assert!(segment.end_point() == Coord2(5.0, 6.0));
    assert!(segment.control_points().0.distance_to(&Coord2(6.0, 5.5522847)) < 0.0001);

    // Points on the arc are about 1 unit from the center
    for x in 0..=10 {
        let point = segment.point_at_pos((x as f32)/10.0);
        assert!((point.distance_to(&Coord2(5.0, 5.0)) - 1.0).abs() < 0.001);
    }
}

#[test]
fn line_control_points_are_evenly_spaced() {
    let line                = PathSegment::Line(Coord2(0.0, 0.0), Coord2(3.0, 6.0));
    let (w1, w2, w3, w4)    = line.points();

    assert!(w1 == Coord2(0.0, 0.0));
    assert!(w2.distance_to(&Coord2(1.0, 2.0)) < 0.0001);
    assert!(w3.distance_to(&Coord2(2.0, 4.0)) < 0.0001);
    assert!(w4 == Coord2(3.0, 6.0));

    assert!(line.point_at_pos(0.5) == Coord2(1.5, 3.0));
    assert!(line.to_curve().point_at_pos(0.5).distance_to(&Coord2(1.5, 3.0)) < 0.0001);
}

#[test]
fn segment_with_one_tangent_is_a_curve() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();

    let n1          = graph.add_node(path_loop, Coord2(0.0, 0.0), NodeTangents { tangent_in: Coord2(0.0, 0.0), tangent_out: Coord2(0.0, 1.0), use_in: false, use_out: true });
    let n2          = graph.add_node(path_loop, Coord2(1.0, 0.0), NodeTangents::straight());
    graph.link(n1, n2);

    let segment     = graph.segment(n1).unwrap();

    assert!(!segment.is_line());
    assert!(segment.control_points() == (Coord2(0.0, 1.0), Coord2(1.0, 0.0)));
    assert!(graph.segment(n2).is_none());
}

#[test]
fn subdivide_line_segment() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let rect        = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 1.0));

    let split       = graph.subdivide_segment(rect, 0.25).unwrap();

    assert!(split.position.distance_to(&Coord2(0.5, 0.0)) < 0.0001);
    assert!(split.tangents == NodeTangents::straight());
}

#[test]
fn subdivide_curve_segment() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);
    let segment     = graph.segment(circle).unwrap();

    let split       = graph.subdivide_segment(circle, 0.5).unwrap();

    assert!(split.position.distance_to(&segment.point_at_pos(0.5)) < 0.0001);
    assert!(split.tangents.use_in && split.tangents.use_out);

    // The tangents either side of the split point in opposite directions
    assert!(split.tangents.tangent_in.dot(&split.tangents.tangent_out) < 0.0);
    assert!(split.start_tangent_out.magnitude() < 0.5522847);
}

#[test]
fn subdivide_segment_at_many_points() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);
    let segment     = graph.segment(circle).unwrap();

    let sections    = graph.subdivide_segment_many(circle, &[0.25, 0.5, 0.75]).unwrap();

    assert!(sections.len() == 4);
    assert!(sections[0].0 == segment.start_point());
    assert!(sections[1].0.distance_to(&segment.point_at_pos(0.25)) < 0.0001);
    assert!(sections[3].3.distance_to(&segment.end_point()) < 0.0001);
}

#[test]
fn section_of_segment() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);
    let segment     = graph.segment(circle).unwrap();

    let section     = graph.segment_section(circle, 0.2, 0.6).unwrap();

    assert!(section.start_point().distance_to(&segment.point_at_pos(0.2)) < 0.0001);
    assert!(section.end_point().distance_to(&segment.point_at_pos(0.6)) < 0.0001);
    assert!(section.point_at_pos(0.5).distance_to(&segment.point_at_pos(0.4)) < 0.0001);
}
