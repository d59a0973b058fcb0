use super::shapes::*;

use flo_island_boolean::*;
use flo_island_boolean::bezier::path::*;

#[test]
fn overlapping_squares_intersect_twice() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(1.0, 1.0), Coord2(3.0, 3.0));

    let accuracy    = graph.accuracy();
    let samples     = graph.island_intersections(square1, square2, &accuracy);

    assert!(samples.len() == 2);
    assert!(samples.iter().all(|sample| sample.a_is_line && sample.b_is_line));

    let positions   = samples.iter().map(|sample| graph.segment(sample.node_a).unwrap().point_at_pos(sample.t_a)).collect::<Vec<_>>();
    assert!(positions.iter().any(|pos| pos.distance_to(&Coord2(2.0, 1.0)) < 0.001));
    assert!(positions.iter().any(|pos| pos.distance_to(&Coord2(1.0, 2.0)) < 0.001));
}

#[test]
fn segment_intersection_between_two_edges() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(1.0, 1.0), Coord2(3.0, 3.0));

    // Right edge of the first square and the bottom edge of the second
    let right_edge  = graph.next(square1).unwrap();
    let accuracy    = graph.accuracy();
    let samples     = graph.segment_intersections(right_edge, square2, &accuracy);

    assert!(samples.len() == 1);
    assert!((samples[0].t_a - 0.5).abs() < 0.0001);
    assert!((samples[0].t_b - 0.5).abs() < 0.0001);

    let swapped     = samples[0].swapped();
    assert!(swapped.node_a == square2);
    assert!(swapped.node_b == right_edge);
}

#[test]
fn segment_does_not_intersect_itself() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square      = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let accuracy    = graph.accuracy();

    assert!(graph.segment_intersections(square, square, &accuracy).len() == 0);
}

#[test]
fn neighbouring_segments_do_not_intersect_at_their_join() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square      = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let next        = graph.next(square).unwrap();
    let accuracy    = graph.accuracy();

    assert!(graph.segment_intersections(square, next, &accuracy).len() == 0);
    assert!(graph.segment_intersections(next, square, &accuracy).len() == 0);
}

#[test]
fn separate_squares_do_not_intersect() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(5.0, 5.0), Coord2(7.0, 7.0));
    let accuracy    = graph.accuracy();

    assert!(graph.island_intersections(square1, square2, &accuracy).len() == 0);
}

#[test]
fn overlapping_circles_intersect_twice() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle1     = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 4.0);
    let circle2     = circle(&mut graph, path_loop, Coord2(7.0, 5.0), 4.0);
    let accuracy    = graph.accuracy();

    let samples     = graph.island_intersections(circle1, circle2, &accuracy);

    assert!(samples.len() == 2);

    for sample in samples {
        let pos_a = graph.segment(sample.node_a).unwrap().point_at_pos(sample.t_a);
        let pos_b = graph.segment(sample.node_b).unwrap().point_at_pos(sample.t_b);

        assert!(pos_a.distance_to(&pos_b) < 0.01);
        assert!((pos_a.x() - 6.0).abs() < 0.01);
        assert!((pos_a.y() - 5.0).abs() > 3.8);
    }
}

#[test]
fn bow_tie_intersects_itself() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let bow_tie     = IslandBuilder::start(Coord2(0.0, 0.0))
        .line_to(Coord2(2.0, 2.0))
        .line_to(Coord2(2.0, 0.0))
        .line_to(Coord2(0.0, 2.0))
        .build(&mut graph, path_loop)
        .unwrap();
    let accuracy    = graph.accuracy();

    let samples     = graph.island_self_intersections(bow_tie, &accuracy);

    assert!(samples.len() == 1);
    assert!(graph.segment(samples[0].node_a).unwrap().point_at_pos(samples[0].t_a).distance_to(&Coord2(1.0, 1.0)) < 0.001);
}

#[test]
fn rectangle_does_not_intersect_itself() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square      = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let accuracy    = graph.accuracy();

    assert!(graph.island_self_intersections(square, &accuracy).len() == 0);
}

#[test]
fn samples_at_the_end_of_a_segment_are_merged() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(1.0, 1.0), Coord2(3.0, 3.0));
    let next        = graph.next(square1).unwrap();
    let accuracy    = graph.accuracy();

    // The same point, described as the end of one segment and the start of the next
    let at_end      = IntersectionSample { node_a: square1, t_a: 1.0, a_is_line: true, node_b: square2, t_b: 0.5, b_is_line: true };
    let at_start    = IntersectionSample { node_a: next, t_a: 0.0, a_is_line: true, node_b: square2, t_b: 0.5, b_is_line: true };

    let samples     = graph.dedup_samples(vec![at_end, at_start], &accuracy);

    assert!(samples.len() == 1);
    assert!(samples[0].node_a == next);
    assert!(samples[0].t_a == 0.0);
}
