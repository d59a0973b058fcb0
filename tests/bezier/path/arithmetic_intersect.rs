use super::shapes::*;

use flo_island_boolean::*;
use flo_island_boolean::bezier::path::*;

#[test]
fn intersect_overlapping_squares() {
    init_logging();

    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(1.0, 1.0), Coord2(3.0, 3.0));

    let result      = graph.intersection(square1, square2).unwrap();
    let combined    = result.node.unwrap();

    assert!(result.mode == BoundingMode::Collision);
    assert!(graph.is_closed(combined));
    assert!(graph.island_nodes(combined).len() == 4);
    assert!(graph.num_nodes() == 4);
    assert!((graph.signed_area(combined) - 1.0).abs() < 0.01);
    assert!(graph.point_in_island(combined, Coord2(1.5, 1.5)));
}

#[test]
fn intersection_is_symmetric() {
    init_logging();

    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(1.0, 1.0), Coord2(3.0, 3.0));

    let result      = graph.intersection(square2, square1).unwrap();

    assert!(result.mode == BoundingMode::Collision);
    assert!((graph.signed_area(result.node.unwrap()) - 1.0).abs() < 0.01);
}

#[test]
fn intersect_overlapping_circles() {
    init_logging();

    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle1     = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 4.0);
    let circle2     = circle(&mut graph, path_loop, Coord2(7.0, 5.0), 4.0);

    let result      = graph.intersection(circle1, circle2).unwrap();
    let combined    = result.node.unwrap();

    assert!(result.mode == BoundingMode::Collision);
    assert!(graph.islands(path_loop).len() == 1);
    assert!((graph.signed_area(combined) - 34.4337).abs() < 0.2);

    assert!(graph.point_in_island(combined, Coord2(6.0, 5.0)));
    assert!(!graph.point_in_island(combined, Coord2(2.0, 5.0)));
    assert!(!graph.point_in_island(combined, Coord2(10.0, 5.0)));
}

#[test]
fn intersect_separate_circles() {
    init_logging();

    let mut graph   = PathGraph::new();
    let loop1       = graph.add_loop();
    let loop2       = graph.add_loop();
    let circle1     = circle(&mut graph, loop1, Coord2(5.0, 5.0), 4.0);
    let circle2     = circle(&mut graph, loop2, Coord2(20.0, 5.0), 4.0);

    let result      = graph.intersection(circle1, circle2).unwrap();

    assert!(result.mode == BoundingMode::NoCollision);
    assert!(result.node.is_none());
    assert!(graph.num_nodes() == 0);
    assert!(!graph.contains_loop(loop2));
}

#[test]
fn intersect_circle_inside_circle() {
    init_logging();

    let mut graph   = PathGraph::new();
    let loop1       = graph.add_loop();
    let loop2       = graph.add_loop();
    let outer       = circle(&mut graph, loop1, Coord2(5.0, 5.0), 5.0);
    let inner       = circle(&mut graph, loop2, Coord2(5.0, 5.0), 1.0);

    let result      = graph.intersection(outer, inner).unwrap();
    let remaining   = result.node.unwrap();

    assert!(result.mode == BoundingMode::LeftSurroundsRight);
    assert!(remaining != inner);
    assert!(!graph.contains(outer));
    assert!(!graph.contains(inner));
    assert!(graph.num_nodes() == 4);
    assert!(graph.parent(remaining) == Some(loop1));
    assert!((graph.signed_area(remaining) - 3.14247).abs() < 0.01);
}

#[test]
fn intersect_circle_around_circle() {
    init_logging();

    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let inner       = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);
    let outer       = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 5.0);

    let result      = graph.intersection(inner, outer).unwrap();

    assert!(result.mode == BoundingMode::RightSurroundsLeft);
    assert!(graph.num_nodes() == 4);
    assert!((graph.signed_area(result.node.unwrap()) - 3.14247).abs() < 0.01);
}

#[test]
fn intersect_island_with_itself() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square      = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));

    let result      = graph.intersection(square, square).unwrap();

    assert!(result.mode == BoundingMode::LeftSurroundsRight);
    assert!(result.node == Some(square));
    assert!(graph.num_nodes() == 4);
}

#[test]
fn combine_dispatches_to_intersection() {
    init_logging();

    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let square1     = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let square2     = rectangle(&mut graph, path_loop, Coord2(1.0, 1.0), Coord2(3.0, 3.0));

    let result      = graph.combine(BooleanOp::Intersection, square1, square2).unwrap();

    assert!((graph.signed_area(result.node.unwrap()) - 1.0).abs() < 0.01);
}
