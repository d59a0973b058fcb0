use super::shapes::*;

use flo_island_boolean::*;
use flo_island_boolean::bezier::path::*;

#[test]
fn extreme_point_of_circle() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);

    assert!(graph.extreme_point(circle).unwrap().distance_to(&Coord2(6.0, 5.0)) < 0.001);
}

#[test]
fn extreme_point_of_curve_between_nodes() {
    // The rightmost point of this island is in the middle of a curve
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let island      = IslandBuilder::start(Coord2(0.0, 0.0))
        .curve_to((Coord2(2.0, 0.0), Coord2(2.0, 2.0)), Coord2(0.0, 2.0))
        .build(&mut graph, path_loop)
        .unwrap();

    let extreme     = graph.extreme_point(island).unwrap();

    assert!((extreme.x() - 1.5).abs() < 0.001);
    assert!((extreme.y() - 1.0).abs() < 0.001);
}

#[test]
fn classify_nested_circles() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let outer       = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 5.0);
    let inner       = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);

    assert!(graph.classify_islands(outer, inner) == BoundingMode::LeftSurroundsRight);
    assert!(graph.classify_islands(inner, outer) == BoundingMode::RightSurroundsLeft);
}

#[test]
fn classify_separate_circles() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle1     = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);
    let circle2     = circle(&mut graph, path_loop, Coord2(10.0, 5.0), 1.0);

    assert!(graph.classify_islands(circle1, circle2) == BoundingMode::NoCollision);
    assert!(graph.classify_islands(circle2, circle1) == BoundingMode::NoCollision);
}

#[test]
fn classify_rectangle_inside_concave_island() {
    // A 'U' shape with a rectangle inside its left arm and another inside the gap between the arms
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let u_shape     = IslandBuilder::start(Coord2(0.0, 0.0))
        .line_to(Coord2(6.0, 0.0))
        .line_to(Coord2(6.0, 6.0))
        .line_to(Coord2(4.0, 6.0))
        .line_to(Coord2(4.0, 2.0))
        .line_to(Coord2(2.0, 2.0))
        .line_to(Coord2(2.0, 6.0))
        .line_to(Coord2(0.0, 6.0))
        .build(&mut graph, path_loop)
        .unwrap();

    let in_arm      = rectangle(&mut graph, path_loop, Coord2(0.5, 3.0), Coord2(1.5, 4.0));
    let in_gap      = rectangle(&mut graph, path_loop, Coord2(2.5, 3.0), Coord2(3.5, 4.0));

    assert!(graph.classify_islands(u_shape, in_arm) == BoundingMode::LeftSurroundsRight);
    assert!(graph.classify_islands(u_shape, in_gap) == BoundingMode::NoCollision);
}
