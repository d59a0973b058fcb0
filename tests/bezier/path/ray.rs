use super::shapes::*;

use flo_island_boolean::*;
use flo_island_boolean::bezier::path::*;

fn diamond(graph: &mut PathGraph, parent: LoopId) -> NodeId {
    IslandBuilder::start(Coord2(1.0, 0.0))
        .line_to(Coord2(2.0, 1.0))
        .line_to(Coord2(1.0, 2.0))
        .line_to(Coord2(0.0, 1.0))
        .build(graph, parent)
        .unwrap()
}

#[test]
fn ray_crosses_rectangle_twice() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let rect        = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));

    let collisions  = graph.ray_collisions(rect, &(Coord2(-1.0, 1.0), Coord2(0.0, 1.0)));

    assert!(collisions.len() == 2);
    assert!(collisions[0].position.distance_to(&Coord2(0.0, 1.0)) < 0.001);
    assert!(collisions[1].position.distance_to(&Coord2(2.0, 1.0)) < 0.001);
    assert!(collisions[0].ray_t < collisions[1].ray_t);
}

#[test]
fn ray_through_opposite_vertices() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let diamond     = diamond(&mut graph, path_loop);

    let collisions  = graph.ray_collisions(diamond, &(Coord2(-1.0, 1.0), Coord2(0.0, 1.0)));

    assert!(collisions.len() == 2);
    assert!(collisions.iter().all(|collision| collision.curve_t == 0.0));
    assert!(collisions[0].position.distance_to(&Coord2(0.0, 1.0)) < 0.001);
    assert!(collisions[1].position.distance_to(&Coord2(2.0, 1.0)) < 0.001);
}

#[test]
fn ray_glancing_off_a_vertex() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let diamond     = diamond(&mut graph, path_loop);

    let collisions  = graph.ray_collisions(diamond, &(Coord2(-1.0, 2.0), Coord2(0.0, 2.0)));

    assert!(collisions.len() == 0);
}

#[test]
fn ray_along_an_edge() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let rect        = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));

    let collisions  = graph.ray_collisions(rect, &(Coord2(-1.0, 0.0), Coord2(0.0, 0.0)));

    assert!(collisions.len() == 0);
}

#[test]
fn ray_along_a_step() {
    // The ray runs along the step in the middle of this shape, which crosses from below the ray to above it
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let step        = IslandBuilder::start(Coord2(0.0, -1.0))
        .line_to(Coord2(1.0, -1.0))
        .line_to(Coord2(1.0, 0.0))
        .line_to(Coord2(2.0, 0.0))
        .line_to(Coord2(2.0, 1.0))
        .line_to(Coord2(0.0, 1.0))
        .build(&mut graph, path_loop)
        .unwrap();

    let collisions  = graph.ray_collisions(step, &(Coord2(-1.0, 0.0), Coord2(0.0, 0.0)));

    assert!(collisions.len() == 2);
    assert!(collisions[0].position.distance_to(&Coord2(0.0, 0.0)) < 0.001);
    assert!(collisions[1].position.distance_to(&Coord2(1.0, 0.0)) < 0.001);
}

#[test]
fn ray_crosses_circle_twice() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);

    let collisions  = graph.ray_collisions(circle, &(Coord2(0.0, 5.3), Coord2(1.0, 5.3)));

    assert!(collisions.len() == 2);
    assert!(collisions.iter().all(|collision| (collision.position.y() - 5.3).abs() < 0.001));
}

#[test]
fn ray_touching_circle_does_not_cross() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);

    let collisions  = graph.ray_collisions(circle, &(Coord2(0.0, 6.0), Coord2(1.0, 6.0)));

    assert!(collisions.len() == 0);
}

#[test]
fn raw_ray_hits_on_a_segment() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let rect        = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));

    let hits        = graph.ray_hits(rect, &(Coord2(1.0, -1.0), Coord2(1.0, 0.0)));

    assert!(hits.len() == 1);
    assert!(hits[0].node == rect);
    assert!((hits[0].curve_t - 0.5).abs() < 0.0001);
    assert!((hits[0].ray_t - 1.0).abs() < 0.0001);
}

#[test]
fn points_in_rectangle() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let rect        = rectangle(&mut graph, path_loop, Coord2(0.0, 0.0), Coord2(2.0, 2.0));

    assert!(graph.point_in_island(rect, Coord2(1.0, 1.0)));
    assert!(graph.point_in_island(rect, Coord2(0.5, 1.5)));
    assert!(!graph.point_in_island(rect, Coord2(3.0, 1.0)));
    assert!(!graph.point_in_island(rect, Coord2(-1.0, 1.0)));
    assert!(!graph.point_in_island(rect, Coord2(1.0, 3.0)));
}

#[test]
fn point_level_with_vertex_is_in_diamond() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let diamond     = diamond(&mut graph, path_loop);

    assert!(graph.point_in_island(diamond, Coord2(1.0, 1.0)));
    assert!(!graph.point_in_island(diamond, Coord2(3.0, 1.0)));
    assert!(!graph.point_in_island(diamond, Coord2(0.0, 2.0)));
}

#[test]
fn center_of_circle_is_inside() {
    let mut graph   = PathGraph::new();
    let path_loop   = graph.add_loop();
    let circle      = circle(&mut graph, path_loop, Coord2(5.0, 5.0), 1.0);

    assert!(graph.point_in_island(circle, Coord2(5.0, 5.0)));
    assert!(graph.point_in_island(circle, Coord2(5.5, 5.5)));
    assert!(!graph.point_in_island(circle, Coord2(5.8, 5.8)));
}
