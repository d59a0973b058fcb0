use super::graph::*;
use super::segment::*;
use super::super::curve::*;
use super::super::intersection::*;
use super::super::super::line::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;

use std::cmp::Ordering;
use std::collections::HashSet;

/// Points closer to a ray than this are considered to be on it when deciding which side of the ray a path is on
const ON_RAY_DISTANCE: f32 = SMALL_DISTANCE * 0.01;

/// Distance along a curve (in t) used to decide which side of a ray a curve touching it is on
const GLANCE_T_DISTANCE: f32 = 0.01;

/// Sine of the angle below which a curve is considered to be moving along a ray
const TANGENT_SINE: f32 = 0.001;

///
/// A place where a ray crosses the boundary of an island
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCollision {
    /// The node at the start of the segment that was hit
    pub node: NodeId,

    /// Where the segment was hit
    pub curve_t: f32,

    /// Where on the ray the hit is (0 is the start of the ray and 1 is the second point of the ray)
    pub ray_t: f32,

    /// Where the hit is
    pub position: Coord2
}

///
/// Returns which side of a ray a point is on (1, -1, or 0 for points on the ray)
///
fn ray_side(coefficients: (f32, f32, f32), point: &Coord2) -> i8 {
    let distance = distance_from_coefficients(point, coefficients);

    if distance.abs() <= ON_RAY_DISTANCE {
        0
    } else if distance > 0.0 {
        1
    } else {
        -1
    }
}

///
/// Returns the side of a ray that a sequence of points leaves from, picking the first point that's clearly off the
/// ray (or the furthest point if none are)
///
fn side_of_points<PointIter: IntoIterator<Item=Coord2>>(coefficients: (f32, f32, f32), points: PointIter) -> i8 {
    let mut furthest = (0.0, 0);

    for point in points {
        let distance = distance_from_coefficients(&point, coefficients);

        if distance.abs() > SMALL_DISTANCE {
            return ray_side(coefficients, &point);
        } else if distance.abs() > furthest.0 {
            furthest = (distance.abs(), ray_side(coefficients, &point));
        }
    }

    furthest.1
}

impl PathGraph {
    ///
    /// True if every control point of a segment is on the infinite line described by a ray
    ///
    fn segment_is_collinear(&self, segment: &PathSegment, coefficients: (f32, f32, f32)) -> bool {
        let (w1, w2, w3, w4) = segment.points();

        [w1, w2, w3, w4].iter()
            .all(|point| distance_from_coefficients(point, coefficients).abs() <= SMALL_DISTANCE)
    }

    ///
    /// The side of the ray that the island is on just before it arrives at `node`
    ///
    fn side_arriving_at(&self, node: NodeId, coefficients: (f32, f32, f32)) -> i8 {
        match self.prev(node).and_then(|prev| self.segment(prev)) {
            Some(segment)   => {
                let (w1, w2, w3, _w4) = segment.points();
                side_of_points(coefficients, vec![w3, w2, w1])
            }
            None            => 0
        }
    }

    ///
    /// The side of the ray that the island is on just after it leaves `node`
    ///
    fn side_leaving(&self, node: NodeId, coefficients: (f32, f32, f32)) -> i8 {
        match self.segment(node) {
            Some(segment)   => {
                let (_w1, w2, w3, w4) = segment.points();
                side_of_points(coefficients, vec![w2, w3, w4])
            }
            None            => 0
        }
    }

    ///
    /// Finds the raw intersections between a ray and the segments of an island that are not collinear with it
    ///
    /// Hits at the end of a segment are moved to the start of the following one.
    ///
    fn raw_ray_collisions(&self, island: NodeId, ray: &(Coord2, Coord2), collinear: &HashSet<NodeId>) -> Vec<RayCollision> {
        let mut collisions = vec![];

        for (node, segment) in self.island_segments(island) {
            if collinear.contains(&node) { continue; }

            for (curve_t, ray_t, position) in curve_intersects_ray(&segment, ray) {
                let collision = if curve_t > 0.5 && position.is_near_to(&segment.end_point(), CLOSE_DISTANCE) {
                    match self.next(node) {
                        Some(next)  => RayCollision { node: next, curve_t: 0.0, ray_t: ray.pos_for_point(&segment.end_point()), position: segment.end_point() },
                        None        => RayCollision { node, curve_t, ray_t, position }
                    }
                } else if curve_t <= 0.5 && position.is_near_to(&segment.start_point(), CLOSE_DISTANCE) {
                    RayCollision { node, curve_t: 0.0, ray_t: ray.pos_for_point(&segment.start_point()), position: segment.start_point() }
                } else {
                    RayCollision { node, curve_t, ray_t, position }
                };

                collisions.push(collision);
            }
        }

        collisions
    }

    ///
    /// Removes collisions that are the same as an earlier collision
    ///
    /// Hits on a vertex are found on both of the segments attached to it, and solving a curve that just touches a ray
    /// can produce a pair of nearly identical roots.
    ///
    fn remove_duplicate_ray_collisions(&self, collisions: Vec<RayCollision>) -> Vec<RayCollision> {
        let mut result: Vec<RayCollision> = vec![];

        for collision in collisions {
            let is_duplicate = result.iter()
                .any(|existing| {
                    let same_or_adjacent = existing.node == collision.node
                        || self.next(existing.node) == Some(collision.node)
                        || self.next(collision.node) == Some(existing.node);

                    same_or_adjacent && existing.position.is_near_to(&collision.position, CLOSE_DISTANCE)
                });

            if !is_duplicate {
                result.push(collision);
            }
        }

        result
    }

    ///
    /// True if the ray crosses from one side of the island to the other at a collision (rather than glancing off it)
    ///
    fn collision_crosses_ray(&self, collision: &RayCollision, ray: &(Coord2, Coord2), coefficients: (f32, f32, f32)) -> bool {
        if collision.curve_t == 0.0 {
            // Collision at a vertex: compare the sides of the segments either side of it
            let before  = self.side_arriving_at(collision.node, coefficients);
            let after   = self.side_leaving(collision.node, coefficients);

            before != 0 && after != 0 && before != after
        } else {
            let segment = match self.segment(collision.node) {
                Some(segment)   => segment,
                None            => { return false; }
            };

            // Only curves that are moving along the ray at the collision can be glancing off it
            let tangent     = segment.tangent_at_pos(collision.curve_t).to_unit_vector();
            let direction   = (ray.1 - ray.0).to_unit_vector();

            if tangent.cross(&direction).abs() > TANGENT_SINE {
                return true;
            }

            let before  = ray_side(coefficients, &segment.point_at_pos((collision.curve_t - GLANCE_T_DISTANCE).max(0.0)));
            let after   = ray_side(coefficients, &segment.point_at_pos((collision.curve_t + GLANCE_T_DISTANCE).min(1.0)));

            before != after
        }
    }

    ///
    /// Generates a single collision for each run of segments that lie along the ray, if the island crosses the ray
    /// at that point
    ///
    fn collinear_collisions(&self, ray: &(Coord2, Coord2), coefficients: (f32, f32, f32), collinear: &HashSet<NodeId>) -> Vec<RayCollision> {
        let mut collisions = vec![];

        // Each run starts at a collinear segment whose previous segment is not collinear
        let run_starts = collinear.iter()
            .filter(|node| self.prev(**node).map(|prev| !collinear.contains(&prev)).unwrap_or(true));

        for run_start in run_starts {
            // Find the node at the end of the run
            let mut run_end = *run_start;
            let mut visited = HashSet::new();

            while collinear.contains(&run_end) && visited.insert(run_end) {
                match self.next(run_end) {
                    Some(next)  => { run_end = next; }
                    None        => { break; }
                }
            }

            let before  = self.side_arriving_at(*run_start, coefficients);
            let after   = self.side_leaving(run_end, coefficients);

            if before != 0 && after != 0 && before != after {
                if let Some(position) = self.position(*run_start) {
                    collisions.push(RayCollision {
                        node:       *run_start,
                        curve_t:    0.0,
                        ray_t:      ray.pos_for_point(&position),
                        position:   position
                    });
                }
            }
        }

        collisions
    }

    ///
    /// Finds the places where the infinite line through the two points of `ray` crosses the boundary of an island
    ///
    /// The collisions are 'cleaned up' so that every collision in the result is a place where the line moves
    /// from the inside to the outside of the island (or vice versa):
    ///
    ///  * a hit on a vertex is reported once (and only if the island crosses the ray there)
    ///  * places where the island touches but doesn't cross the ray are removed
    ///  * a run of segments that lie along the ray is reported as a single collision at its start, if the island
    ///    ends up on the opposite side of the ray after the run
    ///
    /// The result is sorted by position along the ray.
    ///
    pub fn ray_collisions(&self, island: NodeId, ray: &(Coord2, Coord2)) -> Vec<RayCollision> {
        let coefficients    = line_coefficients_2d(ray);
        if coefficients == (0.0, 0.0, 0.0) { return vec![]; }

        // Segments that lie along the ray are dealt with separately
        let collinear       = self.island_segments(island)
            .into_iter()
            .filter(|(_node, segment)| self.segment_is_collinear(segment, coefficients))
            .map(|(node, _segment)| node)
            .collect::<HashSet<_>>();

        // Vertices at either end of a collinear run are dealt with by the collinear run
        let touches_collinear = |node: NodeId| collinear.contains(&node) || self.prev(node).map(|prev| collinear.contains(&prev)).unwrap_or(false);

        let collisions      = self.raw_ray_collisions(island, ray, &collinear);
        let collisions      = collisions.into_iter()
            .filter(|collision| !(collision.curve_t == 0.0 && touches_collinear(collision.node)))
            .collect::<Vec<_>>();
        let collisions      = self.remove_duplicate_ray_collisions(collisions);

        let mut collisions  = collisions.into_iter()
            .filter(|collision| self.collision_crosses_ray(collision, ray, coefficients))
            .collect::<Vec<_>>();

        collisions.extend(self.collinear_collisions(ray, coefficients, &collinear));
        collisions.sort_by(|a, b| a.ray_t.partial_cmp(&b.ray_t).unwrap_or(Ordering::Equal));

        trace!("Ray {:?} crosses island {:?} {} times", ray, island, collisions.len());

        collisions
    }

    ///
    /// Returns the places where the infinite line through `ray` crosses the segment starting at `node`
    ///
    /// These are raw hits: no attempt is made to remove glancing collisions.
    ///
    pub fn ray_hits(&self, node: NodeId, ray: &(Coord2, Coord2)) -> Vec<RayCollision> {
        self.segment(node)
            .map(|segment| curve_intersects_ray(&segment, ray).into_iter()
                .map(|(curve_t, ray_t, position)| RayCollision { node, curve_t, ray_t, position })
                .collect())
            .unwrap_or_else(|| vec![])
    }

    ///
    /// True if a point is inside the island containing `node`
    ///
    /// A ray is cast from the point in the +x direction and the number of times that it crosses the island is
    /// counted: the point is inside if this is odd. Points on the boundary of the island may be considered to be on
    /// either side.
    ///
    pub fn point_in_island(&self, island: NodeId, point: Coord2) -> bool {
        let ray         = (point, point + Coord2(1.0, 0.0));
        let crossings   = self.ray_collisions(island, &ray)
            .into_iter()
            .filter(|collision| collision.ray_t > 0.0)
            .count();

        (crossings % 2) == 1
    }
}
