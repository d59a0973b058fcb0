use super::graph::*;
use super::segment::*;
use super::super::curve::*;
use super::super::intersection::*;
use super::super::super::geo::*;
use super::super::super::line::*;
use super::super::super::coordinate::*;

use itertools::*;

/// Samples closer than this in t on the same pair of segments are the same intersection
const SAMPLE_T_DISTANCE: f32 = 0.001;

///
/// A place where two segments in a path graph intersect
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// The node at the start of the first segment
    pub node_a: NodeId,

    /// Where the intersection is on the first segment
    pub t_a: f32,

    /// True if the first segment is a straight line
    pub a_is_line: bool,

    /// The node at the start of the second segment
    pub node_b: NodeId,

    /// Where the intersection is on the second segment
    pub t_b: f32,

    /// True if the second segment is a straight line
    pub b_is_line: bool
}

impl IntersectionSample {
    ///
    /// The same sample with the two segments swapped over
    ///
    pub fn swapped(&self) -> IntersectionSample {
        IntersectionSample {
            node_a:     self.node_b,
            t_a:        self.t_b,
            a_is_line:  self.b_is_line,
            node_b:     self.node_a,
            t_b:        self.t_a,
            b_is_line:  self.a_is_line
        }
    }
}

///
/// Finds the (t_a, t_b) values where two segments intersect, using the cheapest method for the kinds of segment
///
fn intersect_segments(segment_a: &PathSegment, segment_b: &PathSegment, accuracy: &CurveAccuracy) -> Vec<(f32, f32)> {
    match (segment_a, segment_b) {
        (PathSegment::Line(a1, a2), PathSegment::Line(b1, b2)) => {
            line_intersects_line(&(*a1, *a2), &(*b1, *b2)).into_iter().collect()
        }

        (PathSegment::Line(a1, a2), PathSegment::Curve(curve_b)) => {
            curve_intersects_line(curve_b, &(*a1, *a2)).into_iter()
                .map(|(t_b, t_a, _pos)| (t_a, t_b))
                .collect()
        }

        (PathSegment::Curve(curve_a), PathSegment::Line(b1, b2)) => {
            curve_intersects_line(curve_a, &(*b1, *b2)).into_iter()
                .map(|(t_a, t_b, _pos)| (t_a, t_b))
                .collect()
        }

        (PathSegment::Curve(curve_a), PathSegment::Curve(curve_b)) => {
            curve_intersects_curve_bbox(curve_a, curve_b, accuracy.distance, accuracy.max_depth)
        }
    }
}

impl PathGraph {
    ///
    /// Finds the places where the segments starting at two nodes intersect
    ///
    /// A segment is never considered to intersect itself. Where the segments are neighbours, the point where they
    /// join is not reported as an intersection.
    ///
    pub fn segment_intersections(&self, node_a: NodeId, node_b: NodeId, accuracy: &CurveAccuracy) -> Vec<IntersectionSample> {
        if node_a == node_b { return vec![]; }

        let (segment_a, segment_b) = match (self.segment(node_a), self.segment(node_b)) {
            (Some(a), Some(b))  => (a, b),
            _                   => { return vec![]; }
        };

        // Quick rejection using the control polygons
        let bounds_a = segment_a.fast_bounding_box::<Bounds<_>>();
        let bounds_b = segment_b.fast_bounding_box::<Bounds<_>>();
        if !bounds_a.overlaps_with_tolerance(&bounds_b, accuracy.distance) {
            return vec![];
        }

        // Points where the two segments are joined together
        let a_joins_b = self.next(node_a) == Some(node_b);
        let b_joins_a = self.next(node_b) == Some(node_a);

        intersect_segments(&segment_a, &segment_b, accuracy)
            .into_iter()
            .filter(|(t_a, t_b)| {
                let pos_a = segment_a.point_at_pos(*t_a);

                let at_join_ab = a_joins_b && pos_a.is_near_to(&segment_a.end_point(), accuracy.distance*2.0) && *t_b < 0.5;
                let at_join_ba = b_joins_a && pos_a.is_near_to(&segment_a.start_point(), accuracy.distance*2.0) && *t_b > 0.5;

                !at_join_ab && !at_join_ba
            })
            .map(|(t_a, t_b)| IntersectionSample {
                node_a:     node_a,
                t_a:        t_a,
                a_is_line:  segment_a.is_line(),
                node_b:     node_b,
                t_b:        t_b,
                b_is_line:  segment_b.is_line()
            })
            .collect()
    }

    ///
    /// Finds all of the intersections between the segments of two islands
    ///
    pub fn island_intersections(&self, island_a: NodeId, island_b: NodeId, accuracy: &CurveAccuracy) -> Vec<IntersectionSample> {
        let nodes_a = self.island_nodes(island_a);
        let nodes_b = self.island_nodes(island_b);

        let samples = nodes_a.iter()
            .cartesian_product(nodes_b.iter())
            .flat_map(|(node_a, node_b)| self.segment_intersections(*node_a, *node_b, accuracy))
            .collect::<Vec<_>>();

        self.dedup_samples(samples, accuracy)
    }

    ///
    /// Finds the places where an island intersects itself
    ///
    /// Self-intersections inside a single segment are not detected.
    ///
    pub fn island_self_intersections(&self, island: NodeId, accuracy: &CurveAccuracy) -> Vec<IntersectionSample> {
        let nodes = self.island_nodes(island);

        let samples = nodes.iter()
            .tuple_combinations()
            .flat_map(|(node_a, node_b)| self.segment_intersections(*node_a, *node_b, accuracy))
            .collect::<Vec<_>>();

        self.dedup_samples(samples, accuracy)
    }

    ///
    /// Moves a (node, t) position that's at the end of a segment to the start of the following segment, and
    /// snaps positions very close to the start of a segment onto the start
    ///
    fn normalise_position(&self, node: NodeId, t: f32, accuracy: &CurveAccuracy) -> (NodeId, f32) {
        let segment = match self.segment(node) {
            Some(segment)   => segment,
            None            => { return (node, t); }
        };

        let pos = segment.point_at_pos(t);

        if t > 0.5 && pos.is_near_to(&segment.end_point(), accuracy.distance) {
            match self.next(node) {
                Some(next)  => (next, 0.0),
                None        => (node, 1.0)
            }
        } else if t <= 0.5 && pos.is_near_to(&segment.start_point(), accuracy.distance) {
            (node, 0.0)
        } else {
            (node, t)
        }
    }

    ///
    /// Normalises and removes duplicates from a list of intersection samples
    ///
    /// Intersections found at the end of a segment are moved to the start of the next segment (so a crossing at a
    /// node is found twice but reported once), and samples on the same pair of segments that are at nearly the same
    /// position are merged together.
    ///
    pub fn dedup_samples(&self, samples: Vec<IntersectionSample>, accuracy: &CurveAccuracy) -> Vec<IntersectionSample> {
        let mut result: Vec<IntersectionSample> = vec![];

        for sample in samples {
            let (node_a, t_a) = self.normalise_position(sample.node_a, sample.t_a, accuracy);
            let (node_b, t_b) = self.normalise_position(sample.node_b, sample.t_b, accuracy);

            let sample = IntersectionSample {
                node_a:     node_a,
                t_a:        t_a,
                a_is_line:  self.segment(node_a).map(|segment| segment.is_line()).unwrap_or(sample.a_is_line),
                node_b:     node_b,
                t_b:        t_b,
                b_is_line:  self.segment(node_b).map(|segment| segment.is_line()).unwrap_or(sample.b_is_line)
            };

            let is_duplicate = result.iter()
                .any(|existing| {
                    existing.node_a == sample.node_a
                        && existing.node_b == sample.node_b
                        && (existing.t_a - sample.t_a).abs() < SAMPLE_T_DISTANCE
                        && (existing.t_b - sample.t_b).abs() < SAMPLE_T_DISTANCE
                });

            if !is_duplicate {
                result.push(sample);
            }
        }

        result
    }
}
