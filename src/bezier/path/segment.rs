use super::graph::*;
use super::super::curve::*;
use super::super::section::*;
use super::super::subdivide::*;
use super::super::super::geo::*;
use super::super::super::coordinate::*;

///
/// The curve between a node and the node that follows it
///
/// Segments are not stored in the graph: they're generated from the positions and tangents of the two nodes. A
/// segment where neither end has a tangent in use is a straight line.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    /// A straight line between two points
    Line(Coord2, Coord2),

    /// A cubic bezier curve
    Curve(Curve<Coord2>)
}

impl PathSegment {
    ///
    /// True if this segment is a straight line
    ///
    #[inline]
    pub fn is_line(&self) -> bool {
        match self {
            PathSegment::Line(_, _)     => true,
            PathSegment::Curve(_)       => false
        }
    }

    ///
    /// Returns the start, two control points and end point of this segment
    ///
    /// Lines put their control points a third of the way along, so t values on the curve are the same as the t
    /// values on the line.
    ///
    pub fn points(&self) -> (Coord2, Coord2, Coord2, Coord2) {
        match self {
            PathSegment::Line(start, end)   => {
                let offset = *end - *start;
                (*start, *start + offset*(1.0/3.0), *start + offset*(2.0/3.0), *end)
            }

            PathSegment::Curve(curve)       => {
                let (cp1, cp2) = curve.control_points;
                (curve.start_point, cp1, cp2, curve.end_point)
            }
        }
    }

    ///
    /// Returns this segment as a curve
    ///
    #[inline]
    pub fn to_curve(&self) -> Curve<Coord2> {
        let (start, cp1, cp2, end) = self.points();
        Curve::from_points(start, (cp1, cp2), end)
    }
}

impl Geo for PathSegment {
    type Point = Coord2;
}

impl BezierCurve for PathSegment {
    #[inline]
    fn start_point(&self) -> Coord2 {
        match self {
            PathSegment::Line(start, _) => *start,
            PathSegment::Curve(curve)   => curve.start_point
        }
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        match self {
            PathSegment::Line(_, end)   => *end,
            PathSegment::Curve(curve)   => curve.end_point
        }
    }

    #[inline]
    fn control_points(&self) -> (Coord2, Coord2) {
        let (_, cp1, cp2, _) = self.points();
        (cp1, cp2)
    }

    fn point_at_pos(&self, t: f32) -> Coord2 {
        match self {
            PathSegment::Line(start, end)   => *start + (*end - *start)*t,
            PathSegment::Curve(curve)       => curve.point_at_pos(t)
        }
    }
}

///
/// The result of splitting a segment at a point
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSplit {
    /// Where the segment was split
    pub position: Coord2,

    /// The tangents for a new node at the split point
    pub tangents: NodeTangents,

    /// The new outgoing tangent for the node at the start of the segment
    pub start_tangent_out: Coord2,

    /// The new incoming tangent for the node at the end of the segment
    pub end_tangent_in: Coord2
}

impl PathGraph {
    ///
    /// Returns the segment that starts at the specified node (or None if the node has no `next` node)
    ///
    pub fn segment(&self, node: NodeId) -> Option<PathSegment> {
        let start   = self.node(node)?;
        let end     = self.node(start.next?)?;

        if !start.tangents.use_out && !end.tangents.use_in {
            Some(PathSegment::Line(start.position, end.position))
        } else {
            let cp1 = if start.tangents.use_out { start.position + start.tangents.tangent_out } else { start.position };
            let cp2 = if end.tangents.use_in { end.position + end.tangents.tangent_in } else { end.position };

            Some(PathSegment::Curve(Curve::from_points(start.position, (cp1, cp2), end.position)))
        }
    }

    ///
    /// Returns the segments in the island containing `node`, along with the node that each one starts at
    ///
    pub fn island_segments(&self, node: NodeId) -> Vec<(NodeId, PathSegment)> {
        self.travel(node)
            .filter_map(|island_node| self.segment(island_node).map(|segment| (island_node, segment)))
            .collect()
    }

    ///
    /// Works out the position and tangents needed to split the segment starting at `node` at the point `t`
    ///
    /// The graph is not changed: the result describes the node that would need to be inserted, and the new
    /// tangents for the nodes at either end of the segment.
    ///
    pub fn subdivide_segment(&self, node: NodeId, t: f32) -> Option<SegmentSplit> {
        let segment                 = self.segment(node)?;
        let (w1, w2, w3, w4)        = segment.points();
        let (before, after)         = subdivide4(t, w1, w2, w3, w4);
        let position                = before.3;

        let tangents = if segment.is_line() {
            NodeTangents::straight()
        } else {
            NodeTangents::curved(before.2 - position, after.1 - position)
        };

        Some(SegmentSplit {
            position:           position,
            tangents:           tangents,
            start_tangent_out:  before.1 - w1,
            end_tangent_in:     after.2 - w4
        })
    }

    ///
    /// Returns the control points of the segment starting at `node` split at each of a sorted list of t values
    ///
    pub fn subdivide_segment_many(&self, node: NodeId, t_values: &[f32]) -> Option<Vec<(Coord2, Coord2, Coord2, Coord2)>> {
        let (w1, w2, w3, w4) = self.segment(node)?.points();

        Some(subdivide_many4(t_values, w1, w2, w3, w4))
    }

    ///
    /// Returns the part of the segment starting at `node` that lies between two t values
    ///
    pub fn segment_section(&self, node: NodeId, t_min: f32, t_max: f32) -> Option<Curve<Coord2>> {
        let (w1, w2, w3, w4)            = self.segment(node)?.points();
        let (start, cp1, cp2, end)      = section_points4(t_min, t_max, w1, w2, w3, w4);

        Some(Curve::from_points(start, (cp1, cp2), end))
    }
}
