use super::graph::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;

///
/// Used to build an island of nodes in a path graph
///
pub struct IslandBuilder {
    /// Where the island starts
    start_point: Coord2,

    /// The segments in the island: the control points (if the segment is curved) and the end point
    segments: Vec<(Option<(Coord2, Coord2)>, Coord2)>
}

impl IslandBuilder {
    ///
    /// Creates a new island builder with the specified start point
    ///
    pub fn start(start: Coord2) -> IslandBuilder {
        IslandBuilder {
            start_point:    start,
            segments:       vec![]
        }
    }

    ///
    /// Adds a line to the specified point
    ///
    pub fn line_to(mut self, point: Coord2) -> Self {
        self.segments.push((None, point));

        self
    }

    ///
    /// Adds a curve to a particular point
    ///
    pub fn curve_to(mut self, (cp1, cp2): (Coord2, Coord2), end_point: Coord2) -> Self {
        self.segments.push((Some((cp1, cp2)), end_point));

        self
    }

    ///
    /// Creates the nodes for this island in a loop, returning the node at the start point
    ///
    /// The segments are linked into a chain: when `closed` is true, the last node is linked back to the first
    /// (if the final point is the start point, the two are merged into a single node)
    ///
    fn build_nodes(self, graph: &mut PathGraph, parent: LoopId, closed: bool) -> Option<NodeId> {
        if !graph.contains_loop(parent) { return None; }

        let start_point     = self.start_point;
        let mut segments    = self.segments;

        // A closed island that returns to its start point ends at the first node
        let returns_to_start = segments.last()
            .map(|(_, end_point)| end_point.is_near_to(&start_point, SMALL_DISTANCE))
            .unwrap_or(false);

        let closing_curve = if closed && returns_to_start {
            segments.pop().and_then(|(control_points, _)| control_points)
        } else {
            None
        };

        // Create the nodes
        let first       = graph.add_node(parent, start_point, NodeTangents::straight());
        let mut nodes   = vec![first];

        for (_, end_point) in segments.iter() {
            nodes.push(graph.add_node(parent, *end_point, NodeTangents::straight()));
        }

        // Link them together and set the tangents for any curves
        let mut last = first;
        for (node, (control_points, _)) in nodes.iter().skip(1).zip(segments.iter()) {
            graph.link(last, *node);
            if let Some(control_points) = control_points {
                set_curve_tangents(graph, last, *node, *control_points);
            }

            last = *node;
        }

        if closed && (nodes.len() > 1 || returns_to_start) {
            graph.link(last, first);

            if let Some(control_points) = closing_curve {
                set_curve_tangents(graph, last, first, control_points);
            }
        }

        Some(first)
    }

    ///
    /// Builds a closed island in a loop, returning the node at the start point
    ///
    /// If the last point added to the builder is not the start point, the island is closed with a straight line
    ///
    pub fn build(self, graph: &mut PathGraph, parent: LoopId) -> Option<NodeId> {
        self.build_nodes(graph, parent, true)
    }

    ///
    /// Builds an open island in a loop, returning the node at the start point
    ///
    pub fn build_open(self, graph: &mut PathGraph, parent: LoopId) -> Option<NodeId> {
        self.build_nodes(graph, parent, false)
    }
}

///
/// Sets the tangents of two nodes so that the segment between them is a curve with the specified control points
///
fn set_curve_tangents(graph: &mut PathGraph, from: NodeId, to: NodeId, (cp1, cp2): (Coord2, Coord2)) {
    if let (Some(from_pos), Some(mut from_tangents)) = (graph.position(from), graph.tangents(from)) {
        from_tangents.tangent_out   = cp1 - from_pos;
        from_tangents.use_out       = true;
        graph.set_tangents(from, from_tangents);
    }

    if let (Some(to_pos), Some(mut to_tangents)) = (graph.position(to), graph.tangents(to)) {
        to_tangents.tangent_in      = cp2 - to_pos;
        to_tangents.use_in          = true;
        graph.set_tangents(to, to_tangents);
    }
}
