use super::bounding_mode::*;
use super::super::graph::*;
use super::super::error::*;
use super::super::segment::*;
use super::super::intersection::*;
use super::super::super::curve::*;
use super::super::super::super::consts::*;
use super::super::super::super::coordinate::*;

use itertools::*;

use std::collections::HashMap;

/// Sine of the angle between two curves at an intersection below which the curves are treated as touching rather
/// than crossing
const TANGENT_CROSSING_SINE: f32 = 0.0001;

/// Islands with an area smaller than this can't be combined
const MIN_ISLAND_AREA: f32 = SMALL_DISTANCE * SMALL_DISTANCE;

///
/// The state of a pair of islands once they've been checked and their intersections have been found
///
#[derive(Clone, Debug)]
pub (crate) enum Preparation {
    /// Both nodes are part of the same island
    SameIsland,

    /// The islands can't be combined
    Degenerate,

    /// The islands don't cross each other
    NoCrossings { loop_a: LoopId, loop_b: LoopId, mode: BoundingMode },

    /// The islands cross at the specified places
    Crossings { loop_a: LoopId, loop_b: LoopId, samples: Vec<IntersectionSample> }
}

///
/// How the result boundary passes through a crossing
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CrossingDirection {
    /// The boundary arrives along island A and leaves along island B
    AToB,

    /// The boundary arrives along island B and leaves along island A
    BToA
}

///
/// A crossing between the two islands, and where it fits along each of them
///
#[derive(Clone, Debug)]
struct Crossing {
    /// Which way the result passes through this crossing
    direction: CrossingDirection,

    /// Where the crossing node will be placed
    position: Coord2,

    /// The tangents along island A at this crossing (use flags are set if the segment on A is curved)
    tangents_a: NodeTangents,

    /// The tangents along island B at this crossing
    tangents_b: NodeTangents
}

///
/// An item in the sequence of nodes and crossings along an island
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum ChainItem {
    Node(NodeId),
    Crossing(usize)
}

///
/// The direction of a segment at a point, falling back to the chord around the point where the tangent vanishes
///
fn direction_at(segment: &PathSegment, t: f32) -> Coord2 {
    let tangent = segment.tangent_at_pos(t);

    if tangent.magnitude() > SMALL_DISTANCE {
        tangent
    } else {
        segment.point_at_pos((t + 0.001).min(1.0)) - segment.point_at_pos((t - 0.001).max(0.0))
    }
}

///
/// Positions and tangents for the crossings along one island, and the new tangents for the original nodes
///
struct Subdivision {
    /// (crossing index, position, tangent in, tangent out, is line) for each crossing
    crossings: Vec<(usize, Coord2, Coord2, Coord2, bool)>,

    /// New outgoing tangents for nodes whose segments were subdivided
    tangents_out: HashMap<NodeId, Coord2>,

    /// New incoming tangents for nodes at the end of segments that were subdivided
    tangents_in: HashMap<NodeId, Coord2>
}

impl PathGraph {
    ///
    /// Checks that a node is part of a closed island in a loop, returning the loop
    ///
    pub (crate) fn validate_island(&self, node: NodeId) -> Result<LoopId, BooleanError> {
        if !self.contains(node) {
            return Err(BooleanError::MissingNode(node));
        }

        let parent = self.parent(node)
            .filter(|parent| self.contains_loop(*parent))
            .ok_or(BooleanError::MissingLoop(node))?;

        if !self.is_closed(node) {
            return Err(BooleanError::OpenIsland(node));
        }

        Ok(parent)
    }

    ///
    /// Reverses island `b` if needed so that the two islands wind in the same direction (or opposite directions if
    /// `opposite` is true). Returns false if either island encloses no area.
    ///
    fn normalise_winding(&mut self, a: NodeId, b: NodeId, opposite: bool) -> bool {
        let area_a = self.signed_area(a);
        let area_b = self.signed_area(b);

        if area_a.abs() < MIN_ISLAND_AREA || area_b.abs() < MIN_ISLAND_AREA {
            return false;
        }

        let same_direction = (area_a > 0.0) == (area_b > 0.0);
        if same_direction == opposite {
            trace!("Reversing island {:?}", b);
            self.reverse_island(b);
        }

        true
    }

    ///
    /// Checks the islands passed to a boolean operation, orients them and finds where they intersect
    ///
    pub (crate) fn prepare_islands(&mut self, op: BooleanOp, a: NodeId, b: NodeId) -> Result<Preparation, BooleanError> {
        let loop_a = self.validate_island(a)?;
        let loop_b = self.validate_island(b)?;

        if self.same_island(a, b) {
            debug!("{:?}: {:?} and {:?} are on the same island", op, a, b);
            return Ok(Preparation::SameIsland);
        }

        if !self.normalise_winding(a, b, op == BooleanOp::Difference) {
            warn!("{:?}: island {:?} or {:?} has no area", op, a, b);
            return Ok(Preparation::Degenerate);
        }

        let accuracy    = self.accuracy;
        let samples     = self.island_intersections(a, b, &accuracy);
        trace!("{:?}: {} intersections between {:?} and {:?}", op, samples.len(), a, b);

        if samples.is_empty() {
            let mode = self.classify_islands(a, b);
            debug!("{:?}: islands {:?} and {:?} do not intersect ({:?})", op, a, b, mode);

            Ok(Preparation::NoCrossings { loop_a, loop_b, mode })
        } else {
            Ok(Preparation::Crossings { loop_a, loop_b, samples })
        }
    }

    ///
    /// Removes the loop that island B came from if it's no longer needed
    ///
    pub (crate) fn remove_consumed_loop(&mut self, loop_a: LoopId, loop_b: LoopId) {
        if loop_a != loop_b {
            self.remove_loop_if_empty(loop_b);
        }
    }

    ///
    /// Works out which way the result boundary passes through the crossing described by a sample
    ///
    fn crossing_direction(&self, op: BooleanOp, sample: &IntersectionSample, winding_sign: f32) -> Option<CrossingDirection> {
        let segment_a   = self.segment(sample.node_a)?;
        let segment_b   = self.segment(sample.node_b)?;

        let direction_a = direction_at(&segment_a, sample.t_a).to_unit_vector();
        let direction_b = direction_at(&segment_b, sample.t_b).to_unit_vector();
        let sine        = direction_a.cross(&direction_b);

        if sine.abs() < TANGENT_CROSSING_SINE {
            // Curves are touching
            return None;
        }

        // B is moving into the interior of A when its direction is on the same side as A's interior
        let b_enters_a = sine * winding_sign > 0.0;

        match (op, b_enters_a) {
            (BooleanOp::Union, true)    => Some(CrossingDirection::BToA),
            (BooleanOp::Union, false)   => Some(CrossingDirection::AToB),
            (_, true)                   => Some(CrossingDirection::AToB),
            (_, false)                  => Some(CrossingDirection::BToA)
        }
    }

    ///
    /// Builds the sequence of nodes and crossings met while travelling around an island
    ///
    fn chain_with_crossings(&self, island: NodeId, crossings_by_node: &HashMap<NodeId, Vec<(usize, f32)>>) -> Vec<ChainItem> {
        let mut chain = vec![];

        for node in self.travel(island) {
            chain.push(ChainItem::Node(node));

            if let Some(crossings) = crossings_by_node.get(&node) {
                chain.extend(crossings.iter().map(|(idx, _t)| ChainItem::Crossing(*idx)));
            }
        }

        chain
    }

    ///
    /// Subdivides the segments of an island at the crossings on them
    ///
    fn subdivide_at_crossings(&self, crossings_by_node: &HashMap<NodeId, Vec<(usize, f32)>>) -> Option<Subdivision> {
        let mut subdivision = Subdivision {
            crossings:      vec![],
            tangents_out:   HashMap::new(),
            tangents_in:    HashMap::new()
        };

        for (node, crossings) in crossings_by_node.iter() {
            let is_line     = self.segment(*node)?.is_line();
            let t_values    = crossings.iter().map(|(_idx, t)| *t).collect::<Vec<_>>();
            let sections    = self.subdivide_segment_many(*node, &t_values)?;

            for (section_idx, (crossing_idx, _t)) in crossings.iter().enumerate() {
                let before      = sections[section_idx];
                let after       = sections[section_idx+1];
                let position    = before.3;

                subdivision.crossings.push((*crossing_idx, position, before.2 - position, after.1 - position, is_line));
            }

            if !is_line {
                let first   = sections[0];
                let last    = sections[sections.len()-1];

                subdivision.tangents_out.insert(*node, first.1 - first.0);
                if let Some(next) = self.next(*node) {
                    subdivision.tangents_in.insert(next, last.2 - last.3);
                }
            }
        }

        Some(subdivision)
    }

    ///
    /// True if the crossings met along a chain alternate between the two directions
    ///
    fn crossings_alternate(chain: &[ChainItem], crossings: &[Crossing]) -> bool {
        let directions = chain.iter()
            .filter_map(|item| match item {
                ChainItem::Crossing(idx)    => Some(crossings[*idx].direction),
                ChainItem::Node(_)          => None
            })
            .collect::<Vec<_>>();

        if directions.len() % 2 != 0 {
            return false;
        }

        directions.iter()
            .zip(directions.iter().cycle().skip(1))
            .all(|(direction, next_direction)| direction != next_direction)
    }

    ///
    /// Rewrites the links of the original nodes along a chain so that they join up with the crossings, returning the
    /// (previous, next) items for each crossing on the chain
    ///
    fn link_chain(&mut self, chain: &[ChainItem], crossing_nodes: &[NodeId]) -> HashMap<usize, (NodeId, NodeId)> {
        let node_for_item = |item: &ChainItem| match item {
            ChainItem::Node(node)       => *node,
            ChainItem::Crossing(idx)    => crossing_nodes[*idx]
        };

        let mut neighbours  = HashMap::new();
        let len             = chain.len();

        for (pos, item) in chain.iter().enumerate() {
            let prev = node_for_item(&chain[(pos + len - 1) % len]);
            let next = node_for_item(&chain[(pos + 1) % len]);

            match item {
                ChainItem::Node(node)       => {
                    self.set_prev(*node, Some(prev));
                    self.set_next(*node, Some(next));
                }

                ChainItem::Crossing(idx)    => {
                    neighbours.insert(*idx, (prev, next));
                }
            }
        }

        neighbours
    }

    ///
    /// Merges a node into a crossing node that follows it at the same position, keeping the tangent of the segment
    /// that arrives at the node
    ///
    fn merge_into_crossing_before(&mut self, crossing: NodeId, node: NodeId) -> bool {
        let before = match self.prev(node) {
            Some(before) if before != crossing && before != node => before,
            _                                                      => { return false; }
        };

        let (node_position, node_tangents, mut tangents) = match (self.position(node), self.tangents(node), self.tangents(crossing)) {
            (Some(position), Some(node_tangents), Some(tangents))   => (position, node_tangents, tangents),
            _                                                       => { return false; }
        };

        tangents.tangent_in = node_tangents.tangent_in;
        tangents.use_in     = node_tangents.use_in;

        self.set_tangents(crossing, tangents);
        self.set_position(crossing, node_position);
        self.link(before, crossing);
        self.remove_node(node);

        true
    }

    ///
    /// Merges a node into a crossing node that precedes it at the same position, keeping the tangent of the segment
    /// that leaves the node
    ///
    fn merge_into_crossing_after(&mut self, crossing: NodeId, node: NodeId) -> bool {
        let after = match self.next(node) {
            Some(after) if after != crossing && after != node => after,
            _                                                   => { return false; }
        };

        let (node_position, node_tangents, mut tangents) = match (self.position(node), self.tangents(node), self.tangents(crossing)) {
            (Some(position), Some(node_tangents), Some(tangents))   => (position, node_tangents, tangents),
            _                                                       => { return false; }
        };

        tangents.tangent_out    = node_tangents.tangent_out;
        tangents.use_out        = node_tangents.use_out;

        self.set_tangents(crossing, tangents);
        self.set_position(crossing, node_position);
        self.link(crossing, after);
        self.remove_node(node);

        true
    }

    ///
    /// Removes the original nodes that are at the same position as the crossing node next to them
    ///
    /// This happens when the islands cross at an existing node: the crossing node and the original node would
    /// otherwise be joined by a segment with no length. Returns the number of nodes that were removed.
    ///
    fn merge_coincident_nodes(&mut self, crossing_nodes: &[NodeId]) -> usize {
        let distance    = self.accuracy.distance * 2.0;
        let mut merged  = 0;

        for crossing in crossing_nodes.iter().cloned() {
            let position = match self.position(crossing) {
                Some(position)  => position,
                None            => { continue; }
            };

            let is_coincident = |graph: &PathGraph, node: NodeId| {
                !crossing_nodes.contains(&node) && graph.position(node).map(|node_pos| node_pos.is_near_to(&position, distance)).unwrap_or(false)
            };

            if let Some(prev) = self.prev(crossing) {
                if is_coincident(&*self, prev) && self.merge_into_crossing_before(crossing, prev) {
                    merged += 1;
                }
            }

            if let Some(next) = self.next(crossing) {
                if is_coincident(&*self, next) && self.merge_into_crossing_after(crossing, next) {
                    merged += 1;
                }
            }
        }

        if merged > 0 {
            trace!("Merged {} nodes into crossings", merged);
        }

        merged
    }

    ///
    /// Splits two islands at the places where they cross and joins them into a new set of islands
    ///
    /// At each crossing, a new node is created that joins the part of one island that arrives at the crossing to the
    /// part of the other island that leaves it. The parts of the islands that are not joined up are then loose ends,
    /// and are removed. The surviving nodes are moved into the loop containing island A.
    ///
    pub (crate) fn join_at_crossings(&mut self, op: BooleanOp, a: NodeId, b: NodeId, loop_a: LoopId, loop_b: LoopId, samples: Vec<IntersectionSample>) -> BooleanOutcome {
        let accuracy = self.accuracy;

        // Difference can't make sense of a single crossing
        if op == BooleanOp::Difference && samples.len() == 1 {
            warn!("{:?}: only one intersection between {:?} and {:?}", op, a, b);
            return BooleanOutcome::degenerate();
        }

        // Two samples at the same place means more than two segments meet at a point, or segments overlap
        let sample_positions = samples.iter()
            .map(|sample| self.segment(sample.node_a).map(|segment| segment.point_at_pos(sample.t_a)))
            .collect::<Option<Vec<_>>>();
        let sample_positions = match sample_positions {
            Some(positions) => positions,
            None            => { return BooleanOutcome::degenerate(); }
        };

        let meeting_point = sample_positions.iter()
            .tuple_combinations()
            .any(|(pos1, pos2)| pos1.is_near_to(pos2, accuracy.distance * 2.0));
        if meeting_point {
            warn!("{:?}: more than two segments meet at an intersection between {:?} and {:?}", op, a, b);
            return BooleanOutcome::degenerate();
        }

        // Decide which way the result passes through each crossing
        let winding_sign    = if self.signed_area(a) > 0.0 { 1.0 } else { -1.0 };
        let directions      = samples.iter()
            .map(|sample| self.crossing_direction(op, sample, winding_sign))
            .collect::<Option<Vec<_>>>();
        let directions      = match directions {
            Some(directions)    => directions,
            None                => {
                warn!("{:?}: islands {:?} and {:?} touch without crossing", op, a, b);
                return BooleanOutcome::degenerate();
            }
        };

        // Order the crossings along each segment
        let mut by_node_a: HashMap<NodeId, Vec<(usize, f32)>> = HashMap::new();
        let mut by_node_b: HashMap<NodeId, Vec<(usize, f32)>> = HashMap::new();

        for (idx, sample) in samples.iter().enumerate() {
            by_node_a.entry(sample.node_a).or_insert_with(|| vec![]).push((idx, sample.t_a));
            by_node_b.entry(sample.node_b).or_insert_with(|| vec![]).push((idx, sample.t_b));
        }

        for crossings in by_node_a.values_mut().chain(by_node_b.values_mut()) {
            crossings.sort_by(|(_, t1), (_, t2)| t1.partial_cmp(t2).unwrap_or(std::cmp::Ordering::Equal));
        }

        // Work out where the crossing nodes go and what their tangents are
        let (subdivision_a, subdivision_b) = match (self.subdivide_at_crossings(&by_node_a), self.subdivide_at_crossings(&by_node_b)) {
            (Some(a), Some(b))  => (a, b),
            _                   => { return BooleanOutcome::degenerate(); }
        };

        let mut crossings = directions.into_iter()
            .map(|direction| Crossing {
                direction:  direction,
                position:   Coord2::origin(),
                tangents_a: NodeTangents::straight(),
                tangents_b: NodeTangents::straight()
            })
            .collect::<Vec<_>>();

        for (idx, position, tangent_in, tangent_out, is_line) in subdivision_a.crossings.iter() {
            crossings[*idx].position    = *position;
            crossings[*idx].tangents_a  = NodeTangents { tangent_in: *tangent_in, tangent_out: *tangent_out, use_in: !is_line, use_out: !is_line };
        }

        for (idx, position, tangent_in, tangent_out, is_line) in subdivision_b.crossings.iter() {
            // Put the crossing halfway between where it is on each island
            crossings[*idx].position    = (crossings[*idx].position + *position) * 0.5;
            crossings[*idx].tangents_b  = NodeTangents { tangent_in: *tangent_in, tangent_out: *tangent_out, use_in: !is_line, use_out: !is_line };
        }

        // The crossings must alternate directions along both islands, or we can't form a consistent result
        let chain_a = self.chain_with_crossings(a, &by_node_a);
        let chain_b = self.chain_with_crossings(b, &by_node_b);

        if !Self::crossings_alternate(&chain_a, &crossings) || !Self::crossings_alternate(&chain_b, &crossings) {
            warn!("{:?}: crossings between {:?} and {:?} do not alternate", op, a, b);
            return BooleanOutcome::degenerate();
        }

        // Create the crossing nodes
        let crossing_nodes = crossings.iter()
            .map(|crossing| {
                let tangents = match crossing.direction {
                    CrossingDirection::AToB => NodeTangents {
                        tangent_in:     crossing.tangents_a.tangent_in,
                        use_in:         crossing.tangents_a.use_in,
                        tangent_out:    crossing.tangents_b.tangent_out,
                        use_out:        crossing.tangents_b.use_out
                    },

                    CrossingDirection::BToA => NodeTangents {
                        tangent_in:     crossing.tangents_b.tangent_in,
                        use_in:         crossing.tangents_b.use_in,
                        tangent_out:    crossing.tangents_a.tangent_out,
                        use_out:        crossing.tangents_a.use_out
                    }
                };

                self.add_node(loop_a, crossing.position, tangents)
            })
            .collect::<Vec<_>>();

        // Update the tangents of the original nodes so they describe the subdivided segments
        let original_nodes = chain_a.iter().chain(chain_b.iter())
            .filter_map(|item| match item {
                ChainItem::Node(node)       => Some(*node),
                ChainItem::Crossing(_)      => None
            })
            .collect::<Vec<_>>();

        for subdivision in [&subdivision_a, &subdivision_b].iter() {
            for (node, tangent_out) in subdivision.tangents_out.iter() {
                if let Some(mut tangents) = self.tangents(*node) {
                    tangents.tangent_out    = *tangent_out;
                    tangents.use_out        = true;
                    self.set_tangents(*node, tangents);
                }
            }

            for (node, tangent_in) in subdivision.tangents_in.iter() {
                if let Some(mut tangents) = self.tangents(*node) {
                    tangents.tangent_in     = *tangent_in;
                    tangents.use_in         = true;
                    self.set_tangents(*node, tangents);
                }
            }
        }

        // Link everything together
        let neighbours_a = self.link_chain(&chain_a, &crossing_nodes);
        let neighbours_b = self.link_chain(&chain_b, &crossing_nodes);

        for (idx, crossing) in crossings.iter().enumerate() {
            let (a_prev, a_next) = match neighbours_a.get(&idx) { Some(neighbours) => *neighbours, None => { continue; } };
            let (b_prev, b_next) = match neighbours_b.get(&idx) { Some(neighbours) => *neighbours, None => { continue; } };
            let node             = crossing_nodes[idx];

            match crossing.direction {
                CrossingDirection::AToB => { self.set_prev(node, Some(a_prev)); self.set_next(node, Some(b_next)); }
                CrossingDirection::BToA => { self.set_prev(node, Some(b_prev)); self.set_next(node, Some(a_next)); }
            }
        }

        // Remove the parts of the islands that are no longer connected to anything
        self.remove_loose_ends(original_nodes.into_iter().chain(crossing_nodes.iter().cloned()));

        // Every crossing should now be part of a closed island
        if let Some(broken) = crossing_nodes.iter().find(|node| !self.contains(**node) || !self.is_closed(**node)) {
            warn!("{:?}: crossing {:?} is not part of a closed island after combining {:?} and {:?}", op, broken, a, b);
            return BooleanOutcome::degenerate();
        }

        // Crossings at existing nodes leave a pair of nodes at the same place
        self.merge_coincident_nodes(&crossing_nodes);

        // Move the result into the loop containing island A
        for node in crossing_nodes.iter() {
            self.move_island(*node, loop_a);
        }
        self.remove_consumed_loop(loop_a, loop_b);

        debug!("{:?}: combined {:?} and {:?} at {} crossings", op, a, b, crossing_nodes.len());

        BooleanOutcome::new(BoundingMode::Collision, crossing_nodes.first().cloned())
    }
}
