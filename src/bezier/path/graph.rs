use super::super::super::consts::*;
use super::super::super::coordinate::*;

use slotmap::{SlotMap, new_key_type};

use std::collections::BTreeSet;

new_key_type! {
    /// Handle of a node stored in a `PathGraph`
    pub struct NodeId;

    /// Handle of a loop (a container of nodes) stored in a `PathGraph`
    pub struct LoopId;
}

///
/// The tangents attached to a path node
///
/// Tangents are offsets relative to the node's position: `tangent_in` is the second control point of the segment
/// arriving at the node and `tangent_out` is the first control point of the segment leaving it. A tangent that is
/// not in use makes that end of the segment straight.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeTangents {
    /// Offset of the control point on the incoming segment
    pub tangent_in: Coord2,

    /// Offset of the control point on the outgoing segment
    pub tangent_out: Coord2,

    /// True if the incoming tangent is used
    pub use_in: bool,

    /// True if the outgoing tangent is used
    pub use_out: bool
}

impl NodeTangents {
    ///
    /// Tangents for a node where both of the attached segments are straight lines
    ///
    pub fn straight() -> NodeTangents {
        NodeTangents {
            tangent_in:     Coord2::origin(),
            tangent_out:    Coord2::origin(),
            use_in:         false,
            use_out:        false
        }
    }

    ///
    /// Tangents for a node where both of the attached segments use the specified control point offsets
    ///
    pub fn curved(tangent_in: Coord2, tangent_out: Coord2) -> NodeTangents {
        NodeTangents {
            tangent_in:     tangent_in,
            tangent_out:    tangent_out,
            use_in:         true,
            use_out:        true
        }
    }

    ///
    /// Returns the tangents for the node when the direction of its island is reversed
    ///
    pub fn reversed(&self) -> NodeTangents {
        NodeTangents {
            tangent_in:     self.tangent_out,
            tangent_out:    self.tangent_in,
            use_in:         self.use_out,
            use_out:        self.use_in
        }
    }
}

impl Default for NodeTangents {
    fn default() -> NodeTangents {
        NodeTangents::straight()
    }
}

///
/// A node in a path graph
///
#[derive(Clone, Debug)]
pub struct PathNode {
    /// Where this node is
    pub (crate) position: Coord2,

    /// The control point offsets for the segments either side of this node
    pub (crate) tangents: NodeTangents,

    /// The node before this one in its island
    pub (crate) prev: Option<NodeId>,

    /// The node after this one in its island
    pub (crate) next: Option<NodeId>,

    /// The loop that owns this node
    pub (crate) parent: Option<LoopId>
}

impl PathNode {
    /// The position of this node
    #[inline] pub fn position(&self) -> Coord2 { self.position }

    /// The tangents of this node
    #[inline] pub fn tangents(&self) -> NodeTangents { self.tangents }

    /// The node before this one
    #[inline] pub fn prev(&self) -> Option<NodeId> { self.prev }

    /// The node after this one
    #[inline] pub fn next(&self) -> Option<NodeId> { self.next }

    /// The loop that contains this node
    #[inline] pub fn parent(&self) -> Option<LoopId> { self.parent }
}

///
/// A loop is an unordered container of nodes, which can make up any number of islands
///
/// The loop owns no topology: the islands are described entirely by the links between the nodes.
///
#[derive(Clone, Debug, Default)]
pub struct PathLoop {
    /// The nodes in this loop
    pub (crate) nodes: BTreeSet<NodeId>
}

///
/// The accuracy used when searching for intersections between curves
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveAccuracy {
    /// Sections of curve are treated as lines once their bounding box is smaller than this distance
    pub distance: f32,

    /// The maximum number of times a curve is subdivided while searching for intersections
    pub max_depth: usize
}

impl Default for CurveAccuracy {
    fn default() -> CurveAccuracy {
        CurveAccuracy {
            distance:   SMALL_DISTANCE,
            max_depth:  MAX_CLIP_DEPTH
        }
    }
}

///
/// Arena that stores the nodes and loops that make up a set of paths
///
/// Nodes are linked to each other through their `next` and `prev` handles. A chain of linked nodes is called an
/// 'island', and can be closed (the links form a cycle) or open (the chain has ends). Every node is stored in a
/// loop, which can contain several islands.
///
#[derive(Clone, Debug)]
pub struct PathGraph {
    /// The nodes in this graph
    pub (crate) nodes: SlotMap<NodeId, PathNode>,

    /// The loops in this graph
    pub (crate) loops: SlotMap<LoopId, PathLoop>,

    /// The accuracy to use when intersecting curves in this graph
    pub (crate) accuracy: CurveAccuracy
}

impl Default for PathGraph {
    fn default() -> PathGraph {
        PathGraph::new()
    }
}

impl PathGraph {
    ///
    /// Creates a new, empty, path graph
    ///
    pub fn new() -> PathGraph {
        PathGraph::with_accuracy(CurveAccuracy::default())
    }

    ///
    /// Creates a new path graph that will intersect curves with the specified accuracy
    ///
    pub fn with_accuracy(accuracy: CurveAccuracy) -> PathGraph {
        PathGraph {
            nodes:      SlotMap::with_key(),
            loops:      SlotMap::with_key(),
            accuracy:   accuracy
        }
    }

    ///
    /// The accuracy used for intersecting curves in this graph
    ///
    #[inline]
    pub fn accuracy(&self) -> CurveAccuracy {
        self.accuracy
    }

    ///
    /// Creates a new, empty, loop
    ///
    pub fn add_loop(&mut self) -> LoopId {
        self.loops.insert(PathLoop::default())
    }

    ///
    /// True if the specified loop is in this graph
    ///
    #[inline]
    pub fn contains_loop(&self, loop_id: LoopId) -> bool {
        self.loops.contains_key(loop_id)
    }

    ///
    /// Returns the loops in this graph
    ///
    pub fn loops<'a>(&'a self) -> impl 'a+Iterator<Item=LoopId> {
        self.loops.keys()
    }

    ///
    /// Returns the nodes in a loop, in a consistent order
    ///
    pub fn loop_nodes<'a>(&'a self, loop_id: LoopId) -> impl 'a+Iterator<Item=NodeId> {
        self.loops.get(loop_id)
            .into_iter()
            .flat_map(|path_loop| path_loop.nodes.iter().cloned())
    }

    ///
    /// Removes a loop if it contains no nodes, returning true if it was removed
    ///
    pub fn remove_loop_if_empty(&mut self, loop_id: LoopId) -> bool {
        let is_empty = self.loops.get(loop_id).map(|path_loop| path_loop.nodes.is_empty()).unwrap_or(false);

        if is_empty {
            self.loops.remove(loop_id);
        }

        is_empty
    }

    ///
    /// Adds a new, unlinked, node to a loop
    ///
    /// If the loop doesn't exist, the node is created without a parent.
    ///
    pub fn add_node(&mut self, parent: LoopId, position: Coord2, tangents: NodeTangents) -> NodeId {
        let parent  = if self.loops.contains_key(parent) { Some(parent) } else { None };
        let node    = self.nodes.insert(PathNode {
            position:   position,
            tangents:   tangents,
            prev:       None,
            next:       None,
            parent:     parent
        });

        if let Some(path_loop) = parent.and_then(|parent| self.loops.get_mut(parent)) {
            path_loop.nodes.insert(node);
        }

        node
    }

    ///
    /// Removes a node from the graph and its loop
    ///
    /// The neighbours of the node are left pointing at a handle that no longer exists: these dangling links are
    /// what identifies the 'loose ends' left behind after the graph is rewritten.
    ///
    pub fn remove_node(&mut self, node: NodeId) -> Option<PathNode> {
        let removed = self.nodes.remove(node)?;

        if let Some(path_loop) = removed.parent.and_then(|parent| self.loops.get_mut(parent)) {
            path_loop.nodes.remove(&node);
        }

        Some(removed)
    }

    ///
    /// True if the specified node is in this graph
    ///
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    ///
    /// The number of nodes in this graph
    ///
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    ///
    /// Retrieves a node from this graph
    ///
    #[inline]
    pub fn node(&self, node: NodeId) -> Option<&PathNode> {
        self.nodes.get(node)
    }

    /// The position of a node
    #[inline]
    pub fn position(&self, node: NodeId) -> Option<Coord2> {
        self.nodes.get(node).map(|node| node.position)
    }

    /// Moves a node to a new position
    pub fn set_position(&mut self, node: NodeId, position: Coord2) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.position = position;
        }
    }

    /// The tangents of a node
    #[inline]
    pub fn tangents(&self, node: NodeId) -> Option<NodeTangents> {
        self.nodes.get(node).map(|node| node.tangents)
    }

    /// Replaces the tangents of a node
    pub fn set_tangents(&mut self, node: NodeId, tangents: NodeTangents) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.tangents = tangents;
        }
    }

    /// The node that follows the specified node
    #[inline]
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|node| node.next)
    }

    /// The node that precedes the specified node
    #[inline]
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|node| node.prev)
    }

    /// The loop that a node belongs to
    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<LoopId> {
        self.nodes.get(node).and_then(|node| node.parent)
    }

    ///
    /// Changes the node that follows a node, without updating the other end of the link
    ///
    pub fn set_next(&mut self, node: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.next = next;
        }
    }

    ///
    /// Changes the node that precedes a node, without updating the other end of the link
    ///
    pub fn set_prev(&mut self, node: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.prev = prev;
        }
    }

    ///
    /// Links two nodes so that `to` follows `from`
    ///
    pub fn link(&mut self, from: NodeId, to: NodeId) {
        self.set_next(from, Some(to));
        self.set_prev(to, Some(from));
    }

    ///
    /// Moves a node into a different loop
    ///
    pub fn set_parent(&mut self, node: NodeId, parent: LoopId) {
        if !self.loops.contains_key(parent) { return; }

        let old_parent = match self.nodes.get_mut(node) {
            Some(node)  => node.parent.replace(parent),
            None        => { return; }
        };

        if let Some(old_loop) = old_parent.and_then(|old_parent| self.loops.get_mut(old_parent)) {
            old_loop.nodes.remove(&node);
        }

        if let Some(new_loop) = self.loops.get_mut(parent) {
            new_loop.nodes.insert(node);
        }
    }

    ///
    /// True if the links of a node are not reciprocated (or point at nodes that no longer exist)
    ///
    pub fn is_loose_end(&self, node: NodeId) -> bool {
        let path_node = match self.nodes.get(node) {
            Some(path_node) => path_node,
            None            => { return false; }
        };

        let next_ok = match path_node.next {
            None        => true,
            Some(next)  => self.nodes.get(next).map(|next| next.prev == Some(node)).unwrap_or(false)
        };

        let prev_ok = match path_node.prev {
            None        => true,
            Some(prev)  => self.nodes.get(prev).map(|prev| prev.next == Some(node)).unwrap_or(false)
        };

        !(next_ok && prev_ok)
    }
}
