use super::graph::*;

use std::collections::{HashMap, HashSet};

///
/// Iterator that visits every node of an island exactly once, following the `next` links
///
pub struct IslandIterator<'a> {
    /// The graph being traversed
    graph: &'a PathGraph,

    /// The node that will be returned next
    current: Option<NodeId>,

    /// The nodes that have been returned so far
    visited: HashSet<NodeId>
}

impl<'a> Iterator for IslandIterator<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.current?;

        // Stop when we get back to a node we've already seen (the start of a closed island, or a corrupt link)
        if !self.visited.insert(current) || !self.graph.contains(current) {
            self.current = None;
            return None;
        }

        self.current = self.graph.next(current);
        Some(current)
    }
}

impl PathGraph {
    ///
    /// Returns the first node of the island containing `node`
    ///
    /// This is `node` itself for a closed island, or the start of the chain for an open one
    ///
    fn island_start(&self, node: NodeId) -> NodeId {
        let mut visited = HashSet::new();
        let mut start   = node;

        visited.insert(node);

        while let Some(prev) = self.prev(start) {
            if !self.contains(prev) || !visited.insert(prev) {
                // Closed island (or a link that goes nowhere)
                return if prev == node { node } else { start };
            }

            start = prev;
        }

        start
    }

    ///
    /// Visits every node in the island that contains `node`, moving forwards
    ///
    /// Closed islands are visited starting at `node`. Open islands are visited starting at the first node of the
    /// chain.
    ///
    pub fn travel<'a>(&'a self, node: NodeId) -> IslandIterator<'a> {
        let start = if self.contains(node) { Some(self.island_start(node)) } else { None };

        IslandIterator {
            graph:      self,
            current:    start,
            visited:    HashSet::new()
        }
    }

    ///
    /// Returns the nodes in the island that contains `node`, in order
    ///
    pub fn island_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.travel(node).collect()
    }

    ///
    /// True if the island containing `node` is closed
    ///
    /// An island is closed if following the `next` links leads back to the node, and every link on the way is
    /// reciprocated by a `prev` link
    ///
    pub fn is_closed(&self, node: NodeId) -> bool {
        if !self.contains(node) { return false; }

        let mut visited = HashSet::new();
        let mut current = node;

        loop {
            visited.insert(current);

            let next = match self.next(current) {
                Some(next)  => next,
                None        => { return false; }
            };

            if self.prev(next) != Some(current) {
                return false;
            }

            if next == node {
                return true;
            }

            if visited.contains(&next) {
                // Loops back to a node other than the one we started at
                return false;
            }

            current = next;
        }
    }

    ///
    /// True if `other` is part of the same island as `node`
    ///
    pub fn same_island(&self, node: NodeId, other: NodeId) -> bool {
        self.travel(node).any(|island_node| island_node == other)
    }

    ///
    /// Returns one node from each island in a loop
    ///
    pub fn islands(&self, loop_id: LoopId) -> Vec<NodeId> {
        let mut seen    = HashSet::new();
        let mut islands = vec![];

        for node in self.loop_nodes(loop_id) {
            if seen.contains(&node) { continue; }

            let island = self.island_nodes(node);
            let first  = island.first().cloned().unwrap_or(node);

            seen.insert(node);
            seen.extend(island);
            islands.push(first);
        }

        islands
    }

    ///
    /// Returns one node from each closed island in a loop
    ///
    pub fn closed_islands(&self, loop_id: LoopId) -> Vec<NodeId> {
        self.islands(loop_id)
            .into_iter()
            .filter(|node| self.is_closed(*node))
            .collect()
    }

    ///
    /// Reverses the direction of the island containing `node`
    ///
    /// The `next` and `prev` links of every node are swapped, along with the incoming and outgoing tangents
    ///
    pub fn reverse_island(&mut self, node: NodeId) {
        for island_node in self.island_nodes(node) {
            if let Some(path_node) = self.nodes.get_mut(island_node) {
                let next            = path_node.next;
                path_node.next      = path_node.prev;
                path_node.prev      = next;
                path_node.tangents  = path_node.tangents.reversed();
            }
        }
    }

    ///
    /// Makes a copy of the island containing `node` in the specified loop, returning the copy of `node`
    ///
    /// Links to nodes outside of the island are not copied.
    ///
    pub fn clone_island(&mut self, node: NodeId, parent: LoopId) -> Option<NodeId> {
        let island = self.island_nodes(node);
        if island.is_empty() || !self.contains_loop(parent) { return None; }

        // Create a copy of each node
        let mut copies = HashMap::new();
        for original in island.iter() {
            let (position, tangents) = {
                let path_node = self.node(*original)?;
                (path_node.position, path_node.tangents)
            };

            copies.insert(*original, self.add_node(parent, position, tangents));
        }

        // Link the copies together in the same way as the originals
        for original in island.iter() {
            let copy = copies[original];
            let next = self.next(*original).and_then(|next| copies.get(&next).cloned());
            let prev = self.prev(*original).and_then(|prev| copies.get(&prev).cloned());

            self.set_next(copy, next);
            self.set_prev(copy, prev);
        }

        copies.get(&node).cloned()
    }

    ///
    /// Moves every node in the island containing `node` into a different loop
    ///
    pub fn move_island(&mut self, node: NodeId, parent: LoopId) {
        for island_node in self.island_nodes(node) {
            self.set_parent(island_node, parent);
        }
    }

    ///
    /// Removes all of the nodes in the island containing `node`
    ///
    pub fn remove_island(&mut self, node: NodeId) {
        for island_node in self.island_nodes(node) {
            self.remove_node(island_node);
        }
    }
}
