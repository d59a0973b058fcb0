use super::super::graph::*;

use std::collections::VecDeque;

impl PathGraph {
    ///
    /// Removes any of the candidate nodes that are loose ends, along with any nodes that become loose ends as a result
    ///
    /// A loose end is a node whose `next` or `prev` link is not reciprocated by the node it links to (or links to a
    /// node that no longer exists). Removing a loose end leaves its neighbours linking to a missing node, so they are
    /// checked in turn: this removes whole chains of nodes that have been cut out of an island. Returns the number of
    /// nodes that were removed.
    ///
    pub fn remove_loose_ends<NodeIter: IntoIterator<Item=NodeId>>(&mut self, candidates: NodeIter) -> usize {
        let mut queue   = candidates.into_iter().collect::<VecDeque<_>>();
        let mut removed = 0;

        while let Some(node) = queue.pop_front() {
            if !self.is_loose_end(node) { continue; }

            if let Some(removed_node) = self.remove_node(node) {
                removed += 1;

                queue.extend(removed_node.prev);
                queue.extend(removed_node.next);
            }
        }

        trace!("Removed {} loose ends", removed);

        removed
    }
}
