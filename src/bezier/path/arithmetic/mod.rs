//!
//! # Boolean arithmetic on islands
//!
//! Islands are combined one pair at a time. If the islands cross, both are split at the crossings and the pieces
//! that form the boundary of the result are linked together: the pieces that are left over become 'loose ends' and
//! are removed. Islands that don't cross are combined according to which one surrounds the other.
//!

mod bounding_mode;
mod combine;
mod loose_ends;
mod add;
mod intersect;
mod sub;

pub use self::bounding_mode::*;

use super::graph::*;
use super::error::*;

impl PathGraph {
    ///
    /// Performs a boolean operation on two islands
    ///
    pub fn combine(&mut self, op: BooleanOp, a: NodeId, b: NodeId) -> Result<BooleanOutcome, BooleanError> {
        match op {
            BooleanOp::Union        => self.union(a, b),
            BooleanOp::Intersection => self.intersection(a, b),
            BooleanOp::Difference   => self.difference(a, b)
        }
    }
}
